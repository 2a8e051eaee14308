//! HTTP bridge to a local on-device model host
//!
//! The host advertises its features once at startup; each feature is then
//! driven through small JSON endpoints.

use super::host::{
    CapabilityHost, LanguageCandidate, LanguageDetector, LanguageDetectorSession, Summarizer,
    SummarizerCapabilities, SummarizerSession, Translator, TranslatorCapabilities,
    TranslatorOptions, TranslatorSession,
};
use super::CapabilityError;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the model host connection
#[derive(Debug, Clone)]
pub struct HostConfig {
    /// Base URL, e.g. `http://127.0.0.1:11435`
    pub base_url: Option<String>,
    pub timeout: Duration,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        let timeout = std::env::var("TEXT_PROCESSOR_HOST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url: std::env::var("TEXT_PROCESSOR_HOST_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            timeout: Duration::from_secs(timeout),
        }
    }
}

/// Features the host reports as present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFeatures {
    #[serde(default)]
    pub language_detector: bool,
    #[serde(default)]
    pub translator: bool,
    #[serde(default)]
    pub summarizer: bool,
}

#[derive(Debug)]
struct Endpoint {
    client: Client,
    base_url: String,
}

impl Endpoint {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CapabilityError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| CapabilityError::host(format!("Host request failed: {e}")))?;
        decode(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CapabilityError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| CapabilityError::host(format!("Host request failed: {e}")))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, CapabilityError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CapabilityError::host(format!(
            "Host returned {status}: {}",
            body.trim()
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| CapabilityError::host(format!("Invalid host response: {e}")))
}

/// [`CapabilityHost`] backed by the model host's HTTP API
pub struct HttpHost {
    endpoint: Option<Arc<Endpoint>>,
    features: HostFeatures,
}

impl HttpHost {
    /// Host with no features; every capability reports missing
    pub fn unconfigured() -> Self {
        Self {
            endpoint: None,
            features: HostFeatures::default(),
        }
    }

    /// Connect with an explicit feature set (no discovery round-trip)
    pub fn with_features(
        base_url: impl Into<String>,
        timeout: Duration,
        features: HostFeatures,
    ) -> Result<Self, CapabilityError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CapabilityError::host(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            endpoint: Some(Arc::new(Endpoint {
                client,
                base_url: base_url.into(),
            })),
            features,
        })
    }

    /// Connect and ask the host which features it has
    pub async fn discover(config: &HostConfig) -> Result<Self, CapabilityError> {
        let Some(base_url) = config.base_url.as_deref() else {
            return Ok(Self::unconfigured());
        };

        let mut host = Self::with_features(base_url, config.timeout, HostFeatures::default())?;
        if let Some(endpoint) = &host.endpoint {
            host.features = endpoint.get("/v1/features").await?;
        }
        Ok(host)
    }

    pub fn features(&self) -> HostFeatures {
        self.features
    }

    fn endpoint_if(&self, present: bool) -> Option<Arc<Endpoint>> {
        if present {
            self.endpoint.clone()
        } else {
            None
        }
    }
}

impl CapabilityHost for HttpHost {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetector>> {
        self.endpoint_if(self.features.language_detector)
            .map(|endpoint| Arc::new(HttpDetector { endpoint }) as Arc<dyn LanguageDetector>)
    }

    fn translator(&self) -> Option<Arc<dyn Translator>> {
        self.endpoint_if(self.features.translator)
            .map(|endpoint| Arc::new(HttpTranslator { endpoint }) as Arc<dyn Translator>)
    }

    fn summarizer(&self) -> Option<Arc<dyn Summarizer>> {
        self.endpoint_if(self.features.summarizer)
            .map(|endpoint| Arc::new(HttpSummarizer { endpoint }) as Arc<dyn Summarizer>)
    }
}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Serialize)]
struct TextBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateBody<'a> {
    source_language: &'a str,
    target_language: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct TranslateReply {
    text: String,
}

#[derive(Deserialize)]
struct SummarizeReply {
    summary: String,
}

// ============================================================================
// Features and sessions
// ============================================================================

struct HttpDetector {
    endpoint: Arc<Endpoint>,
}

#[async_trait]
impl LanguageDetector for HttpDetector {
    async fn create(&self) -> Result<Box<dyn LanguageDetectorSession>, CapabilityError> {
        Ok(Box::new(HttpDetectorSession {
            endpoint: self.endpoint.clone(),
        }))
    }
}

struct HttpDetectorSession {
    endpoint: Arc<Endpoint>,
}

#[async_trait]
impl LanguageDetectorSession for HttpDetectorSession {
    async fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>, CapabilityError> {
        self.endpoint
            .post("/v1/language-detector/detect", &TextBody { text })
            .await
    }
}

struct HttpTranslator {
    endpoint: Arc<Endpoint>,
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn capabilities(&self) -> Result<TranslatorCapabilities, CapabilityError> {
        self.endpoint.get("/v1/translator/capabilities").await
    }

    async fn create(
        &self,
        options: TranslatorOptions,
    ) -> Result<Box<dyn TranslatorSession>, CapabilityError> {
        Ok(Box::new(HttpTranslatorSession {
            endpoint: self.endpoint.clone(),
            options,
        }))
    }
}

struct HttpTranslatorSession {
    endpoint: Arc<Endpoint>,
    options: TranslatorOptions,
}

#[async_trait]
impl TranslatorSession for HttpTranslatorSession {
    async fn translate(&self, text: &str) -> Result<String, CapabilityError> {
        let reply: TranslateReply = self
            .endpoint
            .post(
                "/v1/translator/translate",
                &TranslateBody {
                    source_language: &self.options.source_language,
                    target_language: &self.options.target_language,
                    text,
                },
            )
            .await?;
        Ok(reply.text)
    }
}

struct HttpSummarizer {
    endpoint: Arc<Endpoint>,
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn capabilities(&self) -> Result<SummarizerCapabilities, CapabilityError> {
        self.endpoint.get("/v1/summarizer/capabilities").await
    }

    async fn create(&self) -> Result<Box<dyn SummarizerSession>, CapabilityError> {
        Ok(Box::new(HttpSummarizerSession {
            endpoint: self.endpoint.clone(),
        }))
    }
}

struct HttpSummarizerSession {
    endpoint: Arc<Endpoint>,
}

#[async_trait]
impl SummarizerSession for HttpSummarizerSession {
    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        let reply: SummarizeReply = self
            .endpoint
            .post("/v1/summarizer/summarize", &TextBody { text })
            .await?;
        Ok(reply.summary)
    }
}
