//! Mock implementations for testing
//!
//! `MockHost` stands in for the on-device features behind the gateway;
//! `MockGateway` stands in for the gateway behind the session store.

use super::host::{
    CapabilityHost, LanguageCandidate, LanguageDetector, LanguageDetectorSession, Summarizer,
    SummarizerAvailability, SummarizerCapabilities, SummarizerSession, Translator,
    TranslatorCapabilities, TranslatorOptions, TranslatorSession,
};
use super::{CapabilityError, Gateway};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// Mock Host
// ============================================================================

/// Host whose features are configured per test; absent unless added
#[derive(Default)]
pub struct MockHost {
    detector: Option<Arc<MockDetector>>,
    translator: Option<Arc<MockTranslator>>,
    summarizer: Option<Arc<MockSummarizer>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detector that reports `candidates` for any text
    pub fn with_detector(mut self, candidates: Vec<LanguageCandidate>) -> Self {
        self.detector = Some(Arc::new(MockDetector {
            result: Ok(candidates),
        }));
        self
    }

    /// Add a translator that supports `capabilities` and always answers `output`
    pub fn with_translator(
        mut self,
        capabilities: TranslatorCapabilities,
        output: impl Into<String>,
    ) -> Self {
        self.translator = Some(Arc::new(MockTranslator {
            capabilities,
            output: output.into(),
            sessions: Arc::new(Mutex::new(Vec::new())),
        }));
        self
    }

    /// Add a summarizer reporting `capabilities` and answering `output`
    pub fn with_summarizer(
        mut self,
        capabilities: SummarizerCapabilities,
        output: impl Into<String>,
    ) -> Self {
        self.summarizer = Some(Arc::new(MockSummarizer {
            capabilities,
            output: Ok(output.into()),
        }));
        self
    }

    /// Add a ready summarizer whose sessions fail with `message`
    pub fn with_failing_summarizer(mut self, message: impl Into<String>) -> Self {
        self.summarizer = Some(Arc::new(MockSummarizer {
            capabilities: SummarizerCapabilities {
                available: SummarizerAvailability::Readily,
            },
            output: Err(CapabilityError::host(message)),
        }));
        self
    }

    /// Options of every translator session created so far
    pub fn translator_sessions(&self) -> Arc<Mutex<Vec<TranslatorOptions>>> {
        self.translator
            .as_ref()
            .map(|t| t.sessions.clone())
            .unwrap_or_default()
    }
}

impl CapabilityHost for MockHost {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetector>> {
        self.detector
            .clone()
            .map(|d| d as Arc<dyn LanguageDetector>)
    }

    fn translator(&self) -> Option<Arc<dyn Translator>> {
        self.translator.clone().map(|t| t as Arc<dyn Translator>)
    }

    fn summarizer(&self) -> Option<Arc<dyn Summarizer>> {
        self.summarizer.clone().map(|s| s as Arc<dyn Summarizer>)
    }
}

struct MockDetector {
    result: Result<Vec<LanguageCandidate>, CapabilityError>,
}

struct MockDetectorSession {
    result: Result<Vec<LanguageCandidate>, CapabilityError>,
}

#[async_trait]
impl LanguageDetector for MockDetector {
    async fn create(&self) -> Result<Box<dyn LanguageDetectorSession>, CapabilityError> {
        Ok(Box::new(MockDetectorSession {
            result: self.result.clone(),
        }))
    }
}

#[async_trait]
impl LanguageDetectorSession for MockDetectorSession {
    async fn detect(&self, _text: &str) -> Result<Vec<LanguageCandidate>, CapabilityError> {
        self.result.clone()
    }
}

struct MockTranslator {
    capabilities: TranslatorCapabilities,
    output: String,
    sessions: Arc<Mutex<Vec<TranslatorOptions>>>,
}

struct MockTranslatorSession {
    output: String,
}

#[async_trait]
impl Translator for MockTranslator {
    async fn capabilities(&self) -> Result<TranslatorCapabilities, CapabilityError> {
        Ok(self.capabilities.clone())
    }

    async fn create(
        &self,
        options: TranslatorOptions,
    ) -> Result<Box<dyn TranslatorSession>, CapabilityError> {
        self.sessions.lock().unwrap().push(options);
        Ok(Box::new(MockTranslatorSession {
            output: self.output.clone(),
        }))
    }
}

#[async_trait]
impl TranslatorSession for MockTranslatorSession {
    async fn translate(&self, _text: &str) -> Result<String, CapabilityError> {
        Ok(self.output.clone())
    }
}

struct MockSummarizer {
    capabilities: SummarizerCapabilities,
    output: Result<String, CapabilityError>,
}

struct MockSummarizerSession {
    output: Result<String, CapabilityError>,
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn capabilities(&self) -> Result<SummarizerCapabilities, CapabilityError> {
        Ok(self.capabilities)
    }

    async fn create(&self) -> Result<Box<dyn SummarizerSession>, CapabilityError> {
        Ok(Box::new(MockSummarizerSession {
            output: self.output.clone(),
        }))
    }
}

#[async_trait]
impl SummarizerSession for MockSummarizerSession {
    async fn summarize(&self, _text: &str) -> Result<String, CapabilityError> {
        self.output.clone()
    }
}

// ============================================================================
// Mock Gateway
// ============================================================================

/// A call the store made against the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    Detect {
        text: String,
    },
    Translate {
        text: String,
        source_language: String,
        target_language: String,
    },
    Summarize {
        text: String,
    },
}

/// Gateway that answers with queued results, in order, whatever the operation
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<String, CapabilityError>>>,
    /// Record of all calls made
    pub calls: Mutex<Vec<GatewayCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful result
    pub fn queue_ok(&self, value: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(value.into()));
    }

    /// Queue a failure
    pub fn queue_error(&self, error: CapabilityError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_calls(&self) -> Vec<GatewayCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: GatewayCall) -> Result<String, CapabilityError> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CapabilityError::host("No mock response queued")))
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Gateway for MockGateway {
    async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        self.answer(GatewayCall::Detect {
            text: text.to_string(),
        })
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError> {
        self.answer(GatewayCall::Translate {
            text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
        })
    }

    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        self.answer(GatewayCall::Summarize {
            text: text.to_string(),
        })
    }
}

// ============================================================================
// Gated Mock Gateway (for in-flight assertions)
// ============================================================================

/// Mock gateway whose calls block until released by the test
pub struct GatedMockGateway {
    inner: MockGateway,
    /// Notified when a call starts
    pub call_started: Arc<Notify>,
    /// Notify once per call to let it complete
    pub release: Arc<Notify>,
}

impl GatedMockGateway {
    pub fn new() -> Self {
        Self {
            inner: MockGateway::new(),
            call_started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn queue_ok(&self, value: impl Into<String>) {
        self.inner.queue_ok(value);
    }

    pub fn queue_error(&self, error: CapabilityError) {
        self.inner.queue_error(error);
    }

    async fn gate(&self) {
        self.call_started.notify_one();
        self.release.notified().await;
    }
}

#[async_trait]
impl Gateway for GatedMockGateway {
    async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        self.gate().await;
        self.inner.detect(text).await
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError> {
        self.gate().await;
        self.inner
            .translate(text, source_language, target_language)
            .await
    }

    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        self.gate().await;
        self.inner.summarize(text).await
    }
}
