//! Host capability contract
//!
//! The host exposes up to three independent features. Each one may be
//! absent; when present it negotiates what it can do and hands out
//! single-use sessions.

use super::CapabilityError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One candidate language reported by a detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCandidate {
    pub detected_language: String,
    pub confidence: f64,
}

impl LanguageCandidate {
    #[allow(dead_code)] // Used by mocks and tests
    pub fn new(detected_language: impl Into<String>, confidence: f64) -> Self {
        Self {
            detected_language: detected_language.into(),
            confidence,
        }
    }
}

/// Language pair a translator session is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorOptions {
    pub source_language: String,
    pub target_language: String,
}

/// Result of translator capability negotiation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorCapabilities {
    /// Supported `(source, target)` code pairs
    #[serde(default)]
    pub language_pairs: Vec<(String, String)>,
}

impl TranslatorCapabilities {
    #[allow(dead_code)] // Used by mocks and tests
    pub fn with_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            language_pairs: pairs
                .into_iter()
                .map(|(s, t)| (s.to_string(), t.to_string()))
                .collect(),
        }
    }

    pub fn language_pair_available(&self, source: &str, target: &str) -> bool {
        self.language_pairs
            .iter()
            .any(|(s, t)| s == source && t == target)
    }
}

/// Summarizer readiness as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummarizerAvailability {
    Readily,
    AfterDownload,
    No,
    /// Any value this build does not recognise
    #[serde(other)]
    Unknown,
}

/// Result of summarizer capability negotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerCapabilities {
    pub available: SummarizerAvailability,
}

// ============================================================================
// Sessions
// ============================================================================

#[async_trait]
pub trait LanguageDetectorSession: Send + Sync {
    async fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>, CapabilityError>;
}

#[async_trait]
pub trait TranslatorSession: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, CapabilityError>;
}

#[async_trait]
pub trait SummarizerSession: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<String, CapabilityError>;
}

// ============================================================================
// Features
// ============================================================================

/// Language detection feature
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn create(&self) -> Result<Box<dyn LanguageDetectorSession>, CapabilityError>;
}

/// Translation feature
#[async_trait]
pub trait Translator: Send + Sync {
    async fn capabilities(&self) -> Result<TranslatorCapabilities, CapabilityError>;

    async fn create(
        &self,
        options: TranslatorOptions,
    ) -> Result<Box<dyn TranslatorSession>, CapabilityError>;
}

/// Summarization feature
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn capabilities(&self) -> Result<SummarizerCapabilities, CapabilityError>;

    async fn create(&self) -> Result<Box<dyn SummarizerSession>, CapabilityError>;
}

/// Environment providing the on-device AI features.
///
/// `None` from an accessor means the host does not have that feature at all.
pub trait CapabilityHost: Send + Sync {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetector>>;

    fn translator(&self) -> Option<Arc<dyn Translator>>;

    fn summarizer(&self) -> Option<Arc<dyn Summarizer>>;
}

impl<T: CapabilityHost + ?Sized> CapabilityHost for Arc<T> {
    fn language_detector(&self) -> Option<Arc<dyn LanguageDetector>> {
        (**self).language_detector()
    }

    fn translator(&self) -> Option<Arc<dyn Translator>> {
        (**self).translator()
    }

    fn summarizer(&self) -> Option<Arc<dyn Summarizer>> {
        (**self).summarizer()
    }
}
