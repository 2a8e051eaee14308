//! Gateway over the host's on-device AI features
//!
//! Every call re-checks presence, renegotiates capabilities, and creates a
//! fresh session. Nothing is cached between calls.

use super::host::{
    CapabilityHost, LanguageCandidate, SummarizerAvailability, TranslatorOptions,
};
use super::{CapabilityError, CapabilityErrorKind, Gateway};
use crate::languages;
use async_trait::async_trait;

const DETECTOR_MISSING: &str = "Language Detector Model is missing.";
const NO_LANGUAGE_DETECTED: &str = "No language detected.";
const TRANSLATOR_MISSING: &str = "Translator Model is missing.";
const PAIR_UNSUPPORTED: &str = "This translation pair is not supported.";
const SUMMARIZER_MISSING: &str =
    "Summarizer Model is missing. Please ensure your host supports on-device AI APIs.";
const SUMMARIZER_UNAVAILABLE: &str = "Summarizer API is not available on this device.";
const SUMMARIZER_NOT_INSTALLED: &str = "Summarizer model is not installed.";

/// Gateway backed by a [`CapabilityHost`]
pub struct CapabilityGateway<H: CapabilityHost> {
    host: H,
}

impl<H: CapabilityHost> CapabilityGateway<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    async fn try_summarize(&self, text: &str) -> Result<String, CapabilityError> {
        let summarizer = self
            .host
            .summarizer()
            .ok_or_else(|| CapabilityError::missing(SUMMARIZER_MISSING))?;

        match summarizer.capabilities().await?.available {
            SummarizerAvailability::No => Err(CapabilityError::unavailable(SUMMARIZER_UNAVAILABLE)),
            SummarizerAvailability::Readily => {
                let session = summarizer.create().await?;
                session.summarize(text).await
            }
            SummarizerAvailability::AfterDownload | SummarizerAvailability::Unknown => {
                Err(CapabilityError::model_not_ready(SUMMARIZER_NOT_INSTALLED))
            }
        }
    }
}

/// Highest-confidence candidate; the first of equal maxima wins
pub fn best_candidate(candidates: &[LanguageCandidate]) -> Option<&LanguageCandidate> {
    candidates.iter().fold(None, |best, candidate| match best {
        Some(b) if b.confidence >= candidate.confidence => Some(b),
        _ => Some(candidate),
    })
}

#[async_trait]
impl<H: CapabilityHost> Gateway for CapabilityGateway<H> {
    async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        let detector = self
            .host
            .language_detector()
            .ok_or_else(|| CapabilityError::missing(DETECTOR_MISSING))?;

        let session = detector.create().await?;
        let candidates = session.detect(text).await?;
        let best = best_candidate(&candidates)
            .ok_or_else(|| CapabilityError::no_result(NO_LANGUAGE_DETECTED))?;

        Ok(languages::display_name(&best.detected_language))
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError> {
        let translator = self
            .host
            .translator()
            .ok_or_else(|| CapabilityError::missing(TRANSLATOR_MISSING))?;

        let capabilities = translator.capabilities().await?;
        if !capabilities.language_pair_available(source_language, target_language) {
            return Err(CapabilityError::pair_unsupported(PAIR_UNSUPPORTED));
        }

        let session = translator
            .create(TranslatorOptions {
                source_language: source_language.to_string(),
                target_language: target_language.to_string(),
            })
            .await?;
        session.translate(text).await
    }

    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        self.try_summarize(text).await.map_err(|e| match e.kind {
            // Presence and device checks are reported as-is
            CapabilityErrorKind::CapabilityMissing | CapabilityErrorKind::Unavailable => e,
            kind => CapabilityError::new(kind, format!("Summarization failed: {}", e.message)),
        })
    }
}
