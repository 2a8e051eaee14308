//! On-device AI capability gateway
//!
//! Normalizes the host's language detector, translator, and summarizer into
//! one async contract used by the session store.

mod error;
mod gateway;
pub mod host;
mod http;

#[cfg(test)]
pub mod testing;

pub use error::{CapabilityError, CapabilityErrorKind};
pub use gateway::CapabilityGateway;
pub use http::{HostConfig, HttpHost};

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

/// Common interface for the three text capabilities
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Detect the language of `text`, returning its display name
    /// (or the raw code when it is not in the language table)
    async fn detect(&self, text: &str) -> Result<String, CapabilityError>;

    /// Translate `text` between two language codes
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError>;

    /// Summarize `text`
    async fn summarize(&self, text: &str) -> Result<String, CapabilityError>;
}

#[async_trait]
impl<T: Gateway + ?Sized> Gateway for Arc<T> {
    async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        (**self).detect(text).await
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError> {
        (**self)
            .translate(text, source_language, target_language)
            .await
    }

    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        (**self).summarize(text).await
    }
}

/// Logging wrapper for gateways
pub struct LoggingGateway<G: Gateway> {
    inner: G,
}

impl<G: Gateway> LoggingGateway<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }
}

fn log_outcome(operation: &str, start: Instant, result: &Result<String, CapabilityError>) {
    let duration = start.elapsed();
    match result {
        Ok(output) => {
            tracing::info!(
                operation,
                duration_ms = %duration.as_millis(),
                output_chars = output.chars().count(),
                "Capability call completed"
            );
        }
        Err(e) => {
            tracing::error!(
                operation,
                duration_ms = %duration.as_millis(),
                kind = e.kind.as_str(),
                error = %e.message,
                "Capability call failed"
            );
        }
    }
}

#[async_trait]
impl<G: Gateway> Gateway for LoggingGateway<G> {
    async fn detect(&self, text: &str) -> Result<String, CapabilityError> {
        let start = Instant::now();
        let result = self.inner.detect(text).await;
        log_outcome("detect", start, &result);
        result
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, CapabilityError> {
        let start = Instant::now();
        let result = self
            .inner
            .translate(text, source_language, target_language)
            .await;
        log_outcome("translate", start, &result);
        result
    }

    async fn summarize(&self, text: &str) -> Result<String, CapabilityError> {
        let start = Instant::now();
        let result = self.inner.summarize(text).await;
        log_outcome("summarize", start, &result);
        result
    }
}
