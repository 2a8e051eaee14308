//! Capability error types

use thiserror::Error;

/// Capability failure with classification
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct CapabilityError {
    pub kind: CapabilityErrorKind,
    pub message: String,
}

impl CapabilityError {
    pub fn new(kind: CapabilityErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::CapabilityMissing, message)
    }

    pub fn no_result(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::NoResult, message)
    }

    pub fn pair_unsupported(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::PairUnsupported, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::Unavailable, message)
    }

    pub fn model_not_ready(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::ModelNotReady, message)
    }

    pub fn host(message: impl Into<String>) -> Self {
        Self::new(CapabilityErrorKind::Host, message)
    }
}

/// Error classification
///
/// Every kind is terminal for the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityErrorKind {
    /// Host lacks the feature entirely
    CapabilityMissing,
    /// Feature present but produced nothing for this input
    NoResult,
    /// Language combination not supported by the translator
    PairUnsupported,
    /// Feature present but cannot run on this device
    Unavailable,
    /// Model needs a one-time download before first use
    ModelNotReady,
    /// The host rejected or failed the call
    Host,
}

impl CapabilityErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CapabilityMissing => "capability_missing",
            Self::NoResult => "no_result",
            Self::PairUnsupported => "pair_unsupported",
            Self::Unavailable => "unavailable",
            Self::ModelNotReady => "model_not_ready",
            Self::Host => "host",
        }
    }
}
