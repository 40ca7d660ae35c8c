//! Error types for document handling and validation.

use serde::{Deserialize, Serialize};

/// Error type for puppet document parsing and structural validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PuppetError {
    /// Document text was not valid JSON, or a payload did not match its schema.
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Envelope `type` field named something this crate does not handle.
    #[error("Unknown document type: {kind}")]
    UnknownDocumentType { kind: String },

    /// Envelope carried no `data` payload.
    #[error("Document has no data payload")]
    MissingPayload,

    /// A structural invariant check failed.
    #[error("Invalid {subject}: {reason}")]
    Invalid { subject: String, reason: String },
}

impl PuppetError {
    /// Create a validation error for the named subject.
    pub fn invalid(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    /// Get error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "parse",
            Self::UnknownDocumentType { .. } | Self::MissingPayload => "envelope",
            Self::Invalid { .. } => "validation",
        }
    }
}

impl From<serde_json::Error> for PuppetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            reason: err.to_string(),
        }
    }
}
