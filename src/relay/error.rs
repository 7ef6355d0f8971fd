//! Relay error channel
//!
//! Non-2xx relay responses are decoded into [`RelayErrorBody`] when they carry
//! the standard relayer error JSON, otherwise the raw text is kept.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::amount::AmountError;

/// Per-field validation failure reported by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub code: i64,
    pub reason: String,
}

/// Structured error object returned by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayErrorBody {
    pub code: i64,
    pub reason: String,
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
}

impl fmt::Display for RelayErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.reason, self.code)?;
        for error in &self.validation_errors {
            write!(f, "; {}: {} (code {})", error.field, error.reason, error.code)?;
        }
        Ok(())
    }
}

/// Errors surfaced by the relay adapter and order service.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The relay rejected the request with its structured error object
    #[error("relay rejected request with status {status}: {body}")]
    Api { status: u16, body: RelayErrorBody },
    /// The relay failed with a body that is not a relay error object
    #[error("relay returned status {status}: {text}")]
    Status { status: u16, text: String },
    /// The request never produced a response
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A 2xx response whose body does not match the expected shape
    #[error("invalid relay response: {0}")]
    Decode(String),
    /// A token symbol the registry does not know
    #[error("unknown token symbol '{0}'")]
    UnknownToken(String),
    /// A token whose decimals the registry does not know
    #[error("no decimals known for token {0}")]
    UnknownDecimals(String),
    #[error(transparent)]
    InvalidAmount(#[from] AmountError),
    /// Failure inside the token registry
    #[error(transparent)]
    Registry(#[from] anyhow::Error),
}

impl RelayError {
    /// Builds the error for a non-2xx response body.
    pub fn from_response(status: u16, text: String) -> Self {
        match serde_json::from_str::<RelayErrorBody>(&text) {
            Ok(body) => RelayError::Api { status, body },
            Err(_) => RelayError::Status { status, text },
        }
    }

    /// The relay's structured error object, if it sent one.
    pub fn body(&self) -> Option<&RelayErrorBody> {
        match self {
            RelayError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}
