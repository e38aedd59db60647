//! # Service Errors
//!
//! Failures of the transport and parsing layers. None of these are fatal on
//! their own; the controller decides which ones end the session.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SoapError {
    /// The HTTP client could not be built
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level failure (connection refused, timeout, broken body)
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-retryable HTTP status
    #[error("service answered HTTP {status}")]
    Status { status: u16 },

    /// Retryable HTTP status returned on every attempt
    #[error("service still answering HTTP {status} after {attempts} attempts")]
    RetriesExhausted { attempts: u32, status: u16 },

    /// Malformed XML
    #[error("malformed XML response: {0}")]
    Parse(String),

    /// Well-formed XML missing an expected element
    #[error("response has no <{0}> element")]
    MissingElement(&'static str),

    /// Country record without its only required field
    #[error("response carries no country name")]
    MissingName,
}

impl SoapError {
    /// Whether the failure came from the network side rather than the payload
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SoapError::Client(_)
                | SoapError::Transport(_)
                | SoapError::Status { .. }
                | SoapError::RetriesExhausted { .. }
        )
    }
}
