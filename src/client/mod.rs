//! Remote number-to-text service
//!
//! The `Converter` trait is the seam between the submission state machine
//! and the network. `HttpConverter` talks to the real service.

pub mod http;

use async_trait::async_trait;

use crate::convert::number::WholeNumber;

pub use http::{encode_component, HttpConverter};

/// Why a conversion request produced no records
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The service rejected the input (HTTP 400). The message is shown to the
    /// user unchanged.
    #[error("{0}")]
    Validation(String),
    /// The service answered with a status other than success or 400
    #[error("service returned unexpected status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },
    /// Connection, TLS or timeout failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// A success response whose body was not a list of records
    #[error("malformed response body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Converts a comma-separated list of numbers into spelled-out records
#[async_trait]
pub trait Converter: Send + Sync {
    /// Submit `input` exactly as the user typed it.
    async fn convert(&self, input: &str) -> Result<Vec<WholeNumber>, FetchError>;
}
