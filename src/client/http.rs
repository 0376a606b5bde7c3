//! HTTP client for the conversion endpoint
//!
//! Issues `GET {base_url}/numToText/{input}` and maps the response status
//! onto `FetchError`.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;

use super::{Converter, FetchError};
use crate::config::EndpointConfig;
use crate::convert::number::WholeNumber;

/// Path segment the service mounts its conversion route under
const ROUTE: &str = "numToText";

/// Characters `encodeURIComponent` leaves as-is besides ASCII alphanumerics
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string for use as a single URL path segment.
///
/// Leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` untouched and encodes every other
/// UTF-8 byte, so commas and spaces in the user's list survive the trip.
#[must_use]
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Extract the user-facing message from a 400 response body.
///
/// The service sends a JSON string; anything else is shown as trimmed raw text.
fn validation_message(body: &str) -> String {
    serde_json::from_str::<String>(body).unwrap_or_else(|_| body.trim().to_string())
}

/// `Converter` backed by the remote HTTP service
#[derive(Debug, Clone)]
pub struct HttpConverter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpConverter {
    /// Build a client from endpoint settings.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (for example when no TLS backend is available).
    pub fn new(config: &EndpointConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a given raw input
    #[must_use]
    pub fn request_url(&self, input: &str) -> String {
        format!("{}/{ROUTE}/{}", self.base_url, encode_component(input))
    }
}

#[async_trait]
impl Converter for HttpConverter {
    async fn convert(&self, input: &str) -> Result<Vec<WholeNumber>, FetchError> {
        let url = self.request_url(input);
        tracing::debug!(%url, "requesting conversion");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "conversion response received");

        if status.is_success() {
            let body = response.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }

        if status == StatusCode::BAD_REQUEST {
            let body = response.text().await?;
            return Err(FetchError::Validation(validation_message(&body)));
        }

        Err(FetchError::Status {
            status: status.as_u16(),
        })
    }
}
