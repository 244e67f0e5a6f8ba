#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! HTTP JSON fetching with failure normalization.
//!
//! Every outbound request in the workspace goes through [`fetch_json`]:
//! one GET, one status gate, one JSON parse. Transport failures,
//! non-success statuses, and malformed bodies all collapse into the
//! single [`FetchError`] channel so callers handle exactly one failure
//! path.
//!
//! Orchestrators that need to run without a network accept the
//! [`JsonFetch`] trait instead of calling [`fetch_json`] directly.
//! [`HttpJson`] is the production implementation; tests script their
//! own.

use async_trait::async_trait;

/// Errors from a single fetch-and-parse operation.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or malformed JSON body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status outside the 200–299 range.
    #[error("{message} (status {status})")]
    Status {
        /// Human-readable label supplied by the caller.
        message: String,
        /// The status code the server returned.
        status: reqwest::StatusCode,
    },
}

/// Fetches `url` and parses the response body as JSON.
///
/// `error_message` becomes the display text of the failure when the
/// server answers with a non-success status. No retries, no timeout
/// beyond the client's own defaults.
///
/// # Errors
///
/// Returns [`FetchError`] if the request fails, the status is
/// non-success, or the body is not valid JSON.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    error_message: &str,
) -> Result<serde_json::Value, FetchError> {
    log::debug!("GET {url}");
    let resp = client.get(url).send().await?;

    if !resp.status().is_success() {
        return Err(FetchError::Status {
            message: error_message.to_string(),
            status: resp.status(),
        });
    }

    Ok(resp.json().await?)
}

/// A single async "fetch JSON" capability.
///
/// Implementations must be `Send + Sync` so orchestrators can hold a
/// `&dyn JsonFetch` across await points.
#[async_trait]
pub trait JsonFetch: Send + Sync {
    /// Fetches `url` and parses the body as JSON, labeling non-success
    /// statuses with `error_message`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the request fails, the status is
    /// non-success, or the body is not valid JSON.
    async fn fetch_json(
        &self,
        url: &str,
        error_message: &str,
    ) -> Result<serde_json::Value, FetchError>;
}

/// Production [`JsonFetch`] backed by a shared [`reqwest::Client`].
pub struct HttpJson {
    client: reqwest::Client,
}

impl HttpJson {
    /// Wraps an existing client so the connection pool is shared with
    /// other callers.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpJson {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl JsonFetch for HttpJson {
    async fn fetch_json(
        &self,
        url: &str,
        error_message: &str,
    ) -> Result<serde_json::Value, FetchError> {
        fetch_json(&self.client, url, error_message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_caller_label() {
        let err = FetchError::Status {
            message: "Country not found".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(err.to_string(), "Country not found (status 404 Not Found)");
    }
}
