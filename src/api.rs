//! HTTP client for the quote backend.
//!
//! Thin wrappers over the five REST operations; payload unwrapping and
//! shape tolerance live in [`crate::types`]. No retries, no caching, no
//! per-request timeout overrides.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::types::{Quote, QuotePayload, SavedRandom};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `message` carries the backend's `message` field
    /// when the error body had one.
    #[error("{}", display_status(.status, .message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },

    /// Connection or request failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// 2xx response whose body is not JSON.
    #[error("Unexpected response from the server")]
    Decode(#[source] reqwest::Error),
}

fn display_status(status: &StatusCode, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("Request failed with HTTP {status}"),
    }
}

/// Quote backend client. Cloning shares the underlying `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct QuoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl QuoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/random` - one random quote. Tolerates a single object
    /// or an array whose first element is used.
    pub async fn random(&self) -> Result<Quote, ApiError> {
        let url = format!("{}/random", self.base_url);
        debug!(%url, "Fetching random quote");
        let value = self.get_json(&url).await?;
        Ok(Quote::from_response(&value))
    }

    /// POST `{base}/save` - persist a quote, returning the saved record.
    pub async fn save(&self, payload: &QuotePayload) -> Result<Quote, ApiError> {
        let url = format!("{}/save", self.base_url);
        debug!(%url, author = %payload.author, "Saving quote");
        let resp = self.client.post(&url).json(payload).send().await?;
        let value = Self::json_body(resp).await?;
        Ok(Quote::from_value(&value))
    }

    /// GET `{base}` - the full saved collection.
    pub async fn saved(&self) -> Result<Vec<Quote>, ApiError> {
        debug!(url = %self.base_url, "Loading saved quotes");
        let value = self.get_json(&self.base_url).await?;
        Ok(Quote::list_from_response(&value))
    }

    /// DELETE `{base}/{id}` - confirmation body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.base_url, id);
        debug!(%url, "Deleting quote");
        let resp = self.client.delete(&url).send().await?;
        Self::error_for_status(resp).await?;
        Ok(())
    }

    /// POST `{base}/random/save` - server-side fetch-and-persist. The
    /// response is the saved quote plus an optional `message`.
    pub async fn save_random(&self) -> Result<SavedRandom, ApiError> {
        let url = format!("{}/random/save", self.base_url);
        debug!(%url, "Fetching and saving random quote server-side");
        let resp = self.client.post(&url).send().await?;
        let value = Self::json_body(resp).await?;
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(SavedRandom {
            quote: Quote::from_value(&value),
            message,
        })
    }

    async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        let resp = self.client.get(url).send().await?;
        Self::json_body(resp).await
    }

    /// Reject non-2xx responses, pulling the backend's `message` field out
    /// of the error body when present.
    async fn error_for_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let message = resp
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string));
        Err(ApiError::Status { status, message })
    }

    async fn json_body(resp: reqwest::Response) -> Result<Value, ApiError> {
        let resp = Self::error_for_status(resp).await?;
        resp.json::<Value>().await.map_err(ApiError::Decode)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed_from_base_url() {
        let api = QuoteApi::new("http://localhost:8080/api/quotes/");
        assert_eq!(api.base_url(), "http://localhost:8080/api/quotes");
    }

    #[test]
    fn test_status_error_prefers_backend_message() {
        let err = ApiError::Status {
            status: StatusCode::BAD_REQUEST,
            message: Some("Quote text is required".to_string()),
        };
        assert_eq!(err.to_string(), "Quote text is required");
    }

    #[test]
    fn test_status_error_falls_back_to_http_status() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(
            err.to_string(),
            "Request failed with HTTP 500 Internal Server Error"
        );
    }
}
