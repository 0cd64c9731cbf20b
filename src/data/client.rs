//! HTTP client for the prediction service.
//!
//! Two calls, no retries, no caching: `GET /metadata` once at startup and
//! `POST /predict` per submission. Transport faults and failure statuses
//! are normalized into one `ApiError` for the caller to surface; the
//! client itself never reports to the user.

use std::fmt;
use std::time::Duration;

use anyhow::Context;
use serde::de::DeserializeOwned;

use crate::config::API;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::Selection;
use crate::models::{MetadataCatalog, PredictionResult};

/// Failure signal for both service calls
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport-level fault: timeout, DNS, connection reset — no response
    Network(String),
    /// The server responded with a failure status; body kept for diagnostics
    Request { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(detail) => write!(f, "Network error: {}", detail),
            ApiError::Request { status, body } => {
                write!(f, "Request failed with status {}: {}", status, body)
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Clone)]
pub struct PredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(API.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the dropdown catalog. Called once at startup, before the
    /// form becomes usable.
    pub async fn fetch_metadata(&self) -> Result<MetadataCatalog, ApiError> {
        let url = format!("{}{}", self.base_url, API.metadata_path);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http {
            log::info!("GET {}", url);
        }

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    /// Submits one prediction request. Precondition: `selection` is
    /// complete — the form state controller gates this, not the client.
    pub async fn predict(&self, selection: &Selection) -> Result<PredictionResult, ApiError> {
        let url = format!("{}{}", self.base_url, API.predict_path);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http {
            log::info!("POST {} for {:?}", url, selection.crop_type);
        }

        let response = self
            .http
            .post(&url)
            .json(selection)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_http {
            log::info!("-> {}", status);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Request {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PredictionClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
    }

    #[test]
    fn error_display_carries_status_and_body() {
        let err = ApiError::Request {
            status: 400,
            body: "{\"error\": \"Missing one or more required prediction parameters\"}"
                .to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("Missing one or more"));

        let err = ApiError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
