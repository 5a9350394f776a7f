//! REST client for the alert backend
//!
//! Wraps the two backend endpoints (alert creation and on-demand search
//! run) using [`reqwest`]. All calls are credential-less cross-origin
//! requests against the configured base URL.

use serde_json::Value;

use caralerts_core::prelude::*;

use crate::protocol::{AlertPayload, CreateAlertResponse};

/// HTTP client for one backend instance.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client for a backend base URL
    /// (e.g. `https://alerts.example.workers.dev`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling with the logo fetch).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create an alert with the immediate-execution flag set.
    ///
    /// Sends `POST /api/alerts`. A non-2xx status or transport failure is
    /// an [`Error::Http`]; an unparseable body is an [`Error::Protocol`].
    /// `success: false` is NOT an error here — the caller decides how to
    /// surface a business rejection.
    pub async fn create_alert(&self, payload: &AlertPayload) -> Result<CreateAlertResponse> {
        let response = self
            .client
            .post(format!("{}/api/alerts", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let response = Self::ensure_success(response).await?;
        response
            .json::<CreateAlertResponse>()
            .await
            .map_err(|e| Error::protocol(e.to_string()))
    }

    /// Trigger a search run for the stored alerts.
    ///
    /// Sends `GET /run` and returns the raw JSON body; the run endpoint
    /// has produced several shapes over time, so interpretation happens
    /// in [`crate::protocol::parse_run_response`].
    pub async fn run_search(&self) -> Result<Value> {
        let response = self
            .client
            .get(format!("{}/run", self.base_url))
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let response = Self::ensure_success(response).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| Error::protocol(e.to_string()))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`Error::Http`] carrying the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(Error::http(format!("{status}: {body}")));
        }
        Ok(response)
    }
}
