//! HTTP transport seam.
//!
//! Everything network-facing goes through the [`Transport`] trait so the
//! adapters above it can be exercised against a mock. The real implementation
//! wraps `reqwest` with the fixed per-request deadline from configuration;
//! there is no retry policy, a timeout fails the request like any other
//! transport error.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::debug;

use dealerdesk_shared::config::ApiConfig;
use dealerdesk_shared::error::{AppError, AppResult};

/// Read access to the external API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues a GET to `path` (relative to the API base) with query params
    /// and returns the decoded JSON body.
    async fn get(&self, path: &str, params: &[(String, String)]) -> AppResult<Value>;
}

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport from configuration.
    ///
    /// The session token, when present, is attached as a bearer header on
    /// every request; the deadline applies to the whole request.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| AppError::Validation("session token is not a valid header".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(String, String)]) -> AppResult<Value> {
        let url = self.url(path);
        debug!(%url, params = params.len(), "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, &url));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| AppError::Decode(err.to_string()))
    }
}

fn request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout(err.to_string())
    } else {
        AppError::Transport(err.to_string())
    }
}

fn status_error(status: StatusCode, url: &str) -> AppError {
    let reason = status.canonical_reason().unwrap_or("unknown status");
    AppError::from_status(status.as_u16(), format!("{url}: {status} {reason}"))
}
