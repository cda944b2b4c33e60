//! Shared HTTP client for the backend API.
//!
//! 后端 API 的共享 HTTP 客户端。
//!
//! Transport failures and non-success statuses are normalized into
//! [`GatewayError`] here so the individual gateways only deal with their
//! own payload shapes.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wd_core::config::ApiConfig;
use wd_core::ports::GatewayError;

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::from_parts(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn from_parts(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .cookie_store(true)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, GatewayError> {
        self.http
            .get(self.url(path))
            .send()
            .await
            .map_err(map_transport_error)
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, GatewayError> {
        self.http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(map_transport_error)
    }

    pub async fn post_empty(&self, path: &str) -> Result<reqwest::Response, GatewayError> {
        self.http
            .post(self.url(path))
            .send()
            .await
            .map_err(map_transport_error)
    }
}

fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Network(err.to_string())
    }
}

/// Body shape the backend uses for error responses.
#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Turn a non-success response into `GatewayError::Status`, preferring the
/// backend's own error message over the bare status code.
pub(crate) async fn require_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .unwrap_or_else(|| format!("HTTP {code}"));

    Err(GatewayError::Status { code, message })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    response
        .json::<T>()
        .await
        .map_err(|err| GatewayError::Decode(err.to_string()))
}
