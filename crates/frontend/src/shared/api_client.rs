//! HTTP client used by every screen.
//!
//! Requests go through the [`HttpTransport`] trait so that the view models
//! can be exercised without a browser. [`GlooTransport`] is the browser
//! implementation; tests use [`testing::MockTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use contracts::domain::common::MessageResponse;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::AppConfig;

/// Raw response as seen by the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The creation endpoints answer 200 or 201; nothing else counts as created
    pub fn is_created(&self) -> bool {
        self.status == 200 || self.status == 201
    }

    /// `message` field of a JSON body, if any
    pub fn server_message(&self) -> Option<String> {
        serde_json::from_str::<MessageResponse>(&self.body)
            .ok()
            .and_then(|m| m.text().map(str::to_string))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never reached the server
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a status the caller does not accept
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// The body could not be encoded or decoded
    #[error("unexpected body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } => Some(m),
            _ => None,
        }
    }
}

#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError>;

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, ApiError>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to read response: {}", e)))?;
        Ok(HttpResponse { status, body })
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, ApiError> {
        let response = Request::post(url)
            .header("Accept", "application/json")
            .json(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        // Error bodies are optional; an unreadable one is treated as empty
        let body = response.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

/// Configured entry point to the school API
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    pub fn new(config: AppConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Client backed by the browser `fetch`
    pub fn browser(config: AppConfig) -> Self {
        Self::new(config, Arc::new(GlooTransport))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// GET a JSON document; any non-2xx status is an error
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);

        let response = self.transport.get(&url).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.server_message(),
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    /// POST a creation payload; only 200/201 count as success
    pub async fn post_create<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.config.url(path);
        log::debug!("POST {}", url);

        let payload = serde_json::to_value(body)
            .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
        let response = self.transport.post_json(&url, &payload).await?;
        if !response.is_created() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.server_message(),
            });
        }

        Ok(serde_json::from_str(&response.body).unwrap_or_default())
    }
}
