//! Outbound HTTP helper shared by the Leaguepedia and Riot clients.
//!
//! Every call goes through [`UpstreamClient::send_json`], which sends one
//! request, checks the status and decodes the JSON body. Failures come back
//! as [`UpstreamError`] values; nothing is retried.

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

pub use reqwest::Method;

/// Upstream call errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The service answered with a non-2xx status
    #[error("Upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response
    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that is not the expected JSON
    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Status code the upstream answered with, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short label for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Status { .. } => "status",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::Decode(_) => "decode",
        }
    }
}

/// One outbound request.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl UpstreamRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Shared HTTP client. Cloning shares the underlying connection pool.
#[derive(Debug, Clone, Default)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Send `request` and decode a successful body as `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: UpstreamRequest,
    ) -> Result<T, UpstreamError> {
        log::debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("Failed to read error response: {}", e));
            log::warn!(
                "{} {} responded with status {}",
                request.method,
                request.url,
                status
            );
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| UpstreamError::Decode(e.to_string()))
    }
}
