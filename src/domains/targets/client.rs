//! myshoes API client.
//!
//! [`TargetClient`] is the contract the tools depend on; [`HttpTargetClient`]
//! implements it over the myshoes REST API. Tests substitute their own
//! implementation so no network is needed.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::TargetError;
use super::model::{CreateTargetParams, ErrorResponse, Target, UpdateTargetParams};
use crate::core::config::ApiConfig;

/// Operations on myshoes targets.
///
/// Implementations must be safe to share between concurrent tool calls.
#[async_trait]
pub trait TargetClient: Send + Sync {
    async fn list_targets(&self) -> Result<Vec<Target>, TargetError>;

    async fn get_target(&self, id: &str) -> Result<Target, TargetError>;

    async fn create_target(&self, params: &CreateTargetParams) -> Result<Target, TargetError>;

    async fn update_target(
        &self,
        id: &str,
        params: &UpdateTargetParams,
    ) -> Result<Target, TargetError>;

    async fn delete_target(&self, id: &str) -> Result<(), TargetError>;
}

/// [`TargetClient`] backed by the myshoes HTTP API.
#[derive(Debug, Clone)]
pub struct HttpTargetClient {
    http: Client,
    base_url: Url,
}

impl HttpTargetClient {
    /// Build a client for the configured host.
    pub fn new(config: &ApiConfig) -> Result<Self, TargetError> {
        let host = config.host.trim();
        if host.is_empty() {
            return Err(TargetError::config("host is empty"));
        }
        let base_url = Url::parse(host)
            .map_err(|e| TargetError::config(format!("invalid host '{}': {}", host, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(TargetError::config(format!(
                "invalid host '{}': expected an http(s) URL",
                host
            )));
        }

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TargetError::config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    ///
    /// `.` and `..` are refused: the URL parser collapses them, which would
    /// turn `/target/..` into the collection route.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, TargetError> {
        if let Some(bad) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(TargetError::InvalidId(bad.to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TargetError::config("host cannot be used as a base URL"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request and turn non-2xx answers into a classified error.
    async fn send(&self, request: RequestBuilder) -> Result<Response, TargetError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("myshoes error response ({}): {}", status, body);
        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(err) => err.error,
            Err(_) if body.trim().is_empty() => status.to_string(),
            Err(_) => body.trim().to_string(),
        };
        Err(TargetError::from_status(status, message))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, TargetError> {
        let bytes = response.bytes().await?;
        if let Ok(text) = std::str::from_utf8(&bytes) {
            debug!("myshoes response ({} bytes): {}", text.len(), text);
        }
        serde_json::from_slice(&bytes).map_err(|e| TargetError::decode(e.to_string()))
    }
}

/// True for the segments a URL path treats as "here" or "parent".
pub fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[async_trait]
impl TargetClient for HttpTargetClient {
    async fn list_targets(&self) -> Result<Vec<Target>, TargetError> {
        let url = self.endpoint(&["target"])?;
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }

    async fn get_target(&self, id: &str) -> Result<Target, TargetError> {
        let url = self.endpoint(&["target", id])?;
        let response = self.send(self.http.get(url)).await?;
        Self::decode(response).await
    }

    async fn create_target(&self, params: &CreateTargetParams) -> Result<Target, TargetError> {
        debug!("myshoes create request: {:?}", params);
        let url = self.endpoint(&["target"])?;
        let response = self.send(self.http.post(url).json(params)).await?;
        Self::decode(response).await
    }

    async fn update_target(
        &self,
        id: &str,
        params: &UpdateTargetParams,
    ) -> Result<Target, TargetError> {
        debug!("myshoes update request for {}: {:?}", id, params);
        let url = self.endpoint(&["target", id])?;
        let response = self.send(self.http.post(url).json(params)).await?;
        Self::decode(response).await
    }

    async fn delete_target(&self, id: &str) -> Result<(), TargetError> {
        let url = self.endpoint(&["target", id])?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }
}
