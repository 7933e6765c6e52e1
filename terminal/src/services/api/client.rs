//! # API Client
//!
//! Main HTTP client for DefiLlama API communication.

use std::time::Instant;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::dto::llama::{Chain, HistoricalTvlPoint, Protocol, ProtocolDetail};

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::DataService;

/// HTTP client for the DefiLlama REST API.
///
/// Holds a pooled `reqwest::Client` with a fixed timeout and JSON headers.
/// The client never retries on its own; retry policy lives in
/// [`crate::services::cache::QueryCache`].
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client against a different base URL (mock servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            ..ApiConfig::default()
        })
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET and decode the JSON body.
    ///
    /// Every failure is logged here and returned as-is to the caller.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let start = Instant::now();

        tracing::debug!(url = %url, "API request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                timeout = e.is_timeout(),
                duration_ms = start.elapsed().as_millis(),
                "API request network error"
            );
            AppError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                url = %url,
                duration_ms = start.elapsed().as_millis(),
                "API request failed with non-success status"
            );
            return Err(AppError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "API response body read error");
            AppError::from(e)
        })?;

        let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                bytes = body.len(),
                "API response parse error"
            );
            AppError::from(e)
        })?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis(),
            "API request succeeded"
        );

        Ok(parsed)
    }
}

// Implement DataService trait for ApiClient
#[async_trait]
impl DataService for ApiClient {
    async fn list_chains(&self) -> Result<Vec<Chain>> {
        crate::services::api::chains::list_chains(self).await
    }

    async fn list_protocols(&self) -> Result<Vec<Protocol>> {
        crate::services::api::protocols::list_protocols(self).await
    }

    async fn get_protocol(&self, slug: &str) -> Result<ProtocolDetail> {
        crate::services::api::protocols::get_protocol(self, slug).await
    }

    async fn get_tvl(&self) -> Result<serde_json::Value> {
        crate::services::api::tvl::get_tvl(self).await
    }

    async fn historical_chain_tvl(&self, chain: Option<&str>) -> Result<Vec<HistoricalTvlPoint>> {
        crate::services::api::tvl::historical_chain_tvl(self, chain).await
    }
}
