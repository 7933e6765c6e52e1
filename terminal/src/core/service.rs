//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use async_trait::async_trait;
use shared::dto::llama::{Chain, HistoricalTvlPoint, Protocol, ProtocolDetail};

use crate::core::error::Result;

/// Read-only access to the DefiLlama endpoints.
///
/// Implemented by [`crate::services::api::ApiClient`] in production; tests
/// substitute in-memory implementations.
#[async_trait]
pub trait DataService: Send + Sync {
    /// `GET /v2/chains`
    async fn list_chains(&self) -> Result<Vec<Chain>>;

    /// `GET /protocols`
    async fn list_protocols(&self) -> Result<Vec<Protocol>>;

    /// `GET /protocol/{slug}`
    async fn get_protocol(&self, slug: &str) -> Result<ProtocolDetail>;

    /// `GET /tvl`
    async fn get_tvl(&self) -> Result<serde_json::Value>;

    /// `GET /v2/historicalChainTvl`, or `/v2/historicalChainTvl/{chain}` when a chain is given
    async fn historical_chain_tvl(&self, chain: Option<&str>) -> Result<Vec<HistoricalTvlPoint>>;
}
