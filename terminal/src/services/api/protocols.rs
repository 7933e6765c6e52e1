//! # Protocol Endpoints
//!
//! `GET /protocols` and `GET /protocol/{slug}`.

use shared::dto::llama::{Protocol, ProtocolDetail};

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the full protocol list.
#[tracing::instrument(skip(client))]
pub async fn list_protocols(client: &ApiClient) -> Result<Vec<Protocol>> {
    let protocols: Vec<Protocol> = client.get_json("/protocols").await?;
    tracing::debug!(count = protocols.len(), "Protocols fetched successfully");
    Ok(protocols)
}

/// Fetch a single protocol with its TVL history.
#[tracing::instrument(skip(client), fields(slug = %slug))]
pub async fn get_protocol(client: &ApiClient, slug: &str) -> Result<ProtocolDetail> {
    let detail: ProtocolDetail = client.get_json(&format!("/protocol/{}", slug)).await?;
    tracing::debug!(points = detail.tvl.len(), "Protocol detail fetched successfully");
    Ok(detail)
}
