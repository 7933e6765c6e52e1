//! # TVL Endpoints
//!
//! `GET /tvl` and the historical chain TVL series.

use shared::dto::llama::HistoricalTvlPoint;

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch the raw `/tvl` payload.
///
/// The shape of this endpoint is not documented upstream, so it is returned
/// untyped.
#[tracing::instrument(skip(client))]
pub async fn get_tvl(client: &ApiClient) -> Result<serde_json::Value> {
    client.get_json("/tvl").await
}

/// Fetch daily TVL history, across all chains or for a single chain.
#[tracing::instrument(skip(client), fields(chain = ?chain))]
pub async fn historical_chain_tvl(
    client: &ApiClient,
    chain: Option<&str>,
) -> Result<Vec<HistoricalTvlPoint>> {
    let path = match chain {
        Some(chain) => format!("/v2/historicalChainTvl/{}", chain),
        None => "/v2/historicalChainTvl".to_string(),
    };

    let points: Vec<HistoricalTvlPoint> = client.get_json(&path).await?;
    tracing::debug!(count = points.len(), "Historical TVL fetched successfully");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_historical_global_and_per_chain() {
        let mut server = Server::new_async().await;
        let global = server
            .mock("GET", "/v2/historicalChainTvl")
            .with_status(200)
            .with_body(json!([{"date": 1700000000, "tvl": 1.0}, {"date": 1700086400, "tvl": 2.0}]).to_string())
            .create_async()
            .await;
        let ethereum = server
            .mock("GET", "/v2/historicalChainTvl/Ethereum")
            .with_status(200)
            .with_body(json!([{"date": 1700000000, "tvl": 0.5}]).to_string())
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url()).unwrap();

        let all = historical_chain_tvl(&client, None).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].tvl, 2.0);

        let eth = historical_chain_tvl(&client, Some("Ethereum")).await.unwrap();
        assert_eq!(eth, vec![HistoricalTvlPoint { date: 1700000000, tvl: 0.5 }]);

        global.assert_async().await;
        ethereum.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_tvl_passthrough() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/tvl")
            .with_status(200)
            .with_body(json!({"total": 123.4}).to_string())
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url()).unwrap();
        let value = get_tvl(&client).await.unwrap();
        assert_eq!(value["total"], json!(123.4));
    }
}
