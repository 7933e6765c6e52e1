//! # Chain Endpoints
//!
//! `GET /v2/chains`: current TVL per chain.

use shared::dto::llama::Chain;

use super::client::ApiClient;
use crate::core::error::Result;

/// Fetch every chain tracked by DefiLlama.
#[tracing::instrument(skip(client))]
pub async fn list_chains(client: &ApiClient) -> Result<Vec<Chain>> {
    let chains: Vec<Chain> = client.get_json("/v2/chains").await?;
    tracing::debug!(count = chains.len(), "Chains fetched successfully");
    Ok(chains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_chains() {
        let mut server = Server::new_async().await;
        let payload = json!([
            {"gecko_id": "ethereum", "tvl": 60.0e9, "tokenSymbol": "ETH", "cmcId": "1027", "name": "Ethereum", "chainId": 1},
            {"gecko_id": null, "tvl": 1.0e6, "tokenSymbol": null, "cmcId": null, "name": "Fuel", "chainId": null}
        ])
        .to_string();
        let mock = server
            .mock("GET", "/v2/chains")
            .with_status(200)
            .with_header("Content-Type", "application/json")
            .with_body(payload)
            .create_async()
            .await;

        let client = ApiClient::with_base_url(server.url()).unwrap();
        let chains = list_chains(&client).await.unwrap();

        mock.assert_async().await;
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].key(), "ethereum");
        assert_eq!(chains[1].key(), "Fuel");
        assert_eq!(chains[1].token_symbol, None);
    }
}
