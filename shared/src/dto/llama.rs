//! # DefiLlama DTOs
//!
//! Wire types for the read-only DefiLlama endpoints consumed by the terminal.
//!
//! | Endpoint                              | Type                        |
//! |---------------------------------------|-----------------------------|
//! | `GET /v2/chains`                      | `Vec<Chain>`                |
//! | `GET /protocols`                      | `Vec<Protocol>`             |
//! | `GET /protocol/{slug}`                | [`ProtocolDetail`]          |
//! | `GET /v2/historicalChainTvl[/{chain}]`| `Vec<HistoricalTvlPoint>`   |
//!
//! `GET /tvl` has no stable shape and is passed through as `serde_json::Value`.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blockchain network tracked by DefiLlama.
///
/// Received once per fetch and never mutated; a refetch replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// CoinGecko identifier, used as the list key when present
    #[serde(rename = "gecko_id", default, skip_serializing_if = "Option::is_none")]
    pub gecko_id: Option<String>,
    /// Display name
    pub name: String,
    /// Total value locked in USD
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl_prev_day: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl_prev_week: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl_prev_month: Option<f64>,
    /// Number of protocols deployed on the chain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocols: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmc_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

impl Chain {
    /// Minimal constructor, mostly useful for tests and fixtures.
    pub fn new(name: impl Into<String>, tvl: Option<f64>) -> Self {
        Self {
            gecko_id: None,
            name: name.into(),
            tvl,
            tvl_prev_day: None,
            tvl_prev_week: None,
            tvl_prev_month: None,
            protocols: None,
            token_symbol: None,
            cmc_id: None,
            chain_id: None,
        }
    }

    /// Stable list key: the CoinGecko id, falling back to the display name.
    pub fn key(&self) -> &str {
        self.gecko_id.as_deref().unwrap_or(&self.name)
    }

    /// TVL with an absent value treated as zero.
    pub fn tvl_or_zero(&self) -> f64 {
        self.tvl.unwrap_or(0.0)
    }

    /// Protocol count with an absent value treated as zero.
    pub fn protocol_count(&self) -> u32 {
        self.protocols.unwrap_or(0)
    }
}

/// A DeFi protocol entry from `GET /protocols`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Primary chain ("Multi-Chain" for protocols on several chains)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(rename = "gecko_id", default, skip_serializing_if = "Option::is_none")]
    pub gecko_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default)]
    pub forked_from: Vec<String>,
    #[serde(default)]
    pub oracles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvl: Option<f64>,
    /// TVL broken down by chain name
    #[serde(default)]
    pub chain_tvls: HashMap<String, f64>,
    #[serde(rename = "change_1h", default, skip_serializing_if = "Option::is_none")]
    pub change_1h: Option<f64>,
    #[serde(rename = "change_1d", default, skip_serializing_if = "Option::is_none")]
    pub change_1d: Option<f64>,
    #[serde(rename = "change_7d", default, skip_serializing_if = "Option::is_none")]
    pub change_7d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staking: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdv: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcap: Option<f64>,
}

/// Full protocol record from `GET /protocol/{slug}`.
///
/// Unlike the list endpoint, `tvl` here is a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolDetail {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub chains: Vec<String>,
    #[serde(default)]
    pub tvl: Vec<TvlPoint>,
    #[serde(default)]
    pub current_chain_tvls: HashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcap: Option<f64>,
}

impl ProtocolDetail {
    /// Most recent point of the TVL series, if any.
    pub fn latest_tvl(&self) -> Option<f64> {
        self.tvl.last().map(|p| p.total_liquidity_usd)
    }
}

/// One point of a protocol TVL series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TvlPoint {
    /// Unix timestamp (seconds)
    pub date: i64,
    #[serde(rename = "totalLiquidityUSD")]
    pub total_liquidity_usd: f64,
}

/// One point of `GET /v2/historicalChainTvl`, either global or for a single chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalTvlPoint {
    /// Unix timestamp (seconds)
    pub date: i64,
    pub tvl: f64,
}

impl HistoricalTvlPoint {
    /// Point timestamp as UTC, `None` when out of range.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.date, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_decodes_mixed_case_fields() {
        let json = r#"{
            "gecko_id": "ethereum",
            "tvl": 61000000000.5,
            "tokenSymbol": "ETH",
            "cmcId": "1027",
            "name": "Ethereum",
            "chainId": 1
        }"#;

        let chain: Chain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.gecko_id.as_deref(), Some("ethereum"));
        assert_eq!(chain.token_symbol.as_deref(), Some("ETH"));
        assert_eq!(chain.cmc_id.as_deref(), Some("1027"));
        assert_eq!(chain.chain_id, Some(1));
        assert_eq!(chain.tvl, Some(61000000000.5));
        assert_eq!(chain.protocols, None);
    }

    #[test]
    fn test_chain_tolerates_nulls_and_missing_fields() {
        let json = r#"{"gecko_id": null, "tokenSymbol": null, "cmcId": null, "name": "Fuel", "chainId": null}"#;

        let chain: Chain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.key(), "Fuel");
        assert_eq!(chain.tvl_or_zero(), 0.0);
        assert_eq!(chain.protocol_count(), 0);
    }

    #[test]
    fn test_chain_key_prefers_gecko_id() {
        let mut chain = Chain::new("BNB Chain", Some(1.0));
        assert_eq!(chain.key(), "BNB Chain");

        chain.gecko_id = Some("binancecoin".to_string());
        assert_eq!(chain.key(), "binancecoin");
    }

    #[test]
    fn test_chain_reads_previous_day_and_protocols() {
        let json = r#"{"name": "Solana", "tvl": 120.0, "tvlPrevDay": 100.0, "protocols": 42}"#;

        let chain: Chain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.tvl_prev_day, Some(100.0));
        assert_eq!(chain.protocol_count(), 42);
    }

    #[test]
    fn test_protocol_decodes_list_entry() {
        let json = r#"{
            "id": "111",
            "name": "Aave V3",
            "slug": "aave-v3",
            "symbol": "AAVE",
            "category": "Lending",
            "chains": ["Ethereum", "Arbitrum"],
            "gecko_id": null,
            "forkedFrom": [],
            "listedAt": 1648776877,
            "tvl": 12000000000.0,
            "chainTvls": {"Ethereum": 9000000000.0, "Arbitrum": 3000000000.0},
            "change_1h": 0.12,
            "change_1d": -1.5,
            "change_7d": null,
            "mcap": null
        }"#;

        let protocol: Protocol = serde_json::from_str(json).unwrap();
        assert_eq!(protocol.slug, "aave-v3");
        assert_eq!(protocol.chains.len(), 2);
        assert_eq!(protocol.chain_tvls.get("Arbitrum"), Some(&3000000000.0));
        assert_eq!(protocol.change_1d, Some(-1.5));
        assert_eq!(protocol.change_7d, None);
        assert_eq!(protocol.listed_at, Some(1648776877));
    }

    #[test]
    fn test_protocol_detail_series() {
        let json = r#"{
            "id": "1",
            "name": "Uniswap",
            "chains": ["Ethereum"],
            "tvl": [
                {"date": 1700000000, "totalLiquidityUSD": 10.0},
                {"date": 1700086400, "totalLiquidityUSD": 12.5}
            ],
            "currentChainTvls": {"Ethereum": 12.5}
        }"#;

        let detail: ProtocolDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.tvl.len(), 2);
        assert_eq!(detail.latest_tvl(), Some(12.5));
        assert_eq!(detail.current_chain_tvls.get("Ethereum"), Some(&12.5));
    }

    #[test]
    fn test_historical_point_date_time() {
        let point: HistoricalTvlPoint =
            serde_json::from_str(r#"{"date": 1700000000, "tvl": 5.0}"#).unwrap();

        let dt = point.date_time().unwrap();
        assert_eq!(dt.timestamp(), 1700000000);
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2023-11-14");
    }
}
