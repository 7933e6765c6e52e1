//! # Data Transfer Objects (DTOs)
//!
//! Data structures returned by the DefiLlama REST API.
//!
//! ## Module Organization
//!
//! - [`llama`] - Chains, protocols, protocol detail and historical TVL
//!
//! ## Example JSON
//!
//! ```text
//! GET /v2/chains
//!
//! [
//!   {
//!     "gecko_id": "ethereum",
//!     "tvl": 61234567890.12,
//!     "tokenSymbol": "ETH",
//!     "cmcId": "1027",
//!     "name": "Ethereum",
//!     "chainId": 1
//!   }
//! ]
//! ```

pub mod llama;

pub use llama::*;
