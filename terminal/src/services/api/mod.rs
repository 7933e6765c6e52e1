//! # DefiLlama API Client Module
//!
//! HTTP client for the public DefiLlama REST API. Read-only: no request bodies,
//! no auth headers, no pagination.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct, shared GET/decode path, DataService impl
//! ├── chains.rs     - GET /v2/chains
//! ├── protocols.rs  - GET /protocols, GET /protocol/{slug}
//! └── tvl.rs        - GET /tvl, GET /v2/historicalChainTvl[/{chain}]
//! ```

pub mod chains;
pub mod client;
pub mod protocols;
pub mod tvl;

pub use client::ApiClient;
