//! # Services Module
//!
//! External service integrations for the terminal.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/         - DefiLlama HTTP client (chains, protocols, TVL)
//! ├── cache.rs     - Keyed query cache with dedup, staleness and retry
//! └── cluster.rs   - Solana cluster / commitment badge (display only)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  App (egui main thread)              │
//! │        tasks::market::fetch_*  ──►  QueryCache       │
//! └───────────────────────────────────────┬──────────────┘
//!                                         │ fetcher closure
//!                                         ▼
//!                             ┌──────────────────────┐
//!                             │  ApiClient           │
//!                             │  (impl DataService)  │
//!                             └──────────┬───────────┘
//!                                        │ HTTPS/JSON
//!                                        ▼
//!                             ┌──────────────────────┐
//!                             │  api.llama.fi        │
//!                             │  /v2/chains          │
//!                             │  /protocols          │
//!                             │  /protocol/{slug}    │
//!                             │  /tvl                │
//!                             │  /v2/historical...   │
//!                             └──────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! - **ApiClient**: `reqwest::Client` is internally reference counted; clones
//!   share one connection pool.
//! - **QueryCache**: guarded by a `parking_lot::Mutex` that is never held
//!   across an `.await`. Share it as `Arc<QueryCache>`.

pub mod api;
pub mod cache;
pub mod cluster;
