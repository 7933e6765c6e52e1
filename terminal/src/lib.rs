//! # Llama Terminal - Library Root
//!
//! A **native desktop dashboard** for DeFi total value locked, backed by the
//! public DefiLlama API. This library crate contains all modules used by the
//! binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Overview**: Total TVL across chains, top chains, historical TVL chart
//! - **Chains**: Every chain with TVL, daily change and protocol count;
//!   case-insensitive search and three sort orders
//! - **Query cache**: One in-flight request per endpoint, freshness window,
//!   retry with backoff, idle eviction
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI, native window     │
//! │  egui_plot     - Historical TVL chart                  │
//! │  egui_extras   - Chain table                           │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTPS/JSON
//!                          ▼
//!               ┌─────────────────────┐
//!               │  api.llama.fi       │
//!               └─────────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug (file logging, panic hook)
//!   ├── core (config, errors, DataService trait)
//!   │
//!   ├── app (state, events, handlers, tasks)
//!   │   ├── services::cache (QueryCache)
//!   │   ├── services::api (ApiClient: DataService)
//!   │   └── pipeline (derive, summarize, tvl_change)
//!   │
//!   └── ui (rendering)
//!       ├── screens::{overview, chains}
//!       ├── widgets::* (nav bar, chain card, query status, tables)
//!       ├── chart (egui_plot)
//!       └── theme
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! - Main thread: handles input and rendering (single-threaded)
//! - Async tasks: network requests on the global tokio runtime
//!
//! Results flow back to the main thread as [`AppEvent`]s.
//!
//! ### State Management
//!
//! Application state is wrapped in `Arc<RwLock<AppState>>`. Locks are held
//! briefly and never across an `.await`.
//!
//! ## Testing
//!
//! ```bash
//! cargo test --workspace
//! ```
//!
//! API tests run against a local `mockito` server; cache tests use tokio's
//! paused clock.

pub mod app;
pub mod core;
pub mod debug;
pub mod pipeline;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState, Screen};
pub use crate::core::{AppConfig, AppError, Result};
