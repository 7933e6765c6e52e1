//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the terminal and the public
//! DefiLlama REST API (`https://api.llama.fi`). All DTOs use JSON serialization
//! via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::llama`]**: Chains, protocols and historical TVL series
//! - **[`utils`]**: Shared formatting helpers
//!   - **[`utils::format_billions`]**: Render a dollar amount as `$X.XXB`
//!   - **[`utils::format_number`]**: Thousands separators
//!
//! ## Wire Format
//!
//! DefiLlama mixes naming conventions inside a single payload (`gecko_id` next
//! to `tokenSymbol`), so every struct spells out its renames explicitly:
//! - Most fields map from **camelCase** JSON via `#[serde(rename_all = "camelCase")]`
//! - Snake-case outliers carry a per-field `#[serde(rename = "...")]`
//! - Fields the upstream may omit are `Option` or `#[serde(default)]`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::llama::Chain;
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let chains: Vec<Chain> = reqwest::get("https://api.llama.fi/v2/chains")
//!     .await?
//!     .json()
//!     .await?;
//!
//! for chain in &chains {
//!     println!("{} {}", chain.name, shared::utils::format_billions(chain.tvl_or_zero()));
//! }
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
