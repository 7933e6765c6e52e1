//! # Utility Functions
//!
//! Shared utility functions used across the terminal application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Global tokio runtime the UI thread spawns onto
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate number formatting

pub mod runtime;
