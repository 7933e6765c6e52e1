//! # Core Abstractions
//!
//! Core traits, configuration and error types used throughout the terminal.
//!
//! ## Modules
//!
//! - **[`config`]**: Startup configuration (`AppConfig`) with environment overrides
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`DataService`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use terminal::core::service::DataService;
//!
//! // In production: the real HTTP client
//! let api: Arc<dyn DataService> = Arc::new(ApiClient::new(&config.api)?);
//!
//! // In tests: an in-memory stub
//! let api: Arc<dyn DataService> = Arc::new(StubService::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::DataService;
