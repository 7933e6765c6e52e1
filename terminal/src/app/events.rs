//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use std::sync::Arc;

use shared::dto::llama::{Chain, HistoricalTvlPoint};

use crate::core::error::AppError;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// `GET /v2/chains` settled
    ChainsLoaded(Result<Arc<Vec<Chain>>, AppError>),
    /// `GET /v2/historicalChainTvl` settled
    HistoricalTvlLoaded(Result<Arc<Vec<HistoricalTvlPoint>>, AppError>),
}
