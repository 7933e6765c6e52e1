//! # Application State Types
//!
//! All state-related types for the application: screens, per-query loading
//! state, chain list controls and the connection badge.

use std::sync::Arc;

use chrono::{DateTime, Local};
use shared::dto::llama::{Chain, HistoricalTvlPoint};

use crate::core::error::AppError;
use crate::pipeline::SortKey;
use crate::services::cluster::ConnectionConfig;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Total TVL, top chains and history chart
    #[default]
    Overview,
    /// Searchable, sortable chain list
    Chains,
}

impl Screen {
    /// Get all screens in Tab navigation order
    pub fn all() -> &'static [Screen] {
        &[Screen::Overview, Screen::Chains]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Chains => "Chains",
        }
    }
}

/// UI-side view of one cached query.
///
/// Mirrors what a screen needs to decide between spinner, error and data.
/// Data from the last success is kept when a later fetch fails.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<Arc<T>>,
    /// First load in progress (no data yet)
    pub is_loading: bool,
    /// Reload in progress while older data is shown
    pub is_refetching: bool,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Local>>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: false,
            is_refetching: false,
            error: None,
            updated_at: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_fetching(&self) -> bool {
        self.is_loading || self.is_refetching
    }

    /// Flag a fetch as started
    pub fn begin_fetch(&mut self) {
        if self.data.is_some() {
            self.is_refetching = true;
        } else {
            self.is_loading = true;
        }
    }

    /// Record a settled fetch
    pub fn apply(&mut self, result: Result<Arc<T>, AppError>) {
        self.is_loading = false;
        self.is_refetching = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.updated_at = Some(Local::now());
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Chain list controls, mutated only by user input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainListState {
    pub search: String,
    pub sort: SortKey,
    /// Key of the last chain the user clicked
    pub selected: Option<String>,
}

/// Complete application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_screen: Screen,
    /// `GET /v2/chains`, shared by both screens
    pub chains: QueryState<Vec<Chain>>,
    /// `GET /v2/historicalChainTvl`, Overview chart
    pub historical_tvl: QueryState<Vec<HistoricalTvlPoint>>,
    pub chain_list: ChainListState,
    pub connection: ConnectionConfig,
}

impl AppState {
    pub fn new(connection: ConnectionConfig) -> Self {
        Self {
            connection,
            ..Self::default()
        }
    }

    /// Raw chain list, if loaded
    pub fn chain_records(&self) -> Option<&[Chain]> {
        self.chains.data.as_deref().map(Vec::as_slice)
    }

    /// Whether any query is currently in flight
    pub fn is_busy(&self) -> bool {
        self.chains.is_fetching() || self.historical_tvl.is_fetching()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_order_and_titles() {
        assert_eq!(Screen::all(), &[Screen::Overview, Screen::Chains]);
        assert_eq!(Screen::Overview.title(), "Overview");
        assert_eq!(Screen::Chains.title(), "Chains");
        assert_eq!(Screen::default(), Screen::Overview);
    }

    #[test]
    fn test_query_state_first_load_then_refetch() {
        let mut query: QueryState<Vec<u32>> = QueryState::default();

        query.begin_fetch();
        assert!(query.is_loading);
        assert!(!query.is_refetching);

        query.apply(Ok(Arc::new(vec![1, 2])));
        assert!(!query.is_fetching());
        assert!(query.updated_at.is_some());

        query.begin_fetch();
        assert!(!query.is_loading);
        assert!(query.is_refetching);
    }

    #[test]
    fn test_query_state_error_keeps_previous_data() {
        let mut query: QueryState<Vec<u32>> = QueryState::default();
        query.apply(Ok(Arc::new(vec![1])));

        query.begin_fetch();
        query.apply(Err(AppError::Transport("timed out".to_string())));

        assert_eq!(query.data.as_deref(), Some(&vec![1]));
        assert_eq!(query.error.as_deref(), Some("Network error: timed out"));
        assert!(!query.is_fetching());

        query.apply(Ok(Arc::new(vec![2])));
        assert!(query.error.is_none());
    }

    #[test]
    fn test_chain_records() {
        let mut state = AppState::default();
        assert!(state.chain_records().is_none());

        state.chains.data = Some(Arc::new(vec![Chain::new("Ethereum", Some(1.0))]));
        assert_eq!(state.chain_records().map(|c| c.len()), Some(1));
    }
}
