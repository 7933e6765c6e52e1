//! # Application Orchestrator
//!
//! The main [`App`] struct orchestrates the entire application, coordinating between
//! the UI rendering layer, async query tasks, and application state management.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ┌──────────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                                  │   │
//! │  │  - on_tick() - called every frame                    │   │
//! │  │  - handle_*() - user action handlers                 │   │
//! │  │  - chain_view() / overview_summary() - derived data  │   │
//! │  └────────────┬─────────────────────────────────────────┘   │
//! │               │                                             │
//! │  ┌────────────▼─────────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                        │   │
//! │  └──────────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────────┐
//! │              Async Tasks (Tokio)                            │
//! │  tasks::market::fetch_chains()          ─┐                  │
//! │  tasks::market::fetch_historical_tvl()  ─┴─► QueryCache ─► DataService
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Screen Mounting
//!
//! Switching to a screen "mounts" it: every query the screen shows is requested
//! through the [`QueryCache`]. Fresh entries answer immediately, so moving back
//! and forth between screens costs no network traffic inside the stale window.
//! Both screens read the same `chains` entry.
//!
//! ## Event-Driven Communication
//!
//! ```rust,ignore
//! // Async task sends event
//! event_tx.send(AppEvent::ChainsLoaded(result)).await;
//!
//! // Main thread receives event in on_tick()
//! while let Ok(event) = app.event_rx.try_recv() {
//!     app.handle_event(event);
//! }
//! ```
//!
//! ## Related Modules
//!
//! - [`state`]: Application state types and definitions
//! - [`events`]: Event enum for async communication
//! - [`handlers`]: User action handlers
//! - [`tasks`]: Async background tasks

mod event_handler;
mod events;
mod handlers;
mod state;
mod tasks;

pub use events::AppEvent;
pub use handlers::chains::{chain_page_url, CHAIN_PAGE_BASE_URL};
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver};
use parking_lot::RwLock;
use shared::dto::llama::Chain;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::DataService;
use crate::pipeline::{self, OverviewSummary, SortKey};
use crate::services::api::ApiClient;
use crate::services::cache::QueryCache;
use crate::services::cluster::ConnectionConfig;
use event_handler::AppEventHandler;
use tasks::QueryContext;

/// How often idle cache entries are swept
const CACHE_GC_INTERVAL: Duration = Duration::from_secs(60);

/// Main application orchestrator.
///
/// Owns the shared state, the event channel and the query context handed to
/// background tasks. All methods are called from the UI thread.
///
/// # Example
///
/// ```rust,no_run
/// use terminal::app::App;
/// use terminal::core::config::AppConfig;
///
/// let _guard = terminal::utils::runtime::TOKIO_RT.enter();
/// let mut app = App::new(&AppConfig::default()).expect("valid config");
///
/// // In egui update loop (main thread):
/// app.on_tick();
/// let rows = app.chain_view();
/// # let _ = rows;
/// ```
pub struct App {
    /// Thread-safe shared application state.
    ///
    /// Hold locks for minimal duration to prevent UI freezing.
    pub state: Arc<RwLock<AppState>>,

    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,

    ctx: QueryContext,
}

impl App {
    /// Create the application from configuration.
    ///
    /// Builds the HTTP client and query cache, starts cache garbage collection
    /// and mounts the initial screen. Must be called inside a tokio runtime.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let cache = Arc::new(QueryCache::new(config.cache.clone()));
        cache.start_garbage_collector(CACHE_GC_INTERVAL);

        let app = Self::with_service(api, cache, config.connection);
        app.mount_current_screen();

        tracing::info!(
            base_url = %config.api.base_url,
            connection = %config.connection.badge(),
            "App state initialized"
        );
        Ok(app)
    }

    /// Create the application around an existing data service and cache.
    ///
    /// Nothing is fetched until a screen is mounted.
    pub fn with_service(
        api: Arc<dyn DataService>,
        cache: Arc<QueryCache>,
        connection: ConnectionConfig,
    ) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::new(connection))),
            event_rx,
            ctx: QueryContext {
                api,
                cache,
                event_tx,
            },
        }
    }

    /// Shared query cache
    pub fn cache(&self) -> &Arc<QueryCache> {
        &self.ctx.cache
    }

    /// Called every frame to process async events.
    ///
    /// Drains every pending event without blocking.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one async task result to the state
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    // ========== Navigation ==========

    /// Switch screens, mounting the new one
    pub fn handle_screen_change(&mut self, screen: Screen) {
        if handlers::navigation::handle_screen_change(self.state.clone(), screen) {
            self.mount_screen(screen);
        }
    }

    /// Navigate to next screen in Tab order
    pub fn next_screen(&mut self) {
        if let Some(screen) = handlers::navigation::next_screen(self.state.clone()) {
            self.mount_screen(screen);
        }
    }

    /// Navigate to previous screen in Tab order
    pub fn previous_screen(&mut self) {
        if let Some(screen) = handlers::navigation::previous_screen(self.state.clone()) {
            self.mount_screen(screen);
        }
    }

    /// Issue the cached queries of the current screen
    pub fn mount_current_screen(&self) {
        let screen = self.state.read().current_screen;
        self.mount_screen(screen);
    }

    fn mount_screen(&self, screen: Screen) {
        match screen {
            Screen::Overview => {
                tasks::market::fetch_chains(self.state.clone(), self.ctx.clone(), false);
                tasks::market::fetch_historical_tvl(self.state.clone(), self.ctx.clone(), false);
            }
            Screen::Chains => {
                tasks::market::fetch_chains(self.state.clone(), self.ctx.clone(), false);
            }
        }
    }

    // ========== Refresh ==========

    /// Reload the chain list, bypassing freshness
    pub fn refresh_chains(&mut self) {
        tracing::info!("Refreshing chains");
        tasks::market::fetch_chains(self.state.clone(), self.ctx.clone(), true);
    }

    /// Reload everything the Overview screen shows
    pub fn refresh_overview(&mut self) {
        tracing::info!("Refreshing overview");
        tasks::market::fetch_chains(self.state.clone(), self.ctx.clone(), true);
        tasks::market::fetch_historical_tvl(self.state.clone(), self.ctx.clone(), true);
    }

    /// Reload the queries of the current screen
    pub fn refresh_current_screen(&mut self) {
        let screen = self.state.read().current_screen;
        match screen {
            Screen::Overview => self.refresh_overview(),
            Screen::Chains => self.refresh_chains(),
        }
    }

    // ========== Chain List ==========

    pub fn handle_search_change(&mut self, search: String) {
        handlers::chains::handle_search_change(self.state.clone(), search);
    }

    pub fn handle_sort_change(&mut self, sort: SortKey) {
        handlers::chains::handle_sort_change(self.state.clone(), sort);
    }

    pub fn handle_chain_select(&mut self, key: String) {
        handlers::chains::handle_chain_select(self.state.clone(), key);
    }

    /// Open the DefiLlama page of a chain in the system browser
    pub fn handle_open_chain_page(&mut self, name: &str) {
        handlers::chains::open_chain_page(name);
    }

    // ========== Derived Data ==========

    /// Chain list filtered and sorted by the current controls
    pub fn chain_view(&self) -> Vec<Chain> {
        let state = self.state.read();
        pipeline::derive(
            state.chain_records(),
            &state.chain_list.search,
            state.chain_list.sort,
        )
    }

    /// Total TVL and top chains for the Overview screen
    pub fn overview_summary(&self) -> OverviewSummary {
        let state = self.state.read();
        pipeline::summarize(state.chain_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::services::cache::{CacheConfig, QueryKey};
    use async_trait::async_trait;
    use shared::dto::llama::{HistoricalTvlPoint, Protocol, ProtocolDetail};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct StubService {
        chains: Vec<Chain>,
        fail: AtomicBool,
        chain_calls: AtomicUsize,
        history_calls: AtomicUsize,
    }

    impl StubService {
        fn new() -> Self {
            Self {
                chains: vec![
                    Chain {
                        protocols: Some(40),
                        ..Chain::new("Arbitrum", Some(3.0))
                    },
                    Chain {
                        protocols: Some(900),
                        ..Chain::new("Ethereum", Some(60.0))
                    },
                    Chain {
                        protocols: Some(200),
                        ..Chain::new("Solana", Some(8.0))
                    },
                ],
                fail: AtomicBool::new(false),
                chain_calls: AtomicUsize::new(0),
                history_calls: AtomicUsize::new(0),
            }
        }

        fn chain_calls(&self) -> usize {
            self.chain_calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DataService for StubService {
        async fn list_chains(&self) -> Result<Vec<Chain>> {
            self.chain_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(AppError::Transport("connection refused".to_string()));
            }
            Ok(self.chains.clone())
        }

        async fn list_protocols(&self) -> Result<Vec<Protocol>> {
            Ok(Vec::new())
        }

        async fn get_protocol(&self, slug: &str) -> Result<ProtocolDetail> {
            Err(AppError::Status {
                status: 404,
                url: format!("/protocol/{}", slug),
            })
        }

        async fn get_tvl(&self) -> Result<serde_json::Value> {
            Ok(serde_json::Value::Null)
        }

        async fn historical_chain_tvl(&self, _chain: Option<&str>) -> Result<Vec<HistoricalTvlPoint>> {
            self.history_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![
                HistoricalTvlPoint { date: 1_700_000_000, tvl: 50.0 },
                HistoricalTvlPoint { date: 1_700_086_400, tvl: 71.0 },
            ])
        }
    }

    fn test_app(stub: &Arc<StubService>) -> App {
        let cache = Arc::new(QueryCache::new(CacheConfig {
            retry: 0,
            ..CacheConfig::default()
        }));
        App::with_service(stub.clone(), cache, ConnectionConfig::default())
    }

    /// Pump events until no query is in flight
    async fn settle(app: &mut App) {
        for _ in 0..200 {
            app.on_tick();
            if !app.state.read().is_busy() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("queries did not settle");
    }

    fn names(chains: &[Chain]) -> Vec<&str> {
        chains.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_initial_state() {
        let stub = Arc::new(StubService::new());
        let app = test_app(&stub);
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Overview);
        assert_eq!(state.chain_list, ChainListState::default());
        assert!(state.chains.data.is_none());
        assert!(!state.is_busy());
        assert_eq!(stub.chain_calls(), 0);
    }

    #[tokio::test]
    async fn test_next_and_previous_screen_wrap() {
        let stub = Arc::new(StubService::new());
        let mut app = test_app(&stub);

        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Chains);
        app.next_screen();
        assert_eq!(app.state.read().current_screen, Screen::Overview);
        app.previous_screen();
        assert_eq!(app.state.read().current_screen, Screen::Chains);

        settle(&mut app).await;
    }

    #[tokio::test]
    async fn test_mount_loads_overview() {
        let stub = Arc::new(StubService::new());
        let mut app = test_app(&stub);

        app.mount_current_screen();
        assert!(app.state.read().chains.is_loading);
        settle(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.chains.data.as_ref().map(|c| c.len()), Some(3));
        assert_eq!(state.historical_tvl.data.as_ref().map(|p| p.len()), Some(2));
        assert!(state.chains.error.is_none());
        drop(state);

        let summary = app.overview_summary();
        assert_eq!(summary.total_tvl, 71.0);
        assert_eq!(names(&summary.top_chains), ["Ethereum", "Solana", "Arbitrum"]);
    }

    #[tokio::test]
    async fn test_screens_share_cached_chains() {
        let stub = Arc::new(StubService::new());
        let mut app = test_app(&stub);

        app.mount_current_screen();
        app.handle_screen_change(Screen::Chains);
        settle(&mut app).await;

        app.handle_screen_change(Screen::Overview);
        app.handle_screen_change(Screen::Chains);
        settle(&mut app).await;

        assert_eq!(stub.chain_calls(), 1);
        assert_eq!(stub.history_calls.load(Ordering::SeqCst), 1);
        assert!(app.cache().get::<Vec<Chain>>(&QueryKey::Chains).is_some());
    }

    #[tokio::test]
    async fn test_refresh_bypasses_fresh_cache() {
        let stub = Arc::new(StubService::new());
        let mut app = test_app(&stub);

        app.handle_screen_change(Screen::Chains);
        settle(&mut app).await;
        assert_eq!(stub.chain_calls(), 1);

        app.refresh_chains();
        assert!(app.state.read().chains.is_refetching);
        settle(&mut app).await;

        assert_eq!(stub.chain_calls(), 2);
        assert!(app.state.read().chains.data.is_some());
    }

    #[tokio::test]
    async fn test_chain_view_follows_controls() {
        let stub = Arc::new(StubService::new());
        let mut app = test_app(&stub);

        app.handle_screen_change(Screen::Chains);
        settle(&mut app).await;

        assert_eq!(names(&app.chain_view()), ["Ethereum", "Solana", "Arbitrum"]);

        app.handle_sort_change(SortKey::ByName);
        assert_eq!(names(&app.chain_view()), ["Arbitrum", "Ethereum", "Solana"]);

        app.handle_sort_change(SortKey::ByProtocolCount);
        app.handle_search_change("A".to_string());
        assert_eq!(names(&app.chain_view()), ["Solana", "Arbitrum"]);

        app.handle_search_change("xyz".to_string());
        assert!(app.chain_view().is_empty());

        app.handle_chain_select("solana".to_string());
        assert_eq!(app.state.read().chain_list.selected.as_deref(), Some("solana"));
    }

    #[test]
    fn test_chain_view_empty_before_load() {
        let stub = Arc::new(StubService::new());
        let app = test_app(&stub);
        assert!(app.chain_view().is_empty());
        assert_eq!(app.overview_summary(), OverviewSummary::default());
    }

    #[tokio::test]
    async fn test_error_then_retry() {
        let stub = Arc::new(StubService::new());
        stub.fail.store(true, Ordering::SeqCst);
        let mut app = test_app(&stub);

        app.handle_screen_change(Screen::Chains);
        settle(&mut app).await;
        {
            let state = app.state.read();
            assert!(state.chains.data.is_none());
            assert_eq!(
                state.chains.error.as_deref(),
                Some("Network error: connection refused")
            );
        }

        stub.fail.store(false, Ordering::SeqCst);
        app.refresh_current_screen();
        settle(&mut app).await;

        let state = app.state.read();
        assert!(state.chains.error.is_none());
        assert_eq!(state.chains.data.as_ref().map(|c| c.len()), Some(3));
    }
}
