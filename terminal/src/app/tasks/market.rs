//! # Market Data Tasks
//!
//! Async tasks for fetching the chain list and the historical TVL series.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::spawn;
use tracing::{debug, error, info};

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks::QueryContext;
use crate::services::cache::QueryKey;

/// Fetch the chain list through the query cache.
///
/// With `force` the cached entry is invalidated first. A fresh entry
/// otherwise answers without touching the network.
pub(crate) fn fetch_chains(state: Arc<RwLock<AppState>>, ctx: QueryContext, force: bool) {
    {
        let mut state = state.write();

        // Skip if already fetching (prevents task pileup)
        if state.chains.is_fetching() {
            debug!("Chain fetch already in progress");
            return;
        }
        state.chains.begin_fetch();
    } // Lock released here

    spawn(async move {
        let api = ctx.api;
        let fetcher = move || {
            let api = Arc::clone(&api);
            async move { api.list_chains().await }
        };

        let result = if force {
            ctx.cache.refetch(QueryKey::Chains, fetcher).await
        } else {
            ctx.cache.fetch(QueryKey::Chains, fetcher).await
        };

        match &result {
            Ok(chains) => info!(count = chains.len(), "Chains loaded"),
            Err(e) => error!(error = %e, "Failed to load chains"),
        }
        let _ = ctx.event_tx.send(AppEvent::ChainsLoaded(result)).await;
    });
}

/// Fetch the aggregate historical TVL series through the query cache.
pub(crate) fn fetch_historical_tvl(state: Arc<RwLock<AppState>>, ctx: QueryContext, force: bool) {
    {
        let mut state = state.write();
        if state.historical_tvl.is_fetching() {
            debug!("Historical TVL fetch already in progress");
            return;
        }
        state.historical_tvl.begin_fetch();
    }

    spawn(async move {
        let api = ctx.api;
        let fetcher = move || {
            let api = Arc::clone(&api);
            async move { api.historical_chain_tvl(None).await }
        };

        let key = QueryKey::HistoricalChainTvl(None);
        let result = if force {
            ctx.cache.refetch(key, fetcher).await
        } else {
            ctx.cache.fetch(key, fetcher).await
        };

        match &result {
            Ok(points) => info!(points = points.len(), "Historical TVL loaded"),
            Err(e) => error!(error = %e, "Failed to load historical TVL"),
        }
        let _ = ctx.event_tx.send(AppEvent::HistoricalTvlLoaded(result)).await;
    });
}
