//! # Chain List Handlers
//!
//! Search, sort and selection on the Chains screen.

use crate::app::state::AppState;
use crate::pipeline::SortKey;
use parking_lot::RwLock;
use reqwest::Url;
use std::sync::Arc;

/// Chain page on the DefiLlama website
pub const CHAIN_PAGE_BASE_URL: &str = "https://defillama.com/chain";

/// Internal handler function - use [`crate::app::App::handle_search_change`] instead.
pub(crate) fn handle_search_change(state: Arc<RwLock<AppState>>, search: String) {
    let mut state = state.write();
    state.chain_list.search = search;
}

/// Internal handler function - use [`crate::app::App::handle_sort_change`] instead.
pub(crate) fn handle_sort_change(state: Arc<RwLock<AppState>>, sort: SortKey) {
    let mut state = state.write();
    if state.chain_list.sort != sort {
        tracing::debug!(sort = sort.label(), "Chain list sort changed");
        state.chain_list.sort = sort;
    }
}

/// Record a row click.
///
/// Internal handler function - use [`crate::app::App::handle_chain_select`] instead.
pub(crate) fn handle_chain_select(state: Arc<RwLock<AppState>>, key: String) {
    tracing::info!(chain = %key, "Chain selected");
    let mut state = state.write();
    state.chain_list.selected = Some(key);
}

/// DefiLlama page for a chain, with the name percent-encoded as one path segment
pub fn chain_page_url(name: &str) -> Option<Url> {
    let mut url = Url::parse(CHAIN_PAGE_BASE_URL).ok()?;
    url.path_segments_mut().ok()?.push(name);
    Some(url)
}

/// Open the chain's DefiLlama page in the system browser
pub(crate) fn open_chain_page(name: &str) {
    let Some(url) = chain_page_url(name) else {
        tracing::warn!(chain = %name, "No chain page URL");
        return;
    };
    match open::that(url.as_str()) {
        Ok(()) => tracing::info!(url = %url, "Opened chain page"),
        Err(e) => tracing::warn!(url = %url, error = %e, "Failed to open chain page"),
    }
}
