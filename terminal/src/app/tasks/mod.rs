//! # Async Tasks
//!
//! Background query tasks. Each task goes through the shared [`QueryCache`]
//! and reports back to the main thread via the event channel.
//!
//! [`QueryCache`]: crate::services::cache::QueryCache

pub mod market;

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::core::service::DataService;
use crate::services::cache::QueryCache;

/// Everything a query task needs besides the UI state
#[derive(Clone)]
pub(crate) struct QueryContext {
    pub api: Arc<dyn DataService>,
    pub cache: Arc<QueryCache>,
    pub event_tx: Sender<AppEvent>,
}
