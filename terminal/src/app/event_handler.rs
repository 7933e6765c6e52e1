//! # Event Handler
//!
//! Applies `AppEvent` results from background tasks to the application state.

use crate::app::{App, AppEvent};

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per event, for as short as possible.
    fn handle_event_impl(&mut self, event: AppEvent) {
        let mut state = self.state.write();
        match event {
            AppEvent::ChainsLoaded(result) => {
                state.chains.apply(result);
            }
            AppEvent::HistoricalTvlLoaded(result) => {
                state.historical_tvl.apply(result);
            }
        }
    }
}
