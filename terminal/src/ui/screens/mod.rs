//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one [`Screen`].
//!
//! - **[`overview`]**: Total TVL card, top chains and the historical TVL chart
//! - **[`chains`]**: Searchable, sortable list of every chain
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the state snapshot
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**. No lock is held while
//! drawing; user actions go through `app.handle_*`, which lock internally.
//!
//! [`Screen`]: crate::app::Screen

pub mod chains;
pub mod overview;
