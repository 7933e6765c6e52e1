//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod chain_card;
pub mod nav_bar;
pub mod query_status;
pub mod tables;
