//! # Event Handlers
//!
//! Handlers for user input, organized by domain.

pub mod chains;
pub mod navigation;
