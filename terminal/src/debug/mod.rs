//! # Logging Infrastructure
//!
//! File-based structured logging for the terminal.
//!
//! ## Features
//!
//! - **File-based logging**: Structured logs to `logs/terminal-debug.log` (daily rotation)
//! - **Realtime log**: Optional pretty-printed `logs/debug-realtime.log`, truncated per session
//! - **Panic logging**: Location and message of any panic land in the log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! let _log_guard = terminal::debug::init();
//!
//! tracing::info!(endpoint = "/v2/chains", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default: `terminal=info,warn`)
//! - `TERMINAL_LOG_DIR`: Log directory (default: `logs`)
//! - `TERMINAL_DEBUG_REALTIME`: Enable the realtime log (1=on); on by default with `debug-mode`

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::LogGuard;

/// Initialize logging from the environment.
///
/// Call this at application startup, before any other operations, and keep
/// the returned guard alive until exit.
pub fn init() -> Option<LogGuard> {
    logger::init(&DebugConfig::from_env())
}
