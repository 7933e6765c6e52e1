//! Logging configuration from environment variables

use std::path::PathBuf;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "terminal=info,warn";

/// Main log file name (rotated daily)
pub const MAIN_LOG_FILE: &str = "terminal-debug.log";

/// Realtime log file name (truncated on startup)
pub const REALTIME_LOG_FILE: &str = "debug-realtime.log";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log level filter (e.g., "terminal=debug,info")
    pub log_level: String,
    /// Enable realtime debug log (separate from main log)
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            enable_realtime_log: cfg!(feature = "debug-mode"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_dir: lookup("TERMINAL_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            enable_realtime_log: lookup("TERMINAL_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(defaults.enable_realtime_log),
        }
    }

    /// Path of the current main log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(MAIN_LOG_FILE)
    }

    /// Path of the realtime log file
    pub fn realtime_log_file(&self) -> PathBuf {
        self.log_dir.join(REALTIME_LOG_FILE)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file(), PathBuf::from("logs/terminal-debug.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_env_overrides() {
        let config = DebugConfig::from_lookup(|key| match key {
            "TERMINAL_LOG_DIR" => Some("/tmp/llama".to_string()),
            "RUST_LOG" => Some("terminal=debug".to_string()),
            "TERMINAL_DEBUG_REALTIME" => Some("1".to_string()),
            _ => None,
        });

        assert_eq!(config.realtime_log_file(), PathBuf::from("/tmp/llama/debug-realtime.log"));
        assert!(config.enable_realtime_log);
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_realtime_log_off_unless_exactly_one() {
        let config = DebugConfig::from_lookup(|key| {
            (key == "TERMINAL_DEBUG_REALTIME").then(|| "true".to_string())
        });
        assert!(!config.enable_realtime_log);
    }
}
