//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_FILTER, MAIN_LOG_FILE};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Flush guards for the non-blocking writers.
///
/// Buffered log lines are written out when this is dropped, so keep it alive
/// in `main` for the lifetime of the program.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for the main log
/// - Optional realtime log (truncated on startup, for live monitoring)
/// - Non-blocking writes so the UI thread never waits on disk
/// - Panic hook integration for crash logging
///
/// Returns `None` when the log directory cannot be created; the app keeps
/// running without file logs.
pub fn init(config: &DebugConfig) -> Option<LogGuard> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let mut guards = Vec::with_capacity(2);

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, MAIN_LOG_FILE);
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);
    guards.push(guard_main);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(file_layer);

    let realtime_file = if config.enable_realtime_log {
        // create() truncates, giving every session a fresh file
        match fs::File::create(config.realtime_log_file()) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    match realtime_file {
        Some(file) => {
            let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);
            guards.push(guard_realtime);

            let realtime_layer = fmt::layer()
                .with_writer(non_blocking_realtime)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .pretty();

            subscriber.with(realtime_layer).init();
        }
        None => subscriber.init(),
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Debug logging initialized"
    );

    setup_panic_hook();

    Some(LogGuard { _guards: guards })
}

fn env_filter(config: &DebugConfig) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|e| {
        eprintln!("Warning: Invalid log filter {:?}: {}", config.log_level, e);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Set up panic hook to log panics with location and message
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
