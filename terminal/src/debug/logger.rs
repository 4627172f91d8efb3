//! File-based logging initialization

use super::config::{DebugConfig, DEFAULT_LOG_LEVEL, LOG_FILE_NAME};
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation for the main log
/// - Optional realtime log (truncated on startup, for live monitoring)
/// - Non-blocking writes so the UI thread never waits on disk
/// - Panic hook integration for crash logging
///
/// Logs are written to `logs/ascend-terminal.log` by default. Calling this twice is
/// harmless: the second subscriber is refused and reported on stderr.
pub fn init() {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME);
    let (non_blocking_main, guard_main) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_main)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry().with(env_filter).with(file_layer);

    let realtime_path = config.realtime_log_file();
    let realtime_file = if config.enable_realtime_log {
        // Truncate for a fresh session
        match fs::File::create(&realtime_path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: Failed to create realtime log file: {}", e);
                None
            }
        }
    } else {
        None
    };

    let init_result = match realtime_file {
        Some(file) => {
            let (non_blocking_realtime, guard_realtime) = tracing_appender::non_blocking(file);
            let realtime_layer = fmt::layer()
                .with_writer(non_blocking_realtime)
                .with_target(true)
                .with_thread_names(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .pretty();

            std::mem::forget(guard_realtime);
            subscriber.with(realtime_layer).try_init()
        }
        None => subscriber.try_init(),
    };

    if let Err(e) = init_result {
        eprintln!("Warning: Logging already initialized: {}", e);
        return;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the main guard alive for the lifetime of the program
    std::mem::forget(guard_main);
}

/// Log panics with location and message before the default hook runs
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

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(backtrace = %backtrace, "Panic backtrace");

        default_panic(panic_info);
    }));
}
