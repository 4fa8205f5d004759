//! Logging for the viewer binary
//!
//! The console shows warnings unless `RUST_LOG` says otherwise, e.g.
//! `RUST_LOG=gridlook::viewport=debug` to watch zoom and pan steps.
//! The log file under `~/.config/gridlook/logs/` always records gridlook's
//! debug output (loads, saves, transform changes, dispatched messages) and
//! rotates daily.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_PREFIX: &str = "gridlook.log";
const CONSOLE_DEFAULT: &str = "warn";
const FILE_FILTER: &str = "warn,gridlook=debug,message=debug";

/// Install the console and file subscribers. Without a usable logs
/// directory the viewer still runs with console output only.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(CONSOLE_DEFAULT));
    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let file_layer = crate::config_paths::ensure_logs_dir()
        .map_err(|e| eprintln!("gridlook: file logging disabled: {}", e))
        .ok()
        .map(|dir| {
            fmt::layer()
                .with_writer(tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new(FILE_FILTER))
        });

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
