//! File logging setup
//!
//! The terminal belongs to the UI, so all tracing output goes to
//! `<config dir>/logs/admin-tui.log` through a non-blocking writer.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "admin-tui.log";

/// Filter used when RUST_LOG is unset
fn default_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("admin_tui={}", level))
        .unwrap_or_else(|_| EnvFilter::new("admin_tui=info"))
}

/// Install the global subscriber. The returned guard flushes the file writer
/// when dropped. Returns `None` if the log directory cannot be created or a
/// subscriber is already set; the app runs without logs then.
pub fn init(log_dir: &Path, level: &str) -> Option<WorkerGuard> {
    std::fs::create_dir_all(log_dir).ok()?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    std::panic::set_hook(Box::new(|panic_info| {
        tracing::error!(panic = %panic_info, "panic");
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_accepts_level() {
        assert_eq!(default_filter("debug").to_string(), "admin_tui=debug");
    }
}
