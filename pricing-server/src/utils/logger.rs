//! Logging Infrastructure
//!
//! Structured logging setup. Level comes from `RUST_LOG` when set,
//! otherwise from the configured default; log output optionally goes to a
//! daily-rolling file in addition to stderr.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger
///
/// `log_level` is the fallback filter when `RUST_LOG` is unset.
/// `log_dir`, when it names an existing directory, switches output to a
/// daily-rolling `pricing-server.*` file inside it.
pub fn init_logger(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists()
            && let Some(dir_str) = log_path.to_str()
        {
            let file_appender = tracing_appender::rolling::daily(dir_str, "pricing-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
