//! Tracing subscriber setup.
//!
//! Headless commands log to stderr. The terminal UI owns the screen while it
//! runs, so it logs to a file through a non-blocking appender instead.

use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,storyreel=debug";
const VERBOSE_FILTER: &str = "debug";

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// Initialize logging to stderr.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    info!("Telemetry initialized (console)");
    Ok(())
}

/// Initialize logging to `path`.
///
/// Keep the returned guard alive until exit; dropping it flushes buffered
/// lines.
pub fn init_file_telemetry(
    path: &Path,
    verbose: bool,
) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)?;
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("Log path has no file name: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;

    info!(path = %path.display(), "Telemetry initialized (file)");
    Ok(guard)
}

/// Log file used by the terminal UI when none is configured.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("storyreel")
        .join("storyreel.log")
}
