//! Tracing setup. The terminal owns stdout and stderr, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `TERMFOLIO_LOG=debug`.
pub const LOG_ENV: &str = "TERMFOLIO_LOG";

const DEFAULT_FILTER: &str = "termfolio_core=info,termfolio_tui=info";

/// Installs the global subscriber. Logging is off unless `TERMFOLIO_LOG` is
/// set, in which case events are appended to `termfolio.log` in `log_dir`.
pub fn init(log_dir: &Path) -> Result<()> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        tracing_subscriber::registry()
            .with(EnvFilter::new("off"))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .init();
        return Ok(());
    };

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    let path = log_dir.join("termfolio.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}
