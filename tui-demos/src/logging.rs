use anyhow::{Context, Result};
use std::{fs::File, path::Path, sync::Mutex};
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to `path`. Stdout belongs to the terminal UI, so
/// without a log file nothing is installed and events are dropped.
pub fn init(path: Option<&Path>, default_level: &str) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("tui_demos={default_level},weather_core={default_level}")))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install logger: {err}"))?;

    Ok(())
}
