//! Output of the computed dashboard.
//!
//! Supports pretty-printing and JSON logging of the summaries, and writing
//! the rendered page to disk.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analyzers::analyzer::Dashboard;
use std::fs;
use std::path::Path;

/// Logs the dashboard using Rust's debug pretty-print format.
pub fn print_pretty(dashboard: &Dashboard) {
    debug!("{:#?}", dashboard);
}

/// Logs the dashboard as pretty-printed JSON.
pub fn print_json(dashboard: &Dashboard) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(dashboard)?);
    Ok(())
}

/// Writes the rendered page to `path`, replacing any previous page.
///
/// Creates missing parent directories.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    fs::write(path, html).with_context(|| format!("writing page {}", path.display()))?;
    debug!(path = %path.display(), bytes = html.len(), "Page written");

    Ok(())
}
