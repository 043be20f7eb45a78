//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::debug;
use uplink_core::Report;

use crate::cli::args::{Cli, Command};

mod upload;
mod validate;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Validate(args) => validate::run(&args),
        Command::Upload(args) => upload::run(args).await,
    }
}

/// Reads a report file, picking the parser from the file extension.
pub(crate) fn load_report(path: &Path) -> anyhow::Result<Report> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading report {}", path.display()))?;
    let report: Report = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing YAML report {}", path.display()))?,
        _ => serde_json::from_str(&raw)
            .with_context(|| format!("parsing JSON report {}", path.display()))?,
    };
    debug!(path = %path.display(), tests = report.tests.len(), "loaded report");
    Ok(report)
}
