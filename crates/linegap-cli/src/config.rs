use std::path::Path;

use anyhow::Context;
use linegap_diff::DiffConfig;

use crate::cli::Cli;

/// Resolve the diff policy: defaults, then the TOML file, then flag overrides.
pub fn resolve(cli: &Cli) -> anyhow::Result<DiffConfig> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => DiffConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config.similarity_threshold = threshold;
    }
    if let Some(lookahead) = cli.lookahead {
        config.lookahead = lookahead;
    }
    config.validate().context("invalid diff policy")?;
    Ok(config)
}

fn load(path: &Path) -> anyhow::Result<DiffConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded diff policy");
    Ok(config)
}
