pub mod check;
pub mod init;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use folio_core::{AppConfig, Portfolio};

/// Resolve the portfolio content: explicit path, then the configured path,
/// then the default path, then the built-in sample.
pub fn load_portfolio(config: &AppConfig, file: Option<PathBuf>) -> Result<Portfolio> {
    if let Some(path) = file.or_else(|| config.portfolio_path()) {
        let portfolio = Portfolio::load(&path)
            .with_context(|| format!("failed to load portfolio from {}", path.display()))?;
        info!(path = %path.display(), "loaded portfolio");
        return Ok(portfolio);
    }

    let default_path = AppConfig::default_portfolio_path();
    if default_path.exists() {
        let portfolio = Portfolio::load(&default_path).with_context(|| {
            format!("failed to load portfolio from {}", default_path.display())
        })?;
        info!(path = %default_path.display(), "loaded portfolio");
        return Ok(portfolio);
    }

    info!("no portfolio file found, using the built-in sample");
    Ok(Portfolio::sample())
}
