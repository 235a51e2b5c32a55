use std::path::PathBuf;

use anyhow::{bail, Result};

use folio_core::{AppConfig, Portfolio};

pub fn run(config: &AppConfig, path: Option<PathBuf>, force: bool) -> Result<()> {
    let dest = path
        .or_else(|| config.portfolio_path())
        .unwrap_or_else(AppConfig::default_portfolio_path);

    if dest.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            dest.display()
        );
    }

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&dest, Portfolio::sample().to_toml()?)?;

    println!("Wrote starter portfolio to {}", dest.display());
    println!("Edit it, then run `folio` to view.");
    Ok(())
}
