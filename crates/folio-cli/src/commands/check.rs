use std::path::PathBuf;

use anyhow::Result;

use folio_core::{AppConfig, Section};

pub fn run(config: &AppConfig, file: Option<PathBuf>) -> Result<()> {
    let portfolio = super::load_portfolio(config, file)?;

    println!(
        "Portfolio for {} ({})",
        portfolio.info.name, portfolio.info.headline
    );
    println!("  titles:     {}", portfolio.titles.len());
    println!("  skills:     {} groups", portfolio.skills.len());
    println!("  projects:   {}", portfolio.projects.len());
    println!("  experience: {} entries", portfolio.experience.len());
    println!("  education:  {} entries", portfolio.education.len());
    println!("  links:      {}", portfolio.links.len());
    println!("  sections:   {}", Section::ALL.map(|s| s.id()).join(", "));
    println!("OK");
    Ok(())
}
