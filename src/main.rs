//! Catlist - category list and tag cloud fragments for static blogs.

mod build;
mod cli;
mod config;
mod data;
mod logger;
mod render;
mod tags;
mod utils;

use anyhow::Result;
use build::{build_fragments, render_fragment};
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use std::io::Write;
use std::path::Path;
use tags::TagRegistry;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Build { .. } => build_fragments(&config),
        Commands::Render { tag, .. } => render_fragment(&config, tag),
        Commands::Tags => list_tags(),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);

    // `tags` needs no site state, everything else does
    if !cli.is_tags() {
        config.validate()?;
    }

    Ok(config)
}

/// Print registered tag names with their render modes
fn list_tags() -> Result<()> {
    let registry = TagRegistry::builtin();
    let mut stdout = std::io::stdout().lock();

    for (name, renderer) in registry.iter() {
        writeln!(stdout, "{name}\t{}", renderer.mode().name())?;
    }

    Ok(())
}
