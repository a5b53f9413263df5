use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use ekg_icon::config::Config;
use ekg_icon::driver::generate_all;

#[derive(Parser)]
#[command(name = "generate-icon")]
#[command(about = "Generate the EKG heartbeat app icon for Android and iOS", long_about = None)]
struct Cli {
    /// Project root containing the android/ and ios/ directories
    #[arg(short, long, default_value = ".")]
    base_dir: PathBuf,

    /// YAML file overriding the built-in size tables
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let base_dir = cli
        .base_dir
        .canonicalize()
        .with_context(|| format!("Base directory not found: {}", cli.base_dir.display()))?;

    generate_all(&base_dir, &config)?;

    Ok(())
}
