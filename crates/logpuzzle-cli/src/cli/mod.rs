//! CLI for the logpuzzle scanner/fetcher.

mod commands;

use anyhow::Result;
use clap::Parser;
use logpuzzle_core::config;
use logpuzzle_core::scan;
use std::path::PathBuf;

use commands::{run_fetch, run_print};

/// Scan an Apache access log for puzzle image URLs; print them, or download
/// them with a generated HTML viewer.
#[derive(Debug, Parser)]
#[command(name = "logpuzzle")]
#[command(about = "Extract, order, and fetch puzzle image URLs from an Apache log", long_about = None)]
pub struct Cli {
    /// Apache logfile to extract URLs from.
    pub logfile: PathBuf,

    /// Destination directory for downloaded images. Omit to print the sorted
    /// URLs to stdout instead.
    #[arg(short = 'd', long, value_name = "DIR")]
    pub todir: Option<PathBuf>,
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let urls = scan::read_urls(&cli.logfile)?;
    tracing::info!("{} puzzle urls from {}", urls.len(), cli.logfile.display());

    match cli.todir {
        Some(dir) => run_fetch(&urls, &dir, &cfg)?,
        None => run_print(&urls),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
