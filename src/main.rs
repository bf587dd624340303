//! `seo_toolbox` binary: loads `.env`, parses flags, starts logging, serves.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use seo_toolbox::initialization::init_logger_with;
use seo_toolbox::{run_server, Config};

/// Loads the first `.env` found in the working directory or beside the binary.
fn load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }
    let beside_exe = std::env::current_exe().ok()?.parent()?.join(".env");
    dotenvy::from_path(&beside_exe).ok()?;
    Some(beside_exe)
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_file = load_dotenv();
    let config = Config::parse();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;
    if let Some(path) = env_file {
        log::debug!("Loaded environment from {}", path.display());
    }

    if let Err(e) = run_server(config).await {
        log::error!("{e:#}");
        eprintln!("seo_toolbox error: {e:#}");
        process::exit(1);
    }
    Ok(())
}
