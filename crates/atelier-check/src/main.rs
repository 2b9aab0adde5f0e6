//! atelier-check: command-line diagnostics for installed themes.
//!
//! Validates every theme under the configured themes root, and shows how
//! the resolver and the inheritance chain treat a given request or path.
//! `validate` exits with status 1 when any theme fails a check.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use atelier_config::{load_config, load_config_from, AtelierConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::commands::Workspace;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("atelier-check: {e}");
            return ExitCode::from(2);
        }
    };
    init_logging(args.log_level.as_deref(), &config);

    let ws = Workspace::new(config);
    let mut stdout = std::io::stdout().lock();
    match commands::run(&ws, args.command, &mut stdout).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::from(2)
        }
    }
}

/// Config from `--config` or the platform default, with `--themes-dir`
/// applied on top.
fn load(args: &Args) -> atelier_common::Result<AtelierConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    if let Some(dir) = &args.themes_dir {
        config.themes.root = dir.clone();
    }
    Ok(config)
}

/// `--log-level` wins over `RUST_LOG`, which wins over `[logging] level`.
fn init_logging(flag: Option<&str>, config: &AtelierConfig) {
    let filter = match flag {
        Some(level) => EnvFilter::new(format!("atelier={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| format!("atelier={}", config.logging.level.as_str()).into()),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
