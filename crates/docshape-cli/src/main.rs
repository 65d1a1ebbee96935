//! Docshape CLI
//!
//! Render search result documents as JSON, projected JSON, CSV or XML.

use anyhow::Result;
use clap::Parser;
use docshape_core::{Config, DocShapeError};
use std::path::Path;

mod app;
mod commands;

use app::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let result = match cli.command {
        Commands::Render(args) => load_config(cli.config.as_deref())
            .and_then(|config| commands::render::run(args, &config)),
        Commands::Flatten(args) => commands::flatten::run(args),
        Commands::Project(args) => commands::project::run(args),
        Commands::Get(args) => commands::get::run(args),
    };

    if let Err(e) = &result {
        if let Some(err) = e.downcast_ref::<DocShapeError>() {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }

    result
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
