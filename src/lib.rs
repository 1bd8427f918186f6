//! dutyreport library root.
//! Exposes the CLI parser, the high-level run() function and the
//! computation pipeline used to build duty reports.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // `init` must work even when the existing config file is broken
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load(cli.config.as_deref())?,
    };

    if let Some(data) = &cli.data {
        cfg.data_file = data.to_string_lossy().to_string();
    }

    dispatch(&cli, &cfg)
}
