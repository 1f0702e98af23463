//! orarisync library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod audit;
pub mod chain;
pub mod cli;
pub mod config;
pub mod delta;
pub mod errors;
pub mod export;
pub mod models;
pub mod prior;
pub mod source;
pub mod sql;
pub mod stages;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Dipendenti => cli::commands::dipendenti::handle(cli, cfg),
        Commands::NuoviUtenti => cli::commands::nuovi_utenti::handle(cli, cfg),
        Commands::GestioneUtenti => cli::commands::gestione_utenti::handle(cli, cfg),
        Commands::Run => cli::commands::run::handle(cli, cfg),
        Commands::Check => cli::commands::check::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // .env from the working directory, if present; real environment wins.
    let _ = dotenvy::dotenv();

    let mut cfg = Config::from_env()?;

    // Command-line override for the artifact base directory.
    if let Some(base_dir) = &cli.base_dir {
        cfg.base_dir = base_dir.into();
    }

    dispatch(&cli, &cfg)
}
