use clap::{Parser, Subcommand};

/// Command-line interface definition for orarisync
/// CLI application to export roster and account data as SQL dump + CSV
#[derive(Parser)]
#[command(
    name = "orarisync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Exports roster and account data into reproducible SQL dump and CSV artifacts",
    long_about = None
)]
pub struct Cli {
    /// Base directory for the dump/ and csv/ artifact trees
    #[arg(global = true, long = "base-dir")]
    pub base_dir: Option<String>,

    /// Route queries to a local SQLite mirror instead of the configured
    /// external source (useful for tests or offline runs)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export the full roster (stage 1)
    Dipendenti,

    /// Fetch the remote pre-seed account list (stage 2)
    #[command(name = "nuovi-utenti")]
    NuoviUtenti,

    /// Export the new accounts delta (stage 3)
    #[command(name = "gestione-utenti")]
    GestioneUtenti,

    /// Run the three export stages in order, halting on the first failure
    Run,

    /// Audit produced roster artifacts for name normalization
    Check,
}
