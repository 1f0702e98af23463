use crate::cli::commands::finish_stage;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::stages;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    finish_stage(
        "gestione-utenti",
        stages::gestione_utenti::run(cli.db.as_deref(), cfg),
    )
}
