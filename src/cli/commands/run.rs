use std::time::Duration;

use crate::chain::{self, StageJob};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// The fixed stage order of the export chain.
const STAGE_SUBCOMMANDS: [&str; 3] = ["dipendenti", "nuovi-utenti", "gestione-utenti"];

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Configuration problems are fatal before the chain starts; with a
    // mirror override the external sources are never touched.
    if cli.db.is_none() {
        cfg.primary()?;
        cfg.remote()?;
    }

    let exe = std::env::current_exe()?;
    let mut shared_args = vec![
        "--base-dir".to_string(),
        cfg.base_dir.display().to_string(),
    ];
    if let Some(db) = &cli.db {
        shared_args.push("--db".to_string());
        shared_args.push(db.clone());
    }

    let stages = STAGE_SUBCOMMANDS
        .into_iter()
        .map(|sub| {
            let mut args = vec![sub.to_string()];
            args.extend(shared_args.iter().cloned());
            StageJob {
                name: sub,
                program: exe.clone(),
                args,
                ok_message: format!("Export '{sub}' completed successfully"),
                fail_message: format!("Export '{sub}' failed, chain halted"),
            }
        })
        .collect();

    info(format!(
        "starting export chain ({} stages, {}s timeout each)",
        STAGE_SUBCOMMANDS.len(),
        cfg.stage_timeout_secs
    ));

    let outcome = chain::run_chain(stages, Duration::from_secs(cfg.stage_timeout_secs));
    if outcome.is_success() {
        success("Export chain completed");
        Ok(())
    } else {
        // Stage-level messages were already printed; the exit code is
        // for the caller.
        std::process::exit(1);
    }
}
