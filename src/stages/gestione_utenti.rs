//! Stage 3: incremental accounts export.
//!
//! Reconciles the current roster against the previous run: personnel
//! codes found in the prior roster dump form the whitelist, codes from
//! the pre-seed CSV form the exclude set, and the combined predicate
//! scopes the accounts query to genuinely new accounts.

use crate::config::Config;
use crate::delta;
use crate::errors::AppResult;
use crate::export::{self, Dataset};
use crate::models::account::{ACCOUNT_COLUMNS, AccountRecord};
use crate::prior;
use crate::source;
use crate::stages::{ACCOUNTS_STEM, PRESEED_STEM, ROSTER_STEM};
use crate::ui::messages::info;

pub const ACCOUNTS_QUERY_BASE: &str = "\
SELECT
    Codice AS old_id,
    Nome AS nome,
    Cognome AS cognome,
    RifCommPref AS negozio
FROM TK_TabDipendenti";

pub const ACCOUNTS_SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS gestione_utenti (
  id int(11) DEFAULT NULL,
  old_id varchar(20) DEFAULT NULL,
  nome varchar(200) DEFAULT NULL,
  username varchar(200) DEFAULT NULL,
  VecchiaPasswd varchar(50) DEFAULT NULL,
  NuovaPasswd varchar(50) DEFAULT NULL,
  ruolo varchar(50) DEFAULT NULL,
  negozio varchar(10) DEFAULT NULL,
  AbilitaInsOrari int(11) DEFAULT NULL
);";

/// Assemble the accounts query for this run from the prior artifacts.
pub fn build_query(cfg: &Config) -> String {
    let whitelist = prior::roster_dump_codes(&export::dump_path(&cfg.base_dir, ROSTER_STEM));
    let exclude = prior::prior_export_codes(&export::csv_path(&cfg.base_dir, PRESEED_STEM));

    match delta::build_predicate(whitelist.as_ref(), &exclude) {
        Some(predicate) => format!("{ACCOUNTS_QUERY_BASE}\n{predicate}"),
        None => ACCOUNTS_QUERY_BASE.to_string(),
    }
}

pub fn run(db_override: Option<&str>, cfg: &Config) -> AppResult<()> {
    let query = build_query(cfg);

    let rows = {
        let mut session = source::open_primary(db_override, cfg)?;
        session.execute(&query)?
    };
    info(format!("accounts query returned {} rows", rows.len()));

    let rows: Vec<_> = rows
        .into_iter()
        .map(|row| AccountRecord::from_row(row).into_values())
        .collect();

    let dataset = Dataset {
        table: "gestione_utenti",
        schema: ACCOUNTS_SCHEMA,
        columns: &ACCOUNT_COLUMNS,
        rows,
    };
    export::export_pair(&cfg.base_dir, ACCOUNTS_STEM, &dataset)?;
    Ok(())
}
