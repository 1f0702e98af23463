//! Process configuration, built once at startup from the environment
//! (after an optional `.env` load) and passed into the stages.
//!
//! Validation is typed: a missing required variable surfaces as
//! `AppError::Config`, never as an ad hoc early exit.

use std::env;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

const DEFAULT_STAGE_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory holding the `dump/` and `csv/` artifact trees.
    pub base_dir: PathBuf,
    /// Per-stage timeout applied by the orchestrator, in seconds.
    pub stage_timeout_secs: u64,

    mssql_host: Option<String>,
    mssql_port: Option<String>,
    mssql_user: Option<String>,
    mssql_pass: Option<String>,
    mssql_db: Option<String>,

    ssh_host: Option<String>,
    ssh_port: String,
    ssh_user: Option<String>,
    db_user: Option<String>,
    db_password: Option<String>,
    db_name: Option<String>,
}

/// Connection parameters for the primary relational source.
#[derive(Debug, Clone)]
pub struct PrimaryConfig {
    pub host: String,
    pub port: String,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub database: Option<String>,
}

/// Parameters for the remote tabular source reached over SSH.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub ssh_host: String,
    pub ssh_port: String,
    pub ssh_user: String,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
}

impl Config {
    /// Read the whole configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        let stage_timeout_secs = match env::var("ORARI_STAGE_TIMEOUT") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::Config(format!("ORARI_STAGE_TIMEOUT is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_STAGE_TIMEOUT_SECS,
        };

        Ok(Config {
            base_dir: PathBuf::from(var("ORARI_BASE_DIR").unwrap_or_else(|| ".".to_string())),
            stage_timeout_secs,
            mssql_host: var("MSSQL_HOST"),
            mssql_port: var("MSSQL_PORT"),
            mssql_user: var("MSSQL_USER"),
            mssql_pass: var("MSSQL_PASS"),
            mssql_db: var("MSSQL_DB"),
            ssh_host: var("SSH_HOST"),
            ssh_port: var("SSH_PORT").unwrap_or_else(|| "22".to_string()),
            ssh_user: var("SSH_USER"),
            db_user: var("DB_USER"),
            db_password: var("DB_PASSWORD"),
            db_name: var("DB_NAME"),
        })
    }

    /// Validated primary-source parameters. Host and port are required;
    /// without credentials a trusted connection is attempted.
    pub fn primary(&self) -> AppResult<PrimaryConfig> {
        let host = self.mssql_host.clone().ok_or_else(|| missing("MSSQL_HOST"))?;
        let port = self.mssql_port.clone().ok_or_else(|| missing("MSSQL_PORT"))?;
        Ok(PrimaryConfig {
            host,
            port,
            user: self.mssql_user.clone(),
            pass: self.mssql_pass.clone(),
            database: self.mssql_db.clone(),
        })
    }

    /// Validated remote-source parameters.
    pub fn remote(&self) -> AppResult<RemoteConfig> {
        Ok(RemoteConfig {
            ssh_host: self.ssh_host.clone().ok_or_else(|| missing("SSH_HOST"))?,
            ssh_port: self.ssh_port.clone(),
            ssh_user: self.ssh_user.clone().ok_or_else(|| missing("SSH_USER"))?,
            db_user: self.db_user.clone().ok_or_else(|| missing("DB_USER"))?,
            db_password: self
                .db_password
                .clone()
                .ok_or_else(|| missing("DB_PASSWORD"))?,
            db_name: self.db_name.clone().ok_or_else(|| missing("DB_NAME"))?,
        })
    }
}

fn missing(name: &str) -> AppError {
    AppError::Config(format!("required variable {name} is not set"))
}

/// Empty variables count as unset, same as a missing `.env` entry.
fn var(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var driven tests mutate process state; keep them in one place
    // and restore what they touch.

    #[test]
    fn primary_requires_host_and_port() {
        let cfg = Config {
            base_dir: PathBuf::from("."),
            stage_timeout_secs: 600,
            mssql_host: Some("db.local".into()),
            mssql_port: None,
            mssql_user: None,
            mssql_pass: None,
            mssql_db: None,
            ssh_host: None,
            ssh_port: "22".into(),
            ssh_user: None,
            db_user: None,
            db_password: None,
            db_name: None,
        };
        let err = cfg.primary().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("MSSQL_PORT"));
    }

    #[test]
    fn remote_requires_the_full_set() {
        let cfg = Config {
            base_dir: PathBuf::from("."),
            stage_timeout_secs: 600,
            mssql_host: None,
            mssql_port: None,
            mssql_user: None,
            mssql_pass: None,
            mssql_db: None,
            ssh_host: Some("remote.local".into()),
            ssh_port: "22".into(),
            ssh_user: Some("deploy".into()),
            db_user: Some("orari".into()),
            db_password: Some("segreta".into()),
            db_name: None,
        };
        let err = cfg.remote().unwrap_err();
        assert!(err.to_string().contains("DB_NAME"));
    }
}
