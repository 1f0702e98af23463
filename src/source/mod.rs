//! Query-session seam over the relational sources.
//!
//! A session is acquired, used for exactly one query and dropped before
//! any file write begins. The transport behind it is external: either a
//! local SQLite mirror or a client process (`sqlcmd`, `ssh … mysql`).

pub mod client;
pub mod sqlite;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::value::SqlValue;

pub use client::ClientSession;
pub use sqlite::SqliteSession;

/// One query against an ordered-row source.
pub trait Session {
    fn execute(&mut self, sql: &str) -> AppResult<Vec<Vec<SqlValue>>>;
}

/// Open a session against the primary relational source.
///
/// A `--db` override routes everything to a local SQLite mirror; the
/// external source configuration is not consulted in that case.
pub fn open_primary(db_override: Option<&str>, cfg: &Config) -> AppResult<Box<dyn Session>> {
    match db_override {
        Some(path) => Ok(Box::new(SqliteSession::open(path)?)),
        None => Ok(Box::new(ClientSession::sqlcmd(&cfg.primary()?))),
    }
}

/// Open a session against the remote tabular source.
pub fn open_remote(db_override: Option<&str>, cfg: &Config) -> AppResult<Box<dyn Session>> {
    match db_override {
        Some(path) => Ok(Box::new(SqliteSession::open(path)?)),
        None => Ok(Box::new(ClientSession::ssh_mysql(&cfg.remote()?))),
    }
}
