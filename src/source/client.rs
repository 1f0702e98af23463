//! Session backed by an external client process.
//!
//! The primary source is reached through `sqlcmd`; the remote tabular
//! source through `ssh` running `mysql -B -N` on the far end. Both emit
//! one record per line, tab-separated, which is parsed into typed cells.

use std::process::Command;

use crate::config::{PrimaryConfig, RemoteConfig};
use crate::errors::{AppError, AppResult};
use crate::models::value::SqlValue;
use crate::source::Session;

enum QueryStyle {
    /// Query goes on the command line as `-Q <sql>`.
    SqlcmdFlag,
    /// Query is embedded in the remote mysql invocation.
    RemoteMysql {
        db_user: String,
        db_password: String,
        db_name: String,
    },
}

pub struct ClientSession {
    program: String,
    args: Vec<String>,
    style: QueryStyle,
}

impl ClientSession {
    /// `sqlcmd` against the primary source: headerless, tab-separated,
    /// trailing whitespace trimmed. Without credentials a trusted
    /// connection is attempted.
    pub fn sqlcmd(cfg: &PrimaryConfig) -> Self {
        let mut args = vec![
            "-S".to_string(),
            format!("{},{}", cfg.host, cfg.port),
            "-h".to_string(),
            "-1".to_string(),
            "-W".to_string(),
            "-s".to_string(),
            "\t".to_string(),
        ];
        if let Some(db) = &cfg.database {
            args.push("-d".to_string());
            args.push(db.clone());
        }
        match (&cfg.user, &cfg.pass) {
            (Some(user), Some(pass)) => {
                args.push("-U".to_string());
                args.push(user.clone());
                args.push("-P".to_string());
                args.push(pass.clone());
            }
            _ => args.push("-E".to_string()),
        }

        ClientSession {
            program: "sqlcmd".to_string(),
            args,
            style: QueryStyle::SqlcmdFlag,
        }
    }

    /// `ssh` to the remote host, running mysql in batch mode there.
    pub fn ssh_mysql(cfg: &RemoteConfig) -> Self {
        let args = vec![
            "-o".to_string(),
            "BatchMode=yes".to_string(),
            "-o".to_string(),
            "ConnectTimeout=15".to_string(),
            "-p".to_string(),
            cfg.ssh_port.clone(),
            format!("{}@{}", cfg.ssh_user, cfg.ssh_host),
        ];

        ClientSession {
            program: "ssh".to_string(),
            args,
            style: QueryStyle::RemoteMysql {
                db_user: cfg.db_user.clone(),
                db_password: cfg.db_password.clone(),
                db_name: cfg.db_name.clone(),
            },
        }
    }
}

impl Session for ClientSession {
    fn execute(&mut self, sql: &str) -> AppResult<Vec<Vec<SqlValue>>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        match &self.style {
            QueryStyle::SqlcmdFlag => {
                cmd.arg("-Q").arg(sql);
            }
            QueryStyle::RemoteMysql {
                db_user,
                db_password,
                db_name,
            } => {
                cmd.arg(format!(
                    "mysql -u{} -p{} -D {} -B -N -e {}",
                    sh_quote(db_user),
                    sh_quote(db_password),
                    sh_quote(db_name),
                    sh_quote(sql)
                ));
            }
        }

        let output = cmd
            .output()
            .map_err(|e| AppError::Connection(format!("cannot start {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Query(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(parse_rows(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse headerless tab-separated client output into typed rows.
pub fn parse_rows(raw: &str) -> Vec<Vec<SqlValue>> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(SqlValue::from_cell).collect())
        .collect()
}

/// Single-quote a value for the remote shell command line.
fn sh_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
