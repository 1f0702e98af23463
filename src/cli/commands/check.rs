use crate::audit;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

const MAX_REPORTED: usize = 200;

pub fn handle(_cli: &Cli, cfg: &Config) -> AppResult<()> {
    let issues = audit::scan_roster_artifacts(&cfg.base_dir)?;

    if issues.is_empty() {
        success("no issues found: every NOME column is normalized");
        return Ok(());
    }

    error(format!("{} normalization issues found:", issues.len()));
    for issue in issues.iter().take(MAX_REPORTED) {
        warning(issue.describe());
    }
    if issues.len() > MAX_REPORTED {
        warning(format!("...and {} more", issues.len() - MAX_REPORTED));
    }
    std::process::exit(1);
}
