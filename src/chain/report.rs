//! The status record a stage prints on stdout when it finishes.
//!
//! This is the whole contract between a stage process and the
//! orchestrator: one tagged JSON line. Every stage-internal failure,
//! whatever its kind, collapses to this record — detail stays on stderr
//! for the operator and never crosses the boundary.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Fixed tag opening the status line. Chosen so it cannot plausibly
/// occur in exported data or ordinary log text.
pub const STATUS_TAG: &str = "@@ORARI-STAGE@@";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// Failure taxonomy carried by the record, for operator visibility only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Configuration,
    Connection,
    Query,
    Io,
    Export,
    Other,
}

impl From<&AppError> for ErrorCategory {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::Config(_) => ErrorCategory::Configuration,
            AppError::Connection(_) => ErrorCategory::Connection,
            AppError::Query(_) | AppError::Db(_) => ErrorCategory::Query,
            AppError::Io(_) => ErrorCategory::Io,
            AppError::Export(_) => ErrorCategory::Export,
            AppError::Other(_) => ErrorCategory::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageReport {
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ErrorCategory>,
}

impl StageReport {
    pub fn success() -> Self {
        StageReport {
            outcome: Outcome::Success,
            category: None,
        }
    }

    pub fn failure(err: &AppError) -> Self {
        StageReport {
            outcome: Outcome::Failure,
            category: Some(ErrorCategory::from(err)),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }

    /// Print the record on stdout as the single tagged line.
    pub fn emit(&self) {
        // Serialization of this struct cannot fail; fall back to a bare
        // failure payload just in case.
        let payload = serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"outcome":"failure"}"#.to_string());
        println!("{STATUS_TAG} {payload}");
    }

    /// Find the status record in a captured stdout transcript.
    ///
    /// Lines without the tag, or with an unparseable payload, are
    /// ignored; the first well-formed record wins.
    pub fn scan(output: &str) -> Option<StageReport> {
        for line in output.lines() {
            let Some(rest) = line.trim().strip_prefix(STATUS_TAG) else {
                continue;
            };
            if let Ok(report) = serde_json::from_str::<StageReport>(rest.trim()) {
                return Some(report);
            }
        }
        None
    }
}
