//! Stage orchestrator: runs the export stages as child processes, in a
//! fixed order, advancing only while each one reports success.
//!
//! The only authoritative signal is the status record a stage prints on
//! stdout (see `report`). Exit status and stderr are advisory. The first
//! failed stage halts the chain; artifacts already written by earlier
//! stages are left in place.

pub mod report;

use std::io::Read;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::messages::{error, success};
use self::report::StageReport;

const WAIT_POLL: Duration = Duration::from_millis(50);

/// Lifecycle of one stage inside a chain run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

/// One independently runnable export stage.
pub struct StageJob {
    pub name: &'static str,
    pub program: PathBuf,
    pub args: Vec<String>,
    pub ok_message: String,
    pub fail_message: String,
}

/// Result of a whole chain run.
pub struct ChainOutcome {
    /// Final state of every stage, in chain order.
    pub states: Vec<(&'static str, StageState)>,
    /// Name of the stage that halted the chain, if any.
    pub failed: Option<&'static str>,
}

impl ChainOutcome {
    pub fn is_success(&self) -> bool {
        self.failed.is_none()
    }
}

/// Run the stages in order with fail-fast semantics.
///
/// Each stage blocks the orchestrator until it finishes or the timeout
/// elapses; a timeout counts as a failed status check. On the first
/// failure the remaining stages stay Pending and the chain stops.
pub fn run_chain(stages: Vec<StageJob>, timeout: Duration) -> ChainOutcome {
    let mut states: Vec<(&'static str, StageState)> =
        stages.iter().map(|s| (s.name, StageState::Pending)).collect();
    let mut failed = None;

    for (i, stage) in stages.iter().enumerate() {
        states[i].1 = StageState::Running;

        if run_stage(stage, timeout) {
            states[i].1 = StageState::Succeeded;
            success(&stage.ok_message);
        } else {
            states[i].1 = StageState::Failed;
            error(&stage.fail_message);
            failed = Some(stage.name);
            break;
        }
    }

    ChainOutcome { states, failed }
}

/// Dispatch one stage and decide success from its captured stdout.
fn run_stage(stage: &StageJob, timeout: Duration) -> bool {
    let child = Command::new(&stage.program)
        .args(&stage.args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(e) => {
            error(format!("stage '{}' did not start: {e}", stage.name));
            return false;
        }
    };

    let stdout_reader = capture_thread(child.stdout.take());
    let stderr_reader = capture_thread(child.stderr.take());

    let timed_out = !wait_with_timeout(&mut child, timeout);
    if timed_out {
        error(format!(
            "stage '{}' exceeded the {}s timeout",
            stage.name,
            timeout.as_secs()
        ));
        let _ = child.kill();
        let _ = child.wait();
    }

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();
    for line in stderr.lines() {
        // Advisory only; relayed for the operator.
        eprintln!("  [{}] {}", stage.name, line);
    }

    if timed_out {
        return false;
    }

    StageReport::scan(&stdout).is_some_and(|r| r.is_success())
}

/// Drain a child pipe on its own thread so the child never blocks on a
/// full pipe while we wait for it.
fn capture_thread<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}

/// True when the child exited within the timeout.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> bool {
    let started = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_)) => return true,
            Ok(None) => {
                if started.elapsed() >= timeout {
                    return false;
                }
                thread::sleep(WAIT_POLL);
            }
            Err(_) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::report::STATUS_TAG;

    fn scripted(name: &'static str, script: &str) -> StageJob {
        StageJob {
            name,
            program: PathBuf::from("sh"),
            args: vec!["-c".to_string(), script.to_string()],
            ok_message: format!("{name} completed"),
            fail_message: format!("{name} failed"),
        }
    }

    fn ok_script() -> String {
        format!("echo '{STATUS_TAG} {{\"outcome\":\"success\"}}'")
    }

    fn fail_script() -> String {
        format!("echo '{STATUS_TAG} {{\"outcome\":\"failure\",\"category\":\"query\"}}'; exit 1")
    }

    #[test]
    fn chain_advances_through_successful_stages() {
        let outcome = run_chain(
            vec![
                scripted("uno", &ok_script()),
                scripted("due", &ok_script()),
            ],
            Duration::from_secs(10),
        );
        assert!(outcome.is_success());
        assert_eq!(outcome.states[0].1, StageState::Succeeded);
        assert_eq!(outcome.states[1].1, StageState::Succeeded);
    }

    #[test]
    fn chain_halts_on_first_failure() {
        let outcome = run_chain(
            vec![
                scripted("uno", &ok_script()),
                scripted("due", &fail_script()),
                scripted("tre", &ok_script()),
            ],
            Duration::from_secs(10),
        );
        assert_eq!(outcome.failed, Some("due"));
        assert_eq!(outcome.states[0].1, StageState::Succeeded);
        assert_eq!(outcome.states[1].1, StageState::Failed);
        assert_eq!(outcome.states[2].1, StageState::Pending);
    }

    #[test]
    fn missing_record_is_failure_even_on_clean_exit() {
        let outcome = run_chain(
            vec![scripted("muto", "echo 'nothing to report'; exit 0")],
            Duration::from_secs(10),
        );
        assert_eq!(outcome.failed, Some("muto"));
    }

    #[test]
    fn success_record_wins_over_exit_status() {
        let script = format!("{}; exit 3", ok_script());
        let outcome = run_chain(vec![scripted("testardo", &script)], Duration::from_secs(10));
        assert!(outcome.is_success());
    }

    #[test]
    fn timeout_counts_as_failure() {
        let outcome = run_chain(
            vec![
                scripted("lento", "exec sleep 5"),
                scripted("dopo", &ok_script()),
            ],
            Duration::from_secs(1),
        );
        assert_eq!(outcome.failed, Some("lento"));
        assert_eq!(outcome.states[1].1, StageState::Pending);
    }
}
