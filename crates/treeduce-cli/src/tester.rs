//! Subprocess oracle: run a user command against saved candidates.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use treeduce_lib::{Oracle, Outcome, TestId};

/// Oracle that writes each candidate to a deterministic per-id path and
/// runs a user command on it.
///
/// The path pattern contains a single `%s`, replaced by the hierarchical
/// test id; ids are unique per candidate, so parallel evaluations never
/// collide on disk. The command gets the candidate path as its only
/// argument; exit code 0 means FAIL (still interesting). A candidate whose
/// evaluation errors out is logged and reported as PASS.
pub struct CommandTester {
    command: String,
    pattern: String,
}

impl CommandTester {
    pub fn new(command: String, pattern: String) -> Self {
        Self { command, pattern }
    }

    fn evaluate(&self, candidate: &str, id: &TestId) -> io::Result<Outcome> {
        let path = PathBuf::from(self.pattern.replace("%s", &id.to_string()));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, candidate)?;

        let status = Command::new(&self.command)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        Ok(if status.success() {
            Outcome::Fail
        } else {
            Outcome::Pass
        })
    }
}

impl Oracle for CommandTester {
    fn test(&self, candidate: &str, id: &TestId) -> Outcome {
        match self.evaluate(candidate, id) {
            Ok(outcome) => {
                tracing::debug!("Test {id}: {outcome:?}");
                outcome
            }
            Err(err) => {
                tracing::warn!("Test {id} did not run cleanly ({err}); treating as PASS");
                Outcome::Pass
            }
        }
    }
}
