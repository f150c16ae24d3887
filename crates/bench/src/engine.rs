//! Hand-off to the test-execution engine.
//!
//! The engine compiles, elaborates and runs the benches; all this crate
//! gives it is a [`TestPlan`]. How results are reported is up to the engine.

use std::io::{self, Write};
use std::process::{Child, Command, Stdio};

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::plan::TestPlan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub success: bool,
    /// Exit code, when the engine reports one.
    pub code: Option<i32>,
}

pub trait Engine {
    fn run(&mut self, plan: &TestPlan) -> Result<RunOutcome>;
}

/// Runs an external program and writes the plan, as JSON, to its stdin.
#[derive(Debug, Clone)]
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandEngine {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn error(&self, source: io::Error) -> Error {
        Error::Engine {
            program: self.program.clone(),
            source,
        }
    }
}

impl Engine for CommandEngine {
    fn run(&mut self, plan: &TestPlan) -> Result<RunOutcome> {
        let json = plan.to_json()?;
        info!(program = %self.program, bindings = plan.bindings.len(), "starting engine");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| self.error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = stdin.write_all(json.as_bytes());
            match written {
                // The engine may exit without reading the plan.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                Err(e) => {
                    drop(stdin);
                    reap(&mut child);
                    return Err(self.error(e));
                }
                Ok(()) => {}
            }
        }

        let status = child.wait().map_err(|e| self.error(e))?;
        info!(program = %self.program, %status, "engine finished");
        Ok(RunOutcome {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// Stops an engine whose plan could not be delivered and collects its exit
/// status.
fn reap(child: &mut Child) {
    if let Err(error) = child.kill() {
        warn!(%error, "failed to stop engine");
    }
    if let Err(error) = child.wait() {
        warn!(%error, "failed to wait for engine");
    }
}
