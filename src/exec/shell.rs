// src/exec/shell.rs

use std::io::Write;
use std::process::Stdio;
use std::time::Duration;

use anyhow::Context;
use tokio::process::Command;
use tracing::{info, warn};

use crate::action::{Action, CallArgs};
use crate::errors::Result;
use crate::exec::backend::{ExecuteFuture, Executor};

/// Status returned when a child is killed for exceeding its timeout.
pub const TIMEOUT_STATUS: i32 = 124;

/// Live executor: spawns the resolved command and waits for it.
///
/// The program is executed directly, not through a shell, so templates are
/// never re-split or re-interpreted. The child inherits this process's
/// stdin/stdout/stderr; nothing it prints goes through the output sink.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    timeout: Option<Duration>,
    propagate_status: bool,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self {
            timeout: None,
            propagate_status: true,
        }
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill the child and return [`TIMEOUT_STATUS`] if it runs longer than
    /// `timeout`. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Always report 0 once the child has exited, whatever its exit code.
    pub fn discard_exit_status(mut self) -> Self {
        self.propagate_status = false;
        self
    }

    async fn resolve_and_run(
        &self,
        action: &Action,
        args: &CallArgs,
        out: &mut (dyn Write + Send),
    ) -> Result<i32> {
        // Resolve fully before spawning anything.
        let exe = action.resolve(args)?;
        // Keep ordering sane if the sink is our own stdout.
        out.flush()?;
        Ok(self.run(exe).await?)
    }

    async fn run(&self, exe: Vec<String>) -> anyhow::Result<i32> {
        let Some((program, argv)) = exe.split_first() else {
            anyhow::bail!("resolved command is empty");
        };

        info!(program = %program, args = ?argv, "starting action process");

        let mut child = Command::new(program)
            .args(argv)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("spawning process '{program}'"))?;

        let status = match self.timeout {
            Some(limit) => {
                let waited = tokio::time::timeout(limit, child.wait()).await;
                match waited {
                    Ok(status) => status,
                    Err(_) => {
                        warn!(program = %program, ?limit, "action timed out; killing process");
                        if let Err(e) = child.kill().await {
                            warn!(program = %program, error = %e, "failed to kill timed out process");
                        }
                        return Ok(TIMEOUT_STATUS);
                    }
                }
            }
            None => child.wait().await,
        }
        .with_context(|| format!("waiting for process '{program}'"))?;

        // Killed by a signal: no code, report generic failure.
        let code = status.code().unwrap_or(1);
        info!(
            program = %program,
            exit_code = code,
            success = status.success(),
            "action process exited"
        );
        if !status.success() {
            warn!(program = %program, exit_code = code, "action exited unsuccessfully");
        }

        Ok(if self.propagate_status { code } else { 0 })
    }
}

impl Executor for ShellExecutor {
    fn execute<'a>(
        &'a self,
        action: &'a Action,
        args: &'a CallArgs,
        out: &'a mut (dyn Write + Send),
    ) -> ExecuteFuture<'a> {
        Box::pin(self.resolve_and_run(action, args, out))
    }
}
