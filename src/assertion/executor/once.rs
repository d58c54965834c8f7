//! Single execution of a command through the shell

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use super::{Execution, Executor};
use crate::assertion::outcome::{Outcome, RunOutcome};
use crate::error::ExecError;

/// Shell used to interpret the command when none is configured
pub const DEFAULT_SHELL: &str = "bash";

/// Runs the command exactly once via `<shell> -c <command>`
#[derive(Debug, Clone)]
pub struct OnceExecutor {
    command: String,
    shell: String,
}

impl OnceExecutor {
    pub fn new(command: impl Into<String>) -> Self {
        Self::with_shell(command, DEFAULT_SHELL)
    }

    pub fn with_shell(command: impl Into<String>, shell: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            shell: shell.into(),
        }
    }
}

impl Executor for OnceExecutor {
    fn execute(&mut self) -> Result<Execution, ExecError> {
        let command = self.command.as_str();
        let start = Instant::now();

        let mut child = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::SpawnFailed {
                command: command.to_string(),
                source,
            })?;

        let stdout_pipe = child
            .stdout
            .take()
            .ok_or_else(|| ExecError::PipeUnavailable {
                command: command.to_string(),
                stream: "stdout",
            })?;
        let stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| ExecError::PipeUnavailable {
                command: command.to_string(),
                stream: "stderr",
            })?;

        // Drain both pipes concurrently; reading one to EOF before the other
        // deadlocks once the child fills the other pipe's buffer.
        let (stdout_tx, stdout_rx) = mpsc::channel();
        let (stderr_tx, stderr_rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = stdout_tx.send(read_stream(stdout_pipe));
        });
        thread::spawn(move || {
            let _ = stderr_tx.send(read_stream(stderr_pipe));
        });

        let stdout = collect_stream(&stdout_rx, command, "stdout");
        let stderr = collect_stream(&stderr_rx, command, "stderr");

        let status = child.wait().map_err(|source| ExecError::WaitFailed {
            command: command.to_string(),
            source,
        })?;
        let duration = start.elapsed();

        // Report pipe problems only after the child has been reaped
        let stdout = stdout?;
        let stderr = stderr?;

        let outcome = Outcome::from_status(status);
        tracing::debug!(
            command,
            duration_ms = duration.as_millis() as u64,
            %outcome,
            "command attempt finished"
        );

        Ok(Execution {
            duration,
            outcome: RunOutcome::Single(outcome),
            stdout: trim_trailing_newline(stdout),
            stderr: trim_trailing_newline(stderr),
        })
    }
}

fn read_stream<R: Read>(mut stream: R) -> std::io::Result<String> {
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn collect_stream(
    rx: &mpsc::Receiver<std::io::Result<String>>,
    command: &str,
    stream: &'static str,
) -> Result<String, ExecError> {
    match rx.recv() {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(source)) => Err(ExecError::ReadFailed {
            command: command.to_string(),
            stream,
            source,
        }),
        Err(_) => Err(ExecError::ReaderLost {
            command: command.to_string(),
            stream,
        }),
    }
}

/// Remove exactly one trailing `\n`, leaving any earlier blank lines intact
fn trim_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}
