use std::io;
use std::process::Command;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
    /// Set when a dry run logged the command instead of running it.
    pub dry_run: bool,
}

impl CommandOutput {
    pub fn skipped() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    #[cfg(test)]
    pub fn failed(stderr: impl Into<String>, status: i32) -> Self {
        Self {
            stderr: stderr.into(),
            status,
            ..Self::default()
        }
    }

    /// True when the command ran and exited with status 0.
    pub fn ran_ok(&self) -> bool {
        !self.dry_run && self.success()
    }

    pub fn success(&self) -> bool {
        self.status == 0
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("could not parse `{command}`: {source}")]
    Parse {
        command: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Runs a fixed command line and reports what it printed.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, CommandError>;
}

pub(crate) fn split_command(command: &str) -> Result<Vec<String>, CommandError> {
    let parts: Vec<String> = shell_words::split(command)
        .map_err(|source| CommandError::Parse {
            command: command.to_string(),
            source,
        })?
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(parts)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner {
    dry_run: bool,
}

impl ShellRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<CommandOutput, CommandError> {
        let parts = split_command(command)?;
        if self.dry_run {
            info!(command, "dry run, not executing");
            return Ok(CommandOutput::skipped());
        }
        let (program, args) = parts.split_first().ok_or(CommandError::Empty)?;
        debug!(command, "running");
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            // Killed by a signal: no exit code, treat as a generic failure.
            status: output.status.code().unwrap_or(-1),
            dry_run: false,
        })
    }
}

/// Runs `command` and logs a warning when it fails. Failures are never retried.
pub fn run_logged(runner: &dyn CommandRunner, label: &str, command: &str) -> Option<CommandOutput> {
    match runner.run(command) {
        Ok(output) => {
            if !output.success() {
                warn!(
                    "error from {label}: {} {} {}",
                    output.stdout.trim_end(),
                    output.stderr.trim_end(),
                    output.status
                );
            }
            Some(output)
        }
        Err(error) => {
            warn!("error from {label}: {error}");
            None
        }
    }
}
