//! Running external programs and capturing what they report.
//!
//! Every invocation yields a [`ToolOutput`] holding the exit status and both
//! captured streams. Whether a failed status aborts the run is the caller's
//! call; [`ToolOutput::check`] turns it into a [`ToolError`].

use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

pub mod bowtie;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: String,
        stderr: String,
    },
}

/// A fully specified external command
pub trait ToolCommand {
    /// Executable to run, either a bare name looked up on `PATH` or a path
    fn program(&self) -> &OsString;

    /// Arguments, in order, excluding the program itself
    fn args(&self) -> Vec<OsString>;

    fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args());
        command
    }

    /// Run to completion, capturing stdout and stderr
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Spawn` if the program cannot be started. A
    /// non-zero exit status is reported in the returned [`ToolOutput`].
    fn run(&self) -> Result<ToolOutput, ToolError> {
        let program = self.program().to_string_lossy().into_owned();
        let mut command = self.to_command();
        debug!("running {command:?}");

        let output = command.output().map_err(|source| ToolError::Spawn {
            program: program.clone(),
            source,
        })?;

        let result = ToolOutput {
            program,
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        result.report();
        Ok(result)
    }
}

/// Exit status and captured streams of a finished external program
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub program: String,
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Turn a non-zero exit status into an error
    ///
    /// # Errors
    ///
    /// Returns `ToolError::Failed` carrying the captured stderr.
    pub fn check(self) -> Result<Self, ToolError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ToolError::Failed {
                program: self.program,
                status: self.status.to_string(),
                stderr: self.stderr.trim_end().to_string(),
            })
        }
    }

    fn report(&self) {
        let stderr = self.stderr.trim_end();
        if !stderr.is_empty() {
            warn!("{} reported: {stderr}", self.program);
        }
        debug!("{} finished with {}", self.program, self.status);
    }

    #[must_use]
    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            program: self.program.clone(),
            exit_code: self.status.code(),
            stdout: self.stdout.trim_end().to_string(),
        }
    }
}

/// Serializable view of a [`ToolOutput`] for run summaries
#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub program: String,
    pub exit_code: Option<i32>,
    pub stdout: String,
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    struct Shell {
        program: OsString,
        script: &'static str,
    }

    impl ToolCommand for Shell {
        fn program(&self) -> &OsString {
            &self.program
        }

        fn args(&self) -> Vec<OsString> {
            vec!["-c".into(), self.script.into()]
        }
    }

    fn sh(script: &'static str) -> Shell {
        Shell {
            program: "sh".into(),
            script,
        }
    }

    #[test]
    fn test_captures_streams() {
        let output = sh("echo out; echo err >&2").run().unwrap();
        assert!(output.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert!(output.check().is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_reported_not_raised() {
        let output = sh("echo broken index >&2; exit 3").run().unwrap();
        assert!(!output.success());
        assert_eq!(output.summary().exit_code, Some(3));

        match output.check() {
            Err(ToolError::Failed { program, stderr, .. }) => {
                assert_eq!(program, "sh");
                assert_eq!(stderr, "broken index");
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let tool = Shell {
            program: "/nonexistent/bowtie".into(),
            script: "",
        };
        assert!(matches!(tool.run(), Err(ToolError::Spawn { .. })));
    }
}
