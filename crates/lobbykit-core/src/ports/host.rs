//! Host port: the capability set the workflow needs from the operating
//! system.
//!
//! The whole workflow drives four capabilities (locate an executable,
//! run a process, check a path, create a directory), so the
//! platform-neutral orchestrator stays testable and the OS differences
//! collapse into one adapter instead of a per-platform copy of the
//! workflow.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the host adapter itself (as opposed to a tool that
/// ran and failed, which is reported through `CommandOutput`).
#[derive(Debug, Error)]
pub enum HostError {
    /// A process could not be started at all.
    #[error("failed to launch {program}: {reason}")]
    Launch { program: String, reason: String },

    /// A directory could not be created.
    #[error("failed to create directory {}: {reason}", .path.display())]
    CreateDirectory { path: PathBuf, reason: String },
}

/// A process invocation the workflow wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    /// Program to run: an absolute path or a bare name for the adapter
    /// to resolve.
    pub program: PathBuf,
    /// Arguments, in order.
    pub args: Vec<String>,
    /// Working directory; the adapter's current directory when `None`.
    pub cwd: Option<PathBuf>,
}

impl CommandRequest {
    /// Create a request for `program` with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the adapter's current directory.
    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Outcome of a completed process.
///
/// For streamed runs the output fields are empty: everything already
/// reached the operator's terminal verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// The tool's own diagnostic text, unmodified, for error reports.
    ///
    /// Prefers stderr; falls back to stdout (some tools report errors
    /// there); falls back to the exit status when both are silent.
    #[must_use]
    pub fn diagnostics(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Port for everything the workflow needs from the operating system.
///
/// Implementations perform real PATH lookups, process execution and
/// filesystem checks; tests script the answers and record the calls.
/// All state reached through this port is fetched fresh per call;
/// implementations must not cache what the host reported earlier.
pub trait Host: Send + Sync {
    /// Locate an executable on the search path.
    fn locate_executable(&self, name: &str) -> Option<PathBuf>;

    /// Whether `path` exists.
    fn path_exists(&self, path: &Path) -> bool;

    /// Create a directory, including parents. Existing directories are
    /// not an error.
    fn create_directory(&self, path: &Path) -> Result<(), HostError>;

    /// Run a process to completion, capturing its output.
    fn run_captured(&self, request: &CommandRequest) -> Result<CommandOutput, HostError>;

    /// Run a process to completion with its output relayed live to the
    /// operator's stderr. For long-running tools whose progress the
    /// operator needs to see as it happens.
    fn run_streamed(&self, request: &CommandRequest) -> Result<CommandOutput, HostError>;
}
