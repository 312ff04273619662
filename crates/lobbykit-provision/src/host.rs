//! Local host adapter.
//!
//! Implements the `Host` port against the real operating system:
//! `which` for PATH lookup, `std::process::Command` for execution.
//! Nothing observed here is ever cached; every call asks the host
//! again.

use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use lobbykit_core::ports::{CommandOutput, CommandRequest, Host, HostError};
use tracing::debug;

/// The real host.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHost;

impl LocalHost {
    /// Create a new local host adapter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn base_command(request: &CommandRequest) -> Command {
    let mut cmd = Command::new(&request.program);
    cmd.args(&request.args);
    if let Some(cwd) = &request.cwd {
        cmd.current_dir(cwd);
    }
    cmd
}

fn launch_error(request: &CommandRequest, err: &io::Error) -> HostError {
    HostError::Launch {
        program: request.program.display().to_string(),
        reason: err.to_string(),
    }
}

impl Host for LocalHost {
    fn locate_executable(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_directory(&self, path: &Path) -> Result<(), HostError> {
        std::fs::create_dir_all(path).map_err(|e| HostError::CreateDirectory {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn run_captured(&self, request: &CommandRequest) -> Result<CommandOutput, HostError> {
        debug!(command = %request, "running (captured)");

        let output = base_command(request)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| launch_error(request, &e))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn run_streamed(&self, request: &CommandRequest) -> Result<CommandOutput, HostError> {
        debug!(command = %request, "running (streamed)");

        // The child's stderr flows straight through; its stdout is
        // relayed onto our stderr so the tool's progress stays visible
        // without touching the stdout contract.
        let mut child = base_command(request)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| launch_error(request, &e))?;

        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            let mut sink = io::stderr().lock();
            for line in reader.lines() {
                match line {
                    Ok(line) => {
                        let _ = writeln!(sink, "{line}");
                    }
                    Err(_) => break,
                }
            }
        }

        let status = child.wait().map_err(|e| launch_error(request, &e))?;
        Ok(CommandOutput {
            code: status.code(),
            ..CommandOutput::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_executable_is_none_not_error() {
        let host = LocalHost::new();
        assert!(
            host.locate_executable("lobbykit-no-such-tool-12345")
                .is_none()
        );
    }

    #[test]
    fn launching_a_missing_program_reports_launch_error() {
        let host = LocalHost::new();
        let request = CommandRequest::new("/nonexistent/lobbykit-test-program");
        let result = host.run_captured(&request);
        assert!(matches!(result, Err(HostError::Launch { .. })));
    }

    #[test]
    fn create_directory_is_idempotent() {
        let host = LocalHost::new();
        let dir = tempdir().unwrap();
        let target = dir.path().join("a").join("b");

        host.create_directory(&target).unwrap();
        host.create_directory(&target).unwrap();
        assert!(host.path_exists(&target));
    }

    #[test]
    #[cfg(unix)]
    fn captured_run_separates_streams_and_status() {
        let host = LocalHost::new();
        let request = CommandRequest::new("/bin/sh")
            .arg("-c")
            .arg("echo out; echo err >&2; exit 3");

        let output = host.run_captured(&request).unwrap();
        assert_eq!(output.code, Some(3));
        assert_eq!(output.stdout.trim(), "out");
        assert_eq!(output.stderr.trim(), "err");
        assert!(!output.success());
    }

    #[test]
    #[cfg(unix)]
    fn streamed_run_reports_exit_status() {
        let host = LocalHost::new();
        let request = CommandRequest::new("/bin/sh").arg("-c").arg("echo hi; exit 0");

        let output = host.run_streamed(&request).unwrap();
        assert!(output.success());
        assert!(output.stdout.is_empty());
    }
}
