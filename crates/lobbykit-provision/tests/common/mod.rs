//! Scripted host for workflow tests.
//!
//! Answers PATH lookups and process invocations from in-memory state
//! and records every invocation, so tests can assert not only what a
//! run produced but which external commands it did (and did not) run.

use std::collections::HashMap;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use lobbykit_core::ports::{CommandOutput, CommandRequest, Host, HostError};
use lobbykit_provision::platform::managed_python;

const MANAGER_ROOT: &str = "/home/op/.pyenv";

#[derive(Default)]
struct State {
    executables: HashMap<String, PathBuf>,
    system_python_version: Option<String>,
    manager_versions: Vec<String>,
    existing_paths: HashSet<PathBuf>,
    invocations: Vec<String>,
    fail_matching: Vec<String>,
}

/// In-memory host with pyenv-and-python behavior scripted in.
#[derive(Default)]
pub struct FakeHost {
    state: Mutex<State>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an interpreter on the fake PATH reporting `version`.
    pub fn with_system_python(self, version: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let path = PathBuf::from("/usr/bin/python3");
            state.executables.insert("python3".to_string(), path.clone());
            state.executables.insert("python".to_string(), path);
            state.system_python_version = Some(version.to_string());
        }
        self
    }

    /// Put the version manager on the fake PATH.
    pub fn with_version_manager(self) -> Self {
        self.state.lock().unwrap().executables.insert(
            "pyenv".to_string(),
            PathBuf::from("/usr/local/bin/pyenv"),
        );
        self
    }

    /// Pretend `version` is already installed by the version manager.
    pub fn with_manager_version(self, version: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .manager_versions
            .push(version.to_string());
        self
    }

    /// Pretend `path` already exists on the filesystem.
    pub fn with_existing_path(self, path: impl Into<PathBuf>) -> Self {
        self.state.lock().unwrap().existing_paths.insert(path.into());
        self
    }

    /// Fail any invocation whose rendered command contains `needle`.
    pub fn failing_commands_containing(self, needle: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .fail_matching
            .push(needle.to_string());
        self
    }

    /// Every invocation so far, rendered as `program arg arg ...`.
    pub fn invocations(&self) -> Vec<String> {
        self.state.lock().unwrap().invocations.clone()
    }

    /// How many invocations contained `needle`.
    pub fn invocation_count(&self, needle: &str) -> usize {
        self.invocations()
            .iter()
            .filter(|command| command.contains(needle))
            .count()
    }

    fn dispatch(&self, request: &CommandRequest) -> CommandOutput {
        let rendered = request.to_string();
        let mut state = self.state.lock().unwrap();
        state.invocations.push(rendered.clone());

        if state
            .fail_matching
            .iter()
            .any(|needle| rendered.contains(needle))
        {
            return CommandOutput {
                code: Some(1),
                stdout: String::new(),
                stderr: format!("scripted failure: {rendered}"),
            };
        }

        let args: Vec<&str> = request.args.iter().map(String::as_str).collect();
        let program = request.program.to_string_lossy().into_owned();

        let mut output = CommandOutput {
            code: Some(0),
            ..CommandOutput::default()
        };

        if program.contains("pyenv") {
            match args.first().copied() {
                Some("versions") => {
                    output.stdout = state.manager_versions.join("\n");
                }
                Some("install") => {
                    let version = args.get(1).expect("install without version").to_string();
                    let interpreter = managed_python(Path::new(MANAGER_ROOT), &version);
                    state.manager_versions.push(version);
                    state.existing_paths.insert(interpreter);
                }
                Some("root") => {
                    output.stdout = format!("{MANAGER_ROOT}\n");
                }
                // `local` and anything else just succeed.
                _ => {}
            }
        } else if args == ["--version"] {
            let version = state
                .system_python_version
                .clone()
                .expect("--version on an unscripted interpreter");
            output.stdout = format!("Python {version}\n");
        } else if args.len() >= 3 && args[..2] == ["-m", "venv"] {
            state.existing_paths.insert(PathBuf::from(args[2]));
        }
        // `-m pip ...` succeeds with no other effect.

        output
    }
}

impl Host for FakeHost {
    fn locate_executable(&self, name: &str) -> Option<PathBuf> {
        self.state.lock().unwrap().executables.get(name).cloned()
    }

    fn path_exists(&self, path: &Path) -> bool {
        self.state.lock().unwrap().existing_paths.contains(path)
    }

    fn create_directory(&self, path: &Path) -> Result<(), HostError> {
        self.state
            .lock()
            .unwrap()
            .existing_paths
            .insert(path.to_path_buf());
        Ok(())
    }

    fn run_captured(&self, request: &CommandRequest) -> Result<CommandOutput, HostError> {
        Ok(self.dispatch(request))
    }

    fn run_streamed(&self, request: &CommandRequest) -> Result<CommandOutput, HostError> {
        Ok(self.dispatch(request))
    }
}
