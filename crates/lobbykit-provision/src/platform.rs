//! Platform-specific names and locations.
//!
//! The workflow itself is platform-neutral; everything that differs
//! between Unix and Windows lives here.

use std::path::{Path, PathBuf};

/// Interpreter names probed on the search path, in order of preference.
#[cfg(target_os = "windows")]
pub const PYTHON_CANDIDATES: &[&str] = &["python"];

#[cfg(not(target_os = "windows"))]
pub const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// The external version-management tool.
pub const VERSION_MANAGER: &str = "pyenv";

/// Path to the interpreter inside an environment directory.
pub fn environment_python(env_dir: &Path) -> PathBuf {
    if cfg!(windows) {
        env_dir.join("Scripts").join("python.exe")
    } else {
        let bin = env_dir.join("bin");
        let python3 = bin.join("python3");
        if python3.exists() {
            python3
        } else {
            bin.join("python")
        }
    }
}

/// Path to the interpreter a version manager installed for `version`.
pub fn managed_python(manager_root: &Path, version: &str) -> PathBuf {
    let version_dir = manager_root.join("versions").join(version);
    if cfg!(windows) {
        version_dir.join("python.exe")
    } else {
        version_dir.join("bin").join("python")
    }
}

/// The shell command that activates the environment.
#[must_use]
pub const fn activation_command() -> &'static str {
    if cfg!(windows) {
        r"venv\Scripts\activate"
    } else {
        "source venv/bin/activate"
    }
}

/// Project-relative interpreter path shown in the launch report.
#[must_use]
pub const fn reported_python() -> &'static str {
    if cfg!(windows) {
        r"venv\Scripts\python.exe"
    } else {
        "venv/bin/python"
    }
}
