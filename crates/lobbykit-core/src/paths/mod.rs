//! Project path resolution.
//!
//! Everything the workflow touches lives at fixed names under one
//! project root: the version pin, the dependency manifest, the isolated
//! environment directory. This module resolves them all in one call so
//! every part of the tool agrees on where things are, and exposes the
//! result for the `paths` CLI command.

mod error;

use std::env;
use std::fmt;
use std::path::PathBuf;

pub use error::PathError;

/// Fixed name of the isolated environment directory.
pub const ENV_DIR_NAME: &str = "venv";

/// Fixed name of the version pin file, shared with the version manager.
pub const PIN_FILE_NAME: &str = ".python-version";

/// Fixed name of the dependency manifest.
pub const MANIFEST_FILE_NAME: &str = "requirements.txt";

/// Receipt written inside the environment after a successful run.
pub const RECEIPT_FILE_NAME: &str = ".lobbykit-env.json";

/// Environment variable overriding the project root for one invocation.
pub const PROJECT_DIR_ENV: &str = "LOBBYKIT_PROJECT_DIR";

/// All resolved project paths captured in a single struct.
///
/// Use this instead of joining names ad hoc - it guarantees the
/// workflow, the status command and the tests agree on the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    /// The project root the run operates on.
    pub root: PathBuf,
    /// The isolated environment directory.
    pub env_dir: PathBuf,
    /// The version pin file.
    pub pin_file: PathBuf,
    /// The dependency manifest.
    pub manifest_file: PathBuf,
    /// The provision receipt, inside the environment directory.
    pub receipt_file: PathBuf,
}

impl ProjectPaths {
    /// Resolve paths for the current invocation.
    ///
    /// Resolution order for the root:
    /// 1. `LOBBYKIT_PROJECT_DIR` environment variable (with `~` expansion)
    /// 2. The current working directory
    pub fn resolve() -> Result<Self, PathError> {
        if let Ok(raw) = env::var(PROJECT_DIR_ENV) {
            let root = normalize_user_path(&raw)?;
            return Ok(Self::for_root(root));
        }

        let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
        Ok(Self::for_root(cwd))
    }

    /// Resolve paths under an explicit root.
    #[must_use]
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let env_dir = root.join(ENV_DIR_NAME);
        let receipt_file = env_dir.join(RECEIPT_FILE_NAME);
        Self {
            pin_file: root.join(PIN_FILE_NAME),
            manifest_file: root.join(MANIFEST_FILE_NAME),
            env_dir,
            receipt_file,
            root,
        }
    }
}

impl fmt::Display for ProjectPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "root = {}", self.root.display())?;
        writeln!(f, "env_dir = {}", self.env_dir.display())?;
        writeln!(f, "pin_file = {}", self.pin_file.display())?;
        writeln!(f, "manifest_file = {}", self.manifest_file.display())?;
        write!(f, "receipt_file = {}", self.receipt_file.display())
    }
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
