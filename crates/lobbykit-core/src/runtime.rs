//! Domain types describing the resolved runtime and the isolated
//! environment.
//!
//! These are produced fresh on every run. Nothing here is cached across
//! invocations: the host may change between runs (an interpreter gets
//! installed system-wide, a directory gets deleted), so stale copies of
//! this state are a bug, not an optimization.

use std::fmt;
use std::path::PathBuf;

use crate::version::RuntimeVersion;

/// Where the chosen interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeOrigin {
    /// Found on the PATH, already satisfying the requirement.
    System,
    /// Installed and pinned through the version manager.
    Managed,
}

impl RuntimeOrigin {
    /// Get the display name for this origin.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Managed => "managed",
        }
    }
}

impl fmt::Display for RuntimeOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The interpreter a run decided to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDescriptor {
    /// Reported interpreter version.
    pub version: RuntimeVersion,
    /// Absolute path to the interpreter executable.
    pub executable: PathBuf,
    /// How the interpreter was obtained.
    pub origin: RuntimeOrigin,
}

impl RuntimeDescriptor {
    /// Descriptor for a qualifying system interpreter.
    #[must_use]
    pub const fn system(version: RuntimeVersion, executable: PathBuf) -> Self {
        Self {
            version,
            executable,
            origin: RuntimeOrigin::System,
        }
    }

    /// Descriptor for an interpreter provided by the version manager.
    #[must_use]
    pub const fn managed(version: RuntimeVersion, executable: PathBuf) -> Self {
        Self {
            version,
            executable,
            origin: RuntimeOrigin::Managed,
        }
    }
}

/// Presence of the isolated environment directory.
///
/// `exists` records whether the directory was already there when this
/// run checked. Presence is all that is checked; an existing directory
/// is trusted without inspecting its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentState {
    /// Project-relative environment directory, made absolute.
    pub path: PathBuf,
    /// Whether the directory pre-existed this run.
    pub exists: bool,
}

impl EnvironmentState {
    /// Record the presence check result for `path`.
    #[must_use]
    pub const fn new(path: PathBuf, exists: bool) -> Self {
        Self { path, exists }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_display_names() {
        assert_eq!(RuntimeOrigin::System.display_name(), "system");
        assert_eq!(RuntimeOrigin::Managed.display_name(), "managed");
    }

    #[test]
    fn constructors_set_origin() {
        let version = RuntimeVersion::new(3, 11, 0);
        let system = RuntimeDescriptor::system(version, PathBuf::from("/usr/bin/python3"));
        assert_eq!(system.origin, RuntimeOrigin::System);

        let managed = RuntimeDescriptor::managed(version, PathBuf::from("/home/u/.pyenv/x"));
        assert_eq!(managed.origin, RuntimeOrigin::Managed);
    }
}
