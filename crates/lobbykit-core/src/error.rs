//! The provisioning error taxonomy.
//!
//! Every failure is fatal to the run and actionable: the message carries
//! the failing tool's own diagnostic text unmodified, and
//! [`ProvisionError::remediation`] adds one line telling the operator
//! what to do about it. Nothing is retried internally; re-running the
//! workflow is always safe, the presence checks skip completed work.

use std::path::PathBuf;

use thiserror::Error;

use crate::manifest::{ManifestError, PinError};
use crate::paths::PathError;
use crate::ports::HostError;
use crate::version::VersionRequirement;

/// Errors that end a provisioning run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The external version-management tool is not installed.
    #[error("{tool} was not found on this system and no system Python {requirement}+ is available")]
    ToolMissing {
        tool: String,
        requirement: VersionRequirement,
    },

    /// The version manager failed to install the pinned version.
    #[error("failed to install Python {version}: {detail}")]
    VersionInstallFailed { version: String, detail: String },

    /// The version manager failed to pin the version for this project.
    #[error("failed to pin Python {version} for this project: {detail}")]
    VersionPinFailed { version: String, detail: String },

    /// The isolated environment could not be created.
    #[error("failed to create environment at {}: {detail}", .path.display())]
    EnvironmentCreationFailed { path: PathBuf, detail: String },

    /// A manifest entry could not be installed.
    #[error("failed to install {package}: {detail}")]
    DependencyInstallFailed { package: String, detail: String },

    /// The version pin file is missing or unusable.
    #[error(transparent)]
    Pin(#[from] PinError),

    /// The dependency manifest is missing or unreadable.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The host adapter itself failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Project paths could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl ProvisionError {
    /// One line telling the operator how to get unstuck.
    #[must_use]
    pub fn remediation(&self) -> String {
        match self {
            Self::ToolMissing { tool, requirement } => format!(
                "Install {tool} (https://github.com/pyenv/pyenv) and re-run, \
                 or install Python {requirement} or newer system-wide so no \
                 version manager is needed."
            ),
            Self::VersionInstallFailed { .. } => {
                "Check the tool output above (network, disk space, build \
                 dependencies), then re-run; completed steps are skipped."
                    .to_string()
            }
            Self::VersionPinFailed { .. } => {
                "Check that the project directory is writable, then re-run.".to_string()
            }
            Self::EnvironmentCreationFailed { .. } => {
                "Check free disk space and directory permissions, then re-run.".to_string()
            }
            Self::DependencyInstallFailed { package, .. } => format!(
                "Fix the constraint for {package} in requirements.txt or \
                 resolve the network issue, then re-run; packages already \
                 installed are reused."
            ),
            Self::Pin(PinError::Missing { path }) => format!(
                "Create {} containing the exact Python version to pin, e.g. 3.11.0.",
                path.display()
            ),
            Self::Pin(_) => {
                "Fix the version pin file so it contains a single exact \
                 version, e.g. 3.11.0."
                    .to_string()
            }
            Self::Manifest(ManifestError::Missing { path }) => format!(
                "Create {} listing the platform's dependencies, one per line.",
                path.display()
            ),
            Self::Manifest(_) | Self::Host(_) | Self::Path(_) => {
                "Address the underlying error and re-run.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_missing_remediation_names_both_alternatives() {
        let err = ProvisionError::ToolMissing {
            tool: "pyenv".to_string(),
            requirement: VersionRequirement::new(3, 11),
        };
        let remediation = err.remediation();
        assert!(remediation.contains("pyenv"));
        assert!(remediation.contains("3.11"));
        assert!(remediation.contains("system-wide"));
    }

    #[test]
    fn dependency_failure_names_the_package() {
        let err = ProvisionError::DependencyInstallFailed {
            package: "requests".to_string(),
            detail: "no matching distribution".to_string(),
        };
        assert!(err.to_string().contains("requests"));
        assert!(err.remediation().contains("requests"));
    }

    #[test]
    fn messages_carry_tool_diagnostics_verbatim() {
        let err = ProvisionError::EnvironmentCreationFailed {
            path: PathBuf::from("/srv/lobby/venv"),
            detail: "Error: [Errno 28] No space left on device".to_string(),
        };
        assert!(err.to_string().contains("No space left on device"));
    }
}
