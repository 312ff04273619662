//! Version manager bridge.
//!
//! Wraps the host-installed pyenv: queries what it has, installs the
//! pinned version only when absent, and pins it for the project
//! directory. Only the orchestrator's managed branch comes here; a
//! qualifying system interpreter never does.

use std::path::{Path, PathBuf};

use lobbykit_core::error::ProvisionError;
use lobbykit_core::manifest::PinnedVersion;
use lobbykit_core::ports::{CommandRequest, Host};
use lobbykit_core::runtime::RuntimeDescriptor;
use lobbykit_core::version::VersionRequirement;
use tracing::{debug, warn};

use crate::platform::{VERSION_MANAGER, managed_python};

/// Ensure the pinned interpreter is installed and pinned for the
/// project, returning its descriptor.
///
/// The install step is skipped entirely when the version manager
/// already has the pinned version: installs take minutes and must never
/// repeat needlessly. Install output streams to the operator verbatim.
pub fn ensure_managed(
    host: &dyn Host,
    pin: &PinnedVersion,
    project_root: &Path,
    requirement: &VersionRequirement,
) -> Result<RuntimeDescriptor, ProvisionError> {
    let Some(manager) = host.locate_executable(VERSION_MANAGER) else {
        return Err(ProvisionError::ToolMissing {
            tool: VERSION_MANAGER.to_string(),
            requirement: *requirement,
        });
    };

    if installed_versions(host, &manager)
        .iter()
        .any(|version| version == pin.as_str())
    {
        eprintln!("Python {} is already installed via {VERSION_MANAGER}.", pin.as_str());
    } else {
        eprintln!(
            "Installing Python {} via {VERSION_MANAGER} (this can take several minutes)...",
            pin.as_str()
        );
        let request = CommandRequest::new(&manager).arg("install").arg(pin.as_str());
        let output = host.run_streamed(&request)?;
        if !output.success() {
            return Err(ProvisionError::VersionInstallFailed {
                version: pin.as_str().to_string(),
                detail: output.diagnostics(),
            });
        }
    }

    // Directory-scoped pin, never a global one.
    let request = CommandRequest::new(&manager)
        .arg("local")
        .arg(pin.as_str())
        .current_dir(project_root);
    let output = host.run_captured(&request)?;
    if !output.success() {
        return Err(ProvisionError::VersionPinFailed {
            version: pin.as_str().to_string(),
            detail: output.diagnostics(),
        });
    }

    let python = managed_python(&manager_root(host, &manager), pin.as_str());
    if !host.path_exists(&python) {
        return Err(ProvisionError::VersionInstallFailed {
            version: pin.as_str().to_string(),
            detail: format!(
                "interpreter not found at {} after install",
                python.display()
            ),
        });
    }

    debug!(python = %python.display(), "managed runtime ready");
    Ok(RuntimeDescriptor::managed(pin.version(), python))
}

/// Versions the manager already has, queried live each run.
///
/// A failed query is treated as an empty list: a fresh pyenv reports
/// nothing, and anything genuinely broken surfaces with full
/// diagnostics at the install step.
fn installed_versions(host: &dyn Host, manager: &Path) -> Vec<String> {
    let request = CommandRequest::new(manager).args(["versions", "--bare"]);
    match host.run_captured(&request) {
        Ok(output) if output.success() => output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Ok(output) => {
            warn!(detail = %output.diagnostics(), "version listing failed");
            Vec::new()
        }
        Err(err) => {
            warn!(%err, "version listing could not run");
            Vec::new()
        }
    }
}

/// The manager's root directory, asked of the tool itself, with its
/// documented default as fallback.
fn manager_root(host: &dyn Host, manager: &Path) -> PathBuf {
    let request = CommandRequest::new(manager).arg("root");
    if let Ok(output) = host.run_captured(&request)
        && output.success()
    {
        let root = output.stdout.trim();
        if !root.is_empty() {
            return PathBuf::from(root);
        }
    }

    dirs::home_dir().map_or_else(|| PathBuf::from(".pyenv"), |home| home.join(".pyenv"))
}
