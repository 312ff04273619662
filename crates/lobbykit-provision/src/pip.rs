//! Dependency installation into the environment.
//!
//! Runs on every provisioning pass, including ones that reused an
//! existing environment: the manifest may have changed since the
//! directory was built, and the installer itself is what makes
//! re-applying it cheap.

use std::path::Path;

use lobbykit_core::error::ProvisionError;
use lobbykit_core::manifest::DependencyManifest;
use lobbykit_core::ports::{CommandRequest, Host};
use lobbykit_core::runtime::EnvironmentState;

use crate::platform::environment_python;

/// Apply the manifest to the environment, in listed order.
///
/// The environment's own pip is upgraded first: stale pips predate the
/// wheel formats some resolutions need. The first entry that fails ends
/// the run; later entries are not attempted, so a half-applied manifest
/// never masquerades as a provisioned environment.
pub fn install_dependencies(
    host: &dyn Host,
    environment: &EnvironmentState,
    manifest: &DependencyManifest,
) -> Result<usize, ProvisionError> {
    let python = environment_python(&environment.path);

    eprintln!("Upgrading pip...");
    run_pip(host, &python, &["install", "--upgrade", "pip"], "pip")?;

    for entry in manifest.entries() {
        eprintln!("Installing {}...", entry.requirement);
        run_pip(
            host,
            &python,
            &["install", entry.requirement.as_str()],
            &entry.name,
        )?;
    }

    Ok(manifest.len())
}

fn run_pip(
    host: &dyn Host,
    python: &Path,
    args: &[&str],
    package: &str,
) -> Result<(), ProvisionError> {
    let request = CommandRequest::new(python)
        .args(["-m", "pip"])
        .args(args.iter().copied());

    let output = host.run_streamed(&request)?;
    if !output.success() {
        return Err(ProvisionError::DependencyInstallFailed {
            package: package.to_string(),
            detail: output.diagnostics(),
        });
    }
    Ok(())
}
