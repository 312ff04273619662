//! Isolated environment creation.

use std::path::Path;

use lobbykit_core::error::ProvisionError;
use lobbykit_core::ports::{CommandRequest, Host};
use lobbykit_core::runtime::{EnvironmentState, RuntimeDescriptor};
use tracing::debug;

/// Ensure the environment directory exists, creating it with the chosen
/// interpreter when absent.
///
/// An existing directory is trusted on presence alone; its contents are
/// not inspected. A stale or broken environment therefore survives this
/// step; `lobbykit status` is where that gets noticed.
pub fn ensure_environment(
    host: &dyn Host,
    runtime: &RuntimeDescriptor,
    env_dir: &Path,
) -> Result<EnvironmentState, ProvisionError> {
    if host.path_exists(env_dir) {
        debug!(path = %env_dir.display(), "environment already present");
        return Ok(EnvironmentState::new(env_dir.to_path_buf(), true));
    }

    if let Some(parent) = env_dir.parent() {
        host.create_directory(parent)?;
    }

    eprintln!("Creating environment at {}...", env_dir.display());
    let request = CommandRequest::new(&runtime.executable)
        .args(["-m", "venv"])
        .arg(env_dir.to_string_lossy());

    let output = host.run_captured(&request)?;
    if !output.success() {
        return Err(ProvisionError::EnvironmentCreationFailed {
            path: env_dir.to_path_buf(),
            detail: output.diagnostics(),
        });
    }

    Ok(EnvironmentState::new(env_dir.to_path_buf(), false))
}
