//! Handler for the paths command.

use lobbykit_core::error::ProvisionError;
use lobbykit_core::paths::ProjectPaths;

/// Print the resolved project paths, one `key = value` per line.
pub fn execute() -> Result<(), ProvisionError> {
    let paths = ProjectPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
