//! Handler for the setup command (and the bare invocation).

use lobbykit_core::error::ProvisionError;
use lobbykit_core::paths::ProjectPaths;
use lobbykit_provision::{LocalHost, workflow};

/// Run the full provisioning workflow for the current project.
///
/// Progress and tool output go to stderr as the run proceeds; on
/// success the launch report (the only thing scripts should capture)
/// is printed to stdout.
pub fn execute() -> Result<(), ProvisionError> {
    let paths = ProjectPaths::resolve()?;
    eprintln!("Provisioning {}", paths.root.display());

    let host = LocalHost::new();
    let outcome = workflow::run(&host, &paths)?;

    print!("{}", outcome.launch_report());
    Ok(())
}
