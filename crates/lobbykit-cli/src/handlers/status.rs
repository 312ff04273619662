//! Handler for the status command.
//!
//! Read-only: reports what provisioning left behind without repairing
//! anything. This is also where a present-but-broken environment gets
//! noticed, since the setup workflow trusts presence alone.

use lobbykit_core::error::ProvisionError;
use lobbykit_core::paths::ProjectPaths;
use lobbykit_core::ports::{CommandRequest, Host};
use lobbykit_provision::platform::environment_python;
use lobbykit_provision::{LocalHost, ProvisionReceipt};

/// Report the provisioning state of the current project.
pub fn execute() -> Result<(), ProvisionError> {
    let paths = ProjectPaths::resolve()?;
    let host = LocalHost::new();

    if !host.path_exists(&paths.env_dir) {
        println!("Status: Not provisioned");
        println!();
        println!("Run 'lobbykit' from the project root to provision the environment.");
        return Ok(());
    }

    println!("Status: Provisioned");
    println!("Environment: {}", paths.env_dir.display());

    // Fresh probe, never the receipt: does the interpreter still answer?
    let python = environment_python(&paths.env_dir);
    let request = CommandRequest::new(&python).arg("--version");
    match host.run_captured(&request) {
        Ok(output) if output.success() => {
            let version = output.stdout.trim().to_string();
            let version = if version.is_empty() {
                output.stderr.trim().to_string()
            } else {
                version
            };
            println!("Interpreter: ✓ {version}");
        }
        _ => {
            println!("Interpreter: ✗ not responding");
            println!();
            println!(
                "Delete {} and re-run 'lobbykit' to rebuild the environment.",
                paths.env_dir.display()
            );
            return Ok(());
        }
    }

    match ProvisionReceipt::load(&paths.receipt_file) {
        Ok(receipt) => {
            println!();
            println!("Last provisioned:");
            println!("  Python: {} ({})", receipt.python_version, receipt.origin);
            println!("  Interpreter: {}", receipt.interpreter.display());
            println!("  Packages applied: {}", receipt.packages_installed);
            println!(
                "  When: {}",
                receipt.provisioned_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        Err(err) => {
            println!();
            println!("Warning: could not read provision receipt: {err}");
        }
    }

    Ok(())
}
