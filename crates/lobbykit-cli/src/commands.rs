//! Main commands enum.

use clap::Subcommand;

/// Available commands for the provisioning tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Provision the environment (the default when no command is given)
    Setup,

    /// Report the provisioning state of this project
    Status,

    /// Show resolved paths for this project
    Paths,
}
