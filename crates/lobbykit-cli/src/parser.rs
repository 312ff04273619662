//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the provisioning tool.
///
/// Invoked with no arguments it runs the full setup workflow, which is
/// how the platform's README tells operators to call it.
#[derive(Parser)]
#[command(name = "lobbykit")]
#[command(about = "Provision the lobby platform's local runtime environment")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
