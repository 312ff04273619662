//! CLI entry point.
//!
//! Parses arguments, points logging at stderr, and dispatches to
//! handlers. Stdout is reserved for the final reports (the launch
//! report, status, paths); everything else a run says goes to stderr,
//! so `lobbykit > activate.txt` stays clean.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lobbykit_cli::{Cli, Commands, error, handlers};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Setup) {
        Commands::Setup => handlers::setup::execute(),
        Commands::Status => handlers::status::execute(),
        Commands::Paths => handlers::paths::execute(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        eprintln!("{}", err.remediation());
        std::process::exit(error::exit_code(&err));
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
