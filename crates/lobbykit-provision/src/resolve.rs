//! System runtime resolution.
//!
//! Probes the search path for an interpreter that already satisfies the
//! minimum version. Read-only: nothing is installed or modified here.
//! Coming up empty is a branch signal for the orchestrator, not an
//! error.

use lobbykit_core::ports::{CommandOutput, CommandRequest, Host};
use lobbykit_core::runtime::RuntimeDescriptor;
use lobbykit_core::version::{RuntimeVersion, VersionRequirement};
use tracing::debug;

use crate::platform::PYTHON_CANDIDATES;

/// Find a system interpreter meeting `requirement`.
///
/// Candidates are probed in preference order; the first one whose
/// reported version satisfies the requirement wins. An interpreter that
/// is present but too old is skipped, and later candidates still get a
/// chance.
pub fn resolve_system_runtime(
    host: &dyn Host,
    requirement: &VersionRequirement,
) -> Option<RuntimeDescriptor> {
    for candidate in PYTHON_CANDIDATES {
        let Some(path) = host.locate_executable(candidate) else {
            continue;
        };

        let request = CommandRequest::new(&path).arg("--version");
        let Ok(output) = host.run_captured(&request) else {
            continue;
        };
        if !output.success() {
            continue;
        }

        let Some(version) = parse_reported_version(&output) else {
            debug!(candidate = *candidate, "unparseable --version output");
            continue;
        };

        if version.satisfies(requirement) {
            debug!(%version, path = %path.display(), "system runtime accepted");
            return Some(RuntimeDescriptor::system(version, path));
        }
        debug!(%version, %requirement, "system runtime too old");
    }

    None
}

/// Parse `Python X.Y.Z` from a `--version` invocation.
///
/// Old interpreters printed the version on stderr, current ones on
/// stdout; both are accepted.
fn parse_reported_version(output: &CommandOutput) -> Option<RuntimeVersion> {
    let text = if output.stdout.trim().is_empty() {
        &output.stderr
    } else {
        &output.stdout
    };

    text.split_whitespace()
        .find(|word| word.starts_with(|c: char| c.is_ascii_digit()))?
        .parse()
        .ok()
}
