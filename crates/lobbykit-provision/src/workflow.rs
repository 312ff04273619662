//! The provisioning workflow.
//!
//! One strictly sequential pass:
//! resolve runtime → (managed install if needed) → build environment →
//! install dependencies → done. Each external invocation blocks to
//! completion before the next step starts, and every step is
//! idempotent, so a failed or interrupted run is resumed by running
//! again.

use std::fmt;

use lobbykit_core::error::ProvisionError;
use lobbykit_core::manifest::{DependencyManifest, PinError, PinnedVersion};
use lobbykit_core::paths::ProjectPaths;
use lobbykit_core::ports::Host;
use lobbykit_core::runtime::{EnvironmentState, RuntimeDescriptor, RuntimeOrigin};
use lobbykit_core::version::{MINIMUM_PYTHON, VersionRequirement};
use tracing::{debug, warn};

use crate::platform::{activation_command, reported_python};
use crate::{pip, pyenv, receipt, resolve, venv};

/// The steps a run moves through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionPhase {
    ResolvingRuntime,
    EnsuringManagedRuntime,
    BuildingEnvironment,
    InstallingDependencies,
    Done,
}

impl ProvisionPhase {
    /// Get the display name for this phase.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::ResolvingRuntime => "Resolving runtime",
            Self::EnsuringManagedRuntime => "Ensuring managed runtime",
            Self::BuildingEnvironment => "Building environment",
            Self::InstallingDependencies => "Installing dependencies",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for ProvisionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// What a completed run produced.
#[derive(Debug, Clone)]
pub struct ProvisionOutcome {
    /// The interpreter the run decided on.
    pub runtime: RuntimeDescriptor,
    /// The environment, freshly built or reused.
    pub environment: EnvironmentState,
    /// Number of manifest entries applied.
    pub installed_packages: usize,
}

impl ProvisionOutcome {
    /// The stdout report: how to use the environment and how to start
    /// the platform.
    ///
    /// The environment is only active inside a shell that sources it;
    /// nothing global was changed. The two servers must start in the
    /// listed order; the lobby server is a client of the database
    /// server and fails to come up without it.
    #[must_use]
    pub fn launch_report(&self) -> String {
        let python = reported_python();
        let mut report = format!(
            "Environment ready: Python {} ({}), {} package(s) applied.\n\n",
            self.runtime.version, self.runtime.origin, self.installed_packages
        );
        report.push_str("Activate it in your current shell:\n\n");
        report.push_str(&format!("  {}\n\n", activation_command()));
        report.push_str("Then start the platform servers, in this order:\n\n");
        report.push_str(&format!("  1. {python} server/db_server.py\n"));
        report.push_str(&format!("  2. {python} server/lobby_server.py\n"));
        report
    }
}

/// Run the full provisioning workflow against `host`.
pub fn run(host: &dyn Host, paths: &ProjectPaths) -> Result<ProvisionOutcome, ProvisionError> {
    // The pin and the requirement are read once per run; all host state
    // below is queried fresh.
    let pin = match PinnedVersion::load(&paths.pin_file) {
        Ok(pin) => Some(pin),
        Err(PinError::Missing { .. }) => None,
        Err(err) => return Err(err.into()),
    };
    let requirement = pin
        .as_ref()
        .map_or(MINIMUM_PYTHON, |p| VersionRequirement::from(p.version()));

    enter(ProvisionPhase::ResolvingRuntime);
    let runtime = if let Some(runtime) = resolve::resolve_system_runtime(host, &requirement) {
        eprintln!(
            "Found system Python {} at {}.",
            runtime.version,
            runtime.executable.display()
        );
        runtime
    } else {
        enter(ProvisionPhase::EnsuringManagedRuntime);
        let Some(pin) = pin.as_ref() else {
            return Err(PinError::Missing {
                path: paths.pin_file.clone(),
            }
            .into());
        };
        eprintln!(
            "No system Python {requirement}+ found; using {} via the version manager.",
            pin.as_str()
        );
        pyenv::ensure_managed(host, pin, &paths.root, &requirement)?
    };
    debug_assert!(
        runtime.origin == RuntimeOrigin::Managed || runtime.version.satisfies(&requirement)
    );

    enter(ProvisionPhase::BuildingEnvironment);
    let environment = venv::ensure_environment(host, &runtime, &paths.env_dir)?;
    if environment.exists {
        eprintln!(
            "Environment already present at {}; reusing it.",
            environment.path.display()
        );
    }

    enter(ProvisionPhase::InstallingDependencies);
    let manifest = DependencyManifest::load(&paths.manifest_file)?;
    let installed_packages = pip::install_dependencies(host, &environment, &manifest)?;

    enter(ProvisionPhase::Done);
    let outcome = ProvisionOutcome {
        runtime,
        environment,
        installed_packages,
    };

    // The receipt is for `status` display only; the run never reads it
    // back, and a provisioned environment is not failed over it.
    if let Err(err) = receipt::ProvisionReceipt::from_outcome(&outcome).save(&paths.receipt_file) {
        warn!(%err, "could not write provision receipt");
    }

    Ok(outcome)
}

fn enter(phase: ProvisionPhase) {
    debug!(phase = %phase, "phase");
    eprintln!("==> {phase}");
}
