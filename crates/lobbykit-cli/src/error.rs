//! Exit code mapping for provisioning failures.
//!
//! Exit codes follow Unix conventions (see sysexits.h):
//! - 0: environment ready
//! - 69: required external tool unavailable (EX_UNAVAILABLE)
//! - 70: an external install or pin operation failed (EX_SOFTWARE)
//! - 71: OS-level failure launching a process (EX_OSERR)
//! - 73: environment directory could not be created (EX_CANTCREAT)
//! - 78: pin or manifest file missing/invalid (EX_CONFIG)

use lobbykit_core::error::ProvisionError;

/// Map a provisioning failure to the process exit code.
#[must_use]
pub const fn exit_code(err: &ProvisionError) -> i32 {
    match err {
        ProvisionError::ToolMissing { .. } => 69,
        ProvisionError::VersionInstallFailed { .. }
        | ProvisionError::VersionPinFailed { .. }
        | ProvisionError::DependencyInstallFailed { .. } => 70,
        ProvisionError::EnvironmentCreationFailed { .. } => 73,
        ProvisionError::Pin(_) | ProvisionError::Manifest(_) => 78,
        ProvisionError::Host(_) | ProvisionError::Path(_) => 71,
    }
}
