//! Provisioning workflow and host adapters for lobbykit.
//!
//! This crate implements the ports defined in `lobbykit-core` against
//! the real operating system and sequences the provisioning steps:
//! resolve a runtime, fall back to the version manager, build the
//! isolated environment, apply the dependency manifest. Every step is
//! idempotent, so an interrupted run resumes by simply running again.

pub mod host;
pub mod pip;
pub mod platform;
pub mod pyenv;
pub mod receipt;
pub mod resolve;
pub mod venv;
pub mod workflow;

pub use host::LocalHost;
pub use receipt::ProvisionReceipt;
pub use workflow::{ProvisionOutcome, ProvisionPhase};
