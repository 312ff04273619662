//! Core domain types and port definitions for lobbykit.
//!
//! This crate is pure: it defines what the provisioning workflow talks
//! about (versions, manifests, runtime descriptors, the error taxonomy)
//! and the `Host` port it talks through. It never executes a process or
//! touches the PATH itself; adapters live in `lobbykit-provision`.

pub mod error;
pub mod manifest;
pub mod paths;
pub mod ports;
pub mod runtime;
pub mod version;

// Re-export primary types for convenient access
pub use error::ProvisionError;
pub use manifest::{DependencyManifest, ManifestEntry, ManifestError, PinError, PinnedVersion};
pub use ports::{CommandOutput, CommandRequest, Host, HostError};
pub use runtime::{EnvironmentState, RuntimeDescriptor, RuntimeOrigin};
pub use version::{MINIMUM_PYTHON, RuntimeVersion, VersionRequirement};
