//! Port definitions.
//!
//! Core owns the traits and types; adapters (lobbykit-provision) own the
//! implementations.

pub mod host;

pub use host::{CommandOutput, CommandRequest, Host, HostError};
