//! Command handlers.
//!
//! Handlers are thin wrappers: resolve project paths, call into
//! `lobbykit-provision`, format terminal output. Business logic does
//! not belong here.

pub mod paths;
pub mod setup;
pub mod status;
