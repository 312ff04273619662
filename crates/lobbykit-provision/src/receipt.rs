//! Provision receipt storage.
//!
//! A small JSON file written inside the environment after a successful
//! run, recording what was provisioned and when. It exists for the
//! `status` command's display; the workflow itself never reads it, so
//! every run still queries the host fresh.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflow::ProvisionOutcome;

/// Record of the last successful provisioning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionReceipt {
    /// Interpreter version the environment was built against.
    pub python_version: String,
    /// Where the interpreter came from (`system` or `managed`).
    pub origin: String,
    /// Absolute path of the interpreter used.
    pub interpreter: PathBuf,
    /// Manifest entries applied on that run.
    pub packages_installed: usize,
    /// When the run completed.
    pub provisioned_at: DateTime<Utc>,
}

impl ProvisionReceipt {
    /// Build a receipt from a completed run.
    #[must_use]
    pub fn from_outcome(outcome: &ProvisionOutcome) -> Self {
        Self {
            python_version: outcome.runtime.version.to_string(),
            origin: outcome.runtime.origin.display_name().to_string(),
            interpreter: outcome.runtime.executable.clone(),
            packages_installed: outcome.installed_packages,
            provisioned_at: Utc::now(),
        }
    }

    /// Save the receipt to file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize receipt")?;
        fs::write(path, json).context("Failed to write receipt file")?;
        Ok(())
    }

    /// Load a receipt from file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).context("Failed to read receipt file")?;
        let receipt = serde_json::from_str(&json).context("Failed to parse receipt file")?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lobbykit_core::runtime::{EnvironmentState, RuntimeDescriptor};
    use lobbykit_core::version::RuntimeVersion;
    use tempfile::tempdir;

    #[test]
    fn receipt_round_trips() {
        let dir = tempdir().unwrap();
        let receipt_path = dir.path().join(".lobbykit-env.json");

        let outcome = ProvisionOutcome {
            runtime: RuntimeDescriptor::managed(
                RuntimeVersion::new(3, 11, 0),
                dir.path().join("python"),
            ),
            environment: EnvironmentState::new(dir.path().join("venv"), false),
            installed_packages: 2,
        };

        let original = ProvisionReceipt::from_outcome(&outcome);
        original.save(&receipt_path).unwrap();
        let loaded = ProvisionReceipt::load(&receipt_path).unwrap();

        assert_eq!(original.python_version, loaded.python_version);
        assert_eq!(original.origin, loaded.origin);
        assert_eq!(original.interpreter, loaded.interpreter);
        assert_eq!(original.packages_installed, loaded.packages_installed);
    }

    #[test]
    fn loading_a_missing_receipt_fails() {
        let dir = tempdir().unwrap();
        assert!(ProvisionReceipt::load(&dir.path().join("absent.json")).is_err());
    }
}
