//! Project-local provisioning inputs.
//!
//! Two small text files at the project root drive the workflow: the
//! version pin (`.python-version`, a single exact version) and the
//! dependency manifest (`requirements.txt`, ordered requirement lines).
//! Both are read once per run and never mutated by this crate.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::version::{RuntimeVersion, VersionParseError};

/// Errors reading or parsing the version pin file.
#[derive(Debug, Error)]
pub enum PinError {
    /// The pin file does not exist.
    #[error("version pin file not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The pin file exists but could not be read.
    #[error("cannot read version pin file {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    /// The pin file content is not a usable version.
    #[error("version pin file {} is invalid: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        source: VersionParseError,
    },
}

/// The exact runtime version pinned for this project checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedVersion {
    raw: String,
    version: RuntimeVersion,
}

impl PinnedVersion {
    /// Read the pin from a single-line file such as `.python-version`.
    ///
    /// Only the first non-blank line counts; a trailing newline is fine.
    pub fn load(path: &Path) -> Result<Self, PinError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                PinError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                PinError::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;

        Self::parse(&content).map_err(|source| PinError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse pin-file content.
    pub fn parse(content: &str) -> Result<Self, VersionParseError> {
        let line = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(VersionParseError::Empty)?;

        let version: RuntimeVersion = line.parse()?;
        Ok(Self {
            raw: line.to_string(),
            version,
        })
    }

    /// The exact version string as written in the pin file.
    ///
    /// This is what gets handed to the version manager verbatim, so that
    /// e.g. `3.11.0` is never rewritten as `3.11`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed version.
    #[must_use]
    pub const fn version(&self) -> RuntimeVersion {
        self.version
    }
}

/// Errors reading the dependency manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file does not exist.
    #[error("dependency manifest not found: {}", .path.display())]
    Missing { path: PathBuf },

    /// The manifest file exists but could not be read.
    #[error("cannot read dependency manifest {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },
}

/// One requirement line: the package it names plus the raw line that
/// gets passed to the installer unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Bare package name, used to attribute installation failures.
    pub name: String,
    /// The full requirement as written, e.g. `requests>=2.0`.
    pub requirement: String,
}

/// The ordered dependency manifest.
///
/// Order is preserved: entries are installed exactly as listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyManifest {
    entries: Vec<ManifestEntry>,
}

impl DependencyManifest {
    /// Read and parse a requirements-style file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ManifestError::Missing {
                    path: path.to_path_buf(),
                }
            } else {
                ManifestError::Unreadable {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        })?;

        Ok(Self::parse(&content))
    }

    /// Parse manifest text. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| ManifestEntry {
                name: package_name(line),
                requirement: line.to_string(),
            })
            .collect();

        Self { entries }
    }

    /// The entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest lists nothing to install.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extract the bare package name from a requirement line.
///
/// Stops at the first character that cannot be part of a package name,
/// so `requests>=2.0`, `foo==1.2` and `bar[extra]` all yield their name.
fn package_name(line: &str) -> String {
    line.chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn pin_parses_exact_version() {
        let pin = PinnedVersion::parse("3.11.0\n").unwrap();
        assert_eq!(pin.as_str(), "3.11.0");
        assert_eq!(pin.version(), RuntimeVersion::new(3, 11, 0));
    }

    #[test]
    fn pin_load_distinguishes_missing_from_invalid() {
        let dir = tempdir().unwrap();

        let missing = PinnedVersion::load(&dir.path().join(".python-version"));
        assert!(matches!(missing, Err(PinError::Missing { .. })));

        let bad = dir.path().join(".python-version");
        std::fs::write(&bad, "not-a-version\n").unwrap();
        assert!(matches!(
            PinnedVersion::load(&bad),
            Err(PinError::Invalid { .. })
        ));
    }

    #[test]
    fn manifest_preserves_order_and_skips_comments() {
        let manifest = DependencyManifest::parse(
            "# platform deps\nrequests>=2.0\n\ncryptography==41.0.5\npillow\n",
        );

        let names: Vec<&str> = manifest.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["requests", "cryptography", "pillow"]);
        assert_eq!(manifest.entries()[0].requirement, "requests>=2.0");
    }

    #[test]
    fn manifest_handles_extras_and_underscores() {
        let manifest = DependencyManifest::parse("uvicorn[standard]>=0.23\ntyping_extensions\n");
        assert_eq!(manifest.entries()[0].name, "uvicorn");
        assert_eq!(manifest.entries()[1].name, "typing_extensions");
    }

    #[test]
    fn empty_manifest_is_empty_not_an_error() {
        let manifest = DependencyManifest::parse("# nothing yet\n");
        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
    }

    #[test]
    fn manifest_load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = DependencyManifest::load(&dir.path().join("requirements.txt"));
        assert!(matches!(result, Err(ManifestError::Missing { .. })));
    }
}
