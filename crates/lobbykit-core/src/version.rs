//! Runtime version parsing and comparison.
//!
//! Versions are compared numerically, component by component. Comparing
//! the raw strings would order "3.9" after "3.11", which is exactly the
//! class of bug the resolver exists to avoid.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The minimum interpreter version the platform servers run on.
pub const MINIMUM_PYTHON: VersionRequirement = VersionRequirement::new(3, 11);

/// Errors produced when parsing a version string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionParseError {
    /// The input contained no version at all.
    #[error("empty version string")]
    Empty,

    /// A version needs at least a major and a minor component.
    #[error("version {0:?} is missing a minor component")]
    MissingMinor(String),

    /// A component did not start with a digit.
    #[error("version {0:?} has a non-numeric component")]
    NonNumeric(String),
}

/// An exact runtime version such as `3.11.4`.
///
/// Each component keeps only its leading numeric portion, so a
/// pre-release like `3.13.0rc1` still parses as (3, 13, 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Create a version from explicit components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version meets `requirement`.
    ///
    /// Only (major, minor) take part; the patch level never disqualifies
    /// an interpreter.
    #[must_use]
    pub const fn satisfies(&self, requirement: &VersionRequirement) -> bool {
        self.major > requirement.major
            || (self.major == requirement.major && self.minor >= requirement.minor)
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for RuntimeVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let mut parts = trimmed.split('.');
        let major = parse_component(parts.next().unwrap_or_default())
            .ok_or_else(|| VersionParseError::NonNumeric(trimmed.to_string()))?;
        let minor = match parts.next() {
            None => return Err(VersionParseError::MissingMinor(trimmed.to_string())),
            Some(part) => parse_component(part)
                .ok_or_else(|| VersionParseError::NonNumeric(trimmed.to_string()))?,
        };
        // The patch component is optional and may carry a suffix ("0rc1").
        let patch = match parts.next() {
            None => 0,
            Some(part) => parse_component(part)
                .ok_or_else(|| VersionParseError::NonNumeric(trimmed.to_string()))?,
        };

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

/// Extract the leading numeric portion of a version component.
fn parse_component(part: &str) -> Option<u32> {
    let numeric: String = part.chars().take_while(char::is_ascii_digit).collect();
    numeric.parse::<u32>().ok()
}

/// A minimum (major, minor) version the workflow must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRequirement {
    pub major: u32,
    pub minor: u32,
}

impl VersionRequirement {
    /// Create a requirement from explicit components.
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl From<RuntimeVersion> for VersionRequirement {
    /// The floor implied by an exact pin: its (major, minor) pair.
    fn from(version: RuntimeVersion) -> Self {
        Self::new(version.major, version.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_version() {
        let v: RuntimeVersion = "3.11.4".parse().unwrap();
        assert_eq!(v, RuntimeVersion::new(3, 11, 4));
    }

    #[test]
    fn parses_without_patch() {
        let v: RuntimeVersion = "3.11".parse().unwrap();
        assert_eq!(v, RuntimeVersion::new(3, 11, 0));
    }

    #[test]
    fn parses_prerelease_suffix() {
        let v: RuntimeVersion = "3.13.0rc1".parse().unwrap();
        assert_eq!(v, RuntimeVersion::new(3, 13, 0));
    }

    #[test]
    fn rejects_empty_and_single_component() {
        assert_eq!(
            "".parse::<RuntimeVersion>(),
            Err(VersionParseError::Empty)
        );
        assert_eq!(
            "3".parse::<RuntimeVersion>(),
            Err(VersionParseError::MissingMinor("3".to_string()))
        );
        assert!("x.y".parse::<RuntimeVersion>().is_err());
    }

    #[test]
    fn comparison_is_numeric_not_lexical() {
        // "3.9" > "3.11" as strings; never as versions.
        let req = VersionRequirement::new(3, 11);
        let old: RuntimeVersion = "3.9.18".parse().unwrap();
        assert!(!old.satisfies(&req));

        let exact: RuntimeVersion = "3.11.0".parse().unwrap();
        let newer: RuntimeVersion = "3.12.0".parse().unwrap();
        assert!(exact.satisfies(&req));
        assert!(newer.satisfies(&req));
    }

    #[test]
    fn newer_major_satisfies_any_minor() {
        let req = VersionRequirement::new(3, 11);
        let v: RuntimeVersion = "4.0.0".parse().unwrap();
        assert!(v.satisfies(&req));
    }

    #[test]
    fn requirement_from_pin_uses_major_minor() {
        let pin: RuntimeVersion = "3.11.0".parse().unwrap();
        let req = VersionRequirement::from(pin);
        assert_eq!(req, VersionRequirement::new(3, 11));
    }

    #[test]
    fn display_round_trips() {
        let v = RuntimeVersion::new(3, 11, 4);
        assert_eq!(v.to_string(), "3.11.4");
        assert_eq!(VersionRequirement::new(3, 11).to_string(), "3.11");
    }
}
