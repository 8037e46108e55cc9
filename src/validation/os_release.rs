//! `/etc/os-release` inspection.
//!
//! The file is treated as opaque text: distribution detection is a substring
//! search and the version comes from whichever line starts with `VERSION_ID=`,
//! wherever it appears.

use std::fmt;

use crate::error::CheckError;

use super::requirements::Requirements;

const VERSION_ID_KEY: &str = "VERSION_ID=";

/// A `major.minor` distribution release, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

impl OsVersion {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a `VERSION_ID` value.
    ///
    /// Components that are missing or not numbers count as 0, so `"9"` is
    /// `9.0` and `""` is `0.0`.
    pub fn parse(version: &str) -> Self {
        let mut parts = version.split('.');
        let mut component = || {
            parts
                .next()
                .and_then(|p| p.trim().parse::<u32>().ok())
                .unwrap_or(0)
        };
        let major = component();
        let minor = component();
        Self { major, minor }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Whether the release text names the supported distribution.
pub fn is_supported_distribution(os_release: &str, requirements: &Requirements) -> bool {
    requirements
        .distribution_markers
        .iter()
        .any(|marker| os_release.contains(marker.as_str()))
}

/// The unquoted value of the `VERSION_ID` field, if present.
pub fn version_id(os_release: &str) -> Option<&str> {
    os_release
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(VERSION_ID_KEY))
        .map(|value| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
}

/// Validate release text against the distribution requirements.
///
/// Returns the detected version on success.
pub fn check_os_release(
    os_release: &str,
    requirements: &Requirements,
) -> Result<OsVersion, CheckError> {
    if !is_supported_distribution(os_release, requirements) {
        return Err(CheckError::UnsupportedDistribution {
            distribution: requirements.distribution.clone(),
        });
    }

    let raw = version_id(os_release).ok_or(CheckError::UnknownOsVersion)?;
    let version = OsVersion::parse(raw);

    if version < requirements.minimum_os_version {
        return Err(CheckError::UnsupportedOsVersion {
            distribution: requirements.distribution.clone(),
            found: raw.to_string(),
            minimum: requirements.minimum_os_version.to_string(),
        });
    }

    Ok(version)
}
