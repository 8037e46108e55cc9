//! Fixed expectations the host is validated against.

use super::os_release::OsVersion;

/// What a host must provide to run AI services.
///
/// The defaults are the supported platform. Tests construct their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirements {
    /// Display name of the supported distribution.
    pub distribution: String,
    /// Substrings of the OS release file that identify the distribution.
    pub distribution_markers: Vec<String>,
    /// Oldest supported distribution release.
    pub minimum_os_version: OsVersion,
    /// Required CPU architecture identifier.
    pub architecture: String,
    /// CPU generation that must appear in the kernel CPU description.
    pub cpu_generation: String,
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            distribution: "RHEL".to_string(),
            distribution_markers: vec![
                "Red Hat Enterprise Linux".to_string(),
                r#"ID="rhel""#.to_string(),
                "ID=rhel".to_string(),
            ],
            minimum_os_version: OsVersion::new(9, 6),
            architecture: "ppc64le".to_string(),
            cpu_generation: "POWER11".to_string(),
        }
    }
}
