//! Host environment facts.
//!
//! Every check reads the machine through [`Host`] so the checklist can be
//! exercised against fabricated hosts. Nothing read here is cached; each call
//! goes back to the system.

use std::path::{Path, PathBuf};

/// Default location of the OS release metadata.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Default location of the kernel CPU description.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Locations of the system files the checklist inspects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostPaths {
    pub os_release: PathBuf,
    pub cpuinfo: PathBuf,
}

impl Default for HostPaths {
    fn default() -> Self {
        Self {
            os_release: PathBuf::from(OS_RELEASE_PATH),
            cpuinfo: PathBuf::from(CPUINFO_PATH),
        }
    }
}

/// Read-only view of the machine being validated.
pub trait Host {
    /// Effective user id of the current process.
    fn effective_uid(&self) -> u32;

    /// CPU architecture identifier of the running binary (e.g. `ppc64le`).
    fn architecture(&self) -> String;

    /// Where the inspected system files live.
    fn paths(&self) -> &HostPaths;

    /// Read a host file as text.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// The real machine.
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    paths: HostPaths,
}

impl SystemHost {
    /// Create a host reading the standard system file locations.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Host for SystemHost {
    fn effective_uid(&self) -> u32 {
        effective_uid()
    }

    fn architecture(&self) -> String {
        architecture_identifier(std::env::consts::ARCH, cfg!(target_endian = "little"))
    }

    fn paths(&self) -> &HostPaths {
        &self.paths
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Effective user id of the current process.
pub fn effective_uid() -> u32 {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() }
    }

    #[cfg(not(unix))]
    {
        u32::MAX
    }
}

/// Map a Rust target architecture to the identifier used by distributions.
///
/// Rust reports both POWER byte orders as `powerpc64`; the little-endian one
/// is what RHEL ships as `ppc64le`.
pub fn architecture_identifier(arch: &str, little_endian: bool) -> String {
    match (arch, little_endian) {
        ("powerpc64", true) => "ppc64le".to_string(),
        ("powerpc64", false) => "ppc64".to_string(),
        (other, _) => other.to_string(),
    }
}
