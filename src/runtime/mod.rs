//! Container runtime validation.
//!
//! The bootstrap checklist does not care how a container runtime is found
//! or queried, only whether it is present and new enough. [`RuntimeValidator`]
//! is that seam; [`PodmanValidator`] is the implementation used on real hosts.
//!
//! # Example
//!
//! ```no_run
//! use aiservices::runtime::{PodmanValidator, RuntimeValidator};
//!
//! match PodmanValidator::new().validate() {
//!     Ok(info) => println!("podman {} at {}", info.version, info.path.display()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod podman;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub use podman::{extract_version, resolve_tool_path, PodmanValidator, MIN_PODMAN_VERSION};

/// A `major.minor.patch` runtime version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Create a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A container runtime that passed validation.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    /// Resolved path of the runtime binary.
    pub path: PathBuf,
    /// Version reported by the binary.
    pub version: RuntimeVersion,
}

/// Why a container runtime was rejected.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The tool is not on PATH.
    #[error("{tool} is not installed or not on PATH")]
    NotInstalled { tool: String },

    /// The tool could not be started.
    #[error("failed to run {}: {source}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The version query exited unsuccessfully.
    #[error("'{command}' exited with code {code:?}: {stderr}")]
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The version query printed nothing that looks like a version.
    #[error("could not parse version from output: {output:?}")]
    UnparsableVersion { output: String },

    /// The installed version is older than required.
    #[error("{tool} version {found} is not supported. Minimum required version is {required}")]
    Incompatible {
        tool: String,
        found: RuntimeVersion,
        required: RuntimeVersion,
    },
}

/// Verifies that a compatible container runtime is installed.
pub trait RuntimeValidator {
    /// Locate the runtime and check its version.
    fn validate(&self) -> Result<RuntimeInfo, RuntimeError>;
}
