//! Podman discovery and version check.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::{RuntimeError, RuntimeInfo, RuntimeValidator, RuntimeVersion};

/// Name of the podman executable.
const PODMAN: &str = "podman";

/// Oldest podman release supported for AI services.
pub const MIN_PODMAN_VERSION: RuntimeVersion = RuntimeVersion::new(5, 0, 0);

/// Validates a podman installation found on PATH.
#[derive(Debug, Clone)]
pub struct PodmanValidator {
    path_entries: Vec<PathBuf>,
    minimum: RuntimeVersion,
}

impl Default for PodmanValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl PodmanValidator {
    /// Create a validator that searches the process PATH.
    pub fn new() -> Self {
        Self::with_path_entries(parse_system_path())
    }

    /// Create a validator that searches only the given directories.
    pub fn with_path_entries(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            minimum: MIN_PODMAN_VERSION,
        }
    }

    /// Override the minimum accepted version.
    pub fn with_minimum(mut self, minimum: RuntimeVersion) -> Self {
        self.minimum = minimum;
        self
    }
}

impl RuntimeValidator for PodmanValidator {
    fn validate(&self) -> Result<RuntimeInfo, RuntimeError> {
        let path = resolve_tool_path(PODMAN, &self.path_entries).ok_or_else(|| {
            RuntimeError::NotInstalled {
                tool: PODMAN.to_string(),
            }
        })?;
        tracing::debug!(path = %path.display(), "Found podman");

        let output = Command::new(&path)
            .arg("--version")
            .output()
            .map_err(|source| RuntimeError::Spawn {
                path: path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RuntimeError::CommandFailed {
                command: format!("{} --version", path.display()),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let version = extract_version(&stdout).ok_or_else(|| RuntimeError::UnparsableVersion {
            output: stdout.trim().to_string(),
        })?;
        tracing::debug!(%version, minimum = %self.minimum, "Parsed podman version");

        if version < self.minimum {
            return Err(RuntimeError::Incompatible {
                tool: PODMAN.to_string(),
                found: version,
                required: self.minimum,
            });
        }

        Ok(RuntimeInfo { path, version })
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| candidate.is_file() && is_executable(candidate))
}

/// Parse the system PATH environment variable into a list of directories.
fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Extract the first `major.minor[.patch]` version from command output.
pub fn extract_version(output: &str) -> Option<RuntimeVersion> {
    let re = regex::Regex::new(r"(\d+)\.(\d+)(?:\.(\d+))?").ok()?;
    let caps = re.captures(output)?;
    let component = |i: usize| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    Some(RuntimeVersion::new(component(1), component(2), component(3)))
}
