//! CPU architecture and processor generation.

use crate::error::CheckError;

use super::requirements::Requirements;

/// Fail unless the architecture identifier is the required one.
pub fn check_architecture(arch: &str, requirements: &Requirements) -> Result<(), CheckError> {
    if arch == requirements.architecture {
        Ok(())
    } else {
        Err(CheckError::UnsupportedArchitecture {
            found: arch.to_string(),
            required: requirements.architecture.clone(),
        })
    }
}

/// Fail unless `/proc/cpuinfo` text names the required processor generation.
pub fn check_cpu_generation(cpuinfo: &str, requirements: &Requirements) -> Result<(), CheckError> {
    if cpuinfo.contains(requirements.cpu_generation.as_str()) {
        Ok(())
    } else {
        Err(CheckError::UnsupportedCpuGeneration {
            required: requirements.cpu_generation.clone(),
        })
    }
}
