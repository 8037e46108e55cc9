//! Error types for aiservices operations.
//!
//! This module defines [`AiServicesError`], the error a command hands back to
//! `main`, [`CheckError`], the failure recorded by a single validation check,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A `CheckError` from a non-fatal check is recorded in the report
//! - A `CheckError` from a fatal check ends the run as [`AiServicesError::FatalCheck`]
//! - `AiServicesError::ValidationFailed` carries the full report of a failed run

use std::path::PathBuf;
use thiserror::Error;

use crate::runtime::RuntimeError;
use crate::validation::ValidationReport;

/// Core error type for aiservices commands.
#[derive(Debug, Error)]
pub enum AiServicesError {
    /// A fatal check failed and no further checks ran.
    #[error(transparent)]
    FatalCheck(CheckError),

    /// One or more non-fatal checks failed.
    #[error("{} validation check(s) failed", report.failure_count())]
    ValidationFailed { report: ValidationReport },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for aiservices operations.
pub type Result<T> = std::result::Result<T, AiServicesError>;

/// Failure of a single validation check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The process is not running with an effective user id of 0.
    #[error("root privileges are required to run this command")]
    NotRoot { euid: u32 },

    /// A host file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS release file names no supported distribution.
    #[error("unsupported operating system: only {distribution} is supported")]
    UnsupportedDistribution { distribution: String },

    /// The OS release file has no `VERSION_ID` field.
    #[error("unable to determine OS version")]
    UnknownOsVersion,

    /// The distribution version is older than the minimum.
    #[error("unsupported {distribution} version: {found}. Minimum required version is {minimum}")]
    UnsupportedOsVersion {
        distribution: String,
        found: String,
        minimum: String,
    },

    /// The binary was built for a different CPU architecture.
    #[error("unsupported architecture: {found}. IBM Power architecture ({required}) is required")]
    UnsupportedArchitecture { found: String, required: String },

    /// The CPU generation reported by the kernel is not the required one.
    #[error("unsupported IBM Power version: {required} is required")]
    UnsupportedCpuGeneration { required: String },

    /// The container runtime collaborator rejected the host.
    #[error("podman validation failed: {0}")]
    Runtime(#[from] RuntimeError),
}
