//! aiservices - bootstrap tooling for AI services on IBM Power.
//!
//! The `aiservices bootstrap validate` command checks that a host is ready to
//! run AI services: root privileges, a supported RHEL release, a compatible
//! podman, and a ppc64le POWER11 processor.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`runtime`] - Container runtime discovery and version checks
//! - [`ui`] - Terminal output
//! - [`validation`] - The bootstrap checklist and its runner
//!
//! # Example
//!
//! ```
//! use aiservices::validation::{os_release, OsVersion, Requirements};
//!
//! let release = "ID=\"rhel\"\nVERSION_ID=\"9.10\"\n";
//! let version = os_release::check_os_release(release, &Requirements::default()).unwrap();
//! assert_eq!(version, OsVersion::new(9, 10));
//! ```

pub mod cli;
pub mod error;
pub mod runtime;
pub mod ui;
pub mod validation;

pub use error::{AiServicesError, CheckError, Result};
