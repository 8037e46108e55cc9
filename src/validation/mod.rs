//! Host validation for AI services bootstrap.
//!
//! This module runs a fixed checklist of read-only predicates against the
//! machine and aggregates what failed.
//!
//! # Modules
//!
//! - [`check`] - Check descriptors and the ordered checklist
//! - [`host`] - Host facts (effective uid, architecture, system files)
//! - [`os_release`] - Distribution and version detection
//! - [`cpu`] - Architecture and processor generation
//! - [`report`] - Per-check outcomes and the aggregated report
//! - [`requirements`] - Expected platform values
//! - [`runner`] - Checklist execution
//!
//! # Example
//!
//! ```no_run
//! use aiservices::runtime::PodmanValidator;
//! use aiservices::ui::MockUI;
//! use aiservices::validation::{SystemHost, ValidationRunner};
//!
//! let host = SystemHost::new();
//! let podman = PodmanValidator::new();
//! let mut ui = MockUI::new();
//! match ValidationRunner::new(&host, &podman).validate(&mut ui) {
//!     Ok(_) => println!("host is ready"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod check;
pub mod cpu;
pub mod host;
pub mod os_release;
pub mod report;
pub mod requirements;
pub mod runner;

pub use check::{CheckKind, CHECKLIST};
pub use host::{Host, HostPaths, SystemHost};
pub use os_release::OsVersion;
pub use report::{CheckOutcome, ValidationReport};
pub use requirements::Requirements;
pub use runner::ValidationRunner;
