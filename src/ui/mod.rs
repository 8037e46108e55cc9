//! User-facing terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for console output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use aiservices::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Running bootstrap validation...");
//! ui.success("All validations passed");
//! assert_eq!(ui.successes(), &["All validations passed".to_string()]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, Theme};

/// Trait for user interface interactions.
///
/// Commands and the validation runner write through this trait so tests can
/// capture exactly what a run printed.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);
}
