//! Validate command implementation.
//!
//! The `aiservices bootstrap validate` command checks that the host meets
//! every prerequisite for running AI services.

use crate::error::{AiServicesError, Result};
use crate::runtime::{PodmanValidator, RuntimeValidator};
use crate::ui::UserInterface;
use crate::validation::{Host, SystemHost, ValidationRunner};

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    host: Box<dyn Host>,
    runtime: Box<dyn RuntimeValidator>,
}

impl ValidateCommand {
    /// Create a validate command for the current machine.
    pub fn new() -> Self {
        Self::with_environment(Box::new(SystemHost::new()), Box::new(PodmanValidator::new()))
    }

    /// Create a validate command against a specific host and runtime validator.
    pub fn with_environment(host: Box<dyn Host>, runtime: Box<dyn RuntimeValidator>) -> Self {
        Self { host, runtime }
    }
}

impl Default for ValidateCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let runner = ValidationRunner::new(self.host.as_ref(), self.runtime.as_ref());

        match runner.validate(ui) {
            Ok(_) => Ok(CommandResult::success()),
            Err(e @ AiServicesError::ValidationFailed { .. }) => {
                ui.error(&format!("Error: {}", e));
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
