//! Shell completions generation.
//!
//! The `aiservices completions` command generates shell completion scripts.

use std::io::Write;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Write the completion script to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let mut cmd = Cli::command();
        let mut script = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "aiservices", &mut script);
        out.write_all(&script)?;
        out.flush()?;
        Ok(())
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.write_to(&mut std::io::stdout().lock())?;
        Ok(CommandResult::success())
    }
}
