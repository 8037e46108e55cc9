//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Long help for `aiservices bootstrap`.
///
/// `configure` is documented here but not registered as a subcommand yet.
const BOOTSTRAP_LONG_ABOUT: &str = "\
Bootstrap and configure the AI services infrastructure.

The bootstrap command helps you set up and validate the environment
required to run AI services on Power11 systems.

Available subcommands:
  validate   - Validate system prerequisites and configuration
  configure  - Configure and initialize the AI services infrastructure";

const BOOTSTRAP_EXAMPLES: &str = "\
Examples:
  # Validate the environment
  aiservices bootstrap validate

  # Configure the infrastructure
  aiservices bootstrap configure

  # Get help on a specific subcommand
  aiservices bootstrap validate --help";

const VALIDATE_LONG_ABOUT: &str = "\
Validate that all prerequisites and configurations are correct for bootstrapping.

This command performs comprehensive validation checks including:

System Checks:
  • Root privileges verification
  • RHEL distribution verification
  • RHEL version validation (9.6 or higher)
  • Power 11 architecture validation
  • RHN registration status
  • LTC yum repository availability
  • service-report package availability

Container Runtime:
  • Podman installation and configuration
  • Podman version compatibility

License:
  • RHAIIS license

All checks must pass for successful bootstrap configuration.";

const VALIDATE_EXAMPLES: &str = "\
Examples:
  # Run all validation checks
  aiservices bootstrap validate";

/// aiservices - AI services on IBM Power.
#[derive(Debug, Parser)]
#[command(name = "aiservices")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstraps AI services infrastructure
    #[command(long_about = BOOTSTRAP_LONG_ABOUT, after_help = BOOTSTRAP_EXAMPLES)]
    Bootstrap(BootstrapArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `bootstrap` command group.
#[derive(Debug, Clone, clap::Args)]
pub struct BootstrapArgs {
    #[command(subcommand)]
    pub command: BootstrapCommands,
}

/// Subcommands of `bootstrap`.
#[derive(Debug, Clone, Subcommand)]
pub enum BootstrapCommands {
    /// validates the environment
    #[command(long_about = VALIDATE_LONG_ABOUT, after_help = VALIDATE_EXAMPLES)]
    Validate(ValidateArgs),
}

/// Arguments for the `bootstrap validate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ValidateArgs {}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
