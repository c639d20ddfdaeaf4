//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Running without a subcommand
//! behaves like `agent-report generate`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::OptionOverrides;
use crate::inventory::ParameterSet;

/// Render per-host agent status and version reports against a baseline.
#[derive(Debug, Parser)]
#[command(name = "agent-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file with input/output paths
    #[arg(short, long, global = true, env = "AGENT_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    // Used when no subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the HTML report (default if no command specified)
    Generate(GenerateArgs),

    /// Compare inventory against baseline without writing HTML
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Input selection shared by `generate` and `check`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Baseline versions file (`parameter: version` lines)
    #[arg(short, long, value_name = "FILE", env = "AGENT_REPORT_BASELINE")]
    pub baseline: Option<PathBuf>,

    /// Inventory YAML file (host -> parameter -> value)
    #[arg(short, long, value_name = "FILE", env = "AGENT_REPORT_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Which parameters become rows
    #[arg(long, value_enum, value_name = "SET")]
    pub parameters: Option<ParameterSet>,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// HTML file to write (overwritten)
    #[arg(short, long, value_name = "FILE", env = "AGENT_REPORT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Escape HTML special characters in cell values
    #[arg(long)]
    pub escape_html: bool,

    /// Exit non-zero if any baseline line was skipped
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also fail when any status is inactive
    #[arg(long)]
    pub fail_on_inactive: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl GenerateArgs {
    /// Flags that override config file values.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            output: self.output.clone(),
            escape_html: self.escape_html,
            ..self.inputs.overrides()
        }
    }
}

impl InputArgs {
    /// Flags that override config file values.
    pub fn overrides(&self) -> OptionOverrides {
        OptionOverrides {
            baseline: self.baseline.clone(),
            inventory: self.inventory.clone(),
            parameters: self.parameters,
            ..Default::default()
        }
    }
}
