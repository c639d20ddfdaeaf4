//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config_file, OptionOverrides, ReportOptions};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code for a command that ran but found problems.
pub const EXIT_FINDINGS: i32 = 1;

/// Exit code for a fatal error.
pub const EXIT_ERROR: i32 = 2;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config_path: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher. `config_path` is the `--config` file, if any.
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Resolve run options from the config file and command-line overrides.
    pub fn resolve_options(&self, overrides: &OptionOverrides) -> Result<ReportOptions> {
        let config = self.config_path().map(load_config_file).transpose()?;
        let options = ReportOptions::resolve(config.as_ref(), overrides);
        tracing::debug!("Resolved options: {:?}", options);
        Ok(options)
    }

    /// Dispatch and execute a command.
    ///
    /// Flags given before the subcommand fill in whatever the subcommand
    /// itself leaves unset.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Generate(args)) => {
                let overrides = args.overrides().or(cli.generate.overrides());
                let options = self.resolve_options(&overrides)?;
                let strict = args.strict || cli.generate.strict;
                let cmd = super::generate::GenerateCommand::new(options, strict);
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let overrides = args.inputs.overrides().or(cli.generate.inputs.overrides());
                let options = self.resolve_options(&overrides)?;
                let cmd = super::check::CheckCommand::new(options, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let options = self.resolve_options(&cli.generate.overrides())?;
                let cmd = super::generate::GenerateCommand::new(options, cli.generate.strict);
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::DEFAULT_OUTPUT_PATH;
    use crate::error::ReportError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(EXIT_FINDINGS);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn resolve_options_without_config_uses_defaults() {
        let dispatcher = CommandDispatcher::new(None);
        let options = dispatcher
            .resolve_options(&OptionOverrides::default())
            .unwrap();
        assert_eq!(options.paths.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    }

    #[test]
    fn resolve_options_reads_config_file() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("report.yml");
        fs::write(&config, "output: custom.html\n").unwrap();

        let dispatcher = CommandDispatcher::new(Some(config));
        let options = dispatcher
            .resolve_options(&OptionOverrides::default())
            .unwrap();
        assert_eq!(options.paths.output, PathBuf::from("custom.html"));
    }

    #[test]
    fn flags_before_subcommand_apply_to_generate() {
        use crate::ui::MockUI;
        use clap::Parser;
        use std::ffi::OsStr;

        let temp = TempDir::new().unwrap();
        let baseline = temp.path().join("agentVersions.txt");
        let inventory = temp.path().join("report.yaml");
        let output = temp.path().join("mine.html");
        fs::write(&baseline, "agent_version: 2.0\n").unwrap();
        fs::write(&inventory, "h:\n  agent_version: \"2.5\"\n").unwrap();

        let cli = Cli::parse_from([
            OsStr::new("agent-report"),
            OsStr::new("--output"),
            output.as_os_str(),
            OsStr::new("generate"),
            OsStr::new("--baseline"),
            baseline.as_os_str(),
            OsStr::new("--inventory"),
            inventory.as_os_str(),
        ]);
        let result = CommandDispatcher::new(None)
            .dispatch(&cli, &mut MockUI::new())
            .unwrap();

        assert!(result.success);
        assert!(output.exists());
    }

    #[test]
    fn resolve_options_missing_config_is_error() {
        let temp = TempDir::new().unwrap();
        let dispatcher = CommandDispatcher::new(Some(temp.path().join("missing.yml")));
        let result = dispatcher.resolve_options(&OptionOverrides::default());
        assert!(matches!(result, Err(ReportError::FileNotFound { .. })));
    }
}
