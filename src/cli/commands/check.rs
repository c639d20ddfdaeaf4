//! Check command implementation.
//!
//! The `agent-report check` command compares the inventory against the
//! baseline and prints totals without writing HTML. It fails when any host
//! runs a version below baseline.

use crate::cli::args::CheckArgs;
use crate::config::ReportOptions;
use crate::error::{ReportError, Result};
use crate::report::compare;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS};
use super::generate::report_notes;

/// The check command implementation.
pub struct CheckCommand {
    options: ReportOptions,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(options: ReportOptions, args: CheckArgs) -> Self {
        Self { options, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let comparison = compare(&self.options)?;
        let run = &comparison.run;
        let summary = &run.summary;

        if self.args.json {
            let json = serde_json::to_string_pretty(run).map_err(|e| ReportError::Other(e.into()))?;
            ui.message(&json);
        } else {
            report_notes(run, self.options.parameters, ui);
            ui.key_value("Hosts", &summary.hosts.to_string());
            ui.key_value("Parameters", &summary.parameters.to_string());
            ui.key_value("Running", &summary.running.to_string());
            ui.key_value("Inactive", &summary.inactive.to_string());
            ui.key_value("Versions at baseline", &summary.version_good.to_string());
            ui.key_value("Versions below baseline", &summary.version_bad.to_string());
            for (host, parameter) in &summary.outdated {
                ui.warning(&format!("{}: {} is below baseline", host, parameter));
            }
        }

        let failed =
            summary.has_outdated() || (self.args.fail_on_inactive && summary.inactive > 0);
        if failed {
            return Ok(CommandResult::failure(EXIT_FINDINGS));
        }

        if !self.args.json {
            ui.success("All versions meet baseline");
        }
        Ok(CommandResult::success())
    }
}
