//! Generate command implementation.
//!
//! The `agent-report generate` command writes the HTML report. It is also
//! what runs when no subcommand is given.

use crate::config::ReportOptions;
use crate::error::Result;
use crate::inventory::ParameterSet;
use crate::report::{generate_report, RunReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, EXIT_FINDINGS};

/// The generate command implementation.
pub struct GenerateCommand {
    options: ReportOptions,
    strict: bool,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(options: ReportOptions, strict: bool) -> Self {
        Self { options, strict }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let run = generate_report(&self.options)?;

        report_notes(&run, self.options.parameters, ui);

        ui.success(&format!(
            "Wrote report for {} hosts and {} parameters to {}",
            run.summary.hosts,
            run.summary.parameters,
            self.options.paths.output.display()
        ));

        if self.strict && !run.warnings.is_empty() {
            ui.error(&format!(
                "{} baseline line(s) skipped (--strict)",
                run.warnings.len()
            ));
            return Ok(CommandResult::failure(EXIT_FINDINGS));
        }

        Ok(CommandResult::success())
    }
}

/// Surface baseline warnings and parameter-set notes.
pub(crate) fn report_notes(run: &RunReport, set: ParameterSet, ui: &mut dyn UserInterface) {
    for warning in &run.warnings {
        ui.warning(&format!("Baseline {}", warning));
    }

    if set == ParameterSet::FirstHost && !run.extra_parameters.is_empty() {
        ui.warning(&format!(
            "Omitted parameters not reported by the first host: {}",
            run.extra_parameters.join(", ")
        ));
    }
}
