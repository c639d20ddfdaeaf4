//! Report merging and rendering.
//!
//! - [`classify`] - status and version cell classification
//! - [`model`] - merged rows built from inventory and baseline
//! - [`render`] - HTML template and escaping
//! - [`summary`] - totals for terminal and JSON output
//!
//! [`generate_report`] runs the whole pipeline: load both inputs, merge,
//! render, and overwrite the output file.

pub mod classify;
pub mod model;
pub mod render;
pub mod summary;

pub use classify::{extract_version, status_class, version_class, CellClass, ParameterKind};
pub use model::{build_report, Report, ReportCell, ReportRow, NOT_AVAILABLE};
pub use render::{escape_html, render_html, Escaping};
pub use summary::{ReportSummary, RunReport};

use std::fs;
use std::path::Path;

use crate::baseline::load_baseline;
use crate::config::ReportOptions;
use crate::error::{ReportError, Result};
use crate::inventory::load_inventory;

/// A merged report together with what was learned while loading it.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The merged rows.
    pub report: Report,
    /// Totals, warnings and parameter-set notes.
    pub run: RunReport,
}

/// Load both inputs and merge them without writing anything.
pub fn compare(options: &ReportOptions) -> Result<Comparison> {
    let inventory = load_inventory(&options.paths.inventory)?;
    let baseline = load_baseline(&options.paths.baseline)?;

    let extra_parameters: Vec<String> = inventory
        .parameters_outside_first_host()
        .into_iter()
        .map(String::from)
        .collect();
    if !extra_parameters.is_empty() {
        tracing::debug!(
            "Parameters missing from first host: {}",
            extra_parameters.join(", ")
        );
    }

    let report = build_report(&inventory, &baseline.table, options.parameters);
    let summary = ReportSummary::from_report(&report);

    Ok(Comparison {
        report,
        run: RunReport {
            summary,
            warnings: baseline.warnings,
            extra_parameters,
        },
    })
}

/// Build the report and overwrite the output file with its HTML.
pub fn generate_report(options: &ReportOptions) -> Result<RunReport> {
    let comparison = compare(options)?;
    let html = render_html(&comparison.report, options.escaping);
    write_report(&options.paths.output, &html)?;
    Ok(comparison.run)
}

/// Write rendered HTML to `path`, replacing any previous report.
pub fn write_report(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html).map_err(|source| ReportError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("Wrote report to {}", path.display());
    Ok(())
}
