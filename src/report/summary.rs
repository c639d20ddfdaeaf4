//! Cell counts for a built report.

use serde::Serialize;

use crate::baseline::BaselineWarning;

use super::classify::CellClass;
use super::model::Report;

/// Totals across every host cell of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    /// Number of host columns.
    pub hosts: usize,
    /// Number of parameter rows.
    pub parameters: usize,
    /// Status cells classed `running`.
    pub running: usize,
    /// Status cells classed `inactive`.
    pub inactive: usize,
    /// Version cells at or above baseline.
    pub version_good: usize,
    /// Version cells below baseline.
    pub version_bad: usize,
    /// Status or version cells with no highlight.
    pub unclassified: usize,
    /// Version cells that fall below baseline, as `(host, parameter)`.
    pub outdated: Vec<(String, String)>,
}

impl ReportSummary {
    /// Tally a report.
    pub fn from_report(report: &Report) -> Self {
        let mut summary = Self {
            hosts: report.hosts.len(),
            parameters: report.rows.len(),
            ..Self::default()
        };

        for row in &report.rows {
            for (host, cell) in report.hosts.iter().zip(&row.cells) {
                match cell.class {
                    Some(CellClass::Running) => summary.running += 1,
                    Some(CellClass::Inactive) => summary.inactive += 1,
                    Some(CellClass::VersionGood) => summary.version_good += 1,
                    Some(CellClass::VersionBad) => {
                        summary.version_bad += 1;
                        summary
                            .outdated
                            .push((host.clone(), row.parameter.clone()));
                    }
                    Some(CellClass::Neutral) => summary.unclassified += 1,
                    None => {}
                }
            }
        }

        summary
    }

    /// Whether any version cell is below baseline.
    pub fn has_outdated(&self) -> bool {
        self.version_bad > 0
    }
}

/// Everything a caller may want to surface after a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Cell totals.
    pub summary: ReportSummary,
    /// Skipped baseline lines.
    pub warnings: Vec<BaselineWarning>,
    /// Parameters absent from the first host.
    pub extra_parameters: Vec<String>,
}
