//! Merged report model.
//!
//! [`build_report`] cross-references the inventory with the baseline and
//! produces one [`ReportRow`] per parameter. Rendering is separate, see
//! [`super::render`].

use crate::baseline::BaselineTable;
use crate::inventory::{HostReport, ParameterSet};

use super::classify::{status_class, version_class, CellClass, ParameterKind};

/// Placeholder for a missing baseline or host value.
pub const NOT_AVAILABLE: &str = "N/A";

/// One host's cell in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCell {
    /// Observed value, or [`NOT_AVAILABLE`].
    pub value: String,
    /// `None` for plain parameters, which render without a class attribute.
    pub class: Option<CellClass>,
}

/// One parameter row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Parameter name.
    pub parameter: String,
    /// Baseline cell text.
    pub baseline: String,
    /// One cell per host, in host order.
    pub cells: Vec<ReportCell>,
}

/// The full comparison, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Host column names in inventory order.
    pub hosts: Vec<String>,
    /// Parameter rows.
    pub rows: Vec<ReportRow>,
}

/// Merge an inventory with the baseline.
pub fn build_report(inventory: &HostReport, baseline: &BaselineTable, set: ParameterSet) -> Report {
    let hosts = inventory.hosts();

    let rows = inventory
        .parameters(set)
        .into_iter()
        .map(|parameter| {
            let kind = ParameterKind::of(parameter);
            let cells = hosts
                .iter()
                .map(|host| {
                    let value = host.get(parameter).unwrap_or(NOT_AVAILABLE);
                    let class = match kind {
                        ParameterKind::Status => Some(status_class(value)),
                        ParameterKind::Version => Some(version_class(parameter, value, baseline)),
                        ParameterKind::Plain => None,
                    };
                    ReportCell {
                        value: value.to_string(),
                        class,
                    }
                })
                .collect();

            ReportRow {
                parameter: parameter.to_string(),
                baseline: baseline.display(parameter),
                cells,
            }
        })
        .collect();

    Report {
        hosts: hosts.iter().map(|h| h.name.clone()).collect(),
        rows,
    }
}
