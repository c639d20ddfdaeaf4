//! Cell classification.
//!
//! Status parameters are colored by their running state, version parameters
//! by comparison against the baseline.

use std::sync::LazyLock;

use regex::Regex;

use crate::baseline::BaselineTable;

static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.[0-9]+").unwrap());

/// Highlight applied to a host cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    /// Status reports running or active.
    Running,
    /// Status reports inactive.
    Inactive,
    /// Observed version meets the baseline.
    VersionGood,
    /// Observed version is below the baseline.
    VersionBad,
    /// Nothing to highlight.
    Neutral,
}

impl CellClass {
    /// CSS class name used in the HTML output.
    pub fn css_name(self) -> &'static str {
        match self {
            CellClass::Running => "running",
            CellClass::Inactive => "inactive",
            CellClass::VersionGood => "version-good",
            CellClass::VersionBad => "version-bad",
            CellClass::Neutral => "",
        }
    }
}

/// Which classifier applies to a parameter, decided by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Name contains "status".
    Status,
    /// Name contains "version".
    Version,
    /// Anything else. Cells carry no class attribute.
    Plain,
}

impl ParameterKind {
    /// Classify a parameter name. "status" takes precedence over "version".
    pub fn of(parameter: &str) -> Self {
        let lower = parameter.to_lowercase();
        if lower.contains("status") {
            ParameterKind::Status
        } else if lower.contains("version") {
            ParameterKind::Version
        } else {
            ParameterKind::Plain
        }
    }
}

/// Extract the first `<digits>.<digits>` run from `value`.
pub fn extract_version(value: &str) -> Option<f64> {
    RE_VERSION
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
}

/// Classify a status value.
pub fn status_class(value: &str) -> CellClass {
    let lower = value.to_lowercase();
    // "inactive" contains "active"; must be tested first.
    if lower.contains("inactive") {
        CellClass::Inactive
    } else if lower.contains("running") || lower.contains("active") {
        CellClass::Running
    } else {
        CellClass::Neutral
    }
}

/// Classify a version value against the baseline for `parameter`.
pub fn version_class(parameter: &str, value: &str, baseline: &BaselineTable) -> CellClass {
    match (extract_version(value), baseline.get(parameter)) {
        (Some(actual), Some(expected)) if actual >= expected => CellClass::VersionGood,
        (Some(_), Some(_)) => CellClass::VersionBad,
        _ => CellClass::Neutral,
    }
}
