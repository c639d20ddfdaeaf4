//! Baseline file parsing.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

use super::table::BaselineTable;
use super::warning::{BaselineWarning, WarningKind};

/// The result of reading a baseline file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineLoad {
    /// Successfully parsed expected versions.
    pub table: BaselineTable,
    /// Lines that were skipped, in file order.
    pub warnings: Vec<BaselineWarning>,
}

/// Read and parse the baseline file at `path`.
///
/// # Errors
///
/// Returns `FileNotFound` if the file doesn't exist. Malformed lines are
/// never errors; they are reported in [`BaselineLoad::warnings`].
pub fn load_baseline(path: &Path) -> Result<BaselineLoad> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::from_read(path, e))?;
    let load = parse_baseline(&content);

    tracing::debug!(
        "Loaded {} baseline versions from {}",
        load.table.len(),
        path.display()
    );

    Ok(load)
}

/// Parse baseline content of `parameter: version` lines.
pub fn parse_baseline(content: &str) -> BaselineLoad {
    let mut load = BaselineLoad::default();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let parts: Vec<&str> = line.trim().split(':').collect();

        let [parameter, version] = parts.as_slice() else {
            let warning = BaselineWarning::new(line_number, line, WarningKind::MalformedLine);
            tracing::debug!("{}", warning);
            load.warnings.push(warning);
            continue;
        };

        match version.trim().parse::<f64>() {
            Ok(version) => load.table.insert(parameter.trim(), version),
            Err(_) => {
                let warning = BaselineWarning::new(line_number, line, WarningKind::InvalidVersion);
                tracing::debug!("{}", warning);
                load.warnings.push(warning);
            }
        }
    }

    load
}
