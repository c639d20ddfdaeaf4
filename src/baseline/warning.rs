//! Diagnostics produced while reading the baseline file.

use serde::Serialize;
use std::fmt;

/// Why a baseline line was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The line did not split into exactly one name and one version.
    MalformedLine,
    /// The version part is not a number.
    InvalidVersion,
}

/// A skipped baseline line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaselineWarning {
    /// 1-based line number in the baseline file.
    pub line_number: usize,
    /// The raw line as read.
    pub line: String,
    /// What was wrong with it.
    pub kind: WarningKind,
}

impl BaselineWarning {
    /// Create a new warning.
    pub fn new(line_number: usize, line: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            line_number,
            line: line.into(),
            kind,
        }
    }
}

impl fmt::Display for BaselineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::MalformedLine => write!(
                f,
                "line {}: skipping improperly formatted line: {}",
                self.line_number, self.line
            ),
            WarningKind::InvalidVersion => write!(
                f,
                "line {}: unable to convert version to float: {}",
                self.line_number, self.line
            ),
        }
    }
}
