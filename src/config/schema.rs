//! Config file schema.

use serde::Deserialize;
use std::path::PathBuf;

use crate::inventory::ParameterSet;

/// Contents of a report config file. Every field is optional.
///
/// ```yaml
/// baseline: /etc/agent-report/agentVersions.txt
/// inventory: /var/lib/agent-report/report.yaml
/// output: /var/www/html/agent-reports/report.html
/// parameters: union
/// escape_html: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Baseline versions file.
    pub baseline: Option<PathBuf>,

    /// Inventory YAML file.
    pub inventory: Option<PathBuf>,

    /// HTML output file.
    pub output: Option<PathBuf>,

    /// Row derivation policy: `first-host` or `union`.
    pub parameters: Option<ParameterSet>,

    /// Escape cell text before inserting it into the HTML.
    pub escape_html: Option<bool>,
}
