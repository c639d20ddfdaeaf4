//! Resolved run options.

use std::path::PathBuf;

use crate::inventory::ParameterSet;
use crate::report::Escaping;

use super::schema::ReportConfig;

/// Default baseline versions file.
pub const DEFAULT_BASELINE_PATH: &str = "/var/www/html/agent-reports/agentVersions.txt";

/// Default inventory file.
pub const DEFAULT_INVENTORY_PATH: &str = "/var/www/html/agent-reports/report.yaml";

/// Default HTML output file.
pub const DEFAULT_OUTPUT_PATH: &str = "/var/www/html/agent-reports/report.html";

/// The three files a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// Baseline versions, read.
    pub baseline: PathBuf,
    /// Host inventory, read.
    pub inventory: PathBuf,
    /// HTML report, overwritten.
    pub output: PathBuf,
}

impl Default for ReportPaths {
    fn default() -> Self {
        Self {
            baseline: PathBuf::from(DEFAULT_BASELINE_PATH),
            inventory: PathBuf::from(DEFAULT_INVENTORY_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub baseline: Option<PathBuf>,
    pub inventory: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub parameters: Option<ParameterSet>,
    /// Only ever turns escaping on.
    pub escape_html: bool,
}

impl OptionOverrides {
    /// Fill values missing from `self` with those from `fallback`.
    pub fn or(self, fallback: OptionOverrides) -> Self {
        Self {
            baseline: self.baseline.or(fallback.baseline),
            inventory: self.inventory.or(fallback.inventory),
            output: self.output.or(fallback.output),
            parameters: self.parameters.or(fallback.parameters),
            escape_html: self.escape_html || fallback.escape_html,
        }
    }
}

/// Everything the pipeline needs to run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub paths: ReportPaths,
    pub parameters: ParameterSet,
    pub escaping: Escaping,
}

impl ReportOptions {
    /// Layer defaults, an optional config file, and overrides.
    pub fn resolve(config: Option<&ReportConfig>, overrides: &OptionOverrides) -> Self {
        let mut options = Self::default();

        if let Some(config) = config {
            if let Some(path) = &config.baseline {
                options.paths.baseline = path.clone();
            }
            if let Some(path) = &config.inventory {
                options.paths.inventory = path.clone();
            }
            if let Some(path) = &config.output {
                options.paths.output = path.clone();
            }
            if let Some(set) = config.parameters {
                options.parameters = set;
            }
            if config.escape_html == Some(true) {
                options.escaping = Escaping::Html;
            }
        }

        if let Some(path) = &overrides.baseline {
            options.paths.baseline = path.clone();
        }
        if let Some(path) = &overrides.inventory {
            options.paths.inventory = path.clone();
        }
        if let Some(path) = &overrides.output {
            options.paths.output = path.clone();
        }
        if let Some(set) = overrides.parameters {
            options.parameters = set;
        }
        if overrides.escape_html {
            options.escaping = Escaping::Html;
        }

        options
    }
}
