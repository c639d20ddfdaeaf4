//! agent-report - per-host agent status and version reports.
//!
//! Reads a YAML inventory of observed parameter values per host, compares
//! version parameters against a baseline file of expected minimum versions,
//! and renders a color-coded HTML table.
//!
//! # Modules
//!
//! - [`baseline`] - Baseline file parsing and warnings
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Config file loading and option resolution
//! - [`error`] - Error types and result aliases
//! - [`inventory`] - Inventory YAML loading
//! - [`report`] - Classification, merging and HTML rendering
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use agent_report::baseline::parse_baseline;
//! use agent_report::inventory::{parse_inventory, ParameterSet};
//! use agent_report::report::{build_report, render_html, Escaping};
//! use std::path::Path;
//!
//! let baseline = parse_baseline("agent_version: 2.0\n");
//! let inventory = parse_inventory(
//!     "host1:\n  agent_version: '2.5'\n  svc_status: Running\n",
//!     Path::new("report.yaml"),
//! )
//! .unwrap();
//!
//! let report = build_report(&inventory, &baseline.table, ParameterSet::Union);
//! let html = render_html(&report, Escaping::Raw);
//! assert!(html.contains("<td class='version-good'>2.5</td>"));
//! assert!(html.contains("<td class='running'>Running</td>"));
//! ```

pub mod baseline;
pub mod cli;
pub mod config;
pub mod error;
pub mod inventory;
pub mod report;
pub mod ui;

pub use error::{ReportError, Result};
