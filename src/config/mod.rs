//! Report configuration.
//!
//! This module resolves where inputs are read from and how the report is
//! rendered:
//! - Schema definitions in [`schema`]
//! - Config file loading in [`loader`]
//! - Resolution into [`ReportOptions`] in [`options`]
//!
//! # Example
//!
//! ```
//! use agent_report::config::{parse_config, ReportOptions, OptionOverrides};
//! use std::path::Path;
//!
//! let config = parse_config("output: /tmp/agents.html", Path::new("report.yml")).unwrap();
//! let options = ReportOptions::resolve(Some(&config), &OptionOverrides::default());
//! assert_eq!(options.paths.output, Path::new("/tmp/agents.html"));
//! ```
//!
//! # Precedence
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults (see [`ReportPaths::default`])
//! 2. Config file given with `--config`
//! 3. Environment variables and command-line flags

pub mod loader;
pub mod options;
pub mod schema;

pub use loader::{load_config_file, parse_config};
pub use options::{OptionOverrides, ReportOptions, ReportPaths};
pub use schema::ReportConfig;
