//! Per-host parameter inventory.
//!
//! The inventory is a YAML mapping from host name to a mapping of parameter
//! name to observed value. Host and parameter order follow the document.
//!
//! # Example
//!
//! ```
//! use agent_report::inventory::{parse_inventory, ParameterSet};
//! use std::path::Path;
//!
//! let yaml = "web-01:\n  agent_version: '2.5'\n  svc_status: Running\n";
//! let report = parse_inventory(yaml, Path::new("report.yaml")).unwrap();
//! assert_eq!(report.host_names(), vec!["web-01"]);
//! assert_eq!(report.parameters(ParameterSet::Union), vec!["agent_version", "svc_status"]);
//! ```

pub mod host;
pub mod loader;

pub use host::{HostEntry, HostReport, ParameterSet};
pub use loader::{load_inventory, parse_inventory};
