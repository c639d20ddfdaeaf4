//! Expected baseline versions.
//!
//! The baseline file is a plain-text list of `parameter: version` lines.
//! Loading never fails on malformed content: bad lines become
//! [`BaselineWarning`]s returned next to the parsed [`BaselineTable`].
//!
//! # Example
//!
//! ```
//! use agent_report::baseline::parse_baseline;
//!
//! let load = parse_baseline("agent_version: 2.0\nbroken line\n");
//! assert_eq!(load.table.get("agent_version"), Some(2.0));
//! assert_eq!(load.warnings.len(), 1);
//! ```

pub mod loader;
pub mod table;
pub mod warning;

pub use loader::{load_baseline, parse_baseline, BaselineLoad};
pub use table::{format_version, BaselineTable};
pub use warning::{BaselineWarning, WarningKind};
