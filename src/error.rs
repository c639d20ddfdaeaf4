//! Error types for report generation.
//!
//! This module defines [`ReportError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Baseline lines that fail to parse are warnings, not errors
//!   (see [`crate::baseline::BaselineWarning`])
//! - Missing inputs, unreadable YAML and empty inventories are fatal
//! - Use `anyhow::Error` (via `ReportError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for report operations.
#[derive(Debug, Error)]
pub enum ReportError {
    /// An input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The inventory document is not valid YAML or not a mapping of mappings.
    #[error("Failed to parse inventory at {path}: {message}")]
    InventoryParse { path: PathBuf, message: String },

    /// The inventory document contains no hosts.
    #[error("Inventory at {path} contains no hosts")]
    EmptyInventory { path: PathBuf },

    /// A parameter value is a sequence or mapping rather than a scalar.
    #[error("Unsupported value for '{parameter}' on host '{host}': expected a scalar")]
    UnsupportedValue { host: String, parameter: String },

    /// The HTML report could not be written.
    #[error("Failed to write report to {path}: {source}")]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the report config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReportError {
    /// Map a read error on `path` into [`ReportError::FileNotFound`] when the
    /// file is missing, or [`ReportError::Io`] otherwise.
    pub fn from_read(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ReportError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReportError::Io(err)
        }
    }
}

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
