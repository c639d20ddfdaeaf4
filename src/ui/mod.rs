//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] for real runs
//! - [`MockUI`] which records everything for assertions
//!
//! # Example
//!
//! ```
//! use agent_report::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Report written");
//! assert_eq!(ui.successes(), &["Report written".to_string()]);
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ReportTheme};

/// Trait for user-facing output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Display a `key: value` line.
    fn key_value(&mut self, key: &str, value: &str) {
        self.message(&format!("{}: {}", key, value));
    }
}
