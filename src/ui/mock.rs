//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and captures all output for later
//! assertion.

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Captured plain messages, including key-value lines.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any captured message contains `needle`.
    pub fn has_message_containing(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|m| m.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.key_value("Hosts", "2");

        assert_eq!(ui.messages(), &["plain".to_string(), "Hosts: 2".to_string()]);
        assert_eq!(ui.successes(), &["done".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["broken".to_string()]);
        assert!(ui.has_message_containing("Hosts"));
    }

    #[test]
    fn with_mode_reports_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }
}
