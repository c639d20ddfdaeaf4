//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed through
//! [`CommandDispatcher`].

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod generate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
