//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which picks the
//! `--about` banner or the default check run from the parsed flags.

pub mod about;
pub mod check;
pub mod dispatcher;

pub use about::AboutCommand;
pub use check::CheckCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
