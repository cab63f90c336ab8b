//! External command execution.

pub mod command;
pub mod mock;

pub use command::{CommandError, CommandOutput, CommandRunner, SystemRunner, DEFAULT_TIMEOUT};
pub use mock::MockRunner;
