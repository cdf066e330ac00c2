//! Command executors that handle the actual logic for each command

pub mod check;

use miette::Result;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;
    type Output;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<Self::Output>;
}
