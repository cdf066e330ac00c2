//! Common functionality shared by the CLI and configuration layers

use clap::Args;

use crate::config::IgnorePatterns;
use crate::error::CircularImportError;

/// Ignore pattern arguments
#[derive(Args, Debug, Clone, Default)]
pub struct IgnoreArgs {
    /// Additional directory or file names (or globs) to skip, added to the
    /// defaults
    #[arg(
        long,
        value_name = "PATTERN",
        num_args = 1..,
        value_delimiter = ',',
        env = "CHECK_CIRCULAR_IMPORT_IGNORE"
    )]
    pub ignore: Vec<String>,
}

/// Common cycle display arguments
#[derive(Args, Debug, Clone, Default)]
pub struct CycleDisplayArgs {
    /// Maximum number of cycles to display (shows all by default)
    #[arg(long, env = "CHECK_CIRCULAR_IMPORT_MAX_CYCLES")]
    pub max_cycles: Option<usize>,
}

impl IgnoreArgs {
    /// The default ignore set plus the user's patterns
    pub fn patterns(&self) -> Result<IgnorePatterns, CircularImportError> {
        IgnorePatterns::with_additional(self.ignore.iter().map(String::as_str))
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, CircularImportError>;
}

/// Trait for configurations that can be created from the parsed CLI
pub trait FromCli: Sized {
    fn from_cli(cli: crate::cli::Cli) -> Result<Self, CircularImportError>;
}

/// Macro to implement `TryFrom<Cli>` using [`FromCli`] trait
#[macro_export]
macro_rules! impl_try_from_cli {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Cli> for $config {
            type Error = $crate::error::CircularImportError;

            fn try_from(cli: $crate::cli::Cli) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCli>::from_cli(cli)
            }
        }
    };
}
