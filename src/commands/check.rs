//! Check command implementation

use miette::{Result, WrapErr};

use crate::cli::Cli;
use crate::common::{ConfigBuilder, FromCli};
use crate::config::CheckImportsConfig;
use crate::error::CircularImportError;
use crate::executors::CommandExecutor;
use crate::executors::check::CheckExecutor;
use crate::reports::AnalysisSummary;

impl FromCli for CheckImportsConfig {
    fn from_cli(cli: Cli) -> Result<Self, CircularImportError> {
        let format = cli.format();
        CheckImportsConfig::builder()
            .with_root(cli.directory)
            .with_ignore(cli.ignore.patterns()?)
            .with_format(format)
            .with_verbose(cli.verbose)
            .with_max_cycles(cli.cycle_display.max_cycles)
            .with_jobs(cli.jobs)
            .build()
    }
}

crate::impl_try_from_cli!(CheckImportsConfig);

/// Execute the check command for detecting circular imports
pub fn execute_check_command(cli: Cli) -> Result<AnalysisSummary> {
    let config =
        CheckImportsConfig::from_cli(cli).wrap_err("Failed to parse check command configuration")?;

    CheckExecutor::execute(config)
}
