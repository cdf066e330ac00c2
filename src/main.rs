use std::process::ExitCode;

/// Main entry point for the check-circular-import CLI tool
fn main() -> ExitCode {
    // Install miette's panic and error handler for readable error reporting
    miette::set_panic_hook();

    // Run the library's main function
    check_circular_import::run()
}
