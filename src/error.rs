use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CircularImportError {
    #[error("Project root '{path}' does not exist")]
    #[diagnostic(
        code(check_circular_import::root_not_found),
        help("Pass an existing directory as the project root")
    )]
    RootNotFound { path: PathBuf },

    #[error("Project root '{path}' is not a directory")]
    #[diagnostic(
        code(check_circular_import::root_not_directory),
        help("The project root must be a directory containing Python sources")
    )]
    RootNotDirectory { path: PathBuf },

    #[error("Failed to read project root '{path}'")]
    #[diagnostic(
        code(check_circular_import::root_unreadable),
        help("Check if the directory exists and you have read permissions")
    )]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid ignore pattern '{pattern}'")]
    #[diagnostic(
        code(check_circular_import::invalid_ignore_pattern),
        help("Ignore patterns are plain names or shell globs such as '*.egg-info'")
    )]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to load the Python grammar")]
    #[diagnostic(
        code(check_circular_import::grammar_error),
        help("This is likely an internal error - please report it")
    )]
    Grammar(#[from] tree_sitter::LanguageError),

    #[error("Failed to start the parser worker pool")]
    #[diagnostic(
        code(check_circular_import::thread_pool_error),
        help("Try lowering --jobs")
    )]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(check_circular_import::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(check_circular_import::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(check_circular_import::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
