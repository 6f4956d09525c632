use miette::Diagnostic;
use thiserror::Error;

/// Main error type for incscan operations
#[derive(Error, Diagnostic, Debug)]
pub enum IncError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(incscan::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Directory not found at '{}'", path.display())]
    #[diagnostic(code(incscan::input))]
    MissingInput {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(incscan::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Output error: {message}")]
    #[diagnostic(code(incscan::output))]
    Output {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, IncError>;
