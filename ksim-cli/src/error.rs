//! Error handling for the KSIM CLI

use ksim_core::{InputError, ScanError, VerifyError};
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for KSIM CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Input/Output error: {message}")]
    Io { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Scan error: {message}")]
    Scan { message: String },

    #[error("Verification failed: {message}")]
    Verification { message: String },
}

impl CliError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io { message: message.into() }
    }

    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    pub fn scan<S: Into<String>>(message: S) -> Self {
        Self::Scan { message: message.into() }
    }

    pub fn verification<S: Into<String>>(message: S) -> Self {
        Self::Verification { message: message.into() }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<InputError> for CliError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Io(io) => Self::io(io.to_string()),
            other => Self::invalid_input(other.to_string()),
        }
    }
}

impl From<ScanError> for CliError {
    fn from(err: ScanError) -> Self {
        Self::scan(err.to_string())
    }
}

impl From<VerifyError> for CliError {
    fn from(err: VerifyError) -> Self {
        Self::verification(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Provide helpful error messages and suggestions
pub fn format_error_with_suggestions(error: &CliError) -> String {
    let mut message = error.to_string();

    match error {
        CliError::FileNotFound { path } => {
            message.push_str(&format!(
                "\n\nSuggestions:\n\
                 • Check that the file path is correct: {}\n\
                 • Ensure you have read permissions for the file\n\
                 • Omit the path (or pass '-') to read the dataset from stdin",
                path.display()
            ));
        }

        CliError::InvalidInput { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • The dataset is three whitespace-separated tokens: k, pattern, text\n\
                 • k must be a non-negative integer",
            );
        }

        CliError::Config { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Check your ksim.toml configuration file\n\
                 • Use 'ksim --example-config' to generate a sample configuration",
            );
        }

        CliError::Scan { .. } => {
            message.push_str(
                "\n\nSuggestions:\n\
                 • Use at least one thread with --threads\n\
                 • Try the sequential engine with --strategy reuse",
            );
        }

        _ => {}
    }

    message
}

/// Print error with helpful suggestions and exit
pub fn print_error_and_exit(error: &CliError) -> ! {
    eprintln!("Error: {}", format_error_with_suggestions(error));
    std::process::exit(1);
}
