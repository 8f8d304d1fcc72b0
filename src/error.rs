//! Error handling for the sort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input file format: {file} (expected .{expected})")]
    InvalidFormat { file: String, expected: String },

    #[error("Cannot open input file: {file}")]
    FileNotFound { file: String },

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("Cannot open output file: {file}")]
    OutputUnwritable { file: String },

    #[error("Invalid sort type: {choice}")]
    InvalidAlgorithm { choice: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    ///
    /// Every failure is terminal for the run and shares the same code.
    pub fn exit_code(&self) -> i32 {
        crate::EXIT_FAILURE
    }

    /// Create an invalid file format error
    pub fn invalid_format(file: &str, expected: &str) -> Self {
        SortError::InvalidFormat {
            file: file.to_string(),
            expected: expected.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create an output unwritable error
    pub fn output_unwritable(file: &str) -> Self {
        SortError::OutputUnwritable {
            file: file.to_string(),
        }
    }

    /// Create an invalid algorithm error
    pub fn invalid_algorithm(choice: &str) -> Self {
        SortError::InvalidAlgorithm {
            choice: choice.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: &str) -> Self {
        SortError::InvalidConfig {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for adding context to errors
pub trait SortContext<T> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String;

    /// Map an error from opening or reading an input file
    fn with_file_context(self, filename: &str) -> SortResult<T>;

    /// Map an error from creating or writing an output file
    fn with_output_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_context<F>(self, f: F) -> SortResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|io_err| {
            SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", f(), io_err),
            ))
        })
    }

    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }

    fn with_output_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied | io::ErrorKind::NotFound => {
                SortError::output_unwritable(filename)
            }
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
