//! Error types for the shader build tool
//!
//! A non-zero compiler exit code is NOT an error: it is recorded as a failed
//! outcome in the build report. Errors here are the conditions that stop an
//! operation before the compiler gets to say anything.

use std::fmt;

/// Result type for shader build operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shader build errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Malformed input (manifest entry, shader model, file name)
    InvalidInput(String),

    /// Requested shader file is not part of the manifest
    UnknownShader(String),

    /// The external compiler executable could not be found
    CompilerNotFound(String),

    /// The external compiler could not be started
    LaunchFailed(String),

    /// Filesystem error (output directory creation, source listing)
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::UnknownShader(name) => write!(f, "Shader '{}' is not in the manifest", name),
            Error::CompilerNotFound(msg) => write!(f, "Shader compiler not found: {}", msg),
            Error::LaunchFailed(msg) => write!(f, "Failed to launch shader compiler: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
