//! Error module for the spikeconv demo.
use std::error::Error;
use std::fmt;

/// Error types for the demo.
#[derive(Debug, PartialEq)]
pub enum DemoError {
    /// Error for an unrecognized kernel selector, e.g., from the command line.
    UnknownKernel(String),
    /// Error for I/O operations, e.g., terminal setup or log file creation.
    IOError(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DemoError::UnknownKernel(name) => write!(
                f,
                "Unknown kernel '{}': must be one of boxcar, gaussian, exponential",
                name
            ),
            DemoError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for DemoError {}
