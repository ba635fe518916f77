//! Error types for generation runs and output operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for generation runs
///
/// Malformed numeric input never appears here: it is recovered locally by
/// substituting the documented default. Errors are reserved for conditions
/// that end the affected step, and there are no retries anywhere.
#[derive(Debug)]
pub enum GenerationError {
    /// Output destination could not be opened or written
    ///
    /// The generated map is discarded; no partial file is kept on purpose.
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Interactive run ended without an output filename
    MissingOutputPath,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::MissingOutputPath => {
                write!(f, "No output filename given; aborting")
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::MissingOutputPath => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

impl From<std::io::Error> for GenerationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a file system error for a named destination
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_system_error_reports_path_and_operation() {
        let err = file_system_error(
            Path::new("out/map.txt"),
            "write output",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let message = err.to_string();
        assert!(message.contains("write output"));
        assert!(message.contains("out/map.txt"));
    }

    #[test]
    fn missing_output_path_has_a_message() {
        let message = GenerationError::MissingOutputPath.to_string();
        assert!(message.contains("output filename"));
    }
}
