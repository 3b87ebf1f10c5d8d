//! Error types for transform execution.

use std::path::PathBuf;

/// The result type of transform execution.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors raised while executing an artifact transform.
///
/// The matching cache itself never produces these; they originate in
/// transform implementations and propagate unchanged through composed
/// chains — no retry, no suppression.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    /// An I/O error occurred while reading the input or writing an output.
    #[error("transform I/O error at {}: {source}", path.display())]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The transform rejected or failed to process its input.
    #[error("transform failed on {}: {reason}", input.display())]
    Failed {
        /// The input file handed to the transform.
        input: PathBuf,
        /// Description of the failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = TransformError::Io {
            path: PathBuf::from("/work/lib.jar"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("transform I/O error"));
        assert!(msg.contains("lib.jar"));
    }

    #[test]
    fn failed_display() {
        let err = TransformError::Failed {
            input: PathBuf::from("broken.zip"),
            reason: "corrupt archive".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("broken.zip"));
        assert!(msg.contains("corrupt archive"));
    }
}
