//! Core generator traits and types
//!
//! This module defines the error type shared by the document model, the
//! template builder and the workbook writer, plus the [`Generator`] trait the
//! template builder implements for library callers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while building or writing the workbook
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Document construction error
    #[error("Workbook generation failed: {0}")]
    Generation(String),

    /// Invalid template options
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The finished workbook could not be written
    #[error("Failed to write workbook {}: {reason}", path.display())]
    Serialization {
        /// Destination that could not be written
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering of the model failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rust_xlsxwriter::XlsxError> for GeneratorError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        GeneratorError::Generation(err.to_string())
    }
}

/// A producer of a single output artifact.
pub trait Generator {
    /// Short generator name
    fn name(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Extension of the produced file, without the dot
    fn file_extension(&self) -> &'static str;

    /// Produce the artifact as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be produced.
    fn generate(&self) -> GeneratorResult<Vec<u8>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization_error_names_path() {
        let err = GeneratorError::Serialization {
            path: PathBuf::from("/read-only/out.xlsx"),
            reason: "Permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write workbook /read-only/out.xlsx: Permission denied"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: GeneratorError = io.into();
        assert!(matches!(err, GeneratorError::Io(_)));
    }
}
