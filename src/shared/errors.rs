//! Errors raised while encoding sequences and assembling feature records
#[cfg(all(feature = "py_binds", feature = "pyo3"))]
use pyo3::{exceptions::PyValueError, PyErr};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    // composition/transition/distribution need at least one class label
    #[error("Empty class encoding for the property table '{table}'")]
    EmptyEncoding { table: String },

    // position is 1-based
    #[error("Invalid residue '{residue}' at position {position} (table: {table})")]
    InvalidResidue {
        residue: char,
        position: usize,
        table: String,
    },

    #[error("Empty protein sequence")]
    EmptySequence,

    #[error("Invalid property table '{name}': {reason}")]
    InvalidTable { name: String, reason: String },

    #[error("Descriptor '{name}' has {found} values, expected {expected}")]
    DimensionMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Missing feature file: {}", .0.display())]
    MissingFeatureFile(PathBuf),

    #[error("Configuration error: {field} - {message}")]
    Configuration { field: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FeatureResult<T> = Result<T, FeatureError>;

impl FeatureError {
    /// True for the errors that only concern a single protein
    /// (a batch keeps going after those).
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            FeatureError::EmptyEncoding { .. }
                | FeatureError::InvalidResidue { .. }
                | FeatureError::EmptySequence
                | FeatureError::DimensionMismatch { .. }
                | FeatureError::MissingFeatureFile(_)
                | FeatureError::Parse(_)
        )
    }
}

#[cfg(all(feature = "py_binds", feature = "pyo3"))]
impl From<FeatureError> for PyErr {
    fn from(err: FeatureError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
