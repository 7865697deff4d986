//! Centralized error types for the persona workspace.

use crate::types::Tag;
use thiserror::Error;

/// Top-level error enum. Every variant is a caller-input or dataset problem;
/// the filter itself cannot fail mid-scan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PersonaError {
    #[error("Invalid variant: {0:?} (expected \"user\" or \"admin\")")]
    InvalidVariant(String),

    #[error("Invalid criteria field for {variant}: {field:?}")]
    InvalidCriteriaField { variant: Tag, field: String },

    #[error("Invalid criteria value for {field:?}: {reason}")]
    InvalidCriteriaValue { field: String, reason: String },

    #[error("Dataset error: {0}")]
    Dataset(String),
}

pub type PersonaResult<T> = Result<T, PersonaError>;
