//! Mapping error types

use thiserror::Error;

/// Errors raised by the mapping functions
#[derive(Debug, Error)]
pub enum MappingError {
    /// A sub-element the mapping cannot do without is absent
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Relation lookup document is not a JSON object
    #[error("Invalid relation lookup: {0}")]
    InvalidLookup(String),
}

/// Result type for mapping operations
pub type MappingResult<T> = Result<T, MappingError>;
