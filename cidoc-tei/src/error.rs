//! Error types for TEI parsing

/// Errors raised while reading a TEI document
#[derive(Debug, thiserror::Error)]
pub enum TeiError {
    /// Malformed XML reported by the reader
    #[error("XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// End tag that does not close the innermost open element
    #[error("unexpected end tag </{name}> at byte {position}")]
    UnexpectedEnd { position: u64, name: String },

    /// Input ended with elements still open
    #[error("unclosed element <{0}> at end of document")]
    Unclosed(String),

    #[error("document has no root element")]
    NoRoot,
}

/// Result type for TEI operations
pub type Result<T> = std::result::Result<T, TeiError>;
