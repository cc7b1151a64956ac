//! Error types for Turtle parsing

/// Error type for Turtle parsing operations
#[derive(Debug, thiserror::Error)]
pub enum TurtleError {
    /// Invalid token; `message` includes the offending source line
    #[error("Lexer error at line {line}, column {column}: {message}")]
    Lexer {
        position: usize,
        line: usize,
        column: usize,
        message: String,
    },

    /// Unexpected token or invalid structure
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// Relative IRI without a base
    #[error("IRI resolution error: {0}")]
    IriResolution(String),

    #[error("Undefined prefix: {0}")]
    UndefinedPrefix(String),
}

/// Result type for Turtle operations
pub type Result<T> = std::result::Result<T, TurtleError>;

impl TurtleError {
    /// Create a parse error
    pub fn parse(position: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            position,
            message: message.into(),
        }
    }
}
