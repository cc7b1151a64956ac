//! Turtle lexer module.
//!
//! Tokenizes Turtle input using winnow.

pub mod lexer;
pub mod token;

pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
