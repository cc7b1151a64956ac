//! Turtle token types.

use std::sync::Arc;

/// A token with its byte span in the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }
}

/// Token kinds for Turtle.
///
/// Numeric literals keep their lexical form; the graph stores literals
/// lexically, so there is nothing to gain from converting them.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// `<…>`, escapes already decoded, not yet resolved against the base
    Iri(Arc<str>),

    /// `prefix:local`; `local` is empty for a bare `prefix:`
    PrefixedName { prefix: Arc<str>, local: Arc<str> },

    /// `_:label`
    BlankNodeLabel(Arc<str>),

    /// String literal content, escapes decoded
    String(Arc<str>),
    Integer(Arc<str>),
    Decimal(Arc<str>),
    Double(Arc<str>),

    /// Language tag without the `@`
    LangTag(Arc<str>),

    KwPrefix,
    KwBase,
    KwSparqlPrefix,
    KwSparqlBase,
    KwA,
    KwTrue,
    KwFalse,

    Dot,
    Comma,
    Semicolon,
    DoubleCaret,
    LBracket,
    RBracket,
    LParen,
    RParen,

    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Iri(s) => write!(f, "<{}>", s),
            TokenKind::PrefixedName { prefix, local } => write!(f, "{}:{}", prefix, local),
            TokenKind::BlankNodeLabel(s) => write!(f, "_:{}", s),
            TokenKind::String(s) => write!(f, "\"{}\"", s),
            TokenKind::Integer(s) | TokenKind::Decimal(s) | TokenKind::Double(s) => {
                f.write_str(s)
            }
            TokenKind::LangTag(s) => write!(f, "@{}", s),
            TokenKind::KwPrefix => f.write_str("@prefix"),
            TokenKind::KwBase => f.write_str("@base"),
            TokenKind::KwSparqlPrefix => f.write_str("PREFIX"),
            TokenKind::KwSparqlBase => f.write_str("BASE"),
            TokenKind::KwA => f.write_str("a"),
            TokenKind::KwTrue => f.write_str("true"),
            TokenKind::KwFalse => f.write_str("false"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::DoubleCaret => f.write_str("^^"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
