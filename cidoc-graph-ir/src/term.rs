//! IRIs, blank nodes and literals
//!
//! IRIs are stored expanded. Literals always carry a datatype; a language
//! tag implies `rdf:langString`.

use crate::Datatype;
use std::fmt;
use std::sync::Arc;

/// Blank node label, without `_:`
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankId(Arc<str>);

impl BlankId {
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(label.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Lexical form, datatype and optional language tag
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Datatype,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Unescaped lexical form
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Datatype {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// Node in any triple position.
///
/// Derived ordering (blank nodes < IRIs < literals) is the order the
/// N-Triples writer sorts by.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    BlankNode(BlankId),
    Iri(Arc<str>),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(iri.as_ref().into())
    }

    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode(BlankId::new(label))
    }

    /// `xsd:string` literal
    pub fn string(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_string())
    }

    /// `rdf:langString` literal, e.g. a label with `xml:lang`
    pub fn lang_string(value: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Term::Literal(Literal {
            lexical: value.as_ref().into(),
            datatype: Datatype::rdf_lang_string(),
            language: Some(lang.as_ref().into()),
        })
    }

    pub fn typed(value: impl AsRef<str>, datatype: Datatype) -> Self {
        Term::Literal(Literal {
            lexical: value.as_ref().into(),
            datatype,
            language: None,
        })
    }

    /// `xsd:date` from `YYYY-MM-DD`
    pub fn date(value: impl AsRef<str>) -> Self {
        Self::typed(value, Datatype::xsd_date())
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

/// Unescaped, for logs and test messages
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::BlankNode(id) => fmt::Display::fmt(id, f),
            Term::Literal(lit) => match (&lit.language, lit.datatype.is_xsd_string()) {
                (Some(lang), _) => write!(f, "\"{}\"@{lang}", lit.lexical),
                (None, true) => write!(f, "\"{}\"", lit.lexical),
                (None, false) => write!(f, "\"{}\"^^<{}>", lit.lexical, lit.datatype),
            },
        }
    }
}
