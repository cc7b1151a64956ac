//! Subject URIs

use cidoc_graph_ir::Term;
use std::fmt;

/// `{domain}{xml_id}`, remembering where the identifier starts
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubjectUri {
    iri: String,
    id_start: usize,
}

impl SubjectUri {
    pub fn new(domain: &str, xml_id: &str) -> Self {
        Self {
            iri: format!("{domain}{xml_id}"),
            id_start: domain.len(),
        }
    }

    /// Split an IRI minted under `domain` back into a subject
    pub fn parse(domain: &str, iri: &str) -> Option<Self> {
        let id = iri.strip_prefix(domain)?;
        (!id.is_empty()).then(|| Self::new(domain, id))
    }

    pub fn as_str(&self) -> &str {
        &self.iri
    }

    /// The identifier the URI was minted from
    pub fn xml_id(&self) -> &str {
        &self.iri[self.id_start..]
    }

    pub fn term(&self) -> Term {
        Term::iri(&self.iri)
    }

    /// `{subject}/{path}`
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.iri, path)
    }
}

impl fmt::Display for SubjectUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iri)
    }
}

impl AsRef<str> for SubjectUri {
    fn as_ref(&self) -> &str {
        &self.iri
    }
}
