//! Streaming graph construction
//!
//! A reader hands terms and statements to a [`GraphSink`] as it meets them.
//! [`GraphCollectorSink`] is the only sink the workspace needs: it appends to
//! a [`Graph`], which may already contain the pipeline's triples.

use crate::{Datatype, Graph, Term, Triple};
use rustc_hash::FxHashMap;

/// Handle for a term registered with a sink
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TermId(u32);

/// Receiver for the declarations, terms and statements of one document
///
/// ```
/// use cidoc_graph_ir::{Datatype, GraphCollectorSink, GraphSink};
///
/// let mut sink = GraphCollectorSink::new();
/// sink.declare_prefix("crm", "http://www.cidoc-crm.org/cidoc-crm/");
///
/// let married = sink.iri("https://pfp-custom-types/person-person/married");
/// let label = sink.iri("http://www.w3.org/2000/01/rdf-schema#label");
/// let text = sink.literal("verheiratet mit", Datatype::rdf_lang_string(), Some("de"));
/// sink.triple(married, label, text);
///
/// assert_eq!(sink.finish().len(), 1);
/// ```
pub trait GraphSink {
    /// `@base` / `BASE`
    fn declare_base(&mut self, base_iri: &str);

    /// `@prefix` / `PREFIX`
    fn declare_prefix(&mut self, prefix: &str, namespace_iri: &str);

    /// Absolute IRI
    fn iri(&mut self, iri: &str) -> TermId;

    /// Blank node. The same document label always yields the same node;
    /// `None` mints a fresh one.
    fn blank(&mut self, label: Option<&str>) -> TermId;

    fn literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId;

    fn triple(&mut self, subject: TermId, predicate: TermId, object: TermId);
}

/// Collects statements into a [`Graph`]
#[derive(Debug, Default)]
pub struct GraphCollectorSink {
    graph: Graph,
    terms: Vec<Term>,
    labelled: FxHashMap<String, TermId>,
    anonymous: u32,
}

impl GraphCollectorSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to `graph` instead of an empty one.
    ///
    /// Blank node labels from the document are prefixed (`_:x` becomes
    /// `_:ttl-x`) so they stay distinct from nodes already in `graph`.
    pub fn extending(graph: Graph) -> Self {
        Self {
            graph,
            ..Self::default()
        }
    }

    pub fn finish(self) -> Graph {
        self.graph
    }

    fn register(&mut self, term: Term) -> TermId {
        let id = TermId(self.terms.len() as u32);
        self.terms.push(term);
        id
    }

    fn term(&self, id: TermId) -> Option<Term> {
        self.terms.get(id.0 as usize).cloned()
    }
}

impl GraphSink for GraphCollectorSink {
    fn declare_base(&mut self, base_iri: &str) {
        self.graph.set_base(base_iri);
    }

    fn declare_prefix(&mut self, prefix: &str, namespace_iri: &str) {
        self.graph.add_prefix(prefix, namespace_iri);
    }

    fn iri(&mut self, iri: &str) -> TermId {
        self.register(Term::iri(iri))
    }

    fn blank(&mut self, label: Option<&str>) -> TermId {
        let Some(label) = label else {
            self.anonymous += 1;
            let name = format!("anon{}", self.anonymous);
            return self.register(Term::blank(name));
        };
        if let Some(id) = self.labelled.get(label) {
            return *id;
        }
        let id = self.register(Term::blank(format!("ttl-{label}")));
        self.labelled.insert(label.to_string(), id);
        id
    }

    fn literal(&mut self, value: &str, datatype: Datatype, language: Option<&str>) -> TermId {
        let term = match language {
            Some(lang) => Term::lang_string(value, lang),
            None => Term::typed(value, datatype),
        };
        self.register(term)
    }

    fn triple(&mut self, subject: TermId, predicate: TermId, object: TermId) {
        // ids are only ever handed out by this sink
        if let (Some(s), Some(p), Some(o)) =
            (self.term(subject), self.term(predicate), self.term(object))
        {
            self.graph.add(Triple::new(s, p, o));
        }
    }
}
