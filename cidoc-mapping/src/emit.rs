//! Triple-building shorthands used by the mappers

use cidoc_graph_ir::{Graph, Term};
use cidoc_tei::ElementRef;
use cidoc_vocab::{crm, rdf, rdfs};

pub(crate) fn iri(s: impl AsRef<str>) -> Term {
    Term::iri(s)
}

pub(crate) fn add(graph: &mut Graph, s: &str, p: &str, o: Term) {
    graph.add_triple(iri(s), iri(p), o);
}

pub(crate) fn add_type(graph: &mut Graph, s: &str, class: &str) {
    add(graph, s, rdf::TYPE, iri(class));
}

pub(crate) fn add_label(graph: &mut Graph, s: &str, label: &str, lang: &str) {
    add(graph, s, rdfs::LABEL, Term::lang_string(label, lang));
}

/// `<iri> a crm:E55_Type`
pub(crate) fn add_e55(graph: &mut Graph, type_iri: &str) {
    add_type(graph, type_iri, crm::E55_TYPE);
}

/// `xml:lang` of the element, else `default`
pub(crate) fn lang_of<'a>(element: &ElementRef<'a>, default: &'a str) -> &'a str {
    element.xml_lang().unwrap_or(default)
}
