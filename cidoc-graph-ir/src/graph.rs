//! Triple set for one pipeline run
//!
//! Statements are kept in the order they were first added; a hash index
//! makes repeated insertion a no-op.

use crate::{Term, Triple};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// Set of triples, plus the `@base` / `@prefix` declarations of any Turtle
/// document merged into it
///
/// ```
/// use cidoc_graph_ir::{Graph, Term};
///
/// let person = || Term::iri("https://wmp1.acdh.oeaw.ac.at/pers_1");
/// let a = || Term::iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
/// let class = || Term::iri("http://www.cidoc-crm.org/cidoc-crm/E21_Person");
///
/// let mut run = Graph::new();
/// assert!(run.add_triple(person(), a(), class()));
/// assert!(!run.add_triple(person(), a(), class()));
///
/// let mut mapped = Graph::new();
/// mapped.add_triple(person(), a(), class());
/// mapped.add_triple(person(), a(), Term::iri("http://www.cidoc-crm.org/cidoc-crm/E39_Actor"));
/// assert_eq!(run.merge(mapped), 1);
/// assert_eq!(run.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: FxHashSet<Triple>,
    pub base: Option<String>,
    /// Prefix → namespace, ordered for stable output
    pub prefixes: BTreeMap<String, String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_base(&mut self, base: impl Into<String>) {
        self.base = Some(base.into());
    }

    pub fn add_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.prefixes.insert(prefix.into(), namespace.into());
    }

    /// Insert `triple`; `false` if it was already there
    pub fn add(&mut self, triple: Triple) -> bool {
        if !self.seen.insert(triple.clone()) {
            return false;
        }
        self.triples.push(triple);
        true
    }

    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) -> bool {
        self.add(Triple::new(s, p, o))
    }

    /// Union `other` into this graph and return how many of its triples
    /// were new. Prefixes already bound here win.
    pub fn merge(&mut self, other: Graph) -> usize {
        for (prefix, ns) in other.prefixes {
            self.prefixes.entry(prefix).or_insert(ns);
        }
        other
            .triples
            .into_iter()
            .filter(|t| self.add(t.clone()))
            .count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    pub fn has(&self, s: &Term, p: &Term, o: &Term) -> bool {
        self.contains(&Triple::new(s.clone(), p.clone(), o.clone()))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// `o` for every `(s, p, o)`
    pub fn objects<'a>(&'a self, s: &'a Term, p: &'a Term) -> impl Iterator<Item = &'a Term> + 'a {
        self.iter().filter(move |t| &t.s == s && &t.p == p).map(|t| &t.o)
    }

    /// `s` for every `(s, p, o)`
    pub fn subjects<'a>(&'a self, p: &'a Term, o: &'a Term) -> impl Iterator<Item = &'a Term> + 'a {
        self.iter().filter(move |t| &t.p == p && &t.o == o).map(|t| &t.s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    fn places() -> Graph {
        let mut graph = Graph::new();
        for (place, name, lang) in [
            ("place_2", "Graz", "de"),
            ("place_1", "Wien", "de"),
            ("place_1", "Vienna", "en"),
        ] {
            graph.add_triple(
                Term::iri(format!("https://wmp1.acdh.oeaw.ac.at/{place}")),
                Term::iri(LABEL),
                Term::lang_string(name, lang),
            );
        }
        graph
    }

    #[test]
    fn test_duplicates_are_ignored() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());

        let triple = Triple::new(
            Term::iri("https://wmp1.acdh.oeaw.ac.at/pers_1"),
            Term::iri(LABEL),
            Term::string("Maier, Hans"),
        );
        assert!(graph.add(triple.clone()));
        assert!(!graph.add(triple.clone()));
        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&triple));
    }

    #[test]
    fn test_insertion_order() {
        let graph = places();
        let first: Vec<_> = graph.iter().map(|t| t.s.as_iri()).collect();
        assert_eq!(
            first,
            [
                Some("https://wmp1.acdh.oeaw.ac.at/place_2"),
                Some("https://wmp1.acdh.oeaw.ac.at/place_1"),
                Some("https://wmp1.acdh.oeaw.ac.at/place_1"),
            ]
        );
    }

    #[test]
    fn test_merge_counts_new_triples() {
        let mut graph = places();
        let mut other = places();
        other.add_triple(
            Term::iri("https://wmp1.acdh.oeaw.ac.at/place_3"),
            Term::iri(LABEL),
            Term::lang_string("Linz", "de"),
        );
        other.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        graph.add_prefix("rdfs", "urn:kept");

        assert_eq!(graph.merge(other), 1);
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.prefixes["rdfs"], "urn:kept");
    }

    #[test]
    fn test_objects_and_subjects() {
        let graph = places();
        let place_1 = Term::iri("https://wmp1.acdh.oeaw.ac.at/place_1");
        let label = Term::iri(LABEL);
        assert_eq!(graph.objects(&place_1, &label).count(), 2);

        let graz = Term::lang_string("Graz", "de");
        let subjects: Vec<_> = graph.subjects(&label, &graz).collect();
        assert_eq!(subjects, [&Term::iri("https://wmp1.acdh.oeaw.ac.at/place_2")]);
    }
}
