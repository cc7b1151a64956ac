//! In-memory RDF graph for the CIDOC-CRM export
//!
//! This crate provides the canonical types shared by the mapping engine, the
//! Turtle reader and the N-Triples writer.
//!
//! IRIs are always expanded, literals keep their lexical form with an
//! explicit datatype, and a [`Graph`] ignores statements it already holds.
//!
//! # Example
//!
//! ```
//! use cidoc_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! let added = graph.add_triple(
//!     Term::iri("https://example.org/p1"),
//!     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
//!     Term::lang_string("Wien", "de"),
//! );
//! assert!(added);
//!
//! // Re-inserting the same statement leaves the graph unchanged
//! let added = graph.add_triple(
//!     Term::iri("https://example.org/p1"),
//!     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
//!     Term::lang_string("Wien", "de"),
//! );
//! assert!(!added);
//! assert_eq!(graph.len(), 1);
//! ```

pub mod datatype;
mod graph;
mod sink;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use sink::{GraphCollectorSink, GraphSink, TermId};
pub use term::{BlankId, Literal, Term};
pub use triple::Triple;
