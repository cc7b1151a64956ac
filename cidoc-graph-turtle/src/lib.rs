//! Turtle (TTL) reader.
//!
//! Parses Turtle documents, such as the relation-type ontology extension,
//! and emits triples to a `cidoc_graph_ir::GraphSink`.
//!
//! # Example
//!
//! ```
//! use cidoc_graph_ir::{Graph, Term};
//! use cidoc_graph_turtle::parse_into;
//!
//! let ttl = r#"
//!     @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
//!     <https://example.org/types/wife> rdfs:label "Ehefrau"@de .
//! "#;
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("https://example.org/p1"),
//!     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
//!     Term::lang_string("Anna", "de"),
//! );
//!
//! let graph = parse_into(ttl, graph).unwrap();
//! assert_eq!(graph.len(), 2);
//! ```

pub mod error;
mod iri;
pub mod lex;
pub mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Lexer, Token, TokenKind};
pub use parser::parse;

use cidoc_graph_ir::{Graph, GraphCollectorSink};

/// Parse a Turtle document into a new graph.
pub fn parse_graph(input: &str) -> Result<Graph> {
    parse_into(input, Graph::new())
}

/// Parse a Turtle document and union its triples into `graph`.
pub fn parse_into(input: &str, graph: Graph) -> Result<Graph> {
    let mut sink = GraphCollectorSink::extending(graph);
    parse(input, &mut sink)?;
    Ok(sink.finish())
}
