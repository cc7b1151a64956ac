//! RDF graph formatters
//!
//! Converts a `cidoc_graph_ir::Graph` to N-Triples, the output format of the
//! export pipelines.
//!
//! # Example
//!
//! ```
//! use cidoc_graph_ir::{Graph, Term};
//! use cidoc_graph_format::{format_ntriples, NTriplesFormatConfig};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("https://example.org/p1"),
//!     Term::iri("http://www.w3.org/2000/01/rdf-schema#label"),
//!     Term::lang_string("Wien", "de"),
//! );
//!
//! let nt = format_ntriples(&graph, &NTriplesFormatConfig::default());
//! assert_eq!(
//!     nt,
//!     "<https://example.org/p1> <http://www.w3.org/2000/01/rdf-schema#label> \"Wien\"@de .\n"
//! );
//! ```

mod error;
mod ntriples;

pub use error::{FormatError, Result};
pub use ntriples::{format_ntriples, write_ntriples, write_ntriples_file, NTriplesFormatConfig};
