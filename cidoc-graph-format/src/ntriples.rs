//! N-Triples graph formatter
//!
//! One statement per line, `<s> <p> <o> .`, UTF-8, LF line endings.

use cidoc_graph_ir::{Graph, Literal, Term, Triple};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

use crate::error::{FormatError, Result};

/// Configuration for N-Triples formatting
#[derive(Clone, Debug)]
pub struct NTriplesFormatConfig {
    /// Emit triples in SPO order instead of insertion order
    ///
    /// On by default so the same graph always produces byte-identical output.
    pub sorted: bool,
}

impl Default for NTriplesFormatConfig {
    fn default() -> Self {
        Self { sorted: true }
    }
}

impl NTriplesFormatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep insertion order
    pub fn insertion_order(mut self) -> Self {
        self.sorted = false;
        self
    }
}

/// Format a graph as an N-Triples document
pub fn format_ntriples(graph: &Graph, config: &NTriplesFormatConfig) -> String {
    let mut out = String::with_capacity(graph.len() * 128);
    for triple in ordered(graph, config) {
        push_triple(&mut out, triple);
    }
    out
}

/// Write a graph to any writer
pub fn write_ntriples<W: Write>(
    graph: &Graph,
    config: &NTriplesFormatConfig,
    mut writer: W,
) -> io::Result<()> {
    let mut line = String::with_capacity(256);
    for triple in ordered(graph, config) {
        line.clear();
        push_triple(&mut line, triple);
        writer.write_all(line.as_bytes())?;
    }
    writer.flush()
}

/// Write a graph to `path`, replacing any existing file
///
/// The document goes to a temporary file in the same directory which is
/// then renamed over `path`; a failed write leaves the previous file intact.
/// The parent directory is created if missing. An existing file keeps its
/// permissions; a new one gets `0o644` minus the process umask.
pub fn write_ntriples_file(
    path: &Path,
    graph: &Graph,
    config: &NTriplesFormatConfig,
) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| FormatError::io(dir, e))?;

    let mut tmp = temp_file_in(dir).map_err(|e| FormatError::io(dir, e))?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| FormatError::io(path, e))?;
    }
    write_ntriples(graph, config, io::BufWriter::new(tmp.as_file_mut()))
        .map_err(|e| FormatError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| FormatError::io(path, e.error))?;

    tracing::debug!(path = %path.display(), triples = graph.len(), "wrote n-triples");
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;
    // mode is applied at creation, so the umask still masks it
    Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o644))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}

fn ordered<'a>(graph: &'a Graph, config: &NTriplesFormatConfig) -> Vec<&'a Triple> {
    let mut triples: Vec<&Triple> = graph.iter().collect();
    if config.sorted {
        triples.sort();
    }
    triples
}

fn push_triple(out: &mut String, triple: &Triple) {
    push_term(out, &triple.s);
    out.push(' ');
    push_term(out, &triple.p);
    out.push(' ');
    push_term(out, &triple.o);
    out.push_str(" .\n");
}

fn push_term(out: &mut String, term: &Term) {
    match term {
        Term::Iri(iri) => {
            out.push('<');
            escape_iri(out, iri);
            out.push('>');
        }
        Term::BlankNode(id) => {
            out.push_str("_:");
            out.push_str(id.as_str());
        }
        Term::Literal(lit) => push_literal(out, lit),
    }
}

fn push_literal(out: &mut String, lit: &Literal) {
    out.push('"');
    escape_string(out, lit.lexical());
    out.push('"');
    if let Some(lang) = lit.language() {
        out.push('@');
        out.push_str(lang);
    } else if !lit.datatype().is_xsd_string() {
        out.push_str("^^<");
        escape_iri(out, lit.datatype().as_iri());
        out.push('>');
    }
}

/// ECHAR escapes for string literals
fn escape_string(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// UCHAR escapes for characters IRIREF does not allow
fn escape_iri(out: &mut String, iri: &str) {
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c if (c as u32) <= 0x20 => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidoc_graph_ir::Datatype;
    use cidoc_vocab::{crm, rdf, rdfs};

    fn line(s: Term, p: Term, o: Term) -> String {
        let mut g = Graph::new();
        g.add_triple(s, p, o);
        format_ntriples(&g, &NTriplesFormatConfig::default())
    }

    #[test]
    fn test_iri_triple() {
        assert_eq!(
            line(
                Term::iri("https://wmp1.acdh.oeaw.ac.at/p1"),
                Term::iri(rdf::TYPE),
                Term::iri(crm::E53_PLACE),
            ),
            "<https://wmp1.acdh.oeaw.ac.at/p1> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.cidoc-crm.org/cidoc-crm/E53_Place> .\n"
        );
    }

    #[test]
    fn test_literal_forms() {
        let s = Term::iri("https://example.org/s");
        let p = Term::iri(rdfs::LABEL);

        assert!(line(s.clone(), p.clone(), Term::string("plain")).ends_with("\"plain\" .\n"));
        assert!(line(s.clone(), p.clone(), Term::lang_string("Wien", "de"))
            .ends_with("\"Wien\"@de .\n"));
        assert!(line(
            s.clone(),
            p.clone(),
            Term::typed("Point(16.37 48.21)", Datatype::wkt_literal())
        )
        .ends_with(
            "\"Point(16.37 48.21)\"^^<http://www.opengis.net/ont/geosparql#wktLiteral> .\n"
        ));
        assert!(line(s, p, Term::blank("b0")).ends_with("_:b0 .\n"));
    }

    #[test]
    fn test_string_escapes() {
        let out = line(
            Term::iri("https://example.org/s"),
            Term::iri(rdfs::LABEL),
            Term::string("say \"hi\"\\\nbye"),
        );
        assert!(out.ends_with("\"say \\\"hi\\\"\\\\\\nbye\" .\n"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_iri_escapes() {
        let out = line(
            Term::iri("https://example.org/a b"),
            Term::iri(rdfs::LABEL),
            Term::string("x"),
        );
        assert!(out.starts_with("<https://example.org/a\\u0020b>"));
    }

    #[test]
    fn test_sorted_output_ignores_insertion_order() {
        let p = Term::iri(rdfs::LABEL);
        let mut a = Graph::new();
        a.add_triple(Term::iri("https://example.org/b"), p.clone(), Term::string("b"));
        a.add_triple(Term::iri("https://example.org/a"), p.clone(), Term::string("a"));

        let mut b = Graph::new();
        b.add_triple(Term::iri("https://example.org/a"), p.clone(), Term::string("a"));
        b.add_triple(Term::iri("https://example.org/b"), p, Term::string("b"));

        let config = NTriplesFormatConfig::default();
        assert_eq!(format_ntriples(&a, &config), format_ntriples(&b, &config));
        assert_ne!(
            format_ntriples(&a, &config.clone().insertion_order()),
            format_ntriples(&b, &config.insertion_order())
        );
    }
}
