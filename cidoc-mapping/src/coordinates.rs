//! `P168_place_is_defined_by` from TEI `geo`

use cidoc_graph_ir::{Datatype, Graph, Term};
use cidoc_tei::ElementRef;
use cidoc_vocab::crm;

use crate::emit::add;

/// WKT point from the first `geo` descendant (`"lat lng"`, space or comma
/// separated). No `geo` or an unreadable one gives an empty graph.
pub fn coordinates(subj: &str, element: &ElementRef<'_>) -> Graph {
    let mut g = Graph::new();
    let Some(geo) = element.first_descendant("geo") else {
        return g;
    };
    let text = geo.text();
    match parse_lat_lng(&text) {
        Some((lat, lng)) => add(
            &mut g,
            subj,
            crm::P168_PLACE_IS_DEFINED_BY,
            Term::typed(format!("Point({lng} {lat})"), Datatype::wkt_literal()),
        ),
        None => tracing::warn!(subject = %subj, geo = %text, "unreadable coordinates"),
    }
    g
}

/// Both parts must be numbers; the lexical form is kept
fn parse_lat_lng(text: &str) -> Option<(&str, &str)> {
    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let lat = parts.next()?;
    let lng = parts.next()?;
    if parts.next().is_some() || lat.parse::<f64>().is_err() || lng.parse::<f64>().is_err() {
        return None;
    }
    Some((lat, lng))
}
