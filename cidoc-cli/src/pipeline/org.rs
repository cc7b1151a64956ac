use cidoc_graph_ir::{Graph, Term};
use cidoc_mapping::{CidocMapping, SubjectUri};
use cidoc_tei::ElementRef;
use cidoc_vocab::crm;

use super::keyed_iri;

/// Identifiers, names and `located_in_place` residences of one `org`
pub(super) fn map_org<M: CidocMapping>(
    graph: &mut Graph,
    mapping: &M,
    subj: &SubjectUri,
    org: &ElementRef<'_>,
    domain: &str,
) {
    graph.merge(mapping.identifiers(subj, org));
    graph.merge(mapping.appellations(subj, org));

    let places = org
        .descendants("location")
        .filter(|l| l.attr("type") == Some("located_in_place"))
        .flat_map(|l| l.children_named("placeName"))
        .filter_map(|p| p.attr("key"));
    for key in places {
        graph.add_triple(
            subj.term(),
            Term::iri(crm::P74_HAS_CURRENT_OR_FORMER_RESIDENCE),
            keyed_iri(domain, key),
        );
    }
}
