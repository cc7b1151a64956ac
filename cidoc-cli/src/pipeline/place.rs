use cidoc_graph_ir::Graph;
use cidoc_mapping::{CidocMapping, SubjectUri};
use cidoc_tei::ElementRef;

/// Identifiers, names and coordinates of one `place`
pub(super) fn map_place<M: CidocMapping>(
    graph: &mut Graph,
    mapping: &M,
    subj: &SubjectUri,
    place: &ElementRef<'_>,
) {
    graph.merge(mapping.identifiers(subj, place));
    graph.merge(mapping.appellations(subj, place));
    graph.merge(mapping.coordinates(subj, place));
}
