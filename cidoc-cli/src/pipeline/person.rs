use cidoc_graph_ir::{Graph, Term};
use cidoc_mapping::{
    AffiliationOptions, BirthDeathOptions, CidocMapping, LifeEvent, MappingError, RelationLookup,
    SubjectUri,
};
use cidoc_tei::{ElementRef, TeiDocument};
use cidoc_vocab::crm;
use tracing::{debug, info, warn};

use super::{keyed_iri, PipelineError, Result};
use crate::config::CrossRefConfig;
use crate::http::HttpFetcher;

const LIFE_EVENTS: [(LifeEvent, &str, &str); 2] = [
    (LifeEvent::Birth, "Geburt von", "Geburtsort"),
    (LifeEvent::Death, "Tod von", "Sterbeort"),
];

/// Everything mapped from one `person` element
pub(super) fn map_person<M: CidocMapping>(
    graph: &mut Graph,
    mapping: &M,
    subj: &SubjectUri,
    person: &ElementRef<'_>,
    domain: &str,
) {
    let label = match person.first_descendant("persName") {
        Some(name) => mapping.entity_label(&name).0,
        None => {
            warn!(xml_id = %subj.xml_id(), "person without persName, labelled by xml:id");
            subj.xml_id().to_string()
        }
    };

    let affiliation_options = AffiliationOptions {
        add_org_object: true,
    };
    graph.merge(mapping.affiliations(subj, person, domain, &label, &affiliation_options));
    graph.merge(mapping.identifiers(subj, person));
    graph.merge(mapping.appellations(subj, person));

    let place_domain = format!("{domain}place__");
    for (event, prefix, _) in LIFE_EVENTS {
        let options = BirthDeathOptions {
            place_domain: place_domain.clone(),
            event,
            default_prefix: prefix.to_string(),
            label: label.clone(),
        };
        match mapping.birth_death(subj, person, &options) {
            Ok(mapped) => {
                graph.merge(mapped.graph);
            }
            Err(MappingError::MissingElement(what)) => {
                debug!(xml_id = %subj.xml_id(), missing = %what, "no {} event", event.tag());
            }
            Err(e) => warn!(xml_id = %subj.xml_id(), error = %e, "skipping {} event", event.tag()),
        }
    }

    graph.merge(mapping.occupations(subj, person).0);

    add_event_places(graph, subj, person, domain);
    add_residences(graph, subj, person, domain);
}

/// `<subj/birth> P7 <place>` for `residence[@type='Geburtsort']/placeName/@key`,
/// likewise `Sterbeort` for death
fn add_event_places(graph: &mut Graph, subj: &SubjectUri, person: &ElementRef<'_>, domain: &str) {
    for (event, _, residence_type) in LIFE_EVENTS {
        let event_uri = Term::iri(subj.join(event.tag()));
        let keys = person
            .descendants("residence")
            .filter(|r| r.attr("type") == Some(residence_type))
            .flat_map(|r| r.children_named("placeName"))
            .filter_map(|p| p.attr("key"));
        for key in keys {
            graph.add_triple(
                event_uri.clone(),
                Term::iri(crm::P7_TOOK_PLACE_AT),
                keyed_iri(domain, key),
            );
        }
    }
}

/// `P74_has_current_or_former_residence` for every keyed `residence/placeName`
fn add_residences(graph: &mut Graph, subj: &SubjectUri, person: &ElementRef<'_>, domain: &str) {
    let keys = person
        .descendants("residence")
        .flat_map(|r| r.children_named("placeName"))
        .filter_map(|p| p.attr("key"));
    for key in keys {
        graph.add_triple(
            subj.term(),
            Term::iri(crm::P74_HAS_CURRENT_OR_FORMER_RESIDENCE),
            keyed_iri(domain, key),
        );
    }
}

/// Social relations from every `relation` in the document, then the
/// ontology extension that declares their types
pub(super) async fn resolve_cross_refs<M: CidocMapping>(
    graph: &mut Graph,
    doc: &TeiDocument,
    mapping: &M,
    fetcher: &HttpFetcher,
    domain: &str,
    config: &CrossRefConfig,
) -> Result<()> {
    info!(url = %config.lookup_url, "fetching relation lookup");
    let lookup = RelationLookup::from_json(fetcher.get_json(&config.lookup_url).await?)?;

    let mut relations = 0usize;
    for relation in doc.elements("relation") {
        let mapped = mapping.relation(&relation, domain, &lookup);
        if !mapped.is_empty() {
            relations += 1;
        }
        graph.merge(mapped);
    }
    debug!(relations, lookup_entries = lookup.len(), "mapped relations");

    info!(url = %config.ontology_url, "fetching ontology extension");
    let turtle = fetcher.get_text(&config.ontology_url).await?;
    let ontology =
        cidoc_graph_turtle::parse_graph(&turtle).map_err(|source| PipelineError::Turtle {
            url: config.ontology_url.clone(),
            source,
        })?;
    let added = graph.merge(ontology);
    debug!(added, "merged ontology extension");
    Ok(())
}
