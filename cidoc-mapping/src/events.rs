//! Birth, death and occupation events

use chrono::NaiveDate;
use cidoc_graph_ir::Graph;
use cidoc_tei::{check_for_hash, ElementRef};
use cidoc_vocab::{crm, frbroo};

use crate::config::MappingConfig;
use crate::emit::{add, add_label, add_type, iri, lang_of};
use crate::error::{MappingError, MappingResult};
use crate::timespan::{time_span, DateRange};

/// Which life event to build
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeEvent {
    Birth,
    Death,
}

impl LifeEvent {
    /// TEI element name, also the URI suffix
    pub fn tag(self) -> &'static str {
        match self {
            LifeEvent::Birth => "birth",
            LifeEvent::Death => "death",
        }
    }

    fn class(self) -> &'static str {
        match self {
            LifeEvent::Birth => crm::E67_BIRTH,
            LifeEvent::Death => crm::E69_DEATH,
        }
    }

    fn link(self) -> &'static str {
        match self {
            LifeEvent::Birth => crm::P98_BROUGHT_INTO_LIFE,
            LifeEvent::Death => crm::P100_WAS_DEATH_OF,
        }
    }
}

/// Options for [`birth_death`]
#[derive(Clone, Debug)]
pub struct BirthDeathOptions {
    /// Namespace for `P7_took_place_at` targets, e.g. `{domain}place__`
    pub place_domain: String,
    pub event: LifeEvent,
    /// Label prefix, e.g. `Geburt von`
    pub default_prefix: String,
    /// Entity label appended to the prefix
    pub label: String,
}

/// Result of [`birth_death`]
#[derive(Debug)]
pub struct EventMapping {
    pub graph: Graph,
    pub event_uri: String,
    /// `P82a` of the event's time-span, if the date parsed
    pub begin: Option<NaiveDate>,
}

/// Build `<{subj}/birth>` or `<{subj}/death>` from the first
/// `birth/date` (`death/date`) of the entity.
///
/// The event place is the key of the first `settlement` at any depth below
/// the event element, else of the first keyed `placeName`.
///
/// Fails with [`MappingError::MissingElement`] when there is no such date.
pub fn birth_death(
    subj: &str,
    element: &ElementRef<'_>,
    options: &BirthDeathOptions,
    config: &MappingConfig,
) -> MappingResult<EventMapping> {
    let tag = options.event.tag();
    let (event_el, date) = element
        .descendants(tag)
        .find_map(|e| e.first_child("date").map(|d| (e, d)))
        .ok_or_else(|| MappingError::MissingElement(format!("{tag}/date")))?;

    let mut g = Graph::new();
    let lang = lang_of(element, &config.default_lang);
    let event_uri = format!("{subj}/{tag}");

    add_type(&mut g, &event_uri, options.event.class());
    add(&mut g, &event_uri, options.event.link(), iri(subj));
    add_label(
        &mut g,
        &event_uri,
        &format!("{} {}", options.default_prefix, options.label),
        lang,
    );

    let span = time_span(&mut g, &event_uri, &DateRange::from_element(&date));

    let place_key = event_el
        .descendants("settlement")
        .chain(event_el.descendants("placeName"))
        .find_map(|p| p.attr("key"))
        .map(check_for_hash);
    if let Some(key) = place_key {
        add(
            &mut g,
            &event_uri,
            crm::P7_TOOK_PLACE_AT,
            iri(format!("{}{}", options.place_domain, key)),
        );
    }

    Ok(EventMapping {
        graph: g,
        event_uri,
        begin: span.and_then(|s| s.begin),
    })
}

/// `F51_Pursuit` per `occupation` child, linked with `P14i_performed`.
///
/// Returns the graph and the occupation URIs in document order.
pub fn occupations(
    subj: &str,
    element: &ElementRef<'_>,
    config: &MappingConfig,
) -> (Graph, Vec<String>) {
    let mut g = Graph::new();
    let mut uris = Vec::new();
    let lang = lang_of(element, &config.default_lang);

    for (i, occupation) in element.children_named("occupation").enumerate() {
        let id = occupation
            .attr("key")
            .map(check_for_hash)
            .filter(|k| !k.is_empty())
            .map_or_else(|| i.to_string(), str::to_string);
        let uri = format!("{subj}/occupation/{id}");
        let label = Some(occupation.text())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "undefined".to_string());

        add(&mut g, subj, crm::P14I_PERFORMED, iri(&uri));
        add_type(&mut g, &uri, frbroo::F51_PURSUIT);
        add_label(&mut g, &uri, &label, lang_of(&occupation, lang));
        time_span(&mut g, &uri, &DateRange::from_element(&occupation));
        uris.push(uri);
    }
    (g, uris)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidoc_graph_ir::Term;
    use cidoc_tei::TeiDocument;
    use cidoc_vocab::{rdf, rdfs};

    const S: &str = "https://wmp1.acdh.oeaw.ac.at/pers_1";

    fn options(event: LifeEvent, prefix: &str) -> BirthDeathOptions {
        BirthDeathOptions {
            place_domain: "https://wmp1.acdh.oeaw.ac.at/".into(),
            event,
            default_prefix: prefix.into(),
            label: "Maier, Hans".into(),
        }
    }

    #[test]
    fn test_birth_with_place() {
        let doc = TeiDocument::parse(
            r##"<person xml:id="pers_1"><birth><date when="1850-03-07">7. März 1850</date><placeName key="#place_9">Graz</placeName></birth></person>"##,
        )
        .unwrap();
        let mapped = birth_death(
            S,
            &doc.root(),
            &options(LifeEvent::Birth, "Geburt von"),
            &MappingConfig::default(),
        )
        .unwrap();

        let birth = iri(format!("{S}/birth"));
        assert_eq!(mapped.event_uri, format!("{S}/birth"));
        assert_eq!(mapped.begin, NaiveDate::from_ymd_opt(1850, 3, 7));
        let g = &mapped.graph;
        assert!(g.has(&birth, &iri(rdf::TYPE), &iri(crm::E67_BIRTH)));
        assert!(g.has(&birth, &iri(crm::P98_BROUGHT_INTO_LIFE), &iri(S)));
        assert!(g.has(
            &birth,
            &iri(rdfs::LABEL),
            &Term::lang_string("Geburt von Maier, Hans", "de")
        ));
        assert!(g.has(
            &birth,
            &iri(crm::P7_TOOK_PLACE_AT),
            &iri("https://wmp1.acdh.oeaw.ac.at/place_9")
        ));
    }

    #[test]
    fn test_settlement_nested_in_place_name() {
        let doc = TeiDocument::parse(
            r##"<person><birth><date when="1900"/><placeName key="#region_1"><settlement key="#pl_9">Wels</settlement></placeName></birth></person>"##,
        )
        .unwrap();
        let mut options = options(LifeEvent::Birth, "Geburt von");
        options.place_domain = "https://wmp1.acdh.oeaw.ac.at/place__".into();
        let mapped = birth_death(S, &doc.root(), &options, &MappingConfig::default()).unwrap();

        let birth = iri(format!("{S}/birth"));
        let took_place_at = iri(crm::P7_TOOK_PLACE_AT);
        let places: Vec<&Term> = mapped.graph.objects(&birth, &took_place_at).collect();
        assert_eq!(places, [&iri("https://wmp1.acdh.oeaw.ac.at/place__pl_9")]);
    }

    #[test]
    fn test_death_label_and_missing_date() {
        let doc = TeiDocument::parse(
            r#"<person><birth>unbekannt</birth><death><date>1911</date></death></person>"#,
        )
        .unwrap();
        let config = MappingConfig::default();

        let err = birth_death(S, &doc.root(), &options(LifeEvent::Birth, "Geburt von"), &config)
            .unwrap_err();
        assert!(matches!(err, MappingError::MissingElement(ref m) if m == "birth/date"));

        let death = birth_death(S, &doc.root(), &options(LifeEvent::Death, "Tod von"), &config)
            .unwrap();
        let uri = iri(format!("{S}/death"));
        assert!(death.graph.has(&uri, &iri(crm::P100_WAS_DEATH_OF), &iri(S)));
        assert!(death.graph.has(
            &uri,
            &iri(rdfs::LABEL),
            &Term::lang_string("Tod von Maier, Hans", "de")
        ));
        assert!(death
            .graph
            .objects(&uri, &iri(crm::P7_TOOK_PLACE_AT))
            .next()
            .is_none());
    }

    #[test]
    fn test_occupations() {
        let doc = TeiDocument::parse(
            r##"<person><occupation key="#occ_arzt" from="1880">Arzt</occupation><occupation/></person>"##,
        )
        .unwrap();
        let (g, uris) = occupations(S, &doc.root(), &MappingConfig::default());
        assert_eq!(
            uris,
            vec![format!("{S}/occupation/occ_arzt"), format!("{S}/occupation/1")]
        );
        assert!(g.has(&iri(S), &iri(crm::P14I_PERFORMED), &iri(&uris[0])));
        assert!(g.has(&iri(&uris[0]), &iri(rdf::TYPE), &iri(frbroo::F51_PURSUIT)));
        assert!(g.has(
            &iri(&uris[1]),
            &iri(rdfs::LABEL),
            &Term::lang_string("undefined", "de")
        ));
        assert!(g.has(
            &iri(format!("{}/time-span", uris[0])),
            &iri(crm::P82A_BEGIN_OF_THE_BEGIN),
            &Term::date("1880-01-01")
        ));
    }
}
