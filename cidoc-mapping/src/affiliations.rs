//! Joining and leaving events from `affiliation` elements

use cidoc_graph_ir::Graph;
use cidoc_tei::{check_for_hash, ElementRef};
use cidoc_vocab::crm;

use crate::config::MappingConfig;
use crate::emit::{add, add_label, add_type, iri, lang_of};
use crate::timespan::{time_span, DateRange};

/// Options for [`affiliations`]
#[derive(Clone, Debug, Default)]
pub struct AffiliationOptions {
    /// Also type the organization as `E74_Group` and label it
    pub add_org_object: bool,
}

/// `E85_Joining` (and `E86_Leaving` when an end date is given) per
/// `affiliation` child whose `orgName` carries a `key`
pub fn affiliations(
    subj: &str,
    element: &ElementRef<'_>,
    domain: &str,
    person_label: &str,
    options: &AffiliationOptions,
    config: &MappingConfig,
) -> Graph {
    let mut g = Graph::new();
    let lang = lang_of(element, &config.default_lang);

    for (i, affiliation) in element.children_named("affiliation").enumerate() {
        let Some(org) = affiliation.first_child("orgName") else {
            continue;
        };
        let Some(key) = org.attr("key").map(check_for_hash).filter(|k| !k.is_empty()) else {
            tracing::debug!(subject = %subj, "affiliation without org key");
            continue;
        };
        let org_uri = format!("{domain}{key}");
        let org_label = org.text();
        let dates = DateRange::from_element(&affiliation);

        let joining = format!("{subj}/joining/{key}/{i}");
        add_type(&mut g, &joining, crm::E85_JOINING);
        add(&mut g, &joining, crm::P143_JOINED, iri(subj));
        add(&mut g, &joining, crm::P144_JOINED_WITH, iri(&org_uri));
        add_label(&mut g, &joining, &format!("{person_label} joins {org_label}"), lang);
        if let Some(begin) = &dates.begin {
            time_span(&mut g, &joining, &DateRange::begin_only(begin));
        }

        if let Some(end) = &dates.end {
            let leaving = format!("{subj}/leaving/{key}/{i}");
            add_type(&mut g, &leaving, crm::E86_LEAVING);
            add(&mut g, &leaving, crm::P145_SEPARATED, iri(subj));
            add(&mut g, &leaving, crm::P146_SEPARATED_FROM, iri(&org_uri));
            add_label(&mut g, &leaving, &format!("{person_label} leaves {org_label}"), lang);
            time_span(&mut g, &leaving, &DateRange::begin_only(end));
        }

        if options.add_org_object {
            add_type(&mut g, &org_uri, crm::E74_GROUP);
            add_label(&mut g, &org_uri, &org_label, lang_of(&org, lang));
        }
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;
    use cidoc_graph_ir::Term;
    use cidoc_tei::TeiDocument;
    use cidoc_vocab::{rdf, rdfs};

    const D: &str = "https://wmp1.acdh.oeaw.ac.at/";
    const S: &str = "https://wmp1.acdh.oeaw.ac.at/pers_1";

    const PERSON: &str = r##"<person xml:id="pers_1">
        <affiliation from="1890" to="1895-06"><orgName key="#org_3">Universität Wien</orgName></affiliation>
        <affiliation when="1901"><orgName key="org_4">Akademie</orgName></affiliation>
        <affiliation><orgName>ohne Schlüssel</orgName></affiliation>
    </person>"##;

    #[test]
    fn test_joining_and_leaving() {
        let doc = TeiDocument::parse(PERSON).unwrap();
        let options = AffiliationOptions { add_org_object: true };
        let g = affiliations(S, &doc.root(), D, "Maier, Hans", &options, &MappingConfig::default());

        let joining = format!("{S}/joining/org_3/0");
        assert!(g.has(&iri(&joining), &iri(rdf::TYPE), &iri(crm::E85_JOINING)));
        assert!(g.has(&iri(&joining), &iri(crm::P144_JOINED_WITH), &iri(format!("{D}org_3"))));
        assert!(g.has(
            &iri(&joining),
            &iri(rdfs::LABEL),
            &Term::lang_string("Maier, Hans joins Universität Wien", "de")
        ));
        assert!(g.has(
            &iri(format!("{joining}/time-span")),
            &iri(crm::P82B_END_OF_THE_END),
            &Term::date("1890-12-31")
        ));

        let leaving = format!("{S}/leaving/org_3/0");
        assert!(g.has(&iri(&leaving), &iri(crm::P145_SEPARATED), &iri(S)));
        assert!(g.has(
            &iri(format!("{leaving}/time-span")),
            &iri(crm::P82B_END_OF_THE_END),
            &Term::date("1895-06-30")
        ));

        assert!(!g.has(
            &iri(format!("{S}/leaving/org_4/1")),
            &iri(rdf::TYPE),
            &iri(crm::E86_LEAVING)
        ));
        assert!(g.has(&iri(format!("{D}org_4")), &iri(rdf::TYPE), &iri(crm::E74_GROUP)));
        assert!(g.has(
            &iri(format!("{D}org_4")),
            &iri(rdfs::LABEL),
            &Term::lang_string("Akademie", "de")
        ));
    }

    #[test]
    fn test_without_org_object() {
        let doc = TeiDocument::parse(PERSON).unwrap();
        let g = affiliations(
            S,
            &doc.root(),
            D,
            "Maier, Hans",
            &AffiliationOptions::default(),
            &MappingConfig::default(),
        );
        assert!(!g.has(&iri(format!("{D}org_3")), &iri(rdf::TYPE), &iri(crm::E74_GROUP)));
        assert_eq!(
            g.subjects(&iri(rdf::TYPE), &iri(crm::E85_JOINING)).count(),
            2
        );
    }
}
