//! `E42_Identifier` triples from `xml:id` and `idno`

use cidoc_graph_ir::{Graph, Term};
use cidoc_tei::ElementRef;
use cidoc_vocab::{crm, owl, rdf};

use crate::config::MappingConfig;
use crate::emit::{add, add_e55, add_label, add_type, iri, lang_of};

/// Identifier nodes for the entity's `xml:id` and each direct `idno` child
pub fn identifiers(subj: &str, element: &ElementRef<'_>, config: &MappingConfig) -> Graph {
    let mut g = Graph::new();
    let lang = lang_of(element, &config.default_lang);

    if let Some(xml_id) = element.xml_id() {
        let id_uri = format!("{subj}/identifier/{xml_id}");
        add_identifier(&mut g, subj, &id_uri, xml_id, &config.type_iri("idno/xml-id"), lang);
    }

    for (i, idno) in element.children_named("idno").enumerate() {
        let value = idno.text();
        if value.is_empty() {
            continue;
        }
        let id_type = idno.attr("type").unwrap_or("no-type");
        let id_uri = format!("{subj}/identifier/idno/{i}");
        let lang = lang_of(&idno, lang);
        add_identifier(
            &mut g,
            subj,
            &id_uri,
            &value,
            &config.type_iri(&format!("idno/{id_type}")),
            lang,
        );
        if value.starts_with("http") {
            add(&mut g, subj, owl::SAME_AS, iri(&value));
        }
    }
    g
}

fn add_identifier(g: &mut Graph, subj: &str, id_uri: &str, value: &str, type_iri: &str, lang: &str) {
    add(g, subj, crm::P1_IS_IDENTIFIED_BY, iri(id_uri));
    add_type(g, id_uri, crm::E42_IDENTIFIER);
    add_label(g, id_uri, &format!("Identifier: {value}"), lang);
    add(g, id_uri, rdf::VALUE, Term::string(value));
    add(g, id_uri, crm::P2_HAS_TYPE, iri(type_iri));
    add_e55(g, type_iri);
}
