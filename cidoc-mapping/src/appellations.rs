//! `E33_E41_Linguistic_Appellation` triples from name elements

use cidoc_graph_ir::{Graph, Term};
use cidoc_tei::ElementRef;
use cidoc_vocab::{crm, rdfs};

use crate::config::MappingConfig;
use crate::emit::{add, add_e55, add_label, add_type, iri, lang_of};

const NAME_TAGS: [&str; 3] = ["persName", "placeName", "orgName"];
const NAME_PARTS: [&str; 2] = ["forename", "surname"];

/// One appellation per direct `persName`/`placeName`/`orgName` child.
///
/// The first name defaults to type `pref`, later ones to `alt`; `@type`
/// overrides both. `persName` parts become component appellations.
pub fn appellations(subj: &str, element: &ElementRef<'_>, config: &MappingConfig) -> Graph {
    let mut g = Graph::new();
    let lang = lang_of(element, &config.default_lang);

    let names = element.children().filter(|c| NAME_TAGS.contains(&c.name()));
    for (i, name) in names.enumerate() {
        let text = name.text();
        if text.is_empty() {
            continue;
        }
        let tag = name.name();
        let name_type = name
            .attr("type")
            .unwrap_or(if i == 0 { "pref" } else { "alt" });
        let type_iri = config.type_iri(&format!("{tag}/{name_type}"));
        let app_uri = format!("{subj}/appellation/{i}");
        let name_lang = lang_of(&name, lang);

        add(&mut g, subj, crm::P1_IS_IDENTIFIED_BY, iri(&app_uri));
        add_type(&mut g, &app_uri, crm::E33_E41_LINGUISTIC_APPELLATION);
        add_label(&mut g, &app_uri, &text, name_lang);
        add(&mut g, &app_uri, crm::P2_HAS_TYPE, iri(&type_iri));
        add_e55(&mut g, &type_iri);
        add(&mut g, &type_iri, rdfs::LABEL, Term::string(name_type));

        if tag == "persName" {
            add_name_parts(&mut g, &app_uri, &name, name_lang, config);
        }
    }
    g
}

fn add_name_parts(
    g: &mut Graph,
    app_uri: &str,
    name: &ElementRef<'_>,
    lang: &str,
    config: &MappingConfig,
) {
    for part in NAME_PARTS {
        for (j, el) in name.children_named(part).enumerate() {
            let text = el.text();
            if text.is_empty() {
                continue;
            }
            let part_uri = format!("{app_uri}/{part}/{j}");
            add(g, app_uri, crm::P106_IS_COMPOSED_OF, iri(&part_uri));
            add_type(g, &part_uri, crm::E33_E41_LINGUISTIC_APPELLATION);
            add_label(g, &part_uri, &text, lang_of(&el, lang));
            add(g, &part_uri, crm::P2_HAS_TYPE, iri(config.type_iri(part)));
        }
    }
}
