//! Social relations between persons (`SRPC3_in_social_relation`)

use cidoc_graph_ir::{Graph, Term};
use cidoc_tei::{check_for_hash, ElementRef};
use cidoc_vocab::{crm, pfp, rdfs};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::emit::{add, add_type, iri};
use crate::error::{MappingError, MappingResult};

#[derive(Deserialize)]
#[serde(untagged)]
enum LookupEntry {
    Iri(String),
    Object {
        #[serde(alias = "uri", alias = "id", alias = "@id")]
        pfp_uri: String,
    },
}

/// Relation label → relation-type IRI
#[derive(Clone, Debug, Default)]
pub struct RelationLookup {
    types: FxHashMap<String, String>,
}

impl RelationLookup {
    /// Read the lookup document: a JSON object whose values are either an
    /// IRI string or an object carrying the IRI under `pfp_uri`, `uri`, `id`
    /// or `@id`. Entries of any other shape are skipped.
    pub fn from_json(value: serde_json::Value) -> MappingResult<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(MappingError::InvalidLookup(
                "expected a JSON object at the top level".into(),
            ));
        };
        let mut types = FxHashMap::default();
        for (label, entry) in map {
            match serde_json::from_value::<LookupEntry>(entry) {
                Ok(LookupEntry::Iri(uri) | LookupEntry::Object { pfp_uri: uri }) => {
                    types.insert(label, uri);
                }
                Err(_) => tracing::warn!(label = %label, "skipping unreadable lookup entry"),
            }
        }
        Ok(Self { types })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.types
            .get(label)
            .or_else(|| self.types.get(label.trim()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<(String, String)> for RelationLookup {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

/// Lowercase, alphanumerics kept, everything else collapsed to `-`
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for c in label.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn participants(relation: &ElementRef<'_>) -> Option<(String, String)> {
    let active = relation.attr("active").map(check_for_hash);
    let passive = relation.attr("passive").map(check_for_hash);
    if let (Some(a), Some(b)) = (active, passive) {
        return Some((a.to_string(), b.to_string()));
    }
    let mut mutual = relation
        .attr("mutual")?
        .split_whitespace()
        .map(check_for_hash);
    let a = mutual.next()?;
    let b = mutual.next()?;
    Some((a.to_string(), b.to_string()))
}

/// Map one `relation` element; relations without two participants yield an
/// empty graph
pub fn relation(relation: &ElementRef<'_>, domain: &str, lookup: &RelationLookup) -> Graph {
    let mut g = Graph::new();
    let Some((a, b)) = participants(relation) else {
        tracing::debug!("relation without two participants");
        return g;
    };
    let name = relation
        .attr("name")
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| relation.text(), str::to_string);

    let rel_uri = format!("{domain}relation/{a}/{}/{b}", slug(&name));
    let a_uri = format!("{domain}{a}");
    let b_uri = format!("{domain}{b}");

    add_type(&mut g, &rel_uri, pfp::SRPC3_IN_SOCIAL_RELATION);
    add(&mut g, &rel_uri, rdfs::LABEL, Term::string(&name));
    match lookup.get(&name) {
        Some(type_iri) => add(&mut g, &rel_uri, pfp::SRP3_RELATION_TYPE, iri(type_iri)),
        None => tracing::warn!(relation = %name, "relation label not in lookup"),
    }
    add(&mut g, &rel_uri, crm::P01_HAS_DOMAIN, iri(&a_uri));
    add(&mut g, &rel_uri, crm::P02_HAS_RANGE, iri(&b_uri));
    add(&mut g, &a_uri, pfp::SRP1_IS_IN_SOCIAL_RELATION, iri(&rel_uri));
    add(&mut g, &b_uri, pfp::SRP1_IS_IN_SOCIAL_RELATION, iri(&rel_uri));
    g
}
