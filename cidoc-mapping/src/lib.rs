//! TEI to CIDOC-CRM mapping
//!
//! Turns the entity elements of a TEI registry into CIDOC-CRM triples:
//! identifiers, appellations, life events, affiliations, occupations,
//! coordinates and person-to-person relations. Every function returns a
//! fresh [`Graph`] that the caller merges into its own.
//!
//! Pipelines talk to the [`CidocMapping`] trait; [`AcdhMapping`] is the
//! implementation following the ACDH conventions for URIs and types.
//!
//! ```
//! use cidoc_mapping::{AcdhMapping, CidocMapping, MappingConfig, SubjectUri};
//! use cidoc_tei::TeiDocument;
//!
//! let doc = TeiDocument::parse(r#"<place xml:id="p1"><placeName>Vienna</placeName></place>"#)?;
//! let place = doc.root();
//! let subj = SubjectUri::new("https://wmp1.acdh.oeaw.ac.at/", "p1");
//!
//! let mapping = AcdhMapping::new(MappingConfig::default());
//! let names = mapping.appellations(&subj, &place);
//! assert!(!names.is_empty());
//! assert!(mapping.coordinates(&subj, &place).is_empty());
//! # Ok::<(), cidoc_tei::TeiError>(())
//! ```

mod affiliations;
mod appellations;
pub mod config;
mod coordinates;
mod emit;
pub mod error;
mod events;
mod identifiers;
mod label;
mod relations;
pub mod timespan;
mod uri;

pub use affiliations::{affiliations, AffiliationOptions};
pub use appellations::appellations;
pub use config::MappingConfig;
pub use coordinates::coordinates;
pub use error::{MappingError, MappingResult};
pub use events::{birth_death, occupations, BirthDeathOptions, EventMapping, LifeEvent};
pub use identifiers::identifiers;
pub use label::entity_label;
pub use relations::{relation, slug, RelationLookup};
pub use uri::SubjectUri;

use cidoc_graph_ir::Graph;
use cidoc_tei::ElementRef;

/// The mapping operations a registry pipeline needs
pub trait CidocMapping {
    /// `(label, lang)` for a name element
    fn entity_label(&self, name: &ElementRef<'_>) -> (String, String);

    fn identifiers(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph;

    fn appellations(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph;

    fn affiliations(
        &self,
        subj: &SubjectUri,
        element: &ElementRef<'_>,
        domain: &str,
        person_label: &str,
        options: &AffiliationOptions,
    ) -> Graph;

    /// Fails with [`MappingError::MissingElement`] when the event has no date
    fn birth_death(
        &self,
        subj: &SubjectUri,
        element: &ElementRef<'_>,
        options: &BirthDeathOptions,
    ) -> MappingResult<EventMapping>;

    fn occupations(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> (Graph, Vec<String>);

    fn coordinates(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph;

    fn relation(&self, element: &ElementRef<'_>, domain: &str, lookup: &RelationLookup) -> Graph;
}

/// Default [`CidocMapping`] implementation
#[derive(Clone, Debug, Default)]
pub struct AcdhMapping {
    config: MappingConfig,
}

impl AcdhMapping {
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }
}

impl CidocMapping for AcdhMapping {
    fn entity_label(&self, name: &ElementRef<'_>) -> (String, String) {
        entity_label(name, &self.config.default_lang)
    }

    fn identifiers(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph {
        identifiers(subj.as_str(), element, &self.config)
    }

    fn appellations(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph {
        appellations(subj.as_str(), element, &self.config)
    }

    fn affiliations(
        &self,
        subj: &SubjectUri,
        element: &ElementRef<'_>,
        domain: &str,
        person_label: &str,
        options: &AffiliationOptions,
    ) -> Graph {
        affiliations(subj.as_str(), element, domain, person_label, options, &self.config)
    }

    fn birth_death(
        &self,
        subj: &SubjectUri,
        element: &ElementRef<'_>,
        options: &BirthDeathOptions,
    ) -> MappingResult<EventMapping> {
        birth_death(subj.as_str(), element, options, &self.config)
    }

    fn occupations(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> (Graph, Vec<String>) {
        occupations(subj.as_str(), element, &self.config)
    }

    fn coordinates(&self, subj: &SubjectUri, element: &ElementRef<'_>) -> Graph {
        coordinates(subj.as_str(), element)
    }

    fn relation(&self, element: &ElementRef<'_>, domain: &str, lookup: &RelationLookup) -> Graph {
        relation(element, domain, lookup)
    }
}
