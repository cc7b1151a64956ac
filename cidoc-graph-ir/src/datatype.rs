//! Literal datatypes
//!
//! Every literal carries one. Labels without `xml:lang` are `xsd:string`.

use std::sync::Arc;

/// Datatype IRIs used by the mappings and the Turtle reader
pub mod iri {
    pub use cidoc_vocab::geo::WKT_LITERAL as GEO_WKT_LITERAL;
    pub use cidoc_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use cidoc_vocab::xsd::{
        BOOLEAN as XSD_BOOLEAN, DATE as XSD_DATE, DECIMAL as XSD_DECIMAL, DOUBLE as XSD_DOUBLE,
        INTEGER as XSD_INTEGER, STRING as XSD_STRING,
    };
}

/// Expanded datatype IRI
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Datatype(Arc<str>);

impl Datatype {
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// Bare numeric tokens in Turtle
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    pub fn xsd_decimal() -> Self {
        Self::from_iri(iri::XSD_DECIMAL)
    }

    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// Normalized TEI dates
    pub fn xsd_date() -> Self {
        Self::from_iri(iri::XSD_DATE)
    }

    /// Place coordinates as `Point(lng lat)`
    pub fn wkt_literal() -> Self {
        Self::from_iri(iri::GEO_WKT_LITERAL)
    }

    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    pub fn as_iri(&self) -> &str {
        &self.0
    }

    pub fn is_xsd_string(&self) -> bool {
        self.as_iri() == iri::XSD_STRING
    }

    pub fn is_lang_string(&self) -> bool {
        self.as_iri() == iri::RDF_LANG_STRING
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_and_dates() {
        assert_eq!(
            Datatype::wkt_literal().to_string(),
            "http://www.opengis.net/ont/geosparql#wktLiteral"
        );
        assert_eq!(
            Datatype::xsd_date(),
            Datatype::from_iri("http://www.w3.org/2001/XMLSchema#date")
        );
    }

    #[test]
    fn test_label_datatypes() {
        let plain = Datatype::from_iri("http://www.w3.org/2001/XMLSchema#string");
        assert!(plain.is_xsd_string());
        assert!(!plain.is_lang_string());
        assert!(Datatype::rdf_lang_string().is_lang_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());
    }
}
