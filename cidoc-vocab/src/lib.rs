//! RDF vocabulary constants for the CIDOC-CRM export
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `crm` - CIDOC-CRM classes and properties
//! - `frbroo` - FRBRoo extension (pursuits)
//! - `geo` - GeoSPARQL literal types
//! - `pfp` - Social relation classes of the PFP person-person schema
//! - `tei` - TEI and XML namespace IRIs used when reading source documents

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:value IRI
    pub const VALUE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#value";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:gYear IRI
    pub const G_YEAR: &str = "http://www.w3.org/2001/XMLSchema#gYear";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
}

/// CIDOC-CRM classes and properties
///
/// Local names follow the published RDFS encoding, including the `i` suffix
/// for inverse properties.
pub mod crm {
    /// CIDOC-CRM namespace
    pub const NS: &str = "http://www.cidoc-crm.org/cidoc-crm/";

    // Classes
    pub const E21_PERSON: &str = "http://www.cidoc-crm.org/cidoc-crm/E21_Person";
    pub const E33_E41_LINGUISTIC_APPELLATION: &str =
        "http://www.cidoc-crm.org/cidoc-crm/E33_E41_Linguistic_Appellation";
    pub const E42_IDENTIFIER: &str = "http://www.cidoc-crm.org/cidoc-crm/E42_Identifier";
    pub const E52_TIME_SPAN: &str = "http://www.cidoc-crm.org/cidoc-crm/E52_Time-Span";
    pub const E53_PLACE: &str = "http://www.cidoc-crm.org/cidoc-crm/E53_Place";
    pub const E55_TYPE: &str = "http://www.cidoc-crm.org/cidoc-crm/E55_Type";
    pub const E67_BIRTH: &str = "http://www.cidoc-crm.org/cidoc-crm/E67_Birth";
    pub const E69_DEATH: &str = "http://www.cidoc-crm.org/cidoc-crm/E69_Death";
    pub const E74_GROUP: &str = "http://www.cidoc-crm.org/cidoc-crm/E74_Group";
    pub const E85_JOINING: &str = "http://www.cidoc-crm.org/cidoc-crm/E85_Joining";
    pub const E86_LEAVING: &str = "http://www.cidoc-crm.org/cidoc-crm/E86_Leaving";

    // Properties
    pub const P01_HAS_DOMAIN: &str = "http://www.cidoc-crm.org/cidoc-crm/P01_has_domain";
    pub const P02_HAS_RANGE: &str = "http://www.cidoc-crm.org/cidoc-crm/P02_has_range";
    pub const P1_IS_IDENTIFIED_BY: &str = "http://www.cidoc-crm.org/cidoc-crm/P1_is_identified_by";
    pub const P2_HAS_TYPE: &str = "http://www.cidoc-crm.org/cidoc-crm/P2_has_type";
    pub const P4_HAS_TIME_SPAN: &str = "http://www.cidoc-crm.org/cidoc-crm/P4_has_time-span";
    pub const P7_TOOK_PLACE_AT: &str = "http://www.cidoc-crm.org/cidoc-crm/P7_took_place_at";
    pub const P14I_PERFORMED: &str = "http://www.cidoc-crm.org/cidoc-crm/P14i_performed";
    pub const P74_HAS_CURRENT_OR_FORMER_RESIDENCE: &str =
        "http://www.cidoc-crm.org/cidoc-crm/P74_has_current_or_former_residence";
    pub const P82A_BEGIN_OF_THE_BEGIN: &str =
        "http://www.cidoc-crm.org/cidoc-crm/P82a_begin_of_the_begin";
    pub const P82B_END_OF_THE_END: &str = "http://www.cidoc-crm.org/cidoc-crm/P82b_end_of_the_end";
    pub const P98_BROUGHT_INTO_LIFE: &str =
        "http://www.cidoc-crm.org/cidoc-crm/P98_brought_into_life";
    pub const P100_WAS_DEATH_OF: &str = "http://www.cidoc-crm.org/cidoc-crm/P100_was_death_of";
    pub const P106_IS_COMPOSED_OF: &str = "http://www.cidoc-crm.org/cidoc-crm/P106_is_composed_of";
    pub const P143_JOINED: &str = "http://www.cidoc-crm.org/cidoc-crm/P143_joined";
    pub const P144_JOINED_WITH: &str = "http://www.cidoc-crm.org/cidoc-crm/P144_joined_with";
    pub const P145_SEPARATED: &str = "http://www.cidoc-crm.org/cidoc-crm/P145_separated";
    pub const P146_SEPARATED_FROM: &str = "http://www.cidoc-crm.org/cidoc-crm/P146_separated_from";
    pub const P168_PLACE_IS_DEFINED_BY: &str =
        "http://www.cidoc-crm.org/cidoc-crm/P168_place_is_defined_by";
}

/// FRBRoo extension constants
pub mod frbroo {
    /// FRBRoo namespace (FRBR 2.4 draft RDFS)
    pub const NS: &str = "https://cidoc-crm.org/frbroo/sites/default/files/FRBR2.4-draft.rdfs#";

    /// frbroo:F51_Pursuit IRI
    pub const F51_PURSUIT: &str =
        "https://cidoc-crm.org/frbroo/sites/default/files/FRBR2.4-draft.rdfs#F51_Pursuit";
}

/// GeoSPARQL constants
pub mod geo {
    /// GeoSPARQL namespace
    pub const NS: &str = "http://www.opengis.net/ont/geosparql#";

    /// geo:wktLiteral datatype IRI
    pub const WKT_LITERAL: &str = "http://www.opengis.net/ont/geosparql#wktLiteral";
}

/// PFP social relation schema
///
/// The person-person ontology extension declares subclasses and subproperties
/// of these terms; the relation mapper only asserts the generic ones.
pub mod pfp {
    /// PFP schema namespace
    pub const NS: &str = "https://pfp-schema.acdh.oeaw.ac.at/schema#";

    /// Reified social relation between two persons
    pub const SRPC3_IN_SOCIAL_RELATION: &str =
        "https://pfp-schema.acdh.oeaw.ac.at/schema#SRPC3_in_social_relation";

    /// Person → relation link
    pub const SRP1_IS_IN_SOCIAL_RELATION: &str =
        "https://pfp-schema.acdh.oeaw.ac.at/schema#SRP1_is_in_social_relation";

    /// Relation → relation type link
    pub const SRP3_RELATION_TYPE: &str =
        "https://pfp-schema.acdh.oeaw.ac.at/schema#SRP3_relation_type";
}

/// TEI / XML namespace IRIs
pub mod tei {
    /// TEI namespace
    pub const NS: &str = "http://www.tei-c.org/ns/1.0";

    /// The reserved `xml:` namespace
    pub const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crm_terms_share_namespace() {
        for iri in [
            crm::E21_PERSON,
            crm::E53_PLACE,
            crm::E74_GROUP,
            crm::P7_TOOK_PLACE_AT,
            crm::P168_PLACE_IS_DEFINED_BY,
        ] {
            assert!(iri.starts_with(crm::NS), "{iri} outside CIDOC namespace");
        }
    }

    #[test]
    fn test_rdf_terms_share_namespace() {
        assert!(rdf::TYPE.starts_with(rdf::NS));
        assert!(rdf::LANG_STRING.starts_with(rdf::NS));
    }

    #[test]
    fn test_pfp_terms_share_namespace() {
        assert!(pfp::SRPC3_IN_SOCIAL_RELATION.starts_with(pfp::NS));
        assert!(pfp::SRP3_RELATION_TYPE.starts_with(pfp::NS));
    }
}
