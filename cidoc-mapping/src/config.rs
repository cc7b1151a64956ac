//! Mapping configuration

/// Settings shared by every mapping function of one pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingConfig {
    /// Namespace for minted `E55_Type` IRIs, without trailing slash
    pub type_domain: String,
    /// Language for literals whose element carries no `xml:lang`
    pub default_lang: String,
}

impl MappingConfig {
    pub fn new(type_domain: impl Into<String>, default_lang: impl Into<String>) -> Self {
        Self {
            type_domain: type_domain.into().trim_end_matches('/').to_string(),
            default_lang: default_lang.into(),
        }
    }

    /// `{type_domain}/{path}`
    pub fn type_iri(&self, path: &str) -> String {
        format!("{}/{}", self.type_domain, path)
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::new("https://pfp-custom-types", "de")
    }
}
