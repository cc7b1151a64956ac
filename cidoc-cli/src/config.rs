//! Pipeline and uploader configuration
//!
//! Defaults reproduce the registry host, schema endpoints and output names
//! the datasets have always been published with.

use cidoc_mapping::MappingConfig;
use cidoc_vocab::crm;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::{PersonArgs, PipelineArgs, UploadArgs};

pub const DEFAULT_BASE_URL: &str = "https://wmp1.acdh.oeaw.ac.at/";
pub const DEFAULT_OUTPUT_DIR: &str = "./datasets";
pub const DEFAULT_LANG: &str = "de";
pub const DEFAULT_LOOKUP_URL: &str =
    "https://pfp-schema.acdh.oeaw.ac.at/mappings/person-person.json";
pub const DEFAULT_ONTOLOGY_URL: &str =
    "https://pfp-schema.acdh.oeaw.ac.at/types/person-person/person-person.ttl";
pub const DEFAULT_SERVER: &str = "https://oeawcloud.oeaw.ac.at";
pub const DEFAULT_FOLDER: &str = "pfp-data";

const PFP_TYPE_DOMAIN: &str = "https://pfp-custom-types";
const ORG_TYPE_DOMAIN: &str = "http://hansi/4/ever";

/// Registry entity types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Org,
    Place,
}

impl EntityKind {
    /// TEI element name, also used in the output file name
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Person => "person",
            EntityKind::Org => "org",
            EntityKind::Place => "place",
        }
    }

    pub fn index_file(self) -> &'static str {
        match self {
            EntityKind::Person => "listperson.xml",
            EntityKind::Org => "listorg.xml",
            EntityKind::Place => "listplace.xml",
        }
    }

    /// CIDOC-CRM class asserted for every entity
    pub fn class(self) -> &'static str {
        match self {
            EntityKind::Person => crm::E21_PERSON,
            EntityKind::Org => crm::E74_GROUP,
            EntityKind::Place => crm::E53_PLACE,
        }
    }

    pub fn default_prefix(self) -> &'static str {
        match self {
            EntityKind::Org => "wkfm",
            EntityKind::Person | EntityKind::Place => "wmp1",
        }
    }

    pub fn default_type_domain(self) -> &'static str {
        match self {
            EntityKind::Org => ORG_TYPE_DOMAIN,
            EntityKind::Person | EntityKind::Place => PFP_TYPE_DOMAIN,
        }
    }
}

/// Person-only endpoints
#[derive(Clone, Debug)]
pub struct CrossRefConfig {
    pub lookup_url: String,
    pub ontology_url: String,
}

/// Everything one pipeline run needs
#[derive(Clone, Debug)]
pub struct PipelineConfig {
    pub entity: EntityKind,
    pub base_url: String,
    pub domain: String,
    pub output_dir: PathBuf,
    pub prefix: String,
    pub type_domain: String,
    pub default_lang: String,
    pub source: PathBuf,
    pub cross_refs: Option<CrossRefConfig>,
    pub timeout: Duration,
}

impl PipelineConfig {
    /// Defaults for `entity`; persons get the cross-reference endpoints
    pub fn new(entity: EntityKind) -> Self {
        Self {
            entity,
            base_url: DEFAULT_BASE_URL.to_string(),
            domain: DEFAULT_BASE_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            prefix: entity.default_prefix().to_string(),
            type_domain: entity.default_type_domain().to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            source: PathBuf::from(entity.index_file()),
            cross_refs: (entity == EntityKind::Person).then(|| CrossRefConfig {
                lookup_url: DEFAULT_LOOKUP_URL.to_string(),
                ontology_url: DEFAULT_ONTOLOGY_URL.to_string(),
            }),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn from_args(entity: EntityKind, args: &PipelineArgs, timeout_secs: u64) -> Self {
        let defaults = Self::new(entity);
        Self {
            base_url: args.base_url.clone(),
            domain: args.domain.clone(),
            output_dir: args.output_dir.clone(),
            prefix: args.prefix.clone().unwrap_or(defaults.prefix),
            type_domain: args.type_domain.clone().unwrap_or(defaults.type_domain),
            default_lang: args.default_lang.clone(),
            source: args.source.clone().unwrap_or(defaults.source),
            timeout: Duration::from_secs(timeout_secs),
            ..defaults
        }
    }

    pub fn from_person_args(args: &PersonArgs, timeout_secs: u64) -> Self {
        Self {
            cross_refs: Some(CrossRefConfig {
                lookup_url: args.lookup_url.clone(),
                ontology_url: args.ontology_url.clone(),
            }),
            ..Self::from_args(EntityKind::Person, &args.pipeline, timeout_secs)
        }
    }

    /// `{output_dir}/{prefix}_{tag}.nt`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.nt", self.prefix, self.entity.tag()))
    }

    /// Name fetched from `base_url` when `source` is missing
    pub fn source_file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.entity.index_file().to_string())
    }

    pub fn mapping_config(&self) -> MappingConfig {
        MappingConfig::new(&self.type_domain, &self.default_lang)
    }

    /// Reject settings that would mint malformed URIs
    pub fn validate(&self) -> Result<(), String> {
        for (flag, value) in [("--base-url", &self.base_url), ("--domain", &self.domain)] {
            if !value.ends_with('/') {
                return Err(format!("{flag} must end with '/': {value}"));
            }
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(format!("{flag} must be an http(s) URL: {value}"));
            }
        }
        if self.prefix.is_empty() {
            return Err("--prefix must not be empty".into());
        }
        if self.type_domain.is_empty() {
            return Err("--type-domain must not be empty".into());
        }
        if self.default_lang.is_empty() {
            return Err("--default-lang must not be empty".into());
        }
        if self.timeout.is_zero() {
            return Err("--timeout-secs must be greater than zero".into());
        }
        Ok(())
    }
}

/// Settings for [`crate::upload::upload_files`]
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub server: String,
    pub user: String,
    pub password: String,
    pub folder: String,
    pub timeout: Duration,
}

impl UploadConfig {
    pub fn from_args(args: &UploadArgs, timeout_secs: u64) -> Self {
        Self {
            server: args.server.trim_end_matches('/').to_string(),
            user: args.user.clone(),
            password: args.password.clone(),
            folder: args.folder.trim_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.folder.is_empty() {
            return Err("--folder must not be empty".into());
        }
        if self.timeout.is_zero() {
            return Err("--timeout-secs must be greater than zero".into());
        }
        Ok(())
    }
}
