use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_FOLDER, DEFAULT_LANG, DEFAULT_LOOKUP_URL, DEFAULT_ONTOLOGY_URL,
    DEFAULT_OUTPUT_DIR, DEFAULT_SERVER,
};

#[derive(Parser, Debug)]
#[command(
    name = "cidoc",
    about = "Convert TEI registries to CIDOC-CRM N-Triples",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Timeout for every HTTP request, in seconds
    #[arg(long, global = true, env = "CIDOC_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert listperson.xml, including social relations
    Person(PersonArgs),

    /// Convert listorg.xml
    Org(PipelineArgs),

    /// Convert listplace.xml
    Place(PipelineArgs),

    /// Upload files to an ownCloud folder
    Upload(UploadArgs),
}

/// Flags shared by the three registry pipelines
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Where the registry file is fetched from when missing locally
    #[arg(long, env = "CIDOC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Namespace for minted subject URIs
    #[arg(long, env = "CIDOC_DOMAIN", default_value = DEFAULT_BASE_URL)]
    pub domain: String,

    /// Directory for the .nt output
    #[arg(long, env = "CIDOC_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Output file prefix (default depends on the entity type)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Namespace for minted type IRIs (default depends on the entity type)
    #[arg(long)]
    pub type_domain: Option<String>,

    /// Language tag for literals without xml:lang
    #[arg(long, default_value = DEFAULT_LANG)]
    pub default_lang: String,

    /// Local registry file (default: the index file name in the working directory)
    #[arg(long)]
    pub source: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct PersonArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Relation label to relation type lookup (JSON)
    #[arg(long, default_value = DEFAULT_LOOKUP_URL)]
    pub lookup_url: String,

    /// Ontology extension merged into the output (Turtle)
    #[arg(long, default_value = DEFAULT_ONTOLOGY_URL)]
    pub ontology_url: String,
}

#[derive(Args, Debug, Clone)]
pub struct UploadArgs {
    /// Files to upload
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// ownCloud server root
    #[arg(long, env = "OWNCLOUD_URL", default_value = DEFAULT_SERVER)]
    pub server: String,

    #[arg(long, env = "OWNCLOUD_USER")]
    pub user: String,

    #[arg(long, env = "OWNCLOUD_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Destination folder
    #[arg(long, default_value = DEFAULT_FOLDER)]
    pub folder: String,
}
