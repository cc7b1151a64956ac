//! Registry pipelines: source → entities → mapping → cross-references → N-Triples
//!
//! One run owns one [`Graph`], built from zero and written once at the end.
//! Any fetch or parse failure aborts the run before anything is written.

mod org;
mod person;
mod place;

use cidoc_graph_format::{write_ntriples_file, FormatError, NTriplesFormatConfig};
use cidoc_graph_ir::{Graph, Term};
use cidoc_graph_turtle::TurtleError;
use cidoc_mapping::{CidocMapping, MappingError, SubjectUri};
use cidoc_tei::{TeiDocument, TeiError};
use cidoc_vocab::rdf;
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::{EntityKind, PipelineConfig};
use crate::http::{FetchError, HttpFetcher};
use crate::source::{ensure_source, SourceStatus};

/// Errors that abort a pipeline run
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Tei {
        path: PathBuf,
        #[source]
        source: TeiError,
    },

    #[error("relation lookup: {0}")]
    Lookup(#[from] MappingError),

    #[error("cannot parse ontology {url}: {source}")]
    Turtle {
        url: String,
        #[source]
        source: TurtleError,
    },

    #[error(transparent)]
    Write(#[from] FormatError),
}

impl PipelineError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub source: SourceStatus,
    pub entities: usize,
    pub triples: usize,
    pub output: PathBuf,
}

/// Run one registry pipeline end to end.
///
/// `progress` advances once per entity; its length is set here.
pub async fn run_pipeline<M: CidocMapping>(
    config: &PipelineConfig,
    mapping: &M,
    fetcher: &HttpFetcher,
    progress: &ProgressBar,
) -> Result<PipelineSummary> {
    let source = ensure_source(
        fetcher,
        &config.source,
        &config.base_url,
        &config.source_file_name(),
    )
    .await?;

    let content = tokio::fs::read_to_string(&config.source)
        .await
        .map_err(|e| PipelineError::io(&config.source, e))?;
    let doc = TeiDocument::parse(&content).map_err(|source| PipelineError::Tei {
        path: config.source.clone(),
        source,
    })?;

    let (mut graph, entities) = map_entities(config, mapping, &doc, progress);

    if let Some(cross_refs) = &config.cross_refs {
        person::resolve_cross_refs(&mut graph, &doc, mapping, fetcher, &config.domain, cross_refs)
            .await?;
    }

    let output = config.output_path();
    info!(path = %output.display(), triples = graph.len(), "saving graph");
    write_ntriples_file(&output, &graph, &NTriplesFormatConfig::default())?;

    Ok(PipelineSummary {
        source,
        entities,
        triples: graph.len(),
        output,
    })
}

/// Per-entity mapping for every identified entity of the document.
/// Returns the graph and the number of entities mapped.
pub fn map_entities<M: CidocMapping>(
    config: &PipelineConfig,
    mapping: &M,
    doc: &TeiDocument,
    progress: &ProgressBar,
) -> (Graph, usize) {
    let mut graph = Graph::new();
    let entities = doc.entities(config.entity.tag());
    progress.set_length(entities.len() as u64);

    for entity in &entities {
        let Some(xml_id) = entity.xml_id() else {
            continue;
        };
        let subj = SubjectUri::new(&config.domain, xml_id);
        graph.add_triple(subj.term(), Term::iri(rdf::TYPE), Term::iri(config.entity.class()));

        match config.entity {
            EntityKind::Person => person::map_person(&mut graph, mapping, &subj, entity, &config.domain),
            EntityKind::Org => org::map_org(&mut graph, mapping, &subj, entity, &config.domain),
            EntityKind::Place => place::map_place(&mut graph, mapping, &subj, entity),
        }
        progress.inc(1);
    }
    (graph, entities.len())
}

/// `<{domain}{key}>` with a leading `#` dropped from the key
pub(crate) fn keyed_iri(domain: &str, key: &str) -> Term {
    Term::iri(format!("{domain}{}", cidoc_tei::check_for_hash(key)))
}
