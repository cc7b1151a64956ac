//! TEI registry to CIDOC-CRM conversion.
//!
//! This crate provides the pipelines, uploader and command handlers behind
//! the `cidoc` binary. Each pipeline can also be driven directly through
//! [`pipeline::run_pipeline`] with any [`cidoc_mapping::CidocMapping`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod pipeline;
pub mod source;
pub mod upload;

use cli::{Cli, Commands};
use config::{EntityKind, PipelineConfig, UploadConfig};

/// Dispatch a parsed [`Cli`] to the appropriate command handler.
pub async fn run(cli: Cli) -> error::CliResult<()> {
    let timeout = cli.timeout_secs;
    let quiet = cli.quiet;

    match cli.command {
        Commands::Person(args) => {
            let config = PipelineConfig::from_person_args(&args, timeout);
            commands::pipeline::run(config, quiet).await
        }

        Commands::Org(args) => {
            let config = PipelineConfig::from_args(EntityKind::Org, &args, timeout);
            commands::pipeline::run(config, quiet).await
        }

        Commands::Place(args) => {
            let config = PipelineConfig::from_args(EntityKind::Place, &args, timeout);
            commands::pipeline::run(config, quiet).await
        }

        Commands::Upload(args) => {
            let config = UploadConfig::from_args(&args, timeout);
            commands::upload::run(config, &args.files, quiet).await
        }
    }
}
