use cidoc_mapping::AcdhMapping;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::config::PipelineConfig;
use crate::error::{CliError, CliResult};
use crate::http::HttpFetcher;
use crate::pipeline::run_pipeline;
use crate::source::SourceStatus;

pub async fn run(config: PipelineConfig, quiet: bool) -> CliResult<()> {
    config.validate().map_err(CliError::Usage)?;

    let fetcher = HttpFetcher::new(config.timeout)?;
    let mapping = AcdhMapping::new(config.mapping_config());

    let bar = progress_bar(quiet);
    let result = run_pipeline(&config, &mapping, &fetcher, &bar).await;
    bar.finish_and_clear();
    let summary = result?;

    if !quiet {
        let source = match summary.source {
            SourceStatus::Cached => "cached",
            SourceStatus::Fetched => "fetched",
        };
        println!(
            "{} {} {} entities ({source} {}), {} triples",
            "Saved".green().bold(),
            summary.output.display(),
            summary.entities,
            config.source.display(),
            summary.triples,
        );
    }
    Ok(())
}

fn progress_bar(quiet: bool) -> ProgressBar {
    let bar = if quiet {
        ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::hidden())
    } else {
        ProgressBar::new(0)
    };
    let style =
        ProgressStyle::with_template("{prefix:12} {spinner:.dim} [{bar:25}] {percent:>3}%  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .tick_strings(&["|", "/", "-", "\\", " "])
            .progress_chars("=>-");
    bar.set_style(style);
    bar.set_prefix(format!("{}", "Mapping".green().bold()));
    bar
}
