use colored::Colorize;
use std::path::PathBuf;

use crate::config::UploadConfig;
use crate::error::{CliError, CliResult};
use crate::upload::{upload_files, FolderStatus, UploadOutcome};

pub async fn run(config: UploadConfig, files: &[PathBuf], quiet: bool) -> CliResult<()> {
    config.validate().map_err(CliError::Usage)?;

    let report = upload_files(&config, files).await?;

    if let FolderStatus::Failed(reason) = &report.folder {
        eprintln!(
            "{} could not create '{}': {reason}",
            "warning:".yellow().bold(),
            config.folder
        );
    }

    for outcome in &report.files {
        match outcome {
            UploadOutcome::Uploaded { .. } if !quiet => {
                println!("{} {outcome}", "Uploaded".green().bold());
            }
            UploadOutcome::Uploaded { .. } => {}
            UploadOutcome::Failed { .. } => {
                eprintln!("{} {outcome}", "failed:".red().bold());
            }
        }
    }

    let failures: Vec<String> = report
        .failures()
        .into_iter()
        .map(|o| o.remote_path().to_string())
        .collect();
    if failures.is_empty() {
        Ok(())
    } else {
        Err(CliError::UploadFailures(failures))
    }
}
