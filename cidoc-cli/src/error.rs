use colored::Colorize;
use std::fmt;
use std::process;

use crate::http::FetchError;
use crate::pipeline::PipelineError;
use crate::upload::UploadError;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// A pipeline run aborted.
    Pipeline(PipelineError),
    /// HTTP client setup failed.
    Fetch(FetchError),
    /// Login to ownCloud failed; nothing was uploaded.
    Upload(UploadError),
    /// Some uploads failed; remote paths of the failures.
    UploadFailures(Vec<String>),
    /// Argument / usage errors.
    Usage(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pipeline(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Fetch(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::Upload(e) => write!(f, "{} {e}", "error:".red().bold()),
            CliError::UploadFailures(paths) => write!(
                f,
                "{} {} upload(s) failed: {}",
                "error:".red().bold(),
                paths.len(),
                paths.join(", ")
            ),
            CliError::Usage(msg) => write!(
                f,
                "{} {msg}\n  {} run 'cidoc --help' for the available flags",
                "error:".red().bold(),
                "help:".cyan().bold(),
            ),
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        CliError::Pipeline(e)
    }
}

impl From<FetchError> for CliError {
    fn from(e: FetchError) -> Self {
        CliError::Fetch(e)
    }
}

impl From<UploadError> for CliError {
    fn from(e: UploadError) -> Self {
        CliError::Upload(e)
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
