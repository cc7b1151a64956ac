//! Fetch-if-absent for registry files

use std::path::Path;
use tracing::{debug, info};

use crate::http::HttpFetcher;
use crate::pipeline::{PipelineError, Result};

/// Where the registry file came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceStatus {
    /// Already on disk; left untouched
    Cached,
    /// Downloaded during this call
    Fetched,
}

/// Make sure `path` exists, downloading `{base_url}{file_name}` if it does
/// not. An existing file is never re-fetched or checked for freshness.
pub async fn ensure_source(
    fetcher: &HttpFetcher,
    path: &Path,
    base_url: &str,
    file_name: &str,
) -> Result<SourceStatus> {
    if tokio::fs::try_exists(path)
        .await
        .map_err(|e| PipelineError::io(path, e))?
    {
        debug!(path = %path.display(), "registry file present, not fetching");
        return Ok(SourceStatus::Cached);
    }

    let url = format!("{base_url}{file_name}");
    info!(url = %url, "fetching {file_name}");
    let body = fetcher.get_bytes(&url).await?;

    if let Some(dir) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| PipelineError::io(dir, e))?;
    }
    tokio::fs::write(path, &body)
        .await
        .map_err(|e| PipelineError::io(path, e))?;
    Ok(SourceStatus::Fetched)
}
