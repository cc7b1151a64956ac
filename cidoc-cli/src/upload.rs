//! ownCloud uploader (WebDAV)
//!
//! Logs in, makes sure the destination folder exists and PUTs each file to
//! `{folder}/{basename}`. Folder and per-file results are reported instead of
//! swallowed; only a failed login aborts.

use reqwest::{Client, Method, StatusCode};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::UploadConfig;
use crate::http::{FetchError, HttpFetcher};

const WEBDAV_ROOT: &str = "remote.php/webdav";

/// Errors that stop an upload run
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Client(#[from] FetchError),

    #[error("ownCloud rejected the credentials for {user} (401)")]
    Unauthorized { user: String },

    #[error("ownCloud login check returned status {0}")]
    Status(u16),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid WebDAV method: {0}")]
    Method(String),
}

/// Outcome of ensuring the destination folder
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FolderStatus {
    Created,
    AlreadyExisted,
    Failed(String),
}

/// Outcome of one file upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Uploaded { remote_path: String, status: u16 },
    Failed { remote_path: String, reason: String },
}

impl UploadOutcome {
    pub fn remote_path(&self) -> &str {
        match self {
            UploadOutcome::Uploaded { remote_path, .. }
            | UploadOutcome::Failed { remote_path, .. } => remote_path,
        }
    }

    pub fn is_uploaded(&self) -> bool {
        matches!(self, UploadOutcome::Uploaded { .. })
    }
}

impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadOutcome::Uploaded {
                remote_path,
                status,
            } => write!(f, "{remote_path} uploaded ({status})"),
            UploadOutcome::Failed {
                remote_path,
                reason,
            } => write!(f, "{remote_path} failed: {reason}"),
        }
    }
}

/// Folder status plus one outcome per file, in input order
#[derive(Clone, Debug)]
pub struct UploadReport {
    pub folder: FolderStatus,
    pub files: Vec<UploadOutcome>,
}

impl UploadReport {
    /// Outcome of the last upload
    pub fn last(&self) -> Option<&UploadOutcome> {
        self.files.last()
    }

    pub fn failures(&self) -> Vec<&UploadOutcome> {
        self.files.iter().filter(|o| !o.is_uploaded()).collect()
    }
}

/// Authenticated WebDAV client for one ownCloud server
pub struct OwnCloudClient {
    http: Client,
    webdav: String,
    user: String,
    password: String,
    propfind: Method,
    mkcol: Method,
}

impl fmt::Debug for OwnCloudClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnCloudClient")
            .field("webdav", &self.webdav)
            .field("user", &self.user)
            .finish()
    }
}

impl OwnCloudClient {
    pub fn new(http: Client, server: &str, user: &str, password: &str) -> Result<Self, UploadError> {
        let method = |name: &str| {
            Method::from_bytes(name.as_bytes()).map_err(|e| UploadError::Method(e.to_string()))
        };
        Ok(Self {
            http,
            webdav: format!("{}/{WEBDAV_ROOT}", server.trim_end_matches('/')),
            user: user.to_string(),
            password: password.to_string(),
            propfind: method("PROPFIND")?,
            mkcol: method("MKCOL")?,
        })
    }

    /// `{server}/remote.php/webdav/{path}` with each segment percent-encoded
    pub fn url_for(&self, remote_path: &str) -> String {
        let encoded: Vec<String> = remote_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| urlencoding::encode(s).into_owned())
            .collect();
        format!("{}/{}", self.webdav, encoded.join("/"))
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.user, Some(&self.password))
    }

    /// PROPFIND on the WebDAV root with `Depth: 0`
    pub async fn login(&self) -> Result<(), UploadError> {
        let url = format!("{}/", self.webdav);
        let resp = self
            .request(self.propfind.clone(), &url)
            .header("Depth", "0")
            .send()
            .await
            .map_err(|source| UploadError::Request {
                url: url.clone(),
                source,
            })?;
        match resp.status() {
            s if s.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => Err(UploadError::Unauthorized {
                user: self.user.clone(),
            }),
            s => Err(UploadError::Status(s.as_u16())),
        }
    }

    /// MKCOL; 201 is created, 405 means the folder is already there
    pub async fn mkdir(&self, folder: &str) -> FolderStatus {
        let url = self.url_for(folder);
        match self.request(self.mkcol.clone(), &url).send().await {
            Ok(resp) => match resp.status() {
                StatusCode::CREATED => FolderStatus::Created,
                StatusCode::METHOD_NOT_ALLOWED => FolderStatus::AlreadyExisted,
                s => FolderStatus::Failed(format!("MKCOL returned status {}", s.as_u16())),
            },
            Err(e) => FolderStatus::Failed(e.to_string()),
        }
    }

    /// PUT `body` to `remote_path`
    pub async fn put(&self, remote_path: &str, body: Vec<u8>) -> UploadOutcome {
        let url = self.url_for(remote_path);
        let remote_path = remote_path.to_string();
        match self.request(Method::PUT, &url).body(body).send().await {
            Ok(resp) if resp.status().is_success() => UploadOutcome::Uploaded {
                remote_path,
                status: resp.status().as_u16(),
            },
            Ok(resp) => UploadOutcome::Failed {
                remote_path,
                reason: format!("PUT returned status {}", resp.status().as_u16()),
            },
            Err(e) => UploadOutcome::Failed {
                remote_path,
                reason: e.to_string(),
            },
        }
    }
}

/// `{folder}/{basename}`; `None` for paths without a file name
pub fn remote_path_for(folder: &str, file: &Path) -> Option<String> {
    let name = file.file_name()?.to_string_lossy();
    Some(format!("{}/{}", folder.trim_matches('/'), name))
}

/// Upload `files` in order. Login failure is an error; everything after
/// that is recorded in the report.
pub async fn upload_files(
    config: &UploadConfig,
    files: &[PathBuf],
) -> Result<UploadReport, UploadError> {
    let fetcher = HttpFetcher::new(config.timeout)?;
    let client = OwnCloudClient::new(
        fetcher.client().clone(),
        &config.server,
        &config.user,
        &config.password,
    )?;

    client.login().await?;
    debug!(server = %config.server, user = %config.user, "logged in");

    let folder = client.mkdir(&config.folder).await;
    match &folder {
        FolderStatus::Created => info!(folder = %config.folder, "created folder"),
        FolderStatus::AlreadyExisted => debug!(folder = %config.folder, "folder exists"),
        FolderStatus::Failed(reason) => {
            warn!(folder = %config.folder, reason = %reason, "could not create folder")
        }
    }

    let mut seen = HashSet::new();
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let Some(remote_path) = remote_path_for(&config.folder, file) else {
            outcomes.push(UploadOutcome::Failed {
                remote_path: file.display().to_string(),
                reason: "path has no file name".into(),
            });
            continue;
        };
        if !seen.insert(remote_path.clone()) {
            warn!(remote = %remote_path, file = %file.display(), "same basename uploaded twice, overwriting");
        }

        info!(file = %file.display(), remote = %remote_path, "uploading");
        let outcome = match tokio::fs::read(file).await {
            Ok(body) => client.put(&remote_path, body).await,
            Err(e) => UploadOutcome::Failed {
                remote_path,
                reason: format!("cannot read {}: {e}", file.display()),
            },
        };
        if let UploadOutcome::Failed { reason, .. } = &outcome {
            warn!(file = %file.display(), reason = %reason, "upload failed");
        }
        outcomes.push(outcome);
    }

    Ok(UploadReport {
        folder,
        files: outcomes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_path_flattens_directories() {
        assert_eq!(
            remote_path_for("pfp-data", Path::new("./datasets/wmp1_person.nt")).as_deref(),
            Some("pfp-data/wmp1_person.nt")
        );
        assert_eq!(
            remote_path_for("/pfp-data/", Path::new("wkfm_org.nt")).as_deref(),
            Some("pfp-data/wkfm_org.nt")
        );
        assert_eq!(remote_path_for("pfp-data", Path::new("/")), None);
    }

    #[test]
    fn test_url_encoding() {
        let client = OwnCloudClient::new(Client::new(), "https://cloud.example.org/", "u", "p")
            .unwrap();
        assert_eq!(
            client.url_for("pfp data/wmp1 person.nt"),
            "https://cloud.example.org/remote.php/webdav/pfp%20data/wmp1%20person.nt"
        );
    }

    #[test]
    fn test_report_accessors() {
        let report = UploadReport {
            folder: FolderStatus::AlreadyExisted,
            files: vec![
                UploadOutcome::Failed {
                    remote_path: "pfp-data/a.nt".into(),
                    reason: "PUT returned status 507".into(),
                },
                UploadOutcome::Uploaded {
                    remote_path: "pfp-data/b.nt".into(),
                    status: 201,
                },
            ],
        };
        assert_eq!(report.last().map(|o| o.remote_path()), Some("pfp-data/b.nt"));
        assert_eq!(report.failures().len(), 1);
        assert_eq!(report.failures()[0].remote_path(), "pfp-data/a.nt");
    }
}
