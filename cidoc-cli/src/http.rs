//! HTTP GET for registry files, lookup tables and ontology documents

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Errors from remote fetches
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response
    #[error("GET {url} returned status {status}{}", body_suffix(.body))]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("invalid UTF-8 from {url}: {source}")]
    Utf8 {
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {}", body.chars().take(200).collect::<String>())
    }
}

/// Thin GET client with a per-request timeout
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { http })
    }

    /// The underlying client, shared with the uploader
    pub fn client(&self) -> &Client {
        &self.http
    }

    /// GET `url` and return the body; non-2xx is an error
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        debug!(url = %url, "GET");
        let request_err = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };
        let resp = self.http.get(url).send().await.map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        let bytes = resp.bytes().await.map_err(request_err)?;
        Ok(bytes.to_vec())
    }

    /// GET `url` as UTF-8 text; a body that is not valid UTF-8 is an error
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let bytes = self.get_bytes(url).await?;
        String::from_utf8(bytes).map_err(|source| FetchError::Utf8 {
            url: url.to_string(),
            source,
        })
    }

    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let bytes = self.get_bytes(url).await?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Json {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_get_bytes_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/listplace.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<listPlace/>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetcher()
            .get_text(&format!("{}/listplace.xml", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<listPlace/>");
    }

    #[tokio::test]
    async fn test_status_error_carries_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let err = fetcher()
            .get_bytes(&format!("{}/listorg.xml", server.uri()))
            .await
            .unwrap_err();
        match &err {
            FetchError::Status { status, body, .. } => {
                assert_eq!(*status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected Status, got: {other}"),
        }
        assert!(err.to_string().ends_with("returned status 503: maintenance"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/person-person.ttl"))
            .respond_with(
                ResponseTemplate::new(200).set_body_bytes(b"<a> <b> \"Gr\xfcn\" .".to_vec()),
            )
            .mount(&server)
            .await;

        let err = fetcher()
            .get_text(&format!("{}/person-person.ttl", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Utf8 { .. }), "got: {err}");
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/person-person.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = fetcher()
            .get_json(&format!("{}/person-person.json", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Json { .. }));
    }
}
