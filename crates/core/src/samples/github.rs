//! # GitHub Sample Source
//!
//! Reads a samples repository through the GitHub contents API.

use crate::config::GitHubConfig;
use crate::error::SampleError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

/// Kind of a repository entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    #[serde(other)]
    Other,
}

/// One entry of a contents listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_readme(&self) -> bool {
        self.is_file() && self.name.to_lowercase().starts_with("readme")
    }
}

/// Where samples are read from
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// List a directory; `""` is the repository root
    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, SampleError>;

    /// Download a file as text
    async fn fetch_text(&self, url: &str) -> Result<String, SampleError>;
}

/// Contents API client
pub struct GitHubSource {
    client: reqwest::Client,
    config: GitHubConfig,
}

impl GitHubSource {
    pub fn new(config: GitHubConfig) -> Result<Self, SampleError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        match config.token.as_deref() {
            Some(token) => match HeaderValue::from_str(&format!("token {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                    tracing::debug!("Using authenticated GitHub access");
                }
                Err(_) => tracing::warn!("GITHUB_TOKEN is not a valid header value, ignoring it"),
            },
            None => tracing::debug!("No GitHub token, using the public (rate-limited) API"),
        }

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()
            .map_err(SampleError::Client)?;

        Ok(Self { client, config })
    }

    /// Contents URL for a repository path, each segment percent-encoded
    pub fn contents_url(&self, path: &str) -> String {
        let encoded: Vec<_> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();

        if encoded.is_empty() {
            format!("{}/contents", self.config.repo_url())
        } else {
            format!("{}/contents/{}", self.config.repo_url(), encoded.join("/"))
        }
    }

    async fn get(
        &self,
        url: &str,
        timeout: std::time::Duration,
    ) -> Result<reqwest::Response, SampleError> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|source| SampleError::Http {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(SampleError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SampleSource for GitHubSource {
    async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, SampleError> {
        let url = self.contents_url(path);
        let body = self
            .get(&url, self.config.listing_timeout())
            .await?
            .text()
            .await
            .map_err(|source| SampleError::Http {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| SampleError::Decode { url, source })
    }

    async fn fetch_text(&self, url: &str) -> Result<String, SampleError> {
        self.get(url, self.config.download_timeout())
            .await?
            .text()
            .await
            .map_err(|source| SampleError::Http {
                url: url.to_string(),
                source,
            })
    }
}
