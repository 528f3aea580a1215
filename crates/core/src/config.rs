//! # Lodestar Configuration
//!
//! Settings for the sample crawler and the weighted scorer. Loaded from
//! `.lodestar/config.json` when present, then overridden from the environment:
//!
//! - `GITHUB_TOKEN` - token for authenticated GitHub API calls
//! - `LODESTAR_GITHUB_API` - API base URL (GitHub Enterprise, test servers)
//! - `LODESTAR_SAMPLES_REPO` - `owner/name` of the samples repository

use crate::ranking::ScoringWeights;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default location of the config file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".lodestar/config.json";

/// GitHub API access
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// API base URL
    pub api_base: String,
    /// Samples repository as `owner/name`
    pub repository: String,
    /// Never written back to disk
    #[serde(skip_serializing)]
    pub token: Option<String>,
    pub user_agent: String,
    /// Timeout for directory listings
    pub listing_timeout_secs: u64,
    /// Timeout for raw file downloads
    pub download_timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            repository: "google/adk-samples".to_string(),
            token: None,
            user_agent: "lodestar-samples/0.1".to_string(),
            listing_timeout_secs: 10,
            download_timeout_secs: 5,
        }
    }
}

impl GitHubConfig {
    pub fn listing_timeout(&self) -> Duration {
        Duration::from_secs(self.listing_timeout_secs)
    }

    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.download_timeout_secs)
    }

    /// `{api_base}/repos/{repository}`
    pub fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}",
            self.api_base.trim_end_matches('/'),
            self.repository.trim_matches('/')
        )
    }
}

/// Sample search behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSearchConfig {
    /// Directories whose sub-directories are samples; the first path segment
    /// names the language
    pub roots: Vec<String>,
    /// Samples kept in a report
    pub max_results: usize,
    /// README characters kept per sample
    pub readme_excerpt_chars: usize,
}

impl Default for SampleSearchConfig {
    fn default() -> Self {
        Self {
            roots: vec!["python/agents".to_string(), "java/agents".to_string()],
            max_results: 5,
            readme_excerpt_chars: 500,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodestarConfig {
    pub github: GitHubConfig,
    pub samples: SampleSearchConfig,
    pub scoring: ScoringWeights,
}

impl LodestarConfig {
    /// Load from `path` (defaults if missing) and apply environment overrides
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Invalid config {}", path.display()))?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    /// Apply overrides from a key lookup (the process environment in `load`)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty("GITHUB_TOKEN") {
            self.github.token = Some(token);
        }
        if let Some(api) = non_empty("LODESTAR_GITHUB_API") {
            self.github.api_base = api;
        }
        if let Some(repo) = non_empty("LODESTAR_SAMPLES_REPO") {
            self.github.repository = repo;
        }
    }
}
