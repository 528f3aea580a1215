//! # Sample Search
//!
//! Crawls the agent directories of a samples repository, ranks them against a
//! query, and reports the best matches with their inferred architectures.
//!
//! ```text
//! root probe → list roots → per sample: files + README → rank → top N
//!                                                          └→ patterns
//! ```
//!
//! `search` never fails. An unreachable repository yields a report with
//! `error` set; unreachable directories and samples are logged and skipped.

use super::github::{ContentEntry, SampleSource};
use super::patterns::{extract_patterns, ArchitecturePattern};
use super::sample::{excerpt, AgentSample, ScoredSample};
use super::technologies::infer_technologies;
use crate::config::SampleSearchConfig;
use crate::error::SampleError;
use crate::ranking::{SearchKind, WeightedScorer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one sample search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleSearchReport {
    pub query: String,
    pub kind: SearchKind,
    /// Best matches, most relevant first
    pub samples: Vec<ScoredSample>,
    /// Architecture summaries (architecture and general searches only)
    pub patterns: Vec<ArchitecturePattern>,
    /// Samples found in the repository before ranking
    pub total_samples: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub searched_at: DateTime<Utc>,
}

impl SampleSearchReport {
    fn new(query: &str, kind: SearchKind) -> Self {
        Self {
            query: query.to_string(),
            kind,
            samples: Vec::new(),
            patterns: Vec::new(),
            total_samples: 0,
            error: None,
            searched_at: Utc::now(),
        }
    }
}

/// Searches a sample source
pub struct SampleSearcher<S: SampleSource> {
    source: S,
    config: SampleSearchConfig,
    scorer: WeightedScorer,
}

impl<S: SampleSource> SampleSearcher<S> {
    pub fn new(source: S, config: SampleSearchConfig, scorer: WeightedScorer) -> Self {
        Self {
            source,
            config,
            scorer,
        }
    }

    /// Search the repository; errors are reported in the result
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str, kind: SearchKind) -> SampleSearchReport {
        match self.try_search(query, kind).await {
            Ok(report) => {
                tracing::info!(
                    relevant = report.samples.len(),
                    total = report.total_samples,
                    "Sample search complete"
                );
                report
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sample search failed");
                let mut report = SampleSearchReport::new(query, kind);
                report.error = Some(e.to_string());
                report
            }
        }
    }

    async fn try_search(
        &self,
        query: &str,
        kind: SearchKind,
    ) -> Result<SampleSearchReport, SampleError> {
        // Repository must be reachable before anything else is attempted
        self.source.list_dir("").await?;

        let mut all = Vec::new();
        for root in &self.config.roots {
            all.extend(self.collect_root(root).await);
        }

        let mut report = SampleSearchReport::new(query, kind);
        report.total_samples = all.len();

        let ranked: Vec<ScoredSample> = match self.scorer.rank(all, query, kind) {
            Ok(ranked) => ranked
                .into_iter()
                .map(|(sample, relevance_score)| ScoredSample {
                    sample,
                    relevance_score,
                })
                .collect(),
            Err(e) => {
                tracing::warn!(error = %e, "Ranking failed, reporting no samples");
                report.error = Some(e.to_string());
                Vec::new()
            }
        };

        if kind.wants_patterns() {
            report.patterns = extract_patterns(&ranked);
        }
        report.samples = ranked.into_iter().take(self.config.max_results).collect();

        Ok(report)
    }

    /// Every sample directory under `root`; an unreadable root yields none
    async fn collect_root(&self, root: &str) -> Vec<AgentSample> {
        tracing::debug!(root, "Exploring samples");

        let entries = match self.source.list_dir(root).await {
            Ok(entries) => entries,
            Err(e) if e.is_status() => {
                tracing::debug!(root, error = %e, "Sample directory not present");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(root, error = %e, "Cannot list sample directory");
                return Vec::new();
            }
        };

        let language = root.split('/').next().unwrap_or_default().to_string();
        let mut samples = Vec::new();

        for entry in entries.iter().filter(|e| e.is_dir()) {
            let path = join_path(root, entry);
            match self.describe_sample(&path, &entry.name, &language).await {
                Ok(sample) => samples.push(sample),
                Err(e) => tracing::warn!(sample = %entry.name, error = %e, "Skipping sample"),
            }
        }

        samples
    }

    async fn describe_sample(
        &self,
        path: &str,
        name: &str,
        language: &str,
    ) -> Result<AgentSample, SampleError> {
        let entries = self.source.list_dir(path).await?;

        let mut sample = AgentSample {
            name: name.to_string(),
            language: language.to_string(),
            ..Default::default()
        };

        let mut readme_url = None;
        for entry in &entries {
            if entry.is_file() {
                sample.files.push(entry.name.clone());
                if readme_url.is_none() && entry.is_readme() {
                    readme_url = entry.download_url.clone();
                }
            } else if entry.is_dir() {
                sample.directories.push(entry.name.clone());
            }
        }

        if let Some(url) = readme_url {
            match self.source.fetch_text(&url).await {
                Ok(text) => {
                    sample.readme_excerpt = excerpt(&text, self.config.readme_excerpt_chars)
                }
                Err(e) => tracing::debug!(sample = name, error = %e, "README unavailable"),
            }
        }

        sample.technologies = infer_technologies(&sample.files);
        Ok(sample)
    }
}

fn join_path(root: &str, entry: &ContentEntry) -> String {
    if entry.path.is_empty() {
        format!("{}/{}", root.trim_end_matches('/'), entry.name)
    } else {
        entry.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::github::EntryKind;
    use async_trait::async_trait;
    use std::collections::HashMap;

    /// In-memory repository: listings by path, files by URL
    #[derive(Default)]
    struct FakeSource {
        dirs: HashMap<String, Vec<ContentEntry>>,
        files: HashMap<String, String>,
    }

    impl FakeSource {
        fn dir(mut self, path: &str, entries: Vec<ContentEntry>) -> Self {
            self.dirs.insert(path.to_string(), entries);
            self
        }

        fn file(mut self, url: &str, text: &str) -> Self {
            self.files.insert(url.to_string(), text.to_string());
            self
        }
    }

    #[async_trait]
    impl SampleSource for FakeSource {
        async fn list_dir(&self, path: &str) -> Result<Vec<ContentEntry>, SampleError> {
            self.dirs.get(path).cloned().ok_or(SampleError::Status {
                url: path.to_string(),
                status: 404,
            })
        }

        async fn fetch_text(&self, url: &str) -> Result<String, SampleError> {
            self.files.get(url).cloned().ok_or(SampleError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    fn dir(parent: &str, name: &str) -> ContentEntry {
        ContentEntry {
            name: name.to_string(),
            path: format!("{}/{}", parent, name),
            kind: EntryKind::Dir,
            download_url: None,
        }
    }

    fn file(parent: &str, name: &str) -> ContentEntry {
        let path = format!("{}/{}", parent, name);
        ContentEntry {
            name: name.to_string(),
            download_url: Some(format!("raw://{}", path)),
            path,
            kind: EntryKind::File,
        }
    }

    fn searcher(source: FakeSource) -> SampleSearcher<FakeSource> {
        SampleSearcher::new(
            source,
            SampleSearchConfig::default(),
            WeightedScorer::default(),
        )
    }

    fn repo() -> FakeSource {
        let py = "python/agents";
        FakeSource::default()
            .dir("", vec![dir("", "python"), dir("", "java")])
            .dir(py, vec![dir(py, "customer-service"), dir(py, "data-science"), file(py, "index.md")])
            .dir(
                "python/agents/customer-service",
                vec![
                    file("python/agents/customer-service", "README.md"),
                    file("python/agents/customer-service", "pyproject.toml"),
                    dir("python/agents/customer-service", "customer_service"),
                ],
            )
            .file(
                "raw://python/agents/customer-service/README.md",
                "A multi-agent customer service assistant.",
            )
            .dir(
                "python/agents/data-science",
                vec![
                    file("python/agents/data-science", "README.md"),
                    dir("python/agents/data-science", "sub_agents"),
                ],
            )
            .file(
                "raw://python/agents/data-science/README.md",
                "Sequential workflow for data analysis.",
            )
        // java/agents is missing: listing fails and is skipped
    }

    #[tokio::test]
    async fn test_search_ranks_and_describes_samples() {
        let report = searcher(repo())
            .search("customer service", SearchKind::Architecture)
            .await;

        assert!(report.error.is_none());
        assert_eq!(report.total_samples, 2);
        assert_eq!(report.samples[0].sample.name, "customer-service");
        assert_eq!(report.samples[0].sample.language, "python");
        assert_eq!(
            report.samples[0].sample.technologies,
            vec!["Markdown", "Poetry", "TOML"]
        );
        assert_eq!(report.samples[0].sample.directories, vec!["customer_service"]);
        assert_eq!(report.patterns[0].name, "customer-service");
    }

    #[tokio::test]
    async fn test_code_search_has_no_patterns() {
        let report = searcher(repo()).search("data", SearchKind::Code).await;

        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].sample.name, "data-science");
        assert!(report.patterns.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_repository_reports_error() {
        let report = searcher(FakeSource::default())
            .search("anything", SearchKind::General)
            .await;

        assert!(report.samples.is_empty());
        assert_eq!(report.total_samples, 0);
        assert!(report.error.unwrap().contains("404"));
    }

    #[tokio::test]
    async fn test_missing_readme_leaves_excerpt_empty() {
        let py = "python/agents";
        let source = FakeSource::default()
            .dir("", vec![])
            .dir(py, vec![dir(py, "travel")])
            .dir("python/agents/travel", vec![file("python/agents/travel", "readme.rst")]);

        let report = searcher(source).search("travel", SearchKind::Code).await;
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].sample.readme_excerpt, "");
        assert_eq!(report.samples[0].sample.files, vec!["readme.rst"]);
    }

    #[test]
    fn test_results_capped_and_readme_truncated() {
        let py = "python/agents";
        let mut source = FakeSource::default().dir("", vec![]);
        let mut listing = Vec::new();
        for i in 0..8 {
            let name = format!("agent-{}", i);
            let path = format!("{}/{}", py, name);
            listing.push(dir(py, &name));
            source = source
                .dir(&path, vec![file(&path, "README.md")])
                .file(&format!("raw://{}/README.md", path), &"agent ".repeat(200));
        }
        source = source.dir(py, listing);

        let report = tokio_test::block_on(searcher(source).search("agent", SearchKind::General));

        assert_eq!(report.total_samples, 8);
        assert_eq!(report.samples.len(), 5);
        assert_eq!(report.patterns.len(), 8);
        assert_eq!(report.samples[0].sample.readme_excerpt.chars().count(), 500);
    }
}
