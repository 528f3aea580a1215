//! # Agent Samples
//!
//! Search over a public repository of agent samples (by default
//! `google/adk-samples`), used to find real implementations that resemble a
//! request.
//!
//! - `github` - contents API client behind the `SampleSource` trait
//! - `sample` - crawled sample records
//! - `technologies` - stack inference from file names
//! - `patterns` - topology inference from README and layout
//! - `search` - crawl, rank, and report

pub mod github;
pub mod patterns;
pub mod sample;
pub mod search;
pub mod technologies;

pub use github::{ContentEntry, EntryKind, GitHubSource, SampleSource};
pub use patterns::{extract_patterns, ArchitecturePattern, InferredPattern};
pub use sample::{AgentSample, ScoredSample};
pub use search::{SampleSearchReport, SampleSearcher};
pub use technologies::infer_technologies;

use crate::config::LodestarConfig;
use crate::error::SampleError;
use crate::ranking::WeightedScorer;

/// Searcher over the GitHub repository named in `config`
pub fn github_searcher(config: &LodestarConfig) -> Result<SampleSearcher<GitHubSource>, SampleError> {
    let source = GitHubSource::new(config.github.clone())?;
    Ok(SampleSearcher::new(
        source,
        config.samples.clone(),
        WeightedScorer::new(config.scoring.clone()),
    ))
}
