//! # Agent Samples
//!
//! One agent directory of a samples repository, as seen by the crawler.

use crate::ranking::Scorable;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A sample agent project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgentSample {
    /// Directory name (e.g. "customer-service")
    pub name: String,
    /// Language tree it was found under ("python", "java")
    pub language: String,
    /// Top-level file names
    pub files: Vec<String>,
    /// Leading excerpt of the README, empty if none was readable
    pub readme_excerpt: String,
    /// Top-level sub-directory names
    pub directories: Vec<String>,
    /// Technologies inferred from `files`
    pub technologies: Vec<String>,
}

impl Scorable for AgentSample {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> String {
        self.readme_excerpt.clone()
    }

    fn tags(&self) -> String {
        self.technologies.join(" ")
    }
}

/// A sample with its relevance to the search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredSample {
    #[serde(flatten)]
    pub sample: AgentSample,
    pub relevance_score: u32,
}

/// Truncate to at most `max_chars` characters on a char boundary
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}
