//! # Errors
//!
//! Typed failures for the index and the sample crawler. None of these escape
//! the public query operations: the index degrades to a default result and the
//! sample searcher reports them in-band.

use thiserror::Error;

/// Failures while matching a description against the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Entry that cannot be scored (missing name, no keywords, blank keyword)
    #[error("malformed catalog entry '{name}': {reason}")]
    MalformedEntry { name: String, reason: String },

    /// Accumulated relevance score does not fit in a u32
    #[error("relevance score overflow while scoring '{name}'")]
    ScoreOverflow { name: String },
}

/// Failures while talking to a sample repository
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode listing from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl SampleError {
    /// Whether the remote answered but refused or lacked the resource
    pub fn is_status(&self) -> bool {
        matches!(self, SampleError::Status { .. })
    }
}
