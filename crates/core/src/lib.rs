//! # Lodestar Core
//!
//! Finds known architectures that resemble a new multi-agent design request.
//!
//! ## Architecture
//!
//! - `catalog/` - Static reference architectures and the index that queries them
//! - `ranking/` - Substring matching, weighted relevance scoring, answer quality
//! - `samples/` - GitHub agent-sample crawler and ranker
//! - `config` - File + environment configuration
//! - `error` - Typed internal failures
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lodestar_core::catalog::{MatchMode, ReferenceArchitectureIndex};
//!
//! let index = ReferenceArchitectureIndex::default();
//! let references = index.find_references("análise de dados business intelligence");
//! let ranked = index.query("pipeline de documentos", MatchMode::Weighted);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ranking;
pub mod samples;

pub use catalog::{ArchitectureExemplar, Catalog, MatchMode, QueryResult, ReferenceArchitectureIndex};
pub use config::LodestarConfig;
pub use error::{IndexError, SampleError};
