//! # Lodestar API
//!
//! HTTP handlers over the core index and sample searcher.
//!
//! - `references` - catalog queries and the exemplar schema
//! - `samples` - GitHub sample search
//! - `quality` - documentation answer assessment

pub mod quality;
pub mod references;
pub mod samples;

pub use quality::quality_routes;
pub use references::{catalog_routes, reference_routes};
pub use samples::sample_routes;
