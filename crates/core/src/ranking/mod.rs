//! # Ranking
//!
//! Relevance primitives shared by the catalog index and the sample search.
//!
//! - `matcher` - substring containment over lowercased text
//! - `scorer` - weighted, accumulating relevance scores
//! - `quality` - heuristic quality metrics for documentation answers

pub mod matcher;
pub mod quality;
pub mod scorer;

pub use quality::{assess_answer, AnswerQuality};
pub use scorer::{Scorable, ScoringWeights, SearchKind, WeightedScorer};
