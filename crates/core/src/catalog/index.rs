//! # Reference Architecture Index
//!
//! Answers "which known architectures look like this request?" against an
//! immutable catalog. Two aggregation modes share the substring matcher:
//!
//! - `Keyword` - an entry passes if any of its keywords occurs in the
//!   description; results keep catalog order.
//! - `Weighted` - entries that pass the keyword test accumulate weighted
//!   points and come back best first, ties in catalog order. Query words
//!   shorter than [`MIN_KEYWORD_LEN`] are not scored.
//!
//! Public operations never fail. When nothing matches, the fallback exemplar
//! is returned; when matching itself fails, the failure is logged and the
//! caller gets an empty result.

use super::exemplar::{ArchitectureExemplar, Catalog, MIN_KEYWORD_LEN};
use crate::error::IndexError;
use crate::ranking::matcher::count_matches;
use crate::ranking::{Scorable, ScoringWeights, SearchKind, WeightedScorer};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How matches are aggregated and ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Any keyword substring present; catalog order
    #[default]
    Keyword,
    /// Accumulated weighted score; best first
    Weighted,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Keyword => f.write_str("keyword"),
            MatchMode::Weighted => f.write_str("weighted"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(MatchMode::Keyword),
            "weighted" => Ok(MatchMode::Weighted),
            other => Err(format!("unknown match mode '{}'", other)),
        }
    }
}

/// An exemplar annotated with its relevance for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredExemplar {
    #[serde(flatten)]
    pub exemplar: ArchitectureExemplar,
    /// Keyword mode: matched keyword count. Weighted mode: total points.
    pub relevance_score: u32,
}

/// Result of one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QueryResult {
    pub mode: MatchMode,
    /// True when `matches` holds only the synthesized fallback exemplar
    pub fallback: bool,
    pub matches: Vec<ScoredExemplar>,
}

impl QueryResult {
    fn fallback(mode: MatchMode) -> Self {
        Self {
            mode,
            fallback: true,
            matches: vec![ScoredExemplar {
                exemplar: ArchitectureExemplar::fallback(),
                relevance_score: 0,
            }],
        }
    }

    fn empty(mode: MatchMode) -> Self {
        Self {
            mode,
            fallback: false,
            matches: Vec::new(),
        }
    }

    /// Drop scores, keep order
    pub fn into_exemplars(self) -> Vec<ArchitectureExemplar> {
        self.matches.into_iter().map(|m| m.exemplar).collect()
    }
}

/// Exemplar viewed through the weighted scorer
struct ExemplarView<'a>(&'a ArchitectureExemplar);

impl Scorable for ExemplarView<'_> {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn body(&self) -> String {
        format!("{} {}", self.0.pattern, self.0.use_case_keywords.join(" "))
    }

    fn tags(&self) -> String {
        self.0
            .agent_roles
            .iter()
            .chain(self.0.tool_names.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Read-only index over one catalog
#[derive(Debug, Clone)]
pub struct ReferenceArchitectureIndex {
    catalog: Catalog,
    scorer: WeightedScorer,
}

impl Default for ReferenceArchitectureIndex {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl ReferenceArchitectureIndex {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_weights(catalog, ScoringWeights::default())
    }

    pub fn with_weights(catalog: Catalog, weights: ScoringWeights) -> Self {
        let weights = ScoringWeights {
            min_word_len: weights.min_word_len.max(MIN_KEYWORD_LEN),
            ..weights
        };
        tracing::debug!(entries = catalog.len(), "Reference architecture index ready");
        Self {
            catalog,
            scorer: WeightedScorer::new(weights),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog entries whose keywords occur in `description`, in catalog order
    ///
    /// Returns the fallback exemplar alone when nothing matches, and an empty
    /// vector if matching fails.
    pub fn find_references(&self, description: &str) -> Vec<ArchitectureExemplar> {
        self.query(description, MatchMode::Keyword).into_exemplars()
    }

    /// Run a query in either mode; never fails
    pub fn query(&self, description: &str, mode: MatchMode) -> QueryResult {
        match self.try_query(description, mode) {
            Ok(result) => {
                tracing::debug!(
                    mode = %mode,
                    matches = result.matches.len(),
                    fallback = result.fallback,
                    "Reference architectures resolved"
                );
                result
            }
            Err(e) => {
                tracing::error!(mode = %mode, error = %e, "Reference lookup failed, returning no references");
                QueryResult::empty(mode)
            }
        }
    }

    /// Run a query, surfacing internal failures
    pub fn try_query(&self, description: &str, mode: MatchMode) -> Result<QueryResult, IndexError> {
        let matches = match mode {
            MatchMode::Keyword => self.keyword_matches(description),
            MatchMode::Weighted => self.weighted_matches(description)?,
        };

        if matches.is_empty() {
            return Ok(QueryResult::fallback(mode));
        }

        Ok(QueryResult {
            mode,
            fallback: false,
            matches,
        })
    }

    fn keyword_matches(&self, description: &str) -> Vec<ScoredExemplar> {
        self.keyword_hits(description)
            .map(|(entry, hits)| ScoredExemplar {
                exemplar: entry.clone(),
                relevance_score: hits as u32,
            })
            .collect()
    }

    fn weighted_matches(&self, description: &str) -> Result<Vec<ScoredExemplar>, IndexError> {
        let views = self
            .keyword_hits(description)
            .map(|(entry, _)| ExemplarView(entry));
        let ranked = self.scorer.rank(views, description, SearchKind::General)?;

        Ok(ranked
            .into_iter()
            .map(|(view, score)| ScoredExemplar {
                exemplar: view.0.clone(),
                relevance_score: score,
            })
            .collect())
    }

    /// Valid entries with at least one keyword in `description`, paired with
    /// their hit count
    fn keyword_hits<'a>(
        &'a self,
        description: &str,
    ) -> impl Iterator<Item = (&'a ArchitectureExemplar, usize)> + 'a {
        let description = description.to_lowercase();

        self.valid_entries().filter_map(move |entry| {
            let hits = count_matches(
                &description,
                entry.use_case_keywords.iter().map(String::as_str),
            );
            (hits > 0).then_some((entry, hits))
        })
    }

    /// Entries that can be matched; malformed ones are logged and skipped
    fn valid_entries(&self) -> impl Iterator<Item = &ArchitectureExemplar> {
        self.catalog.iter().filter(|entry| match entry.validate() {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping catalog entry");
                false
            }
        })
    }
}
