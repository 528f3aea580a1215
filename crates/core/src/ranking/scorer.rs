//! # Weighted Scorer
//!
//! Accumulating relevance score over a name, a free-text body, and a tag list.
//! Used for catalog queries in weighted mode and for ranking GitHub samples.

use super::matcher::{contains_keyword, query_words};
use crate::error::IndexError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a search is looking for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Architecture patterns (enables the pattern keyword bonus)
    #[default]
    Architecture,
    Code,
    Documentation,
    General,
}

impl SearchKind {
    /// Whether pattern extraction applies to this kind of search
    pub fn wants_patterns(&self) -> bool {
        matches!(self, SearchKind::Architecture | SearchKind::General)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Architecture => "architecture",
            SearchKind::Code => "code",
            SearchKind::Documentation => "documentation",
            SearchKind::General => "general",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "architecture" => Ok(SearchKind::Architecture),
            "code" => Ok(SearchKind::Code),
            "documentation" | "docs" => Ok(SearchKind::Documentation),
            "general" => Ok(SearchKind::General),
            other => Err(format!("unknown search kind '{}'", other)),
        }
    }
}

/// Point values for each kind of hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Whole query found in the name
    pub phrase_in_name: u32,
    /// Per query word found in the name
    pub word_in_name: u32,
    /// Per query word found in the body
    pub word_in_body: u32,
    /// Per query word found in the tags
    pub word_in_tags: u32,
    /// Per pattern keyword found in name or body (architecture searches only)
    pub pattern_bonus: u32,
    /// Keywords that indicate a multi-agent topology
    pub pattern_keywords: Vec<String>,
    /// Query words shorter than this (in chars) are ignored
    pub min_word_len: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            phrase_in_name: 10,
            word_in_name: 5,
            word_in_body: 3,
            word_in_tags: 2,
            pattern_bonus: 4,
            pattern_keywords: vec![
                "multi-agent".into(),
                "workflow".into(),
                "coordinator".into(),
                "sequential".into(),
            ],
            min_word_len: 1,
        }
    }
}

/// Anything the weighted scorer can rank
pub trait Scorable {
    /// Short label, matched against the whole query and each word
    fn name(&self) -> &str;
    /// Free text (README, description)
    fn body(&self) -> String;
    /// Tag-like attributes joined into one searchable string
    fn tags(&self) -> String;
}

/// Weighted, accumulating relevance scorer
#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: ScoringWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score one item against a query
    pub fn score<T: Scorable + ?Sized>(
        &self,
        item: &T,
        query: &str,
        kind: SearchKind,
    ) -> Result<u32, IndexError> {
        let query = query.trim().to_lowercase();
        let name = item.name().to_lowercase();
        let body = item.body().to_lowercase();
        let tags = item.tags().to_lowercase();
        let w = &self.weights;

        let mut total = Tally::new(item.name());

        if contains_keyword(&name, &query) {
            total.add(w.phrase_in_name)?;
        }

        for word in query_words(&query, w.min_word_len) {
            if contains_keyword(&body, &word) {
                total.add(w.word_in_body)?;
            }
            if contains_keyword(&name, &word) {
                total.add(w.word_in_name)?;
            }
            if contains_keyword(&tags, &word) {
                total.add(w.word_in_tags)?;
            }
        }

        if kind == SearchKind::Architecture {
            for keyword in &w.pattern_keywords {
                let keyword = keyword.to_lowercase();
                if contains_keyword(&body, &keyword) || contains_keyword(&name, &keyword) {
                    total.add(w.pattern_bonus)?;
                }
            }
        }

        Ok(total.value)
    }

    /// Score every item, keep those above zero, best first
    ///
    /// The sort is stable: equal scores keep their input order.
    pub fn rank<T: Scorable>(
        &self,
        items: impl IntoIterator<Item = T>,
        query: &str,
        kind: SearchKind,
    ) -> Result<Vec<(T, u32)>, IndexError> {
        let mut scored = Vec::new();
        for item in items {
            let score = self.score(&item, query, kind)?;
            if score > 0 {
                scored.push((item, score));
            }
        }
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(scored)
    }
}

/// Checked running total tied to the item being scored
struct Tally<'a> {
    name: &'a str,
    value: u32,
}

impl<'a> Tally<'a> {
    fn new(name: &'a str) -> Self {
        Self { name, value: 0 }
    }

    fn add(&mut self, points: u32) -> Result<(), IndexError> {
        self.value = self
            .value
            .checked_add(points)
            .ok_or_else(|| IndexError::ScoreOverflow {
                name: self.name.to_string(),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc {
        name: &'static str,
        body: &'static str,
        tags: &'static str,
    }

    impl Scorable for Doc {
        fn name(&self) -> &str {
            self.name
        }
        fn body(&self) -> String {
            self.body.to_string()
        }
        fn tags(&self) -> String {
            self.tags.to_string()
        }
    }

    fn doc(name: &'static str, body: &'static str, tags: &'static str) -> Doc {
        Doc { name, body, tags }
    }

    #[test]
    fn test_phrase_and_word_weights() {
        let scorer = WeightedScorer::default();
        let item = doc("customer-service", "Handles customer tickets", "Python");

        // phrase "customer" in name (10) + word in body (3) + word in name (5)
        let score = scorer
            .score(&item, "customer", SearchKind::Code)
            .unwrap();
        assert_eq!(score, 18);
    }

    #[test]
    fn test_tags_weight() {
        let scorer = WeightedScorer::default();
        let item = doc("travel-concierge", "", "Python, Docker");
        assert_eq!(scorer.score(&item, "docker", SearchKind::Code).unwrap(), 2);
    }

    #[test]
    fn test_architecture_bonus_only_for_architecture_kind() {
        let scorer = WeightedScorer::default();
        let item = doc("blog-writer", "A sequential workflow of agents", "");

        let general = scorer.score(&item, "blog", SearchKind::General).unwrap();
        let arch = scorer
            .score(&item, "blog", SearchKind::Architecture)
            .unwrap();
        assert_eq!(general, 15);
        // workflow + sequential
        assert_eq!(arch, general + 8);
    }

    #[test]
    fn test_rank_orders_descending_and_drops_zero() {
        let scorer = WeightedScorer::default();
        let items = vec![
            doc("alpha", "nothing here", ""),
            doc("data-science", "data analysis", ""),
            doc("beta", "some data", ""),
        ];

        let ranked = scorer.rank(items, "data", SearchKind::Code).unwrap();
        let names: Vec<_> = ranked.iter().map(|(d, _)| d.name).collect();
        assert_eq!(names, vec!["data-science", "beta"]);
    }

    #[test]
    fn test_rank_ties_keep_input_order() {
        let scorer = WeightedScorer::default();
        let items = vec![
            doc("one", "shared term", ""),
            doc("two", "shared term", ""),
            doc("three", "shared term", ""),
        ];

        let ranked = scorer.rank(items, "shared", SearchKind::Code).unwrap();
        let names: Vec<_> = ranked.iter().map(|(d, _)| d.name).collect();
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_short_query_words_ignored() {
        let item = doc("data-pipeline", "parallel documents", "Python");

        let lenient = WeightedScorer::default();
        assert_eq!(lenient.score(&item, "um", SearchKind::Code).unwrap(), 3);

        let strict = WeightedScorer::new(ScoringWeights {
            min_word_len: 3,
            ..ScoringWeights::default()
        });
        assert_eq!(strict.score(&item, "um", SearchKind::Code).unwrap(), 0);
        // "data" still counts in the name
        assert_eq!(strict.score(&item, "um data", SearchKind::Code).unwrap(), 5);
    }

    #[test]
    fn test_overflow_is_reported() {
        let scorer = WeightedScorer::new(ScoringWeights {
            word_in_body: u32::MAX,
            word_in_name: 1,
            ..ScoringWeights::default()
        });
        let item = doc("data", "data", "");

        let err = scorer.score(&item, "data", SearchKind::Code).unwrap_err();
        assert_eq!(
            err,
            IndexError::ScoreOverflow {
                name: "data".to_string()
            }
        );
    }

    #[test]
    fn test_search_kind_parsing() {
        assert_eq!("Architecture".parse::<SearchKind>(), Ok(SearchKind::Architecture));
        assert_eq!("docs".parse::<SearchKind>(), Ok(SearchKind::Documentation));
        assert!("banana".parse::<SearchKind>().is_err());
    }
}
