//! # Answer Quality
//!
//! Heuristic metrics for a documentation answer against the question that
//! produced it. Each metric is on a 0-10 scale.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::matcher::count_matches;

/// Vocabulary that signals a technical, on-topic answer
const TECHNICAL_TERMS: &[&str] = &[
    "adk",
    "agent",
    "tool",
    "workflow",
    "gemini",
    "model",
    "instruction",
];

/// Structural markers a grounded answer is expected to contain
const EXPECTED_ELEMENTS: &[&str] = &["baseado", "documentação", "oficial", "exemplo", "adk"];

/// Code-level markers, matched case-sensitively
const SPECIFIC_MARKERS: &[&str] = &[
    "Agent(",
    "model=",
    "instruction=",
    "tools=",
    "adk run",
    "async def",
];

/// Quality metrics for one answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerQuality {
    pub relevance: f64,
    pub completeness: f64,
    pub specificity: f64,
    /// Weighted blend: 40% relevance, 30% completeness, 30% specificity
    pub score: f64,
}

/// Assess how well `answer` addresses `question`
pub fn assess_answer(question: &str, answer: &str) -> AnswerQuality {
    let question_lower = question.to_lowercase();
    let answer_lower = answer.to_lowercase();

    let question_words: HashSet<&str> = question_lower.split_whitespace().collect();
    let answer_words: HashSet<&str> = answer_lower.split_whitespace().collect();

    let shared = question_words.intersection(&answer_words).count();
    let technical = TECHNICAL_TERMS
        .iter()
        .filter(|term| answer_words.contains(**term))
        .count();
    let relevance = ((shared * 2 + technical) as f64).min(10.0);

    let found = count_matches(&answer_lower, EXPECTED_ELEMENTS.iter().copied());
    let completeness = found as f64 * 10.0 / EXPECTED_ELEMENTS.len() as f64;

    let markers = SPECIFIC_MARKERS
        .iter()
        .filter(|marker| answer.contains(**marker))
        .count();
    let specificity = ((markers * 2) as f64).min(10.0);

    AnswerQuality {
        relevance,
        completeness,
        specificity,
        score: relevance * 0.4 + completeness * 0.3 + specificity * 0.3,
    }
}
