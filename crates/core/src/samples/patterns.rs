//! # Pattern Extraction
//!
//! Infers the topology of ranked samples from their README text and
//! directory layout.

use super::sample::ScoredSample;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topology inferred for a sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum InferredPattern {
    #[serde(rename = "Multi-Agent System")]
    MultiAgentSystem,
    #[serde(rename = "Sequential Workflow")]
    SequentialWorkflow,
    #[serde(rename = "Coordinator Pattern")]
    CoordinatorPattern,
    #[serde(rename = "Parallel Execution")]
    ParallelExecution,
    #[serde(rename = "Single Agent")]
    SingleAgent,
}

impl InferredPattern {
    /// Classify by README keywords, highest priority first
    pub fn infer(readme: &str, directories: &[String]) -> Self {
        let readme = readme.to_lowercase();

        if readme.contains("multi-agent")
            || directories
                .iter()
                .any(|d| d.to_lowercase().contains("sub_agents"))
        {
            InferredPattern::MultiAgentSystem
        } else if readme.contains("sequential") {
            InferredPattern::SequentialWorkflow
        } else if readme.contains("coordinator") {
            InferredPattern::CoordinatorPattern
        } else if readme.contains("parallel") {
            InferredPattern::ParallelExecution
        } else {
            InferredPattern::SingleAgent
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InferredPattern::MultiAgentSystem => "Multi-Agent System",
            InferredPattern::SequentialWorkflow => "Sequential Workflow",
            InferredPattern::CoordinatorPattern => "Coordinator Pattern",
            InferredPattern::ParallelExecution => "Parallel Execution",
            InferredPattern::SingleAgent => "Single Agent",
        }
    }
}

impl fmt::Display for InferredPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Architecture summary of one sample
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArchitecturePattern {
    pub name: String,
    pub language: String,
    pub technologies: Vec<String>,
    pub inferred_pattern: InferredPattern,
    /// Sub-directory names, read as the sample's components
    pub components: Vec<String>,
    pub relevance_score: u32,
}

/// Summarize ranked samples, most relevant first
pub fn extract_patterns(samples: &[ScoredSample]) -> Vec<ArchitecturePattern> {
    let mut patterns: Vec<ArchitecturePattern> = samples
        .iter()
        .map(|scored| {
            let sample = &scored.sample;
            ArchitecturePattern {
                name: sample.name.clone(),
                language: sample.language.clone(),
                technologies: sample.technologies.clone(),
                inferred_pattern: InferredPattern::infer(
                    &sample.readme_excerpt,
                    &sample.directories,
                ),
                components: sample.directories.clone(),
                relevance_score: scored.relevance_score,
            }
        })
        .collect();

    patterns.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::sample::AgentSample;

    fn scored(name: &str, readme: &str, dirs: &[&str], score: u32) -> ScoredSample {
        ScoredSample {
            sample: AgentSample {
                name: name.to_string(),
                language: "python".to_string(),
                readme_excerpt: readme.to_string(),
                directories: dirs.iter().map(|d| d.to_string()).collect(),
                ..Default::default()
            },
            relevance_score: score,
        }
    }

    #[test]
    fn test_pattern_priority() {
        assert_eq!(
            InferredPattern::infer("A Sequential coordinator", &[]),
            InferredPattern::SequentialWorkflow
        );
        assert_eq!(
            InferredPattern::infer("runs in parallel under a coordinator", &[]),
            InferredPattern::CoordinatorPattern
        );
        assert_eq!(
            InferredPattern::infer("", &["sub_agents".to_string()]),
            InferredPattern::MultiAgentSystem
        );
        assert_eq!(
            InferredPattern::infer("", &["My_Sub_Agents".to_string()]),
            InferredPattern::MultiAgentSystem
        );
        assert_eq!(
            InferredPattern::infer("just one agent", &[]),
            InferredPattern::SingleAgent
        );
    }

    #[test]
    fn test_extract_sorts_by_relevance() {
        let samples = vec![
            scored("low", "parallel fan-out", &[], 3),
            scored("high", "multi-agent system", &["sub_agents", "tools"], 20),
        ];

        let patterns = extract_patterns(&samples);
        assert_eq!(patterns[0].name, "high");
        assert_eq!(patterns[0].inferred_pattern, InferredPattern::MultiAgentSystem);
        assert_eq!(patterns[0].components, vec!["sub_agents", "tools"]);
        assert_eq!(patterns[1].inferred_pattern, InferredPattern::ParallelExecution);
    }

    #[test]
    fn test_pattern_serializes_as_label() {
        let json = serde_json::to_value(InferredPattern::CoordinatorPattern).unwrap();
        assert_eq!(json, "Coordinator Pattern");
    }
}
