//! # Architecture Exemplars
//!
//! Catalog records describing known multi-agent architectures, the immutable
//! catalog that holds them, and the generic fallback returned when nothing in
//! the catalog matches.

use crate::error::IndexError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Use-case tokens shorter than this are dropped when deriving keywords
/// from a phrase ("de", "ao", "em" occur inside most words).
pub const MIN_KEYWORD_LEN: usize = 3;

/// One known architecture pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArchitectureExemplar {
    /// Short label
    pub name: String,
    /// Topology tag (e.g. "Sequential", "Coordinator + Parallel")
    pub pattern: String,
    /// Role names in execution order
    pub agent_roles: Vec<String>,
    /// Capability identifiers the pattern relies on
    pub tool_names: Vec<String>,
    /// Lowercase tokens describing applicable problem domains
    pub use_case_keywords: Vec<String>,
}

impl ArchitectureExemplar {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            agent_roles: Vec::new(),
            tool_names: Vec::new(),
            use_case_keywords: Vec::new(),
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.agent_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Set tool names, dropping duplicates
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tool_names = dedup(tools.into_iter().map(Into::into));
        self
    }

    /// Set keywords verbatim (lowercased, deduplicated)
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.use_case_keywords = dedup(keywords.into_iter().map(|k| {
            let k: String = k.into();
            k.trim().to_lowercase()
        }));
        self
    }

    /// Derive keywords from a use-case phrase
    pub fn with_use_case(self, phrase: &str) -> Self {
        let keywords: Vec<String> = phrase
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
            .map(str::to_string)
            .collect();
        self.with_keywords(keywords)
    }

    /// Check the fields matching depends on
    pub fn validate(&self) -> Result<(), IndexError> {
        let malformed = |reason: &str| IndexError::MalformedEntry {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(malformed("missing name"));
        }
        if self.use_case_keywords.is_empty() {
            return Err(malformed("no use-case keywords"));
        }
        if self.use_case_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(malformed("blank use-case keyword"));
        }
        Ok(())
    }

    /// Generic exemplar returned when no catalog entry matches
    ///
    /// Built fresh on every call; never part of a catalog.
    pub fn fallback() -> Self {
        Self::new("Arquitetura Genérica Multi-Agente", "Sequential com Coordinator")
            .with_roles(["Analisador", "Processador", "Gerador"])
            .with_tools(["analyze_input", "process_data", "generate_output"])
            .with_use_case("solução genérica multi-agente")
    }
}

fn dedup(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

/// Fixed, ordered set of exemplars
///
/// There is no mutation API: a catalog is built once and only read after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<ArchitectureExemplar>,
}

impl Catalog {
    pub fn new(entries: Vec<ArchitectureExemplar>) -> Self {
        Self { entries }
    }

    /// The reference architectures shipped with Lodestar
    pub fn builtin() -> Self {
        Self::new(vec![
            ArchitectureExemplar::new("Sistema de Análise de Dados", "Sequential + Coordinator")
                .with_roles(["Coletor", "Analisador", "Visualizador"])
                .with_tools(["fetch_data", "process_data", "generate_chart"])
                .with_use_case("análise de dados business intelligence"),
            ArchitectureExemplar::new("Chatbot Multimodal", "LlmAgent com delegação")
                .with_roles(["Router", "TextProcessor", "ImageProcessor"])
                .with_tools(["process_text", "process_image", "generate_response"])
                .with_use_case("atendimento ao cliente multimodal"),
            ArchitectureExemplar::new("Sistema de Geração de Conteúdo", "Coordinator + Parallel")
                .with_roles(["Pesquisador", "Escritor", "Revisor", "Editor"])
                .with_tools(["research_topic", "generate_content", "review_content"])
                .with_use_case("criação automática de documentos"),
            ArchitectureExemplar::new("Pipeline de Processamento", "Sequential")
                .with_roles(["Validator", "Processor", "Enricher", "Saver"])
                .with_tools(["validate_input", "process_data", "enrich_data", "save_output"])
                .with_use_case("processamento de dados em pipeline"),
        ])
    }

    pub fn entries(&self) -> &[ArchitectureExemplar] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArchitectureExemplar> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ArchitectureExemplar;
    type IntoIter = std::slice::Iter<'a, ArchitectureExemplar>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
