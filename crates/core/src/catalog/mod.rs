//! # Catalog
//!
//! Static reference architectures and the index that queries them.
//!
//! ```text
//! description ──▶ ReferenceArchitectureIndex ──▶ QueryResult
//!                        │                         (or fallback)
//!                        └── Catalog (immutable, built once)
//! ```

pub mod exemplar;
pub mod index;

pub use exemplar::{ArchitectureExemplar, Catalog, MIN_KEYWORD_LEN};
pub use index::{MatchMode, QueryResult, ReferenceArchitectureIndex, ScoredExemplar};

/// JSON Schema of the exemplar record handed to orchestrators
pub fn exemplar_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(ArchitectureExemplar)).unwrap_or_default()
}
