//! # materia
//!
//! Recommends materials from a fixed catalog that best match a description.
//!
//! materia turns a heterogeneous material catalog (numeric columns, Portuguese
//! categorical columns like `custo`/`peso`, yes/no flags, gaps) into a complete
//! numeric feature table, fits a Euclidean nearest-neighbour index over it, and
//! ranks catalog rows against a query given either as free text or as a
//! structured set of seven features.
//!
//! ## Quick Start
//!
//! ### As a Binary
//!
//! ```bash
//! materia --catalog materiais.json --text "leve, barato, resistência alta"
//! materia --catalog materiais.json --structured '{"density_kg_m3": 7800, "melting_point_C": 1400}'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use materia::prelude::*;
//! use serde_json::json;
//!
//! let raw = RawTable::from_json(json!([
//!     {"name": "Cortiça", "custo": "baixo", "peso": "leve", "biodegradavel": "sim"},
//!     {"name": "Aço", "custo": "médio", "peso": "pesado", "resistencia": "alta"},
//!     {"name": "PLA", "custo": "baixo-médio", "peso": "leve", "biodegradavel": "sim"},
//! ]));
//! let recommender = Recommender::new(raw, RecommenderConfig::default()).unwrap();
//!
//! let results = recommender.recommend_text("pesado e resistente", 1).unwrap();
//! assert_eq!(results[0].name(), Some("Aço"));
//! ```
//!
//! ## Crate Structure
//!
//! - [`materia-core`](materia_core) - Feature order contract, tables, nearest-neighbour index
//! - [`materia-normalize`](materia_normalize) - Catalog normalization (aliases, coercion, imputation)
//! - [`materia-text`](materia_text) - Free-text to feature vector heuristics

pub mod catalog;
pub mod config;
pub mod recommender;

// Re-export core types
pub use materia_core::{
    Error, Feature, FeatureDefaults, FeatureVector, InvalidInput, MaterialIndex, MaterialRecord,
    Neighbor, NormalizedTable, RawTable, Recommendation, RecommendationStats, Result,
    StructuredQuery, FEATURE_COUNT,
};

pub use materia_normalize::{normalize, Normalizer};
pub use materia_text::{vectorize, ResolvedField, TextVectorizer};

pub use catalog::{load_catalog, read_catalog};
pub use config::RecommenderConfig;
pub use recommender::Recommender;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Feature, FeatureVector, MaterialIndex, NormalizedTable, RawTable, Recommendation,
        Recommender, RecommenderConfig, Result, StructuredQuery,
    };
}
