//! # materia Normalize
//!
//! Turns a raw, heterogeneously typed material catalog into a complete,
//! all-numeric table over the seven canonical features.
//!
//! ## Pipeline
//!
//! For each canonical feature, independently:
//!
//! 1. **Source**: the canonical column if present, otherwise the first legacy
//!    alias present (`custo`, `peso`, `resistencia`, `condutividade`,
//!    `temperatura_max`, ... see [`alias::ALIASES`]), otherwise nothing.
//! 2. **Coercion**: category maps for categorical aliases, a yes/no vocabulary
//!    for the two flags, numeric parsing for everything else. Unreadable cells
//!    become missing.
//! 3. **Imputation**: missing cells take the column median; a column with no
//!    value at all takes the fixed per-feature default.
//!
//! Identity columns (`id`, `name` or `nome_material`) are carried through.
//! Row count and order never change.
//!
//! ```rust
//! use materia_core::{Feature, RawTable};
//! use materia_normalize::normalize;
//! use serde_json::json;
//!
//! let raw = RawTable::from_json(json!([
//!     {"name": "Cortiça", "custo": "baixo", "peso": "leve", "reciclavel": "sim"},
//!     {"name": "Aço", "custo": "alto", "peso": "pesado", "temperatura_max": 1500},
//! ]));
//! let table = normalize(&raw);
//!
//! assert_eq!(table.rows[0].features[Feature::DensityKgM3], 1000.0);
//! assert_eq!(table.rows[0].features[Feature::MeltingPointC], 1500.0);
//! ```

pub mod alias;
pub mod coerce;
pub mod normalizer;

pub use alias::{ColumnAlias, Transform, ALIASES};
pub use normalizer::{
    normalize, FeatureReport, FeatureSource, Imputation, Normalizer, LEGACY_NAME_COLUMN,
};
