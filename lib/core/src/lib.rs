//! # materia Core
//!
//! Core library for the materia recommender.
//!
//! This crate provides the shared data structures and the matching engine:
//!
//! - [`Feature`] - The seven canonical material features and their fixed order
//! - [`FeatureVector`] - A material (or a query) as a 7-tuple in that order
//! - [`RawTable`] / [`NormalizedTable`] - The catalog before and after normalization
//! - [`MaterialIndex`] - Euclidean nearest-neighbour index over a normalized table
//! - [`Recommendation`] - A hit joined back to its original catalog row
//!
//! ## Example
//!
//! ```rust
//! use materia_core::{FeatureVector, MaterialIndex, MaterialRecord, NormalizedTable};
//!
//! let table = NormalizedTable::new(vec![
//!     MaterialRecord::new(FeatureVector::new([0.0, 1000.0, 10.0, 0.1, 1.0, 1.0, 200.0]))
//!         .with_name("Cortiça"),
//!     MaterialRecord::new(FeatureVector::new([4.0, 7850.0, 400.0, 50.0, 1.0, 0.0, 1500.0]))
//!         .with_name("Aço"),
//! ]);
//! let index = MaterialIndex::fit(&table, 1).unwrap();
//!
//! let hits = index.query(&[1.0, 900.0, 20.0, 0.2, 1.0, 1.0, 250.0], 1).unwrap();
//! assert_eq!(hits[0].row, 0);
//! ```

pub mod error;
pub mod feature;
pub mod vector;
pub mod table;
pub mod index;
pub mod result;
pub mod stats;

pub use error::{Error, InvalidInput, Result};
pub use feature::{Feature, FeatureDefaults, StructuredQuery, FEATURE_COUNT};
pub use vector::FeatureVector;
pub use table::{MaterialRecord, NormalizedTable, RawTable, Record, ID_COLUMN, NAME_COLUMN};
pub use index::{MaterialIndex, Neighbor};
pub use result::{Recommendation, RecommendationStats, DISTANCE_COLUMN};
pub use stats::{median, FeatureMedians};
