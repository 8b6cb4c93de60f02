//! Euclidean nearest-neighbour index over a normalized catalog
//!
//! Brute-force search: the catalog is small and static, so every query scans
//! all fitted rows. Distances are taken over raw feature magnitudes, without
//! any standardization, so wide-range features such as density dominate.

use crate::error::{Error, InvalidInput, Result};
use crate::table::NormalizedTable;
use crate::vector::FeatureVector;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// One search hit: a row position in the fitted table and its distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f64,
}

/// Read-only nearest-neighbour index
///
/// Immutable once fitted; concurrent queries against a shared reference are
/// safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialIndex {
    points: Vec<FeatureVector>,
    n_neighbors: usize,
}

impl MaterialIndex {
    /// Fit over every row of a normalized table
    ///
    /// `n_neighbors` is the default k for [`MaterialIndex::kneighbors`] and is
    /// only checked against the row count when that is called.
    pub fn fit(table: &NormalizedTable, n_neighbors: usize) -> Result<Self> {
        Self::fit_vectors(table.vectors().copied().collect(), n_neighbors)
    }

    /// Fit over raw feature vectors in row order
    pub fn fit_vectors(points: Vec<FeatureVector>, n_neighbors: usize) -> Result<Self> {
        let index = Self { points, n_neighbors };
        index.validate()?;
        Ok(index)
    }

    fn validate(&self) -> Result<()> {
        if self.points.is_empty() {
            return Err(InvalidInput::EmptyCatalog.into());
        }
        for (row, point) in self.points.iter().enumerate() {
            if let Some(feature) = point.first_non_finite() {
                return Err(InvalidInput::NonFinite { row: Some(row), feature }.into());
            }
        }
        Ok(())
    }

    fn check_k(&self, k: usize) -> Result<()> {
        if k == 0 {
            return Err(InvalidInput::ZeroNeighbors.into());
        }
        if k > self.points.len() {
            return Err(InvalidInput::TooManyNeighbors {
                requested: k,
                available: self.points.len(),
            }
            .into());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    /// Fitted vector at a row position
    pub fn point(&self, row: usize) -> Option<&FeatureVector> {
        self.points.get(row)
    }

    /// The `k` fitted rows closest to `query`, by ascending distance
    ///
    /// Equal distances keep fitted row order.
    pub fn query(&self, query: &[f64], k: usize) -> Result<Vec<Neighbor>> {
        let query = FeatureVector::from_slice(query)?;
        if let Some(feature) = query.first_non_finite() {
            return Err(InvalidInput::NonFinite { row: None, feature }.into());
        }
        self.check_k(k)?;

        let mut scored: Vec<(OrderedFloat<f64>, usize)> = self
            .points
            .iter()
            .enumerate()
            .map(|(row, point)| (OrderedFloat(point.l2_distance(&query)), row))
            .collect();
        scored.sort_unstable();
        scored.truncate(k);

        Ok(scored
            .into_iter()
            .map(|(distance, row)| Neighbor { row, distance: distance.into_inner() })
            .collect())
    }

    /// Query with the k the index was fitted with
    pub fn kneighbors(&self, query: &[f64]) -> Result<Vec<Neighbor>> {
        self.query(query, self.n_neighbors)
    }

    /// Opaque snapshot of the fitted index
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Restore a snapshot taken with [`MaterialIndex::to_bytes`]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let index: Self =
            bincode::deserialize(bytes).map_err(|e| Error::Serialization(e.to_string()))?;
        index.validate()?;
        Ok(index)
    }
}
