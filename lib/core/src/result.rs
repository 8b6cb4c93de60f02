//! Ranked results joined back to the raw catalog
//!
//! The index answers in row positions; these types attach the original,
//! un-normalized row to each hit and append its distance.

use crate::feature::Feature;
use crate::index::{MaterialIndex, Neighbor};
use crate::table::{RawTable, Record};
use crate::vector::FeatureVector;
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

/// Column appended to each result row
pub const DISTANCE_COLUMN: &str = "distance";

/// A recommended catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// 1-based rank
    pub rank: usize,
    /// Row position in the catalog
    pub row: usize,
    /// Original catalog row, as supplied
    pub record: Record,
    /// Euclidean distance from the query vector
    pub distance: f64,
}

impl Recommendation {
    /// Join search hits to the raw rows they were fitted from
    pub fn join(neighbors: &[Neighbor], raw: &RawTable) -> Vec<Self> {
        neighbors
            .iter()
            .enumerate()
            .map(|(i, hit)| Self {
                rank: i + 1,
                row: hit.row,
                record: raw.row(hit.row).cloned().unwrap_or_default(),
                distance: hit.distance,
            })
            .collect()
    }

    /// The original row with the distance column appended
    pub fn to_row(&self) -> Record {
        let mut row = self.record.clone();
        let distance = serde_json::Number::from_f64(self.distance)
            .map(Value::Number)
            .unwrap_or(Value::Null);
        row.insert(DISTANCE_COLUMN.to_string(), distance);
        row
    }

    pub fn name(&self) -> Option<&str> {
        self.record
            .get("name")
            .or_else(|| self.record.get("nome_material"))
            .and_then(Value::as_str)
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_row().serialize(serializer)
    }
}

/// Summary of one recommendation query
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RecommendationStats {
    /// Rows the index searched
    pub candidates_count: usize,
    pub results_count: usize,
    pub best_distance: f64,
    pub mean_distance: f64,
    /// Feature contributing most to the best hit's distance
    pub dominant_feature: Option<Feature>,
}

impl RecommendationStats {
    pub fn compute(
        query: &FeatureVector,
        results: &[Recommendation],
        index: &MaterialIndex,
    ) -> Self {
        let Some(best) = results.first() else {
            return Self {
                candidates_count: index.len(),
                results_count: 0,
                best_distance: 0.0,
                mean_distance: 0.0,
                dominant_feature: None,
            };
        };

        let mean_distance =
            results.iter().map(|r| r.distance).sum::<f64>() / results.len() as f64;

        let dominant_feature = index.point(best.row).and_then(|point| {
            let delta = point - query;
            Feature::ALL
                .into_iter()
                .filter(|f| delta[*f] != 0.0)
                .max_by(|a, b| delta[*a].abs().total_cmp(&delta[*b].abs()))
        });

        Self {
            candidates_count: index.len(),
            results_count: results.len(),
            best_distance: best.distance,
            mean_distance,
            dominant_feature,
        }
    }
}
