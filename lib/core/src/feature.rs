//! Canonical feature order
//!
//! The seven material attributes used for matching, in the one order every
//! component agrees on. Anything that builds or reads a feature vector goes
//! through [`Feature`] instead of a bare index.

use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of canonical features
pub const FEATURE_COUNT: usize = 7;

/// A canonical material feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "cost_index")]
    CostIndex,
    #[serde(rename = "density_kg_m3")]
    DensityKgM3,
    #[serde(rename = "tensile_strength_MPa")]
    TensileStrengthMpa,
    #[serde(rename = "thermal_conductivity_W_mK")]
    ThermalConductivityWmK,
    #[serde(rename = "recyclable")]
    Recyclable,
    #[serde(rename = "biodegradable")]
    Biodegradable,
    #[serde(rename = "melting_point_C")]
    MeltingPointC,
}

impl Feature {
    /// All features in vector order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::CostIndex,
        Feature::DensityKgM3,
        Feature::TensileStrengthMpa,
        Feature::ThermalConductivityWmK,
        Feature::Recyclable,
        Feature::Biodegradable,
        Feature::MeltingPointC,
    ];

    /// Position of this feature inside a [`FeatureVector`]
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Feature::CostIndex => 0,
            Feature::DensityKgM3 => 1,
            Feature::TensileStrengthMpa => 2,
            Feature::ThermalConductivityWmK => 3,
            Feature::Recyclable => 4,
            Feature::Biodegradable => 5,
            Feature::MeltingPointC => 6,
        }
    }

    /// Canonical column name in a catalog table
    pub const fn column(self) -> &'static str {
        match self {
            Feature::CostIndex => "cost_index",
            Feature::DensityKgM3 => "density_kg_m3",
            Feature::TensileStrengthMpa => "tensile_strength_MPa",
            Feature::ThermalConductivityWmK => "thermal_conductivity_W_mK",
            Feature::Recyclable => "recyclable",
            Feature::Biodegradable => "biodegradable",
            Feature::MeltingPointC => "melting_point_C",
        }
    }

    /// Look up a feature by its canonical column name
    pub fn from_column(name: &str) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| f.column() == name)
    }

    /// Whether the feature is a 0/1 flag
    pub const fn is_flag(self) -> bool {
        matches!(self, Feature::Recyclable | Feature::Biodegradable)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Per-field fallback values used when nothing better is known
///
/// The normalizer falls back to these when a whole column is missing; the
/// text vectorizer uses them when no reference table is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefaults {
    pub cost_index: f64,
    pub density_kg_m3: f64,
    #[serde(rename = "tensile_strength_MPa")]
    pub tensile_strength_mpa: f64,
    #[serde(rename = "thermal_conductivity_W_mK")]
    pub thermal_conductivity_w_mk: f64,
    pub recyclable: f64,
    pub biodegradable: f64,
    #[serde(rename = "melting_point_C")]
    pub melting_point_c: f64,
}

impl Default for FeatureDefaults {
    fn default() -> Self {
        Self {
            cost_index: 3.0,
            density_kg_m3: 2000.0,
            tensile_strength_mpa: 50.0,
            thermal_conductivity_w_mk: 1.0,
            recyclable: 1.0,
            biodegradable: 0.0,
            melting_point_c: 300.0,
        }
    }
}

impl FeatureDefaults {
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::CostIndex => self.cost_index,
            Feature::DensityKgM3 => self.density_kg_m3,
            Feature::TensileStrengthMpa => self.tensile_strength_mpa,
            Feature::ThermalConductivityWmK => self.thermal_conductivity_w_mk,
            Feature::Recyclable => self.recyclable,
            Feature::Biodegradable => self.biodegradable,
            Feature::MeltingPointC => self.melting_point_c,
        }
    }
}

/// A structured query assembled field by field (the form-based input path)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredQuery {
    pub cost_index: f64,
    pub density_kg_m3: f64,
    #[serde(rename = "tensile_strength_MPa")]
    pub tensile_strength_mpa: f64,
    #[serde(rename = "thermal_conductivity_W_mK")]
    pub thermal_conductivity_w_mk: f64,
    pub recyclable: bool,
    pub biodegradable: bool,
    #[serde(rename = "melting_point_C")]
    pub melting_point_c: f64,
}

impl Default for StructuredQuery {
    fn default() -> Self {
        Self {
            cost_index: 0.0,
            density_kg_m3: 0.0,
            tensile_strength_mpa: 0.0,
            thermal_conductivity_w_mk: 0.0,
            recyclable: true,
            biodegradable: false,
            melting_point_c: 0.0,
        }
    }
}

impl StructuredQuery {
    /// Assemble the query into canonical feature order
    pub fn to_vector(&self) -> FeatureVector {
        let mut v = FeatureVector::zeros();
        v[Feature::CostIndex] = self.cost_index;
        v[Feature::DensityKgM3] = self.density_kg_m3;
        v[Feature::TensileStrengthMpa] = self.tensile_strength_mpa;
        v[Feature::ThermalConductivityWmK] = self.thermal_conductivity_w_mk;
        v[Feature::Recyclable] = flag(self.recyclable);
        v[Feature::Biodegradable] = flag(self.biodegradable);
        v[Feature::MeltingPointC] = self.melting_point_c;
        v
    }
}

#[inline]
fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_column_roundtrip() {
        for feature in Feature::ALL {
            assert_eq!(Feature::from_column(feature.column()), Some(feature));
        }
        assert_eq!(Feature::from_column("price"), None);
    }

    #[test]
    fn test_serde_uses_column_names() {
        let json = serde_json::to_string(&Feature::TensileStrengthMpa).unwrap();
        assert_eq!(json, "\"tensile_strength_MPa\"");
    }

    #[test]
    fn test_structured_query_order() {
        let query = StructuredQuery {
            cost_index: 5.0,
            density_kg_m3: 3000.0,
            tensile_strength_mpa: 120.0,
            thermal_conductivity_w_mk: 2.0,
            recyclable: true,
            biodegradable: false,
            melting_point_c: 800.0,
        };
        assert_eq!(
            query.to_vector().as_slice(),
            &[5.0, 3000.0, 120.0, 2.0, 1.0, 0.0, 800.0]
        );
    }

    #[test]
    fn test_partial_structured_query_json() {
        let query: StructuredQuery =
            serde_json::from_str(r#"{"density_kg_m3": 7800, "biodegradable": true}"#).unwrap();
        assert_eq!(query.density_kg_m3, 7800.0);
        assert!(query.recyclable);
        assert!(query.biodegradable);
    }

    #[test]
    fn test_defaults() {
        let defaults = FeatureDefaults::default();
        let values: Vec<f64> = Feature::ALL.iter().map(|f| defaults.get(*f)).collect();
        assert_eq!(values, vec![3.0, 2000.0, 50.0, 1.0, 1.0, 0.0, 300.0]);
    }
}
