//! Column statistics over a normalized catalog

use crate::feature::{Feature, FeatureDefaults, FEATURE_COUNT};
use crate::table::NormalizedTable;
use serde::{Deserialize, Serialize};

/// Median of the finite values in `values`
///
/// Returns `None` when there is no finite value. An even count yields the mean
/// of the two middle values.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_unstable_by(f64::total_cmp);
    let mid = finite.len() / 2;
    if finite.len() % 2 == 0 {
        Some(finite[mid - 1] / 2.0 + finite[mid] / 2.0)
    } else {
        Some(finite[mid])
    }
}

/// Per-feature medians of a catalog, used as population fallbacks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureMedians {
    medians: [Option<f64>; FEATURE_COUNT],
}

impl FeatureMedians {
    pub fn from_table(table: &NormalizedTable) -> Self {
        let mut medians = [None; FEATURE_COUNT];
        for feature in Feature::ALL {
            medians[feature.index()] = median(&table.feature_values(feature));
        }
        Self { medians }
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.medians[feature.index()]
    }

    /// Median of the feature, or the default when the catalog has none
    pub fn get_or_default(&self, feature: Feature, defaults: &FeatureDefaults) -> f64 {
        self.get(feature).unwrap_or_else(|| defaults.get(feature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::MaterialRecord;
    use crate::vector::FeatureVector;

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_median_near_max_stays_finite() {
        let m = median(&[1.5e308, 1.6e308]).unwrap();
        assert!(m.is_finite());
        assert!((m / 1.55e308 - 1.0).abs() < 1e-12);
        assert_eq!(median(&[-f64::MAX, f64::MAX]), Some(0.0));
    }

    #[test]
    fn test_median_skips_missing() {
        assert_eq!(median(&[f64::NAN, 10.0, f64::NAN, 30.0]), Some(20.0));
        assert_eq!(median(&[f64::NAN, f64::NAN]), None);
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_feature_medians() {
        let table = NormalizedTable::new(vec![
            MaterialRecord::new(FeatureVector::new([0.0, 1000.0, 10.0, 0.1, 1.0, 0.0, 100.0])),
            MaterialRecord::new(FeatureVector::new([4.0, 8000.0, 400.0, 100.0, 0.0, 1.0, 1500.0])),
            MaterialRecord::new(FeatureVector::new([2.0, 2500.0, 50.0, 1.0, 1.0, 0.0, 660.0])),
        ]);
        let medians = FeatureMedians::from_table(&table);
        assert_eq!(medians.get(Feature::DensityKgM3), Some(2500.0));
        assert_eq!(medians.get(Feature::MeltingPointC), Some(660.0));
    }

    #[test]
    fn test_empty_table_falls_back_to_defaults() {
        let medians = FeatureMedians::from_table(&NormalizedTable::default());
        let defaults = FeatureDefaults::default();
        assert_eq!(medians.get(Feature::TensileStrengthMpa), None);
        assert_eq!(medians.get_or_default(Feature::TensileStrengthMpa, &defaults), 50.0);
    }
}
