use crate::error::{InvalidInput, Result};
use crate::feature::{Feature, FEATURE_COUNT};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut, Sub};

/// A material described by its seven canonical features, in canonical order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    data: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    #[inline]
    #[must_use]
    pub fn new(data: [f64; FEATURE_COUNT]) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn zeros() -> Self {
        Self { data: [0.0; FEATURE_COUNT] }
    }

    /// Build from a slice, checking the dimension
    pub fn from_slice(data: &[f64]) -> Result<Self> {
        let data: [f64; FEATURE_COUNT] =
            data.try_into().map_err(|_| InvalidInput::InvalidDimension {
                expected: FEATURE_COUNT,
                actual: data.len(),
            })?;
        Ok(Self { data })
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        FEATURE_COUNT
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn get(&self, feature: Feature) -> f64 {
        self.data[feature.index()]
    }

    /// First feature holding a NaN or infinite value, if any
    pub fn first_non_finite(&self) -> Option<Feature> {
        Feature::ALL.into_iter().find(|f| !self.get(*f).is_finite())
    }

    /// Euclidean distance over raw feature magnitudes
    ///
    /// Accumulated with `hypot`, so the result stays finite whenever the
    /// true distance is representable.
    #[inline]
    pub fn l2_distance(&self, other: &FeatureVector) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0, |acc: f64, (a, b)| acc.hypot(a - b))
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    #[inline]
    fn index(&self, feature: Feature) -> &f64 {
        &self.data[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    #[inline]
    fn index_mut(&mut self, feature: Feature) -> &mut f64 {
        &mut self.data[feature.index()]
    }
}

impl Sub for &FeatureVector {
    type Output = FeatureVector;

    fn sub(self, other: &FeatureVector) -> FeatureVector {
        let mut data = [0.0; FEATURE_COUNT];
        for (i, slot) in data.iter_mut().enumerate() {
            *slot = self.data[i] - other.data[i];
        }
        FeatureVector::new(data)
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(data: [f64; FEATURE_COUNT]) -> Self {
        Self::new(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_l2_distance() {
        let v1 = FeatureVector::zeros();
        let v2 = FeatureVector::new([3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!((v1.l2_distance(&v2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_l2_distance_large_magnitudes() {
        let v1 = FeatureVector::zeros();
        let v2 = FeatureVector::new([3e200, 4e200, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let d = v1.l2_distance(&v2);
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_slice_dimension() {
        let v = FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
        assert_eq!(v[Feature::MeltingPointC], 7.0);

        let err = FeatureVector::from_slice(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInput::InvalidDimension { expected: 7, actual: 2 })
        ));
    }

    #[test]
    fn test_first_non_finite() {
        let mut v = FeatureVector::zeros();
        assert_eq!(v.first_non_finite(), None);
        v[Feature::Biodegradable] = f64::NAN;
        v[Feature::MeltingPointC] = f64::INFINITY;
        assert_eq!(v.first_non_finite(), Some(Feature::Biodegradable));
    }

    #[test]
    fn test_sub() {
        let a = FeatureVector::new([5.0, 3000.0, 120.0, 2.0, 1.0, 0.0, 800.0]);
        let b = FeatureVector::new([4.0, 1000.0, 100.0, 1.0, 1.0, 0.0, 300.0]);
        assert_eq!((&a - &b).as_slice(), &[1.0, 2000.0, 20.0, 1.0, 0.0, 0.0, 500.0]);
    }
}
