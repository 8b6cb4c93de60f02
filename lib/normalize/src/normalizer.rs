//! The normalization pipeline

use crate::alias::{aliases_for, canonical_transform, Transform};
use crate::coerce;
use ahash::AHashSet;
use materia_core::{
    median, Feature, FeatureDefaults, FeatureVector, MaterialRecord, NormalizedTable, RawTable,
    Record, FEATURE_COUNT, ID_COLUMN, NAME_COLUMN,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Alternate column for the material name
pub const LEGACY_NAME_COLUMN: &str = "nome_material";

/// Where a feature's values were taken from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureSource {
    /// The canonical column itself
    Canonical,
    /// A legacy or alternate column
    Alias { column: String },
    /// No source column; every row was imputed
    Synthesized,
}

/// How the missing values of one feature were filled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Imputation {
    /// Nothing was missing
    None,
    /// Filled with the column median
    Median(f64),
    /// Whole column missing; filled with the fixed default
    Default(f64),
}

/// Per-feature account of one normalization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureReport {
    pub feature: Feature,
    pub source: FeatureSource,
    /// Cells that were missing or failed coercion
    pub missing: usize,
    pub imputation: Imputation,
}

/// Turns raw catalogs into complete, all-numeric tables
///
/// Total: malformed cells degrade to medians or defaults, never to errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Normalizer {
    #[serde(default)]
    defaults: FeatureDefaults,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: FeatureDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &FeatureDefaults {
        &self.defaults
    }

    /// Normalize a raw table; row count and order are preserved
    pub fn normalize(&self, raw: &RawTable) -> NormalizedTable {
        self.normalize_with_report(raw).0
    }

    /// Normalize and report, per feature, where values came from
    pub fn normalize_with_report(&self, raw: &RawTable) -> (NormalizedTable, Vec<FeatureReport>) {
        let present: AHashSet<&str> = raw.columns().iter().map(String::as_str).collect();

        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(FEATURE_COUNT);
        let mut reports = Vec::with_capacity(FEATURE_COUNT);

        for feature in Feature::ALL {
            let (source, transform) = resolve_source(feature, &present);
            let mut values: Vec<Option<f64>> = match &source {
                FeatureSource::Canonical => read_column(raw, feature.column(), transform),
                FeatureSource::Alias { column } => read_column(raw, column, transform),
                FeatureSource::Synthesized => vec![None; raw.len()],
            };

            let missing = values.iter().filter(|v| v.is_none()).count();
            let imputation = self.impute(feature, &mut values, missing);

            columns.push(values.into_iter().map(|v| v.unwrap_or(0.0)).collect());
            reports.push(FeatureReport { feature, source, missing, imputation });
        }

        let name_column = if present.contains(NAME_COLUMN) {
            Some(NAME_COLUMN)
        } else if present.contains(LEGACY_NAME_COLUMN) {
            Some(LEGACY_NAME_COLUMN)
        } else {
            None
        };

        let rows = raw
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut features = FeatureVector::zeros();
                for feature in Feature::ALL {
                    features[feature] = columns[feature.index()][i];
                }
                MaterialRecord {
                    id: identity(row, Some(ID_COLUMN)),
                    name: identity(row, name_column),
                    features,
                }
            })
            .collect();

        let table = NormalizedTable {
            has_id: present.contains(ID_COLUMN),
            has_name: name_column.is_some(),
            rows,
        };
        (table, reports)
    }

    fn impute(&self, feature: Feature, values: &mut [Option<f64>], missing: usize) -> Imputation {
        if missing == 0 {
            return Imputation::None;
        }
        let known: Vec<f64> = values.iter().flatten().copied().collect();
        let imputation = match median(&known) {
            Some(m) => Imputation::Median(m),
            None => Imputation::Default(self.defaults.get(feature)),
        };
        let fill = match imputation {
            Imputation::Median(v) | Imputation::Default(v) => v,
            Imputation::None => return imputation,
        };
        for slot in values.iter_mut().filter(|v| v.is_none()) {
            *slot = Some(fill);
        }
        imputation
    }
}

/// Normalize with the stock per-field defaults
pub fn normalize(raw: &RawTable) -> NormalizedTable {
    Normalizer::default().normalize(raw)
}

fn resolve_source(feature: Feature, present: &AHashSet<&str>) -> (FeatureSource, Transform) {
    if present.contains(feature.column()) {
        return (FeatureSource::Canonical, canonical_transform(feature));
    }
    match aliases_for(feature).find(|a| present.contains(a.source)) {
        Some(a) => (FeatureSource::Alias { column: a.source.to_string() }, a.transform),
        None => (FeatureSource::Synthesized, Transform::Numeric),
    }
}

fn read_column(raw: &RawTable, column: &str, transform: Transform) -> Vec<Option<f64>> {
    raw.column(column).map(|cell| coerce::apply(transform, cell)).collect()
}

fn identity(row: &Record, column: Option<&str>) -> Option<Value> {
    column
        .and_then(|c| row.get(c))
        .filter(|v| !v.is_null())
        .cloned()
}
