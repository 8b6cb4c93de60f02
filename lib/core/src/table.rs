//! Catalog tables
//!
//! [`RawTable`] is the catalog as it arrives from the outside: rows of
//! heterogeneously typed cells keyed by column name. [`NormalizedTable`] is the
//! complete, all-numeric table the matcher is fit on. Row position is the join
//! key between the two and is never changed by normalization.

use crate::feature::Feature;
use crate::vector::FeatureVector;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identity column holding the material id
pub const ID_COLUMN: &str = "id";
/// Identity column holding the material name
pub const NAME_COLUMN: &str = "name";

/// One raw catalog row
pub type Record = Map<String, Value>;

/// A raw catalog table
///
/// A column is present when at least one row carries the key; a row without
/// the key has a missing cell in that column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RawTable {
    pub fn new(rows: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        Self { columns, rows }
    }

    /// Build from a JSON array of objects; non-object elements become empty rows
    pub fn from_json(value: Value) -> Self {
        let rows = match value {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    _ => Record::new(),
                })
                .collect(),
            Value::Object(map) => vec![map],
            _ => Vec::new(),
        };
        Self::new(rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Record> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one column, one entry per row, `None` where the key is absent
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.rows.iter().map(move |row| row.get(name))
    }
}

impl From<Vec<Record>> for RawTable {
    fn from(rows: Vec<Record>) -> Self {
        Self::new(rows)
    }
}

impl From<RawTable> for Vec<Record> {
    fn from(table: RawTable) -> Self {
        table.rows
    }
}

/// A normalized catalog row: identity plus all seven features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    pub features: FeatureVector,
}

impl MaterialRecord {
    pub fn new(features: FeatureVector) -> Self {
        Self { id: None, name: None, features }
    }

    pub fn with_id(mut self, id: Value) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<Value>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Complete, all-numeric catalog table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    /// Whether the source carried an id column
    pub has_id: bool,
    /// Whether the source carried a name column
    pub has_name: bool,
    pub rows: Vec<MaterialRecord>,
}

impl NormalizedTable {
    pub fn new(rows: Vec<MaterialRecord>) -> Self {
        let has_id = rows.iter().any(|r| r.id.is_some());
        let has_name = rows.iter().any(|r| r.name.is_some());
        Self { has_id, has_name, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Feature vectors in row order
    pub fn vectors(&self) -> impl Iterator<Item = &FeatureVector> + '_ {
        self.rows.iter().map(|r| &r.features)
    }

    /// All values of one feature, in row order
    pub fn feature_values(&self, feature: Feature) -> Vec<f64> {
        self.rows.iter().map(|r| r.features[feature]).collect()
    }

    /// Render back into canonical raw form: identity columns, then the seven
    /// features in canonical order
    pub fn to_raw(&self) -> RawTable {
        let rows = self
            .rows
            .iter()
            .map(|record| {
                let mut row = Record::new();
                if self.has_id {
                    row.insert(ID_COLUMN.to_string(), record.id.clone().unwrap_or(Value::Null));
                }
                if self.has_name {
                    row.insert(NAME_COLUMN.to_string(), record.name.clone().unwrap_or(Value::Null));
                }
                for feature in Feature::ALL {
                    let value = serde_json::Number::from_f64(record.features[feature])
                        .map(Value::Number)
                        .unwrap_or(Value::Null);
                    row.insert(feature.column().to_string(), value);
                }
                row
            })
            .collect();
        RawTable::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_columns_union_in_first_seen_order() {
        let table = RawTable::from_json(json!([
            {"name": "Aço", "custo": "alto"},
            {"name": "Pinus", "peso": "leve"}
        ]));
        assert_eq!(table.len(), 2);
        assert!(table.has_column("peso"));
        assert!(!table.has_column("resistencia"));

        let peso: Vec<Option<&Value>> = table.column("peso").collect();
        assert_eq!(peso, vec![None, Some(&json!("leve"))]);
    }

    #[test]
    fn test_from_json_non_objects() {
        let table = RawTable::from_json(json!([1, {"id": 2}]));
        assert_eq!(table.len(), 2);
        assert!(table.row(0).unwrap().is_empty());
        assert_eq!(table.columns(), &["id".to_string()]);

        assert!(RawTable::from_json(json!("nope")).is_empty());
    }

    #[test]
    fn test_serde_as_array_of_rows() {
        let table: RawTable = serde_json::from_str(r#"[{"id": 1, "name": "Vidro"}]"#).unwrap();
        assert!(table.has_column("name"));
        let back = serde_json::to_value(&table).unwrap();
        assert_eq!(back, json!([{"id": 1, "name": "Vidro"}]));
    }

    #[test]
    fn test_to_raw_canonical_layout() {
        let table = NormalizedTable::new(vec![MaterialRecord::new(FeatureVector::new([
            1.0, 2700.0, 310.0, 205.0, 1.0, 0.0, 660.0,
        ]))
        .with_id(json!(7))
        .with_name("Alumínio")]);

        let raw = table.to_raw();
        let columns: Vec<&str> = raw.columns().iter().map(String::as_str).collect();
        assert_eq!(
            columns,
            vec![
                "id",
                "name",
                "cost_index",
                "density_kg_m3",
                "tensile_strength_MPa",
                "thermal_conductivity_W_mK",
                "recyclable",
                "biodegradable",
                "melting_point_C"
            ]
        );
        assert_eq!(raw.row(0).unwrap()["density_kg_m3"], json!(2700.0));
    }

    #[test]
    fn test_identity_flags() {
        let table = NormalizedTable::new(vec![MaterialRecord::new(FeatureVector::zeros())]);
        assert!(!table.has_id);
        assert!(!table.has_name);
        assert_eq!(table.to_raw().columns().len(), 7);
    }
}
