//! Catalog loading
//!
//! The catalog file is a JSON array of row objects. Cells may be of any JSON
//! type; the normalizer sorts them out.

use materia_core::{Error, RawTable, Result};
use serde_json::Value;
use std::io::Read;
use std::path::Path;

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    let file = std::fs::File::open(path)?;
    read_catalog(std::io::BufReader::new(file))
}

pub fn read_catalog<R: Read>(reader: R) -> Result<RawTable> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| Error::Serialization(e.to_string()))?;
    match value {
        Value::Array(_) => Ok(RawTable::from_json(value)),
        other => Err(Error::Serialization(format!(
            "catalog must be a JSON array of rows, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
