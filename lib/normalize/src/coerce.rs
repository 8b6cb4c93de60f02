//! Cell coercion
//!
//! Every function here is total: a cell that cannot be read yields `None`
//! (a missing value) rather than an error.

use crate::alias::Transform;
use serde_json::Value;

/// Yes/no vocabulary for flag columns
const FLAG_WORDS: &[(&str, f64)] = &[
    ("não", 0.0),
    ("nao", 0.0),
    ("sim", 1.0),
    ("0", 0.0),
    ("1", 1.0),
];

/// Apply a column transform to one cell
pub fn apply(transform: Transform, cell: Option<&Value>) -> Option<f64> {
    let cell = cell?;
    match transform {
        Transform::Numeric => to_number(cell),
        Transform::Ordinal(levels) => match cell {
            Value::String(s) => lookup(levels, s),
            other => to_number(other),
        },
        Transform::Categorical(levels) => cell.as_str().and_then(|s| lookup(levels, s)),
        Transform::Flag => to_flag(cell),
    }
}

/// Numeric coercion: numbers as-is, booleans as 0/1, numeric text parsed
///
/// Non-finite results are treated as missing.
pub fn to_number(cell: &Value) -> Option<f64> {
    let n = match cell {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn parse_decimal(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>()
        .ok()
        .or_else(|| s.replacen(',', ".", 1).parse::<f64>().ok())
}

/// Flag coercion: yes/no words for text, numbers and booleans pass through
pub fn to_flag(cell: &Value) -> Option<f64> {
    match cell {
        Value::String(s) => lookup(FLAG_WORDS, s),
        other => to_number(other),
    }
}

/// Case- and whitespace-insensitive category lookup
pub fn lookup(levels: &[(&str, f64)], raw: &str) -> Option<f64> {
    let key = raw.trim().to_lowercase();
    levels.iter().find(|(name, _)| *name == key).map(|(_, v)| *v)
}
