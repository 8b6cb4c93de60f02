use crate::feature::Feature;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for structurally wrong fits or queries (caller/integration errors).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

/// Structurally wrong input handed to the matcher.
///
/// These are integration errors, not data-quality errors, and are never
/// transient.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("non-finite value for {feature} in {}", describe_row(.row))]
    NonFinite { row: Option<usize>, feature: Feature },

    #[error("number of neighbours must be at least 1")]
    ZeroNeighbors,

    #[error("requested {requested} neighbours but only {available} rows are fitted")]
    TooManyNeighbors { requested: usize, available: usize },
}

fn describe_row(row: &Option<usize>) -> String {
    match row {
        Some(r) => format!("row {}", r),
        None => "query vector".to_string(),
    }
}
