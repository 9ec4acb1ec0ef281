use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("decision matrix is empty")]
    EmptyMatrix,

    #[error("row {row} has {found} criteria, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("non-finite value at row {row}, column {column}")]
    NonFiniteValue { row: usize, column: usize },

    #[error("{what} length {found} does not match {expected} criteria columns")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("weight for column {column} must be finite and non-negative, got {value}")]
    InvalidWeight { column: usize, value: f64 },

    #[error("unknown impact direction: {0:?}")]
    InvalidImpact(String),

    #[error("column {column} has zero norm and cannot be normalized")]
    DegenerateColumn { column: usize },

    #[error("alternative {row} coincides with both ideal and negative-ideal solutions")]
    DegenerateAlternative { row: usize },
}
