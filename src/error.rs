use thiserror::Error;

/// Failures detected while inferring a schema from a header list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A measurement column is not of the form `"<feature> <year>"`.
    #[error("malformed column name {column:?}: expected \"<feature> <year>\"")]
    MalformedColumnName { column: String },

    /// The first column is not the designated entity column.
    #[error("expected entity column {expected:?} first, found {found:?}")]
    EntityColumnMismatch { expected: String, found: String },

    #[error("table has no columns")]
    NoColumns,
}

/// Failures detected while assembling a [`crate::data::model::Table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row {row} has {found} cells but the header has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
