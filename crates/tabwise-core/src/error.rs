//! Core error types.

use thiserror::Error;

use crate::types::SemanticType;

/// Result type for table capability operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by table capabilities and the capability registry.
#[derive(Debug, Error)]
pub enum TableError {
    /// No capability is registered for the requested table type.
    #[error("no table capability registered for {0}")]
    UnknownTableType(SemanticType),

    /// The requested column does not exist in the table.
    #[error("column {0} not found")]
    MissingColumn(String),

    /// A dynamic value did not hold the expected concrete type.
    #[error("value is not a {expected}")]
    UnexpectedValue {
        /// Name of the expected concrete type.
        expected: &'static str,
    },

    /// A column's length disagrees with the table's row count.
    #[error("column {column} has length {actual}, table expects {expected}")]
    LengthMismatch {
        /// Offending column name.
        column: String,
        /// Row count expected by the table.
        expected: usize,
        /// Row count of the offending column.
        actual: usize,
    },
}
