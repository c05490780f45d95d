//! Graph construction error types.

use derive_builder::UninitializedFieldError;
use tabwise_core::{SemanticType, TableError};
use thiserror::Error;

/// Result type for graph construction.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised while validating options or constructing a node set.
#[derive(Debug, Error)]
pub enum GraphError {
    /// An option incompatible with the table type was supplied.
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// The configuration is inconsistent or cannot be resolved against the
    /// target function.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A parameter or selected node does not carry the required semantic
    /// type.
    #[error("{parameter}: declared type {actual} does not match expected type {expected}")]
    TypeMismatch {
        /// Offending parameter or node name.
        parameter: String,
        /// The required semantic type.
        expected: SemanticType,
        /// The declared semantic type.
        actual: SemanticType,
    },

    /// Two nodes in the candidate set share a name.
    #[error("duplicate node name: {0}")]
    DuplicateNode(String),

    /// The candidate set contains a dependency cycle.
    #[error("cycle detected involving node {0}")]
    Cycle(String),

    /// A node implementation was invoked without one of its declared inputs.
    #[error("missing input {0}")]
    MissingInput(String),

    /// Table capability error.
    #[error("table capability error: {0}")]
    Capability(#[from] TableError),
}

impl From<UninitializedFieldError> for GraphError {
    fn from(err: UninitializedFieldError) -> Self {
        Self::Configuration(err.to_string())
    }
}
