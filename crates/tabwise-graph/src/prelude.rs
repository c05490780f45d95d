//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use tabwise_graph::prelude::*;
//! ```

pub use crate::augment::{
    AugmentPlan, ImplicitTableInputs, MERGE_NODE_NAME, Parameter, TargetFunction, WithColumns,
    WithColumnsBuilder,
};
pub use crate::error::{GraphError, GraphResult};
pub use crate::graph::{Node, NodeImpl, NodeInputs, NodeSet};
pub use crate::op::{Operation, OperationSource, PipelineConfig};
