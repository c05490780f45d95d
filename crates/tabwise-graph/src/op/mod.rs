//! Elementary column operations and their sources.
//!
//! An [`Operation`] is one unit of the internal pipeline: it consumes named
//! columns or scalar inputs and produces one value. Operations are loaded
//! individually or in groups ([`OperationSource`]) and resolved against the
//! available configuration by [`collect_nodes`].

mod collect;
mod config;

pub use collect::collect_nodes;
pub use config::PipelineConfig;

use std::collections::BTreeMap;
use std::fmt;

use derive_more::From;
use tabwise_core::SemanticType;

use crate::graph::{Node, NodeImpl};

/// A named elementary operation over columns or scalar inputs.
#[derive(Clone)]
pub struct Operation {
    name: String,
    inputs: BTreeMap<String, SemanticType>,
    output: SemanticType,
    implementation: NodeImpl,
    required_config: Vec<String>,
}

impl Operation {
    /// Creates an operation producing `output` via `implementation`.
    pub fn new(name: impl Into<String>, output: SemanticType, implementation: NodeImpl) -> Self {
        Self {
            name: name.into(),
            inputs: BTreeMap::new(),
            output,
            implementation,
            required_config: Vec::new(),
        }
    }

    /// Declares a named, typed input.
    pub fn with_input(mut self, name: impl Into<String>, ty: SemanticType) -> Self {
        self.inputs.insert(name.into(), ty);
        self
    }

    /// Declares a configuration key that must be visible for this operation
    /// to resolve.
    pub fn requires_config(mut self, key: impl Into<String>) -> Self {
        self.required_config.push(key.into());
        self
    }

    /// Returns the operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic type this operation produces.
    pub fn output(&self) -> SemanticType {
        self.output
    }

    /// Returns the configuration keys required for resolution.
    pub fn required_config(&self) -> &[String] {
        &self.required_config
    }

    /// Converts the operation into a graph node.
    pub(crate) fn to_node(&self) -> Node {
        Node::new(
            self.name.clone(),
            self.output,
            self.inputs.clone(),
            self.implementation.clone(),
        )
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .field("required_config", &self.required_config)
            .finish_non_exhaustive()
    }
}

/// One operation or a group of operations to load into the pipeline.
#[derive(Clone, Debug, From)]
pub enum OperationSource {
    /// A single operation.
    Operation(Operation),
    /// A group of operations loaded together.
    Group(Vec<Operation>),
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tabwise_core::Value;

    use super::*;
    use crate::graph::NodeInputs;

    const COLUMN: SemanticType = SemanticType::new("test.Column");

    #[test]
    fn test_operation_converts_to_node() {
        let op = Operation::new(
            "sum",
            COLUMN,
            Arc::new(|_: &NodeInputs| Ok(Value::new(0.0_f64))),
        )
        .with_input("a", COLUMN)
        .with_input("b", COLUMN);

        let node = op.to_node();
        assert_eq!(node.name(), "sum");
        assert_eq!(node.declared_type(), COLUMN);
        assert_eq!(node.input_types().len(), 2);
    }

    #[test]
    fn test_sources_from_single_and_group() {
        let op = Operation::new(
            "solo",
            COLUMN,
            Arc::new(|_: &NodeInputs| Ok(Value::new(0.0_f64))),
        );
        let single: OperationSource = op.clone().into();
        let group: OperationSource = vec![op.clone(), op].into();

        assert!(matches!(single, OperationSource::Operation(_)));
        assert!(matches!(group, OperationSource::Group(ops) if ops.len() == 2));
    }
}
