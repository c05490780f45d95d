//! Graph node primitive.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tabwise_core::{SemanticType, Value};

use crate::error::GraphResult;

/// Named inputs handed to a node implementation.
pub type NodeInputs = HashMap<String, Value>;

/// A node implementation: a callable over named inputs.
pub type NodeImpl = Arc<dyn Fn(&NodeInputs) -> GraphResult<Value> + Send + Sync>;

/// A unit of the dependency graph.
///
/// A node couples a unique name with the semantic type it produces, the
/// named, typed inputs it consumes, and the callable that computes it. Once
/// handed to the host graph engine, execution ownership passes to that
/// engine.
#[derive(Clone)]
pub struct Node {
    name: String,
    declared_type: SemanticType,
    input_types: BTreeMap<String, SemanticType>,
    implementation: NodeImpl,
}

impl Node {
    /// Creates a new node.
    pub fn new(
        name: impl Into<String>,
        declared_type: SemanticType,
        input_types: BTreeMap<String, SemanticType>,
        implementation: NodeImpl,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            input_types,
            implementation,
        }
    }

    /// Returns the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the semantic type this node produces.
    pub fn declared_type(&self) -> SemanticType {
        self.declared_type
    }

    /// Returns the named, typed inputs this node consumes.
    pub fn input_types(&self) -> &BTreeMap<String, SemanticType> {
        &self.input_types
    }

    /// Returns the node implementation.
    pub fn implementation(&self) -> &NodeImpl {
        &self.implementation
    }

    /// Invokes the node implementation.
    pub fn call(&self, inputs: &NodeInputs) -> GraphResult<Value> {
        (self.implementation)(inputs)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("input_types", &self.input_types)
            .finish_non_exhaustive()
    }
}
