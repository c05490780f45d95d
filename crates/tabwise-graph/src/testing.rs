//! Test-only topological evaluator for constructed node sets.

use std::collections::HashMap;

use tabwise_core::Value;

use crate::error::{GraphError, GraphResult};
use crate::graph::{NodeInputs, NodeSet};

/// Executes every node in topological order, starting from externally
/// provided inputs, and returns all computed values by name.
pub(crate) fn execute(
    nodes: &NodeSet,
    external: NodeInputs,
) -> GraphResult<HashMap<String, Value>> {
    let order = nodes.topological_order()?;
    let mut values = external;

    for name in order {
        let node = nodes
            .get(&name)
            .ok_or_else(|| GraphError::MissingInput(name.clone()))?;
        let mut inputs = NodeInputs::new();
        for key in node.input_types().keys() {
            let value = values
                .get(key)
                .ok_or_else(|| GraphError::MissingInput(key.clone()))?;
            inputs.insert(key.clone(), value.clone());
        }
        let value = node.call(&inputs)?;
        values.insert(name, value);
    }

    Ok(values)
}
