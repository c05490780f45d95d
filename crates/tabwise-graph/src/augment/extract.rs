//! Column extraction synthesis.

use std::collections::BTreeMap;
use std::sync::Arc;

use tabwise_core::{SemanticType, TableCapability};

use crate::error::GraphError;
use crate::graph::{Node, NodeInputs, extract_columns};

/// Synthesizes nodes exposing each configured column as a standalone value.
///
/// A passthrough node re-exposes the injected table to satisfy the
/// extraction primitive's calling convention; only the column nodes are
/// returned. Returned node names equal the requested column names exactly
/// and each declares the capability's column type.
pub(crate) fn column_nodes(
    inject_parameter: &str,
    columns: &[String],
    table_type: SemanticType,
    capability: &Arc<dyn TableCapability>,
) -> Vec<Node> {
    let key = inject_parameter.to_string();
    let mut input_types = BTreeMap::new();
    input_types.insert(key.clone(), table_type);

    let passthrough = Node::new(
        inject_parameter,
        table_type,
        input_types,
        Arc::new(move |inputs: &NodeInputs| {
            inputs
                .get(&key)
                .cloned()
                .ok_or_else(|| GraphError::MissingInput(key.clone()))
        }),
    );

    let mut nodes = extract_columns(&passthrough, columns, capability);
    nodes.split_off(1)
}
