//! Column extraction primitive.

use std::collections::BTreeMap;
use std::sync::Arc;

use tabwise_core::TableCapability;

use super::node::{Node, NodeImpl, NodeInputs};
use crate::error::GraphError;

/// Expands a table-producing node into per-column nodes.
///
/// Returns a node list whose first element reproduces `source` and whose
/// remaining elements each yield one named column of the source's output.
/// Column nodes are named exactly after their column and declare the
/// capability's column type.
pub fn extract_columns(
    source: &Node,
    columns: &[String],
    capability: &Arc<dyn TableCapability>,
) -> Vec<Node> {
    let column_type = capability.column_type();
    let mut nodes = Vec::with_capacity(columns.len() + 1);
    nodes.push(source.clone());

    for column in columns {
        let mut input_types = BTreeMap::new();
        input_types.insert(source.name().to_string(), source.declared_type());

        let source_key = source.name().to_string();
        let column_name = column.clone();
        let capability = Arc::clone(capability);
        let implementation: NodeImpl = Arc::new(move |inputs: &NodeInputs| {
            let table = inputs
                .get(&source_key)
                .ok_or_else(|| GraphError::MissingInput(source_key.clone()))?;
            Ok(capability.extract_column(table, &column_name)?)
        });

        nodes.push(Node::new(column, column_type, input_types, implementation));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use tabwise_core::{
        CapabilityRegistry, FRAME_TYPE, Frame, FrameCapability, SERIES_TYPE, Series, Value,
    };

    use super::*;

    fn frame_capability() -> Arc<dyn TableCapability> {
        let mut registry = CapabilityRegistry::new();
        FrameCapability::register(&mut registry);
        registry.get(FRAME_TYPE).unwrap()
    }

    fn table_node() -> Node {
        Node::new(
            "raw",
            FRAME_TYPE,
            BTreeMap::new(),
            Arc::new(|_: &NodeInputs| {
                Ok(Value::new(
                    Frame::new()
                        .with_column("x", vec![1.0, 2.0])?
                        .with_column("y", vec![3.0, 4.0])?,
                ))
            }),
        )
    }

    #[test]
    fn test_first_node_reproduces_source() {
        let source = table_node();
        let nodes = extract_columns(
            &source,
            &["x".to_string()],
            &frame_capability(),
        );
        assert_eq!(nodes[0].name(), "raw");
        assert_eq!(nodes[0].declared_type(), FRAME_TYPE);
    }

    #[test]
    fn test_column_nodes_are_named_and_typed_per_column() {
        let source = table_node();
        let nodes = extract_columns(
            &source,
            &["x".to_string(), "y".to_string()],
            &frame_capability(),
        );

        assert_eq!(nodes.len(), 3);
        for (node, expected) in nodes[1..].iter().zip(["x", "y"]) {
            assert_eq!(node.name(), expected);
            assert_eq!(node.declared_type(), SERIES_TYPE);
            assert!(node.input_types().contains_key("raw"));
        }
    }

    #[test]
    fn test_column_node_yields_the_named_column() {
        let source = table_node();
        let nodes = extract_columns(&source, &["y".to_string()], &frame_capability());

        let table = source.call(&NodeInputs::new()).unwrap();
        let mut inputs = NodeInputs::new();
        inputs.insert("raw".to_string(), table);

        let column = nodes[1].call(&inputs).unwrap();
        assert_eq!(
            column.downcast_ref::<Series>().unwrap().values(),
            &[3.0, 4.0]
        );
    }
}
