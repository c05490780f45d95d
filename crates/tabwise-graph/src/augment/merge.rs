//! Output selection and the merge node.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tabwise_core::{SemanticType, TableCapability};

use crate::error::{GraphError, GraphResult};
use crate::graph::{Node, NodeImpl, NodeInputs};

/// Reserved name of the merge node, pre-namespacing.
pub const MERGE_NODE_NAME: &str = "_append";

/// Names of every generated node whose declared type is the column type, in
/// insertion order.
pub(crate) fn default_selection(nodes: &[Node], column_type: SemanticType) -> Vec<String> {
    nodes
        .iter()
        .filter(|node| node.declared_type() == column_type)
        .map(|node| node.name().to_string())
        .collect()
}

/// Checks an explicit selection against the generated node set.
pub(crate) fn validate_selection(
    selection: &[String],
    nodes: &[Node],
    inject_parameter: &str,
    column_type: SemanticType,
) -> GraphResult<()> {
    let by_name: HashMap<&str, &Node> = nodes.iter().map(|node| (node.name(), node)).collect();
    let mut seen = HashSet::new();

    for name in selection {
        if !seen.insert(name.as_str()) {
            return Err(GraphError::Configuration(format!(
                "select lists {name} more than once"
            )));
        }
        if name == inject_parameter {
            return Err(GraphError::Configuration(format!(
                "select must not name the injection parameter {name}"
            )));
        }
        let node = by_name.get(name.as_str()).ok_or_else(|| {
            GraphError::Configuration(format!("select names {name}, which no pipeline node produces"))
        })?;
        if node.declared_type() != column_type {
            return Err(GraphError::TypeMismatch {
                parameter: name.clone(),
                expected: column_type,
                actual: node.declared_type(),
            });
        }
    }
    Ok(())
}

/// Builds the single node that reattaches the selected columns onto the
/// injected table.
///
/// The node is named [`MERGE_NODE_NAME`], produces the table type, and
/// declares one input per selected column plus the injection parameter.
/// Its implementation assigns the selected values by name: added if
/// absent, overwritten if present, all other columns untouched. With an
/// empty selection it passes the table through unchanged.
pub(crate) fn merge_node(
    inject_parameter: &str,
    selection: &[String],
    table_type: SemanticType,
    column_type: SemanticType,
    capability: &Arc<dyn TableCapability>,
) -> Node {
    let mut input_types = BTreeMap::new();
    for name in selection {
        input_types.insert(name.clone(), column_type);
    }
    input_types.insert(inject_parameter.to_string(), table_type);

    let inject = inject_parameter.to_string();
    let selected = selection.to_vec();
    let capability = Arc::clone(capability);
    let implementation: NodeImpl = Arc::new(move |inputs: &NodeInputs| {
        let table = inputs
            .get(&inject)
            .ok_or_else(|| GraphError::MissingInput(inject.clone()))?;
        let mut columns = BTreeMap::new();
        for name in &selected {
            let value = inputs
                .get(name)
                .ok_or_else(|| GraphError::MissingInput(name.clone()))?;
            columns.insert(name.clone(), value.clone());
        }
        Ok(capability.assign(table, &columns)?)
    });

    Node::new(MERGE_NODE_NAME, table_type, input_types, implementation)
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

    fn column_node(name: &str) -> Node {
        Node::new(
            name,
            SERIES_TYPE,
            BTreeMap::new(),
            Arc::new(|_: &NodeInputs| Ok(Value::new(Series::default()))),
        )
    }

    fn table_producing_node(name: &str) -> Node {
        Node::new(
            name,
            FRAME_TYPE,
            BTreeMap::new(),
            Arc::new(|_: &NodeInputs| Ok(Value::new(Frame::new()))),
        )
    }

    #[test]
    fn test_default_selection_keeps_column_typed_nodes_in_order() {
        let nodes = vec![
            column_node("c"),
            table_producing_node("intermediate"),
            column_node("d"),
        ];
        let selection = default_selection(&nodes, SERIES_TYPE);
        assert_eq!(selection, ["c", "d"]);
    }

    #[test]
    fn test_default_selection_may_be_empty() {
        let nodes = vec![table_producing_node("intermediate")];
        assert!(default_selection(&nodes, SERIES_TYPE).is_empty());
    }

    #[test]
    fn test_selection_validation_rejects_unknown_duplicate_and_inject() {
        let nodes = vec![column_node("c")];

        let unknown = ["ghost".to_string()];
        assert!(matches!(
            validate_selection(&unknown, &nodes, "initial_df", SERIES_TYPE).unwrap_err(),
            GraphError::Configuration(_)
        ));

        let duplicated = ["c".to_string(), "c".to_string()];
        assert!(matches!(
            validate_selection(&duplicated, &nodes, "initial_df", SERIES_TYPE).unwrap_err(),
            GraphError::Configuration(_)
        ));

        let inject = ["initial_df".to_string()];
        assert!(matches!(
            validate_selection(&inject, &nodes, "initial_df", SERIES_TYPE).unwrap_err(),
            GraphError::Configuration(_)
        ));
    }

    #[test]
    fn test_selecting_a_non_column_node_is_a_type_mismatch() {
        let nodes = vec![table_producing_node("intermediate")];
        let selection = ["intermediate".to_string()];
        let err =
            validate_selection(&selection, &nodes, "initial_df", SERIES_TYPE).unwrap_err();
        assert!(matches!(
            err,
            GraphError::TypeMismatch { parameter, expected, actual }
                if parameter == "intermediate" && expected == SERIES_TYPE && actual == FRAME_TYPE
        ));
    }

    #[test]
    fn test_merge_node_declares_one_input_per_selection_plus_table() {
        let selection = vec!["c".to_string(), "d".to_string()];
        let node = merge_node(
            "initial_df",
            &selection,
            FRAME_TYPE,
            SERIES_TYPE,
            &frame_capability(),
        );

        assert_eq!(node.name(), MERGE_NODE_NAME);
        assert_eq!(node.declared_type(), FRAME_TYPE);
        assert_eq!(node.input_types().len(), selection.len() + 1);
        assert_eq!(node.input_types()["initial_df"], FRAME_TYPE);
        assert_eq!(node.input_types()["c"], SERIES_TYPE);
        assert_eq!(node.input_types()["d"], SERIES_TYPE);
    }

    #[test]
    fn test_merge_appends_and_overwrites_selected_columns() {
        let selection = vec!["b".to_string(), "c".to_string()];
        let node = merge_node(
            "initial_df",
            &selection,
            FRAME_TYPE,
            SERIES_TYPE,
            &frame_capability(),
        );

        let frame = Frame::new()
            .with_column("a", vec![1.0, 2.0])
            .unwrap()
            .with_column("b", vec![3.0, 4.0])
            .unwrap();

        let mut inputs = NodeInputs::new();
        inputs.insert("initial_df".to_string(), Value::new(frame));
        inputs.insert("b".to_string(), Value::new(Series::new(vec![0.0, 0.0])));
        inputs.insert("c".to_string(), Value::new(Series::new(vec![5.0, 6.0])));

        let out = node.call(&inputs).unwrap();
        let merged = out.downcast_ref::<Frame>().unwrap();
        assert_eq!(merged.column("a").unwrap().values(), &[1.0, 2.0]);
        assert_eq!(merged.column("b").unwrap().values(), &[0.0, 0.0]);
        assert_eq!(merged.column("c").unwrap().values(), &[5.0, 6.0]);
    }

    #[test]
    fn test_empty_selection_passes_the_table_through() {
        let node = merge_node("initial_df", &[], FRAME_TYPE, SERIES_TYPE, &frame_capability());

        let frame = Frame::new().with_column("a", vec![1.0]).unwrap();
        let mut inputs = NodeInputs::new();
        inputs.insert("initial_df".to_string(), Value::new(frame.clone()));

        let out = node.call(&inputs).unwrap();
        assert_eq!(out.downcast_ref::<Frame>(), Some(&frame));
    }
}
