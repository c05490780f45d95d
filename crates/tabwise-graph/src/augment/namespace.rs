//! Namespace application.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::graph::{Node, NodeImpl, NodeInputs};

/// Prefixes every node name with `namespace.`, leaving references to the
/// injection parameter (and to anything outside the set) untouched.
///
/// Input keys that refer to renamed nodes are rewritten to match, and the
/// node's callable is wrapped so it still receives inputs under the names
/// it was written against. The namespaced set therefore remains internally
/// connected and executable.
pub(crate) fn apply_namespace(
    nodes: Vec<Node>,
    namespace: &str,
    inject_parameter: &str,
) -> Vec<Node> {
    let internal: HashSet<String> = nodes.iter().map(|node| node.name().to_string()).collect();

    nodes
        .into_iter()
        .map(|node| {
            let mut input_types = BTreeMap::new();
            let mut rename: HashMap<String, String> = HashMap::new();
            for (key, ty) in node.input_types() {
                if key != inject_parameter && internal.contains(key) {
                    let qualified = format!("{namespace}.{key}");
                    rename.insert(qualified.clone(), key.clone());
                    input_types.insert(qualified, *ty);
                } else {
                    input_types.insert(key.clone(), *ty);
                }
            }

            let implementation: NodeImpl = if rename.is_empty() {
                node.implementation().clone()
            } else {
                let inner = node.implementation().clone();
                Arc::new(move |inputs: &NodeInputs| {
                    let remapped: NodeInputs = inputs
                        .iter()
                        .map(|(key, value)| {
                            let key = rename.get(key).cloned().unwrap_or_else(|| key.clone());
                            (key, value.clone())
                        })
                        .collect();
                    inner(&remapped)
                })
            };

            Node::new(
                format!("{namespace}.{}", node.name()),
                node.declared_type(),
                input_types,
                implementation,
            )
        })
        .collect()
}
