//! Operation resolution against available configuration.

use super::{Operation, OperationSource, PipelineConfig};
use crate::TRACING_TARGET;
use crate::graph::Node;

/// Resolves operation sources into graph nodes.
///
/// An operation whose `required_config` keys are not all present in
/// `config` is excluded from the result, not errored. Name conflicts are
/// not resolved here; they surface when the candidate set is assembled.
pub fn collect_nodes(config: &PipelineConfig, sources: &[OperationSource]) -> Vec<Node> {
    let mut nodes = Vec::new();
    for source in sources {
        match source {
            OperationSource::Operation(op) => push_if_resolvable(&mut nodes, config, op),
            OperationSource::Group(ops) => {
                for op in ops {
                    push_if_resolvable(&mut nodes, config, op);
                }
            }
        }
    }
    nodes
}

fn push_if_resolvable(nodes: &mut Vec<Node>, config: &PipelineConfig, op: &Operation) {
    if let Some(missing) = op
        .required_config()
        .iter()
        .find(|key| !config.contains_key(key))
    {
        tracing::debug!(
            target: TRACING_TARGET,
            operation = op.name(),
            missing_config = %missing,
            "Skipping unresolvable operation"
        );
        return;
    }
    nodes.push(op.to_node());
}
