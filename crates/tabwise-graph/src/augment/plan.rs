//! Plan construction.

use std::collections::HashSet;

use crate::TRACING_TARGET;
use crate::error::{GraphError, GraphResult};
use crate::graph::NodeSet;
use crate::op::{PipelineConfig, collect_nodes};

use super::config::WithColumns;
use super::extract::column_nodes;
use super::merge::{MERGE_NODE_NAME, default_selection, merge_node, validate_selection};
use super::namespace::apply_namespace;
use super::resolve::{resolve_inject_parameter, validate_parameter_type};
use super::target::TargetFunction;

/// A constructed augmentation: the node set handed to the host graph
/// engine.
#[derive(Debug, Clone)]
pub struct AugmentPlan {
    nodes: NodeSet,
    inject_parameter: String,
    output: String,
}

impl AugmentPlan {
    /// Returns the constructed node set.
    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Consumes the plan, returning the node set.
    pub fn into_nodes(self) -> NodeSet {
        self.nodes
    }

    /// Returns the name of the target parameter that receives the table.
    pub fn inject_parameter(&self) -> &str {
        &self.inject_parameter
    }

    /// Returns the merge node name.
    ///
    /// The target function consumes this node's result in place of its raw
    /// table parameter.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl WithColumns {
    /// Runs the validation passes without constructing any nodes.
    ///
    /// Checks the option invariants, resolves the injection parameter, and
    /// confirms its declared type matches the configured table type.
    pub fn validate(&self, target: &TargetFunction) -> GraphResult<()> {
        self.validate_options()?;
        let inject =
            resolve_inject_parameter(target, self.on_input.as_deref(), self.table_type)?;
        validate_parameter_type(target, &inject, self.table_type)
    }

    /// Constructs the augmentation plan for `target`.
    ///
    /// Construction is pure and deterministic: it either returns a complete
    /// plan or fails before any node reaches the host engine.
    pub fn plan(
        &self,
        target: &TargetFunction,
        config: &PipelineConfig,
    ) -> GraphResult<AugmentPlan> {
        self.validate_options()?;

        let inject =
            resolve_inject_parameter(target, self.on_input.as_deref(), self.table_type)?;
        validate_parameter_type(target, &inject, self.table_type)?;

        let capability = self.registry.get(self.table_type)?;
        let column_type = capability.column_type();

        let mut generated = Vec::new();
        if self.on_input.is_none() {
            let columns = self.columns_to_pass.clone().unwrap_or_default();
            if self.columns_to_pass.is_none() {
                tracing::debug!(
                    target: TRACING_TARGET,
                    policy = self.implicit_inputs.as_ref(),
                    "No columns_to_pass given; extracting nothing"
                );
            }
            generated.extend(column_nodes(&inject, &columns, self.table_type, &capability));
        }

        let visible = match &self.config_required {
            Some(keys) => config.restricted(keys),
            None => config.clone(),
        };
        generated.extend(collect_nodes(&visible, &self.operations));

        let selection = match &self.select {
            Some(select) => {
                validate_selection(select, &generated, &inject, column_type)?;
                select.clone()
            }
            None => default_selection(&generated, column_type),
        };

        generated.push(merge_node(
            &inject,
            &selection,
            self.table_type,
            column_type,
            &capability,
        ));

        let mut names = HashSet::new();
        for node in &generated {
            if node.name() == inject {
                return Err(GraphError::Configuration(format!(
                    "node {} collides with the injection parameter",
                    node.name()
                )));
            }
            if !names.insert(node.name().to_string()) {
                return Err(GraphError::DuplicateNode(node.name().to_string()));
            }
        }

        let (nodes, output) = match &self.namespace {
            Some(namespace) => (
                apply_namespace(generated, namespace, &inject),
                format!("{namespace}.{MERGE_NODE_NAME}"),
            ),
            None => (generated, MERGE_NODE_NAME.to_string()),
        };

        let nodes = NodeSet::from_nodes(nodes)?;
        nodes.topological_order()?;

        tracing::debug!(
            target: TRACING_TARGET,
            target_function = target.name(),
            inject_parameter = %inject,
            node_count = nodes.len(),
            selected = selection.len(),
            "Constructed augmentation plan"
        );

        Ok(AugmentPlan {
            nodes,
            inject_parameter: inject,
            output,
        })
    }
}
