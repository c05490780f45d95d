//! Insertion-ordered node collections.

use std::collections::HashMap;
use std::fmt;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use super::node::Node;
use crate::error::{GraphError, GraphResult};

/// An insertion-ordered set of uniquely named nodes.
///
/// Name uniqueness is enforced on insertion, before any node reaches the
/// host graph engine. Input names that do not refer to a node in the set
/// are treated as external inputs supplied by the engine.
#[derive(Clone, Default)]
pub struct NodeSet {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeSet {
    /// Creates an empty node set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a node set from an iterator, failing on the first duplicate
    /// name.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> GraphResult<Self> {
        let mut set = Self::new();
        for node in nodes {
            set.insert(node)?;
        }
        Ok(set)
    }

    /// Adds a node to the set.
    pub fn insert(&mut self, node: Node) -> GraphResult<()> {
        if self.index.contains_key(node.name()) {
            return Err(GraphError::DuplicateNode(node.name().to_string()));
        }
        self.index.insert(node.name().to_string(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    /// Returns the named node, if present.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.index.get(name).map(|&pos| &self.nodes[pos])
    }

    /// Returns whether a node with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over the node names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(Node::name)
    }

    /// Returns node names in a valid topological order.
    ///
    /// An edge runs from producer to consumer for every input name that
    /// refers to another node in the set; input names that refer to nothing
    /// in the set are external and produce no edge. Fails with
    /// [`GraphError::Cycle`] if no order exists.
    pub fn topological_order(&self) -> GraphResult<Vec<String>> {
        let mut graph = DiGraph::<(), ()>::new();
        for _ in 0..self.nodes.len() {
            graph.add_node(());
        }

        for (consumer, node) in self.nodes.iter().enumerate() {
            for input in node.input_types().keys() {
                if let Some(&producer) = self.index.get(input) {
                    graph.add_edge(NodeIndex::new(producer), NodeIndex::new(consumer), ());
                }
            }
        }

        toposort(&graph, None)
            .map(|order| {
                order
                    .into_iter()
                    .map(|ix| self.nodes[ix.index()].name().to_string())
                    .collect()
            })
            .map_err(|cycle| {
                GraphError::Cycle(self.nodes[cycle.node_id().index()].name().to_string())
            })
    }
}

impl fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeSet")
            .field("nodes", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
