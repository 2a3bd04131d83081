// arena.rs
// ──────────────────────────────────────────────────────────────────────────────
// An index-keyed directed-graph arena. Nodes are dense `NodeId` handles into a
// row table; each row keeps its children and parents adjacency in insertion
// order. `add_edge` maintains both directions so the graph can be walked
// either way.
// ──────────────────────────────────────────────────────────────────────────────

use std::ops::Range;

use super::GraphView;

/// Represents a unique identifier for a node in a graph.
pub type NodeId = usize;

#[derive(Clone, Debug, Default)]
struct NodeRow {
    children: Vec<NodeId>,
    parents: Vec<NodeId>,
}

/// A directed graph held as an arena of adjacency rows.
///
/// Handles are assigned densely in insertion order; edges between handles that
/// were not created by this graph panic on access, the same as indexing past
/// the end of a slice.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    rows: Vec<NodeRow>,
}

impl Graph {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Adds one node and returns its handle.
    pub fn add_node(&mut self) -> NodeId {
        let id = self.rows.len();
        self.rows.push(NodeRow::default());
        id
    }

    /// Adds `count` nodes at once and returns the range of handles created.
    pub fn add_nodes(&mut self, count: usize) -> Range<NodeId> {
        let first = self.rows.len();
        self.rows
            .extend(std::iter::repeat_with(NodeRow::default).take(count));
        first..self.rows.len()
    }

    /// Records a directed edge from `parent` to `child`, updating both the
    /// child list of `parent` and the parent list of `child`.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        self.rows[parent].children.push(child);
        self.rows[child].parents.push(parent);
    }

    /// Number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Child handles of `node`, in the order their edges were added.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.rows[node].children
    }

    /// Parent handles of `node`, in the order their edges were added.
    pub fn parents(&self, node: NodeId) -> &[NodeId] {
        &self.rows[node].parents
    }
}

impl GraphView for Graph {
    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.rows[node].children.clone()
    }

    fn parents_of(&self, node: NodeId) -> Vec<NodeId> {
        self.rows[node].parents.clone()
    }
}
