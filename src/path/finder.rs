// finder.rs
// ──────────────────────────────────────────────────────────────────────────────
// Breadth-first enumeration of all simple paths between two node sets, over a
// single queue of partial paths. The front path grows in place along its
// first unvisited child; every further child forks a clone which is enqueued
// at the back. A path leaves the queue exactly when its end has no unvisited
// child, and matching an end node never stops exploration on its own.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::{HashSet, VecDeque};
use std::fmt;

use tracing::{debug, trace};

use super::error::PathError;
use crate::graph::{GraphView, NodeId};

/// One exploration from a start node forward through its descendants.
///
/// Paths are simple by construction: no node ever appears twice. The last
/// element is the only point further growth is considered from. Growth is
/// crate-internal; a returned path is a read-only snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub(crate) fn new(start: NodeId) -> Self {
        Self { nodes: vec![start] }
    }

    pub(crate) fn push(&mut self, node: NodeId) {
        self.nodes.push(node);
    }

    /// Clone-and-grow in one step, used when a branch point forks.
    pub(crate) fn fork(&self, node: NodeId) -> Self {
        let mut forked = self.clone();
        forked.push(node);
        forked
    }

    /// The node sequence, start node first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// The start node.
    pub fn start(&self) -> NodeId {
        self.nodes[0]
    }

    /// The current end node.
    pub fn end(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of nodes on the path, at least 1.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a path holds at least its start node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` already lies on this path.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl From<Path> for Vec<NodeId> {
    fn from(path: Path) -> Self {
        path.nodes
    }
}

/// Enumerates every simple path that begins at a node of `start_nodes` and
/// ends at a node of `end_nodes`.
///
/// A path that reaches an end node is recorded and kept in play, since that
/// node may lead towards other end nodes; exploration only stops at dead ends.
/// Children are visited in the order `graph` exposes them: the front path
/// grows along the first unvisited child while the remaining children fork
/// clones onto the back of the queue, so results come out breadth-first but
/// not globally sorted. Duplicate entries in `start_nodes` are the caller's
/// responsibility and are not collapsed.
///
/// Cycle avoidance is per path, not global. On cyclic graphs no single path
/// revisits a node, but the same end node can be reached along many routes and
/// nothing caps the overall amount of work; callers feeding adversarial cyclic
/// graphs get unbounded time and memory.
///
/// # Errors
/// Returns [`PathError::EmptyStartSet`] or [`PathError::EmptyEndSet`] when the
/// corresponding set is empty, before any traversal begins.
pub fn find_all_paths<G: GraphView>(
    graph: &G,
    start_nodes: &[NodeId],
    end_nodes: &[NodeId],
) -> Result<Vec<Path>, PathError> {
    if start_nodes.is_empty() {
        return Err(PathError::EmptyStartSet);
    }
    if end_nodes.is_empty() {
        return Err(PathError::EmptyEndSet);
    }

    let end_set: HashSet<NodeId> = end_nodes.iter().copied().collect();

    let mut exploratory_paths: VecDeque<Path> =
        start_nodes.iter().map(|&node| Path::new(node)).collect();
    let mut matching_paths: Vec<Path> = Vec::new();

    debug!(
        starts = start_nodes.len(),
        ends = end_set.len(),
        "enumerating simple paths"
    );

    while let Some(mut current_path) = exploratory_paths.pop_front() {
        let last_node = current_path.end();

        if end_set.contains(&last_node) {
            // found matching path, save a clone, but keep exploring as this
            // end node might point towards other end nodes
            matching_paths.push(current_path.clone());
        }

        // do not follow children that would lead to a cycle in the path
        let candidates: Vec<NodeId> = graph
            .children_of(last_node)
            .into_iter()
            .filter(|&child| !current_path.contains(child))
            .collect();

        if candidates.is_empty() {
            // found a dead end, drop the path
            trace!(path = %current_path, "dead end");
            continue;
        }

        // grow the current path with one child and fork clones for the others
        for &child in &candidates[1..] {
            trace!(path = %current_path, child, "fork");
            exploratory_paths.push_back(current_path.fork(child));
        }
        current_path.push(candidates[0]);
        exploratory_paths.push_front(current_path);
    }

    debug!(paths = matching_paths.len(), "path enumeration finished");

    Ok(matching_paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn empty_start_set_fails_fast() {
        let mut graph = Graph::new();
        graph.add_node();
        let result = find_all_paths(&graph, &[], &[0]);
        assert_eq!(result, Err(PathError::EmptyStartSet));
    }

    #[test]
    fn empty_end_set_fails_fast() {
        let mut graph = Graph::new();
        graph.add_node();
        let result = find_all_paths(&graph, &[0], &[]);
        assert_eq!(result, Err(PathError::EmptyEndSet));
    }

    #[test]
    fn node_in_both_sets_yields_single_node_path() {
        let mut graph = Graph::new();
        graph.add_nodes(2);
        graph.add_edge(0, 1);

        let paths = find_all_paths(&graph, &[0], &[0]).unwrap();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].nodes(), &[0]);
        assert_eq!(paths[0].start(), 0);
        assert_eq!(paths[0].end(), 0);
        assert_eq!(paths[0].len(), 1);
    }

    #[test]
    fn fork_leaves_the_original_untouched() {
        let mut path = Path::new(4);
        path.push(7);

        let forked = path.fork(9);

        assert_eq!(path.nodes(), &[4, 7]);
        assert_eq!(forked.nodes(), &[4, 7, 9]);
        assert!(forked.contains(9));
        assert!(!path.contains(9));
    }

    #[test]
    fn display_joins_nodes_with_commas() {
        let mut path = Path::new(1);
        path.push(2);
        path.push(3);

        assert_eq!(path.to_string(), "1,2,3");
        assert_eq!(Path::new(5).to_string(), "5");
    }

    #[test]
    fn path_converts_into_its_node_list() {
        let mut path = Path::new(0);
        path.push(2);

        let nodes: Vec<NodeId> = path.into();
        assert_eq!(nodes, vec![0, 2]);
    }

    #[test]
    fn iter_walks_nodes_in_order() {
        let mut path = Path::new(3);
        path.push(1);
        path.push(2);

        assert_eq!(path.iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
