// pool.rs
// ──────────────────────────────────────────────────────────────────────────────
// Bridges an external graph node type into the handle-based shape the path
// finder consumes. Each distinct external node (by its own key) is interned
// exactly once and assigned a dense `NodeId`; adjacency is pulled from the
// external graph on first access and cached. The pool state sits behind a
// mutex so one pool can be shared across threads.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use super::{GraphView, NodeId};
use crate::path::{find_all_paths, PathError};

/// An external graph node that a [`NodePool`] can intern.
///
/// `key` must be stable and unique per distinct node, and the external graph
/// is assumed immutable for the pool's lifetime. Navigation methods must not
/// call back into the pool that is adapting them; the pool holds its lock
/// while it asks for adjacency.
pub trait AdaptableNode: Clone {
    /// Stable identity of the node inside its own graph.
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;

    /// Child nodes, in the order the external graph exposes them.
    fn child_nodes(&self) -> Vec<Self>;

    /// Parent nodes, in the order the external graph exposes them.
    fn parent_nodes(&self) -> Vec<Self>;
}

struct PoolRow<N> {
    node: N,
    children: Option<Vec<NodeId>>,
    parents: Option<Vec<NodeId>>,
}

struct PoolState<N: AdaptableNode> {
    ids: HashMap<N::Key, NodeId>,
    rows: Vec<PoolRow<N>>,
}

impl<N: AdaptableNode> PoolState<N> {
    fn intern(&mut self, node: &N) -> NodeId {
        let key = node.key();
        if let Some(&id) = self.ids.get(&key) {
            return id;
        }
        let id = self.rows.len();
        self.ids.insert(key, id);
        self.rows.push(PoolRow {
            node: node.clone(),
            children: None,
            parents: None,
        });
        id
    }
}

/// Interns external graph nodes into dense [`NodeId`] handles.
///
/// The same external node always maps to the same handle, so handle equality
/// stands in for node identity during traversal. Implements [`GraphView`],
/// which lets [`find_all_paths`] run directly against an adapted graph.
pub struct NodePool<N: AdaptableNode> {
    state: Mutex<PoolState<N>>,
}

impl<N: AdaptableNode> NodePool<N> {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(PoolState {
                ids: HashMap::new(),
                rows: Vec::new(),
            }),
        }
    }

    fn locked(&self) -> MutexGuard<'_, PoolState<N>> {
        self.state.lock().expect("node pool mutex poisoned")
    }

    /// Returns the handle for `node`, allocating one on first sight.
    pub fn intern(&self, node: &N) -> NodeId {
        self.locked().intern(node)
    }

    /// The external node behind `handle`.
    ///
    /// Panics if `handle` was not produced by this pool.
    pub fn adapted(&self, handle: NodeId) -> N {
        self.locked().rows[handle].node.clone()
    }

    /// Number of external nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.locked().rows.len()
    }

    fn cached_children(&self, handle: NodeId) -> Vec<NodeId> {
        let mut state = self.locked();
        if let Some(ids) = &state.rows[handle].children {
            return ids.clone();
        }
        let node = state.rows[handle].node.clone();
        let ids: Vec<NodeId> = node
            .child_nodes()
            .iter()
            .map(|child| state.intern(child))
            .collect();
        state.rows[handle].children = Some(ids.clone());
        ids
    }

    fn cached_parents(&self, handle: NodeId) -> Vec<NodeId> {
        let mut state = self.locked();
        if let Some(ids) = &state.rows[handle].parents {
            return ids.clone();
        }
        let node = state.rows[handle].node.clone();
        let ids: Vec<NodeId> = node
            .parent_nodes()
            .iter()
            .map(|parent| state.intern(parent))
            .collect();
        state.rows[handle].parents = Some(ids.clone());
        ids
    }

    /// Enumerates all simple paths between two sets of external nodes and maps
    /// every result back onto the external node type.
    ///
    /// # Errors
    /// Returns [`PathError`] when either set is empty.
    pub fn find_all_paths_between(
        &self,
        start_nodes: &[N],
        end_nodes: &[N],
    ) -> Result<Vec<Vec<N>>, PathError> {
        let start_ids: Vec<NodeId> = start_nodes.iter().map(|n| self.intern(n)).collect();
        let end_ids: Vec<NodeId> = end_nodes.iter().map(|n| self.intern(n)).collect();

        let paths = find_all_paths(self, &start_ids, &end_ids)?;

        Ok(paths
            .iter()
            .map(|path| path.nodes().iter().map(|&id| self.adapted(id)).collect())
            .collect())
    }
}

impl<N: AdaptableNode> Default for NodePool<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: AdaptableNode> GraphView for NodePool<N> {
    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.cached_children(node)
    }

    fn parents_of(&self, node: NodeId) -> Vec<NodeId> {
        self.cached_parents(node)
    }
}
