// arena module
mod arena;
// pool module
mod pool;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the graph modules.
//─────────────────────────────────────────────────────────────────────────────
pub use arena::{Graph, NodeId};
pub use pool::{AdaptableNode, NodePool};

/// Minimal navigation capability the path finder consumes.
///
/// `children_of` is the only call the enumeration makes; `parents_of` is
/// carried for symmetry because real graphs are adapted bidirectionally.
/// Both return handles in the order the underlying graph exposes them, which
/// fixes the order paths come out of the finder.
pub trait GraphView {
    /// Child handles of `node`, in exposure order.
    fn children_of(&self, node: NodeId) -> Vec<NodeId>;

    /// Parent handles of `node`, in exposure order.
    fn parents_of(&self, node: NodeId) -> Vec<NodeId>;
}
