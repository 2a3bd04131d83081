//! All-simple-paths enumeration over directed graphs.
//!
//! Given a directed graph and two node sets — "start" and "end" — this crate
//! produces every *simple* path (no repeated node) that begins at a start node
//! and ends at an end node. Intermediate nodes may belong to neither set, and a
//! path that reaches an end node keeps being explored, since that node may lead
//! to further end nodes.
//!
//! The graph is anything implementing [`GraphView`]: the concrete arena
//! [`Graph`] for graphs modeled directly in this crate, or a [`NodePool`]
//! adapting an external node type via [`AdaptableNode`].
//!
//! Cyclic graphs are handled per path only: no single path revisits a node,
//! but the enumeration as a whole neither detects cycles globally nor caps its
//! own growth, so adversarial cyclic inputs can take unbounded time and memory.
//!
//! ```
//! use graph_paths::{find_all_paths, Graph};
//!
//! // diamond: 0 → 1 → 3 and 0 → 2 → 3
//! let mut graph = Graph::new();
//! graph.add_nodes(4);
//! graph.add_edge(0, 1);
//! graph.add_edge(0, 2);
//! graph.add_edge(1, 3);
//! graph.add_edge(2, 3);
//!
//! let paths = find_all_paths(&graph, &[0], &[3])?;
//!
//! assert_eq!(paths.len(), 2);
//! assert_eq!(paths[0].nodes(), &[0, 1, 3]);
//! assert_eq!(paths[1].nodes(), &[0, 2, 3]);
//! # Ok::<(), graph_paths::PathError>(())
//! ```

mod graph;
mod path;

pub use graph::{AdaptableNode, Graph, GraphView, NodeId, NodePool};
pub use path::{find_all_paths, Path, PathError};
