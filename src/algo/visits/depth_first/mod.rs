//! Depth-first visits.
//!
//! Implementations call the callback on each node reachable from the roots
//! exactly once, when the enumeration of the successors of the node has been
//! completed, that is, in post-order. Successors are enumerated in the order
//! returned by
//! [`RandomAccessGraph::successors`](crate::graph::RandomAccessGraph::successors).
//!
//! During a visit each node is white (unknown), then grey (discovered, on
//! the visit path) and finally black (its successors have been enumerated and
//! the callback has been invoked on it). A node changes color at most twice.
//!
//! [`SeqIter`] uses an explicit stack, [`SeqRec`] uses recursion; they
//! generate exactly the same sequence of calls. The functions
//! [`traverse_iterative`] and [`traverse_recursive`] run a fresh visit of a
//! [`VecGraph`] from a single source, passing nodes to the visitor.

mod rec;
mod seq;
pub use rec::*;
pub use seq::*;

use crate::algo::visits::Sequential;
use crate::graph::{check_node, GraphError, Node, VecGraph};
use dsi_progress_logger::no_logging;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Visits in post-order all nodes reachable from `source` using an explicit
/// stack.
///
/// A fresh visit is created for each call, so the graph is never modified
/// and consecutive calls are independent.
///
/// # Errors
///
/// Returns [`GraphError::NodeOutOfBounds`] if `source` is not a node of
/// `graph`; in that case, the visitor is never called.
///
/// # Examples
///
/// ```
/// use dfs_visits::prelude::*;
///
/// let graph = VecGraph::from_arcs(["a", "b", "c"], [(0, 1), (0, 2), (2, 0)])?;
/// let mut values = vec![];
/// depth_first::traverse_iterative(&graph, 0, |node| values.push(node.value))?;
///
/// assert_eq!(values, ["b", "c", "a"]);
/// # Ok::<(), GraphError>(())
/// ```
pub fn traverse_iterative<T>(
    graph: &VecGraph<T>,
    source: usize,
    visitor: impl FnMut(&Node<T>),
) -> Result<(), GraphError> {
    check_node(graph, source)?;
    traverse(SeqIter::new(graph), graph, source, visitor);
    Ok(())
}

/// Visits in post-order all nodes reachable from `source` using recursion.
///
/// The sequence of nodes passed to `visitor` is identical to that of
/// [`traverse_iterative`], but the depth of the graph is limited by the
/// stack size.
///
/// # Errors
///
/// Returns [`GraphError::NodeOutOfBounds`] if `source` is not a node of
/// `graph`; in that case, the visitor is never called.
pub fn traverse_recursive<T>(
    graph: &VecGraph<T>,
    source: usize,
    visitor: impl FnMut(&Node<T>),
) -> Result<(), GraphError> {
    check_node(graph, source)?;
    traverse(SeqRec::new(graph), graph, source, visitor);
    Ok(())
}

fn traverse<T>(
    mut visit: impl Sequential,
    graph: &VecGraph<T>,
    source: usize,
    mut visitor: impl FnMut(&Node<T>),
) {
    let nodes = graph.nodes();
    visit
        .visit(
            [source],
            |node| {
                visitor(&nodes[node]);
                Continue(())
            },
            no_logging![],
        )
        .continue_value_no_break();
}
