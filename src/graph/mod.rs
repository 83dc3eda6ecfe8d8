/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graphs that can be visited.
//!
//! Nodes are identified by their index in `0..num_nodes`; two nodes carrying
//! equal values are still distinct nodes.

mod vec_graph;
pub use vec_graph::*;

use thiserror::Error;

/// A graph providing random access to the successors of its nodes.
///
/// Successors are returned in the order in which they were added, including
/// duplicates and self-loops. Visits rely on this order being stable for the
/// whole duration of a visit.
pub trait RandomAccessGraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of `node`, in insertion order.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`num_nodes`](Self::num_nodes).
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of `node`.
    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }
}

/// Errors raised when referring to nodes that do not exist.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {node} does not exist (the graph has {num_nodes} nodes)")]
    NodeOutOfBounds { node: usize, num_nodes: usize },
}

/// Returns an error if `node` is not a node of `graph`.
pub(crate) fn check_node(graph: &impl RandomAccessGraph, node: usize) -> Result<(), GraphError> {
    let num_nodes = graph.num_nodes();
    if node < num_nodes {
        Ok(())
    } else {
        Err(GraphError::NodeOutOfBounds { node, num_nodes })
    }
}
