/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_node, GraphError, RandomAccessGraph};

/// A node of a [`VecGraph`]: a value and the ordered list of its successors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node<T> {
    /// The value carried by the node.
    pub value: T,
    successors: Vec<usize>,
}

impl<T> Node<T> {
    /// Returns the successors of the node, in insertion order.
    pub fn successors(&self) -> &[usize] {
        &self.successors
    }
}

/// A mutable graph stored as a vector of nodes.
///
/// Arcs are indices into the vector, so cycles, self-loops and nodes shared
/// by many predecessors need no special treatment. Successor lists keep the
/// order in which arcs were added, and duplicate arcs are kept.
///
/// # Examples
///
/// ```
/// use dfs_visits::prelude::*;
///
/// let mut graph = VecGraph::new();
/// let a = graph.add_node("a");
/// let b = graph.add_node("b");
/// graph.add_arc(a, b)?;
/// graph.add_arc(b, a)?;
///
/// assert_eq!(graph.num_nodes(), 2);
/// assert_eq!(graph.successors(b), &[a]);
/// assert!(graph.add_arc(a, 2).is_err());
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VecGraph<T> {
    nodes: Vec<Node<T>>,
    num_arcs: usize,
}

impl<T> Default for VecGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VecGraph<T> {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            num_arcs: 0,
        }
    }

    /// Creates a graph without arcs with one node per value, numbered in
    /// iteration order.
    pub fn with_values(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            nodes: values
                .into_iter()
                .map(|value| Node {
                    value,
                    successors: Vec::new(),
                })
                .collect(),
            num_arcs: 0,
        }
    }

    /// Creates a graph with one node per value and the given arcs, added in
    /// iteration order.
    ///
    /// # Arguments
    /// * `values`: the values of the nodes.
    ///
    /// * `arcs`: pairs of node indices `(source, target)`.
    pub fn from_arcs(
        values: impl IntoIterator<Item = T>,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::with_values(values);
        for (u, v) in arcs {
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Adds a node with the given value, returning its index.
    pub fn add_node(&mut self, value: T) -> usize {
        self.nodes.push(Node {
            value,
            successors: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Appends `v` to the successors of `u`.
    ///
    /// Both nodes must already exist: arcs can never point outside the graph.
    pub fn add_arc(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        check_node(&*self, u)?;
        check_node(&*self, v)?;
        self.nodes[u].successors.push(v);
        self.num_arcs += 1;
        Ok(())
    }

    /// Returns the number of arcs, counting duplicates.
    pub fn num_arcs(&self) -> usize {
        self.num_arcs
    }

    /// Returns the node with the given index, if it exists.
    pub fn node(&self, node: usize) -> Option<&Node<T>> {
        self.nodes.get(node)
    }

    /// Returns the value of the node with the given index, if it exists.
    pub fn value(&self, node: usize) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.value)
    }

    /// Returns all nodes, in index order.
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
}

impl<T> RandomAccessGraph for VecGraph<T> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.nodes[node].successors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_arcs_keeps_order() -> Result<(), GraphError> {
        let graph = VecGraph::from_arcs(0..3, [(0, 2), (0, 1), (0, 2), (1, 1)])?;
        assert_eq!(graph.num_nodes(), 3);
        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.successors(0), &[2, 1, 2]);
        assert_eq!(graph.successors(1), &[1]);
        assert_eq!(graph.outdegree(2), 0);
        Ok(())
    }

    #[test]
    fn test_out_of_bounds_arc() {
        let mut graph = VecGraph::with_values(["x"]);
        assert_eq!(
            graph.add_arc(0, 1),
            Err(GraphError::NodeOutOfBounds {
                node: 1,
                num_nodes: 1
            })
        );
        assert_eq!(graph.num_arcs(), 0);
        assert!(graph.successors(0).is_empty());
    }

    #[test]
    fn test_equal_values_are_distinct_nodes() -> Result<(), GraphError> {
        let mut graph = VecGraph::new();
        let a = graph.add_node(7);
        let b = graph.add_node(7);
        graph.add_arc(a, b)?;
        assert_ne!(a, b);
        assert_eq!(graph.value(a), graph.value(b));
        assert_eq!(graph.node(a).map(Node::successors), Some(&[b][..]));
        assert!(graph.node(b).is_some_and(|n| n.successors().is_empty()));
        assert!(graph.node(2).is_none());
        Ok(())
    }
}
