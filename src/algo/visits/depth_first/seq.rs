/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::Sequential;
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow::{self, Continue};
use sux::bits::BitVec;

/// Sequential depth-first visit.
///
/// This is an iterative implementation that does not need a large stack
/// size: the visit path is kept on an explicit stack, so the depth of the
/// graph is limited only by the available memory.
///
/// The callback is invoked on each node when the enumeration of its
/// successors has been completed, that is, nodes are returned in post-order.
/// The order is the same as that of [`SeqRec`](super::SeqRec).
///
/// The visit uses one bit per node to remember discovered nodes and a stack
/// of pairs made of a node and a cursor on its successors, one for each node
/// on the visit path.
///
/// The progress logger will be [updated](ProgressLog::light_update) after
/// each postvisit.
///
/// # Examples
///
/// ```
/// use dfs_visits::prelude::*;
/// use dsi_progress_logger::no_logging;
/// use no_break::NoBreak;
/// use std::ops::ControlFlow::Continue;
///
/// let graph = VecGraph::from_arcs(0..4, [(0, 1), (1, 2), (2, 0), (1, 3)])?;
/// let mut visit = depth_first::SeqIter::new(&graph);
/// let mut order = vec![];
///
/// visit
///     .visit([0], |node| {
///         order.push(node);
///         Continue(())
///     }, no_logging![])
///     .continue_value_no_break();
///
/// assert_eq!(order, [2, 3, 1, 0]);
/// # Ok::<(), GraphError>(())
/// ```
pub struct SeqIter<'a, G: RandomAccessGraph> {
    graph: &'a G,
    /// Entries on this stack represent a node on the visit path and the
    /// index of its next successor to enumerate. The index is advanced in
    /// place, so enumeration resumes where it stopped when the visit
    /// retreats to the node.
    stack: Vec<(usize, usize)>,
    discovered: BitVec,
}

impl<'a, G: RandomAccessGraph> SeqIter<'a, G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            stack: Vec::with_capacity(16),
            discovered: BitVec::new(num_nodes),
        }
    }

    /// Returns an iterator over the nodes still on the visit path, from the
    /// root to the last discovered node.
    ///
    /// This method is useful only in the case of interrupted visits, as in a
    /// completed visit the stack will be empty.
    pub fn stack(&self) -> impl Iterator<Item = usize> + '_ {
        self.stack.iter().map(|&(node, _)| node)
    }

    fn visit_root<B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        root: usize,
        callback: &mut C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        if self.discovered.get(root) {
            // Already visited from a previous root
            return Continue(());
        }

        self.discovered.set(root, true);
        self.stack.push((root, 0));

        while let Some((curr, cursor)) = self.stack.last_mut() {
            let curr = *curr;
            if let Some(&succ) = self.graph.successors(curr).get(*cursor) {
                *cursor += 1;
                if !self.discovered.get(succ) {
                    // First time seeing node
                    self.discovered.set(succ, true);
                    self.stack.push((succ, 0));
                }
            } else {
                // All successors enumerated
                callback(curr)?;
                pl.light_update();
                self.stack.pop();
            }
        }

        Continue(())
    }
}

impl<'a, G: RandomAccessGraph> Sequential for SeqIter<'a, G> {
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        for root in roots {
            self.visit_root(root, &mut callback, pl)?;
        }
        Continue(())
    }

    fn visit_all<B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        let num_nodes = self.graph.num_nodes();
        self.visit(0..num_nodes, callback, pl)
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.discovered.fill(false);
    }
}
