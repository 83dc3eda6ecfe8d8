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

/// Recursive depth-first visit.
///
/// This implementation uses the call stack to keep track of the visit
/// path, so the depth of the graph it can visit is limited by the stack
/// size of the current thread. For deep graphs, use
/// [`SeqIter`](super::SeqIter), which returns nodes in exactly the same
/// order.
///
/// The set of discovered nodes is shared by all recursive calls.
///
/// The progress logger will be [updated](ProgressLog::light_update) after
/// each postvisit.
pub struct SeqRec<'a, G: RandomAccessGraph> {
    graph: &'a G,
    discovered: BitVec,
}

impl<'a, G: RandomAccessGraph> SeqRec<'a, G> {
    /// Creates a new recursive visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            discovered: BitVec::new(num_nodes),
        }
    }
}

fn visit_node<G: RandomAccessGraph, B, C: FnMut(usize) -> ControlFlow<B, ()>>(
    graph: &G,
    discovered: &mut BitVec,
    curr: usize,
    callback: &mut C,
    pl: &mut impl ProgressLog,
) -> ControlFlow<B, ()> {
    discovered.set(curr, true);

    for &succ in graph.successors(curr) {
        if !discovered.get(succ) {
            visit_node(graph, discovered, succ, callback, pl)?;
        }
    }

    callback(curr)?;
    pl.light_update();
    Continue(())
}

impl<'a, G: RandomAccessGraph> Sequential for SeqRec<'a, G> {
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()> {
        for root in roots {
            if !self.discovered.get(root) {
                visit_node(self.graph, &mut self.discovered, root, &mut callback, pl)?;
            }
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
        self.discovered.fill(false);
    }
}
