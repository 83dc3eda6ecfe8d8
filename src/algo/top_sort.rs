use crate::algo::visits::{depth_first::SeqIter, Sequential};
use crate::graph::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes of the graph in reverse depth-first post-order.
///
/// The post-order is that of a visit of the whole graph using nodes as roots
/// in index order. If the graph is acyclic, the result is a topological
/// sort; otherwise, it is a sort in which every arc not closing a cycle goes
/// forward.
pub fn top_sort(graph: impl RandomAccessGraph, pl: &mut impl ProgressLog) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing topological sort...");

    let mut visit = SeqIter::new(&graph);
    let mut top_sort = vec![0; num_nodes].into_boxed_slice();
    let mut pos = num_nodes;

    visit
        .visit_all(
            |node| {
                pos -= 1;
                top_sort[pos] = node;
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();
    top_sort
}
