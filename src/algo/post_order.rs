use crate::algo::visits::{depth_first::SeqIter, Sequential};
use crate::graph::{check_node, GraphError, RandomAccessGraph};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Returns the nodes reachable from `root` in depth-first post-order.
///
/// # Arguments
/// * `graph`: the graph.
/// * `root`: the node to start the visit from.
/// * `pl`: a progress logger.
pub fn post_order(
    graph: impl RandomAccessGraph,
    root: usize,
    pl: &mut impl ProgressLog,
) -> Result<Box<[usize]>, GraphError> {
    check_node(&graph, root)?;

    pl.item_name("node");
    pl.start("Computing post-order...");

    let mut visit = SeqIter::new(&graph);
    let mut order = Vec::new();

    visit
        .visit(
            [root],
            |node| {
                order.push(node);
                Continue(())
            },
            pl,
        )
        .continue_value_no_break();

    pl.done();
    Ok(order.into_boxed_slice())
}
