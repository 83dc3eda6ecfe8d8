use anyhow::{bail, Result};
use dfs_visits::prelude::*;
use dsi_progress_logger::prelude::*;

/// Builds the sample graph with nodes 1 to 6.
fn sample_graph() -> Result<VecGraph<u32>> {
    Ok(VecGraph::from_arcs(
        1..=6,
        [(0, 1), (0, 2), (1, 3), (3, 2), (3, 4), (4, 1), (4, 5)],
    )?)
}

/// Prints the values of the visited nodes on a single line.
fn print_visit(graph: &VecGraph<u32>, recursive: bool) -> Result<()> {
    let visitor = |node: &Node<u32>| print!("{} ; ", node.value);
    if recursive {
        depth_first::traverse_recursive(graph, 0, visitor)?;
    } else {
        depth_first::traverse_iterative(graph, 0, visitor)?;
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let graph = sample_graph()?;
    let mut main_pl = progress_logger![];
    main_pl.info(format_args!(
        "Graph with {} nodes and {} arcs",
        graph.num_nodes(),
        graph.num_arcs()
    ));
    main_pl.start("Visiting...");

    match std::env::args().nth(1).as_deref().unwrap_or("both") {
        "iterative" => print_visit(&graph, false)?,
        "recursive" => print_visit(&graph, true)?,
        "both" => {
            print_visit(&graph, false)?;
            print_visit(&graph, true)?;
        }
        other => bail!("Unknown visit {other:?}: expected iterative, recursive or both"),
    }

    main_pl.done();
    Ok(())
}
