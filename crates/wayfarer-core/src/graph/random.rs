//! Random graph generation for tests and fixtures

use rand::Rng;

use crate::error::{Result, WayfarerError};
use crate::graph::Digraph;

/// Build a random digraph with `n` vertices labeled `0..n` and exactly `m`
/// distinct directed edges between distinct vertices.
///
/// Fails before any mutation when `m` exceeds the `n * (n - 1)` directed
/// edge capacity. Edge selection is rejection sampling: a duplicate draw is
/// a no-op and the loop re-enters, so expect slow convergence when `m`
/// approaches capacity on large graphs.
pub fn random_graph(n: usize, m: usize) -> Result<Digraph<u32>> {
    let max_edges = n.saturating_mul(n.saturating_sub(1));
    if m > max_edges {
        return Err(WayfarerError::InvalidEdgeCount {
            vertices: n,
            requested: m,
            max: max_edges,
        });
    }

    let mut graph = Digraph::new();
    for v in 0..n as u32 {
        graph.add_vertex(v);
    }

    // m > 0 implies n >= 2 here, so the ranges below are never empty
    let mut rng = rand::thread_rng();
    while graph.edge_count() < m {
        let v = rng.gen_range(0..n as u32);
        let w = rng.gen_range(0..n as u32);
        if v == w {
            continue;
        }
        graph.add_edge(v, w);
    }

    Ok(graph)
}
