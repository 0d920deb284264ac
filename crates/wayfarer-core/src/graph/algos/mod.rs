//! Path-finding algorithms over [`Digraph`](crate::graph::Digraph)
//!
//! All searches keep their state (frontier, visited set, parent map) local,
//! so independent traversals over one already-built graph are safe to run
//! side by side. "No path" is a normal `None`/empty result, never an error.

pub mod bfs;
pub mod compress;
pub mod dijkstra;
mod shared;

pub use bfs::shortest_path;
pub use compress::compress;
pub use dijkstra::least_cost_path;
