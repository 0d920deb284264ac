//! Directed graph model and path-finding operations
//!
//! Provides the road-network graph abstraction and its algorithms:
//! - adjacency-set digraph over opaque vertex values
//! - unweighted BFS shortest path
//! - Dijkstra least-cost path driven by a caller-supplied edge cost
//! - walk compression (cycle removal)
//! - random graph generation for tests

pub mod algos;
pub mod digraph;
pub mod random;

pub use algos::{compress, least_cost_path, shortest_path};
pub use digraph::Digraph;
pub use random::random_graph;
