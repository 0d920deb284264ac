//! Unweighted shortest path (breadth-first search)

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::algos::shared::reconstruct_path;
use crate::graph::Digraph;

/// Find a fewest-edges path from `source` to `dest`.
///
/// Returns `None` when either endpoint is not a graph vertex or when no
/// path exists; both are normal outcomes, not errors. The path from a
/// member vertex to itself is that single vertex.
///
/// Among several shortest paths the one returned depends on adjacency
/// iteration order; only its length is deterministic. Vertices are marked
/// visited when enqueued, so each is expanded at most once and the search
/// is O(V + E).
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_path<V>(graph: &Digraph<V>, source: &V, dest: &V) -> Option<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    if !graph.contains(source) || !graph.contains(dest) {
        return None;
    }
    if source == dest {
        return Some(vec![source.clone()]);
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(source.clone());
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        if current == *dest {
            return Some(reconstruct_path(source, dest, &parent));
        }

        let Some(neighbors) = graph.outgoing(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor.clone());
            parent.insert(neighbor.clone(), current.clone());
            queue.push_back(neighbor.clone());
        }
    }

    None
}

#[cfg(test)]
mod tests;
