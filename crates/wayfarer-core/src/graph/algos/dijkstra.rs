//! Weighted least-cost path (Dijkstra's algorithm)

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::algos::shared::reconstruct_path;
use crate::graph::Digraph;

/// Frontier entry ordered by accumulated cost, wrapped in [`Reverse`] to
/// turn the max-heap into a min-heap.
#[derive(Debug, Clone)]
struct HeapEntry<V> {
    vertex: V,
    cost: f64,
}

impl<V: PartialEq> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex && self.cost == other.cost
    }
}

impl<V: PartialEq> Eq for HeapEntry<V> {}

impl<V: PartialEq> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: PartialEq> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // costs are finite and non-negative per the edge_cost contract
        self.cost.partial_cmp(&other.cost).unwrap()
    }
}

/// Find a minimum-total-cost path from `source` to `dest`, where `edge_cost`
/// maps each directed edge to a non-negative cost.
///
/// Returns `None` when `dest` is unreachable. The path from a member vertex
/// to itself is that single vertex; membership is checked up front only in
/// that equal-endpoint case. A source absent from the graph that differs
/// from `dest` simply never reaches it and falls out as no-path through the
/// normal search.
///
/// Ties between equal tentative costs break arbitrarily; the returned
/// path's total cost is minimal either way.
#[tracing::instrument(skip(graph, edge_cost), fields(vertices = graph.vertex_count()))]
pub fn least_cost_path<V, F>(
    graph: &Digraph<V>,
    source: &V,
    dest: &V,
    edge_cost: F,
) -> Option<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
    F: Fn(&V, &V) -> f64,
{
    if source == dest {
        return graph.contains(source).then(|| vec![source.clone()]);
    }

    // tentative[v] is the best known cost from source to v
    let mut tentative: HashMap<V, f64> = HashMap::new();
    // v in visited once its least cost is final
    let mut visited: HashSet<V> = HashSet::new();
    // parent[v] is the vertex preceding v on the best known path
    let mut parent: HashMap<V, V> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();

    tentative.insert(source.clone(), 0.0);
    heap.push(Reverse(HeapEntry {
        vertex: source.clone(),
        cost: 0.0,
    }));

    while let Some(Reverse(HeapEntry {
        vertex: current,
        cost,
    })) = heap.pop()
    {
        // stale entry: the vertex already settled at a lower cost
        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        if current == *dest {
            break;
        }

        let Some(neighbors) = graph.outgoing(&current) else {
            continue;
        };
        for neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let candidate = cost + edge_cost(&current, neighbor);
            let improves = tentative
                .get(neighbor)
                .is_none_or(|&best| candidate < best);
            if improves {
                tentative.insert(neighbor.clone(), candidate);
                parent.insert(neighbor.clone(), current.clone());
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.clone(),
                    cost: candidate,
                }));
            }
        }
    }

    if !visited.contains(dest) {
        return None;
    }

    Some(reconstruct_path(source, dest, &parent))
}
