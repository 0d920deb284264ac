//! Walk compression: collapse a walk into a simple path

use std::collections::HashMap;
use std::hash::Hash;

/// Remove cycles from a walk by keeping, for each vertex, only the hop
/// that departs from its last occurrence.
///
/// Records the last index of every vertex, then appends the vertex at the
/// current index and jumps directly past its last occurrence until the end
/// of the walk. The output visits each vertex at most once, is a
/// subsequence of the input, and stays connected whenever the input was a
/// valid walk in some graph. Applying it twice changes nothing.
pub fn compress<V>(walk: &[V]) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut last_index: HashMap<&V, usize> = HashMap::new();
    for (i, v) in walk.iter().enumerate() {
        last_index.insert(v, i);
    }

    let mut compressed = Vec::new();
    let mut i = 0;
    while i < walk.len() {
        let v = &walk[i];
        compressed.push(v.clone());
        i = last_index[v] + 1;
    }

    compressed
}
