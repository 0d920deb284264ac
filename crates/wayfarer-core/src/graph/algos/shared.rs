//! Path reconstruction shared by the searches

use std::collections::HashMap;
use std::hash::Hash;

/// Rebuild the source-to-dest vertex sequence from a predecessor map.
///
/// Walks parent pointers backward from `dest` and reverses. Callers only
/// invoke this after `dest` has been reached, so the chain is complete; a
/// missing parent ends the walk early rather than panicking.
pub(super) fn reconstruct_path<V>(source: &V, dest: &V, parent: &HashMap<V, V>) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = vec![dest.clone()];
    let mut current = dest;

    while current != source {
        if let Some(pred) = parent.get(current) {
            path.push(pred.clone());
            current = pred;
        } else {
            break;
        }
    }

    path.reverse();
    path
}
