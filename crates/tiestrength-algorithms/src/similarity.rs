//! Jaccard tie strength between neighbor sets
//!
//! Tie strength of a pair is |N(a) ∩ N(b)| / |N(a) ∪ N(b)|. Evaluating one
//! focal node against every other node costs O(N * avg_degree), so the full
//! all-pairs pass is O(N²) and meant for offline batch runs only.

use super::common::{AdjacencyModel, NeighborSet, NodeId};

/// Jaccard index of two neighbor sets.
///
/// Two empty sets have an empty union; their strength is defined as 0.0
/// rather than NaN.
pub fn jaccard(a: &NeighborSet, b: &NeighborSet) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    let common = small.iter().filter(|&id| large.contains(id)).count();
    let distinct = a.len() + b.len() - common;

    if distinct == 0 {
        return 0.0;
    }

    common as f64 / distinct as f64
}

/// Tie strength from `focal` to every other node, ascending by node id.
///
/// Nodes that never appeared in an edge record have an empty neighbor set and
/// score 0.0 against everything. Returns an empty vector when `focal` is
/// outside the model's id range.
pub fn tie_strengths(model: &AdjacencyModel, focal: NodeId) -> Vec<(NodeId, f64)> {
    let focal_neighbors = match model.neighbors(focal) {
        Some(set) => set,
        None => return Vec::new(),
    };

    let mut strengths = Vec::with_capacity(model.node_count().saturating_sub(1));
    for other in model.node_ids() {
        if other == focal {
            continue;
        }
        // node_ids() only yields in-range ids
        let other_neighbors = match model.neighbors(other) {
            Some(set) => set,
            None => continue,
        };
        strengths.push((other, jaccard(focal_neighbors, other_neighbors)));
    }

    strengths
}
