//! Bounded top-k selection
//!
//! Keeps the k strongest candidates in a size-k heap instead of sorting all of
//! them, so selecting from N candidates costs O(N log k).
//!
//! Ranking: higher strength first; equal strengths rank the lower node id
//! first. The order is total, so the same input always yields the same output.

use super::common::NodeId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Candidate entry ordered by rank (greater = stronger)
#[derive(Copy, Clone, Debug)]
struct Ranked {
    strength: f64,
    node: NodeId,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lower id wins ties, hence the reversed id comparison
        self.strength
            .total_cmp(&other.strength)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fixed-capacity selector retaining the `k` highest ranked candidates
#[derive(Debug)]
pub struct TopK {
    k: usize,
    /// Min-heap on rank: the root is the weakest retained entry
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl TopK {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            heap: BinaryHeap::with_capacity(k),
        }
    }

    /// Offer a candidate, evicting the weakest retained one if it ranks lower
    pub fn push(&mut self, node: NodeId, strength: f64) {
        if self.k == 0 {
            return;
        }

        let candidate = Ranked { strength, node };
        if self.heap.len() < self.k {
            self.heap.push(Reverse(candidate));
            return;
        }

        if let Some(mut weakest) = self.heap.peek_mut() {
            if candidate > weakest.0 {
                *weakest = Reverse(candidate);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Retained entries, strongest first
    pub fn into_sorted_vec(self) -> Vec<(NodeId, f64)> {
        // Ascending order of Reverse<Ranked> is descending rank
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(r)| (r.node, r.strength))
            .collect()
    }
}

/// Select the `k` strongest `(node, strength)` candidates, strongest first
pub fn top_k<I>(candidates: I, k: usize) -> Vec<(NodeId, f64)>
where
    I: IntoIterator<Item = (NodeId, f64)>,
{
    let mut selector = TopK::new(k);
    for (node, strength) in candidates {
        selector.push(node, strength);
    }
    selector.into_sorted_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn test_top_k_descending() {
        let candidates = vec![(1, 0.1), (2, 0.9), (3, 0.5), (4, 0.7), (5, 0.0)];
        let top = top_k(candidates, 3);
        assert_eq!(top, vec![(2, 0.9), (4, 0.7), (3, 0.5)]);
    }

    #[test]
    fn test_ties_prefer_lower_id() {
        // Order of arrival must not matter
        let forward = top_k(vec![(2, 1.0 / 3.0), (3, 1.0 / 3.0)], 1);
        let backward = top_k(vec![(3, 1.0 / 3.0), (2, 1.0 / 3.0)], 1);
        assert_eq!(forward, vec![(2, 1.0 / 3.0)]);
        assert_eq!(forward, backward);

        let all_equal = top_k(vec![(9, 0.5), (4, 0.5), (7, 0.5), (1, 0.5)], 3);
        assert_eq!(all_equal, vec![(1, 0.5), (4, 0.5), (7, 0.5)]);
    }

    #[test]
    fn test_fewer_candidates_than_k() {
        let top = top_k(vec![(1, 0.2), (2, 0.4)], 5);
        assert_eq!(top, vec![(2, 0.4), (1, 0.2)]);
    }

    #[test]
    fn test_k_zero() {
        let mut selector = TopK::new(0);
        selector.push(1, 1.0);
        assert!(selector.is_empty());
        assert!(top_k(vec![(1, 1.0)], 0).is_empty());
    }

    #[test]
    fn test_matches_full_sort() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let n = rng.gen_range(0..40);
            // Coarse values so ties are common
            let candidates: Vec<(NodeId, f64)> = (1..=n)
                .map(|id| (id as NodeId, rng.gen_range(0..5) as f64 / 4.0))
                .collect();
            let k = rng.gen_range(0..8);

            let mut sorted = candidates.clone();
            sorted.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
            sorted.truncate(k);

            let top = top_k(candidates.clone(), k);
            assert_eq!(top.len(), k.min(candidates.len()));
            assert_eq!(top, sorted);

            if let Some(&(_, weakest)) = top.last() {
                for &(id, s) in &candidates {
                    if !top.iter().any(|&(t, _)| t == id) {
                        assert!(s <= weakest);
                    }
                }
            }
        }
    }
}
