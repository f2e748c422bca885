//! Shared graph model for tie strength algorithms
//!
//! Provides the symmetric, read-only adjacency model every algorithm in this
//! crate runs against.

use rustc_hash::FxHashSet;
use thiserror::Error;

/// Node Identifier type (1-based ordinal)
pub type NodeId = u64;

/// Set of neighbor identifiers for a single node
pub type NeighborSet = FxHashSet<NodeId>;

/// Errors raised while building an adjacency model
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdjacencyError {
    /// Identifier outside 1..=node_count
    #[error("Node {node} is outside the known node range 1..={node_count}")]
    UnknownNode { node: NodeId, node_count: usize },
}

pub type AdjacencyResult<T> = Result<T, AdjacencyError>;

/// Undirected adjacency over the dense id space 1..=N.
///
/// Every insertion is mirrored, so `b ∈ neighbors(a)` holds exactly when
/// `a ∈ neighbors(b)`. Repeated records for the same source are unioned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyModel {
    /// `neighbors[id - 1]` holds the neighbor set of `id`
    neighbors: Vec<NeighborSet>,
}

impl AdjacencyModel {
    /// Create a model over `node_count` isolated nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            neighbors: vec![NeighborSet::default(); node_count],
        }
    }

    /// Build a model from `(source, destinations)` records
    pub fn from_records<I>(node_count: usize, records: I) -> AdjacencyResult<Self>
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let mut model = Self::new(node_count);
        for (source, destinations) in records {
            model.insert_record(source, &destinations)?;
        }
        Ok(model)
    }

    /// Union `destinations` into the neighbors of `source`, and `source` into
    /// the neighbors of each destination.
    ///
    /// The record is validated before any mutation, so a failed insert leaves
    /// the model untouched.
    pub fn insert_record(&mut self, source: NodeId, destinations: &[NodeId]) -> AdjacencyResult<()> {
        let source_idx = self.index_of(source)?;
        let destination_idx = destinations
            .iter()
            .map(|&dest| self.index_of(dest))
            .collect::<AdjacencyResult<Vec<_>>>()?;

        for (&dest, dest_idx) in destinations.iter().zip(destination_idx) {
            self.neighbors[source_idx].insert(dest);
            self.neighbors[dest_idx].insert(source);
        }

        Ok(())
    }

    /// Number of nodes in the id space
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Iterate node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        1..=self.neighbors.len() as NodeId
    }

    /// Whether `id` lies inside 1..=N
    pub fn contains(&self, id: NodeId) -> bool {
        id >= 1 && id as usize <= self.neighbors.len()
    }

    /// Neighbor set of `id`; `None` only when `id` is out of range
    pub fn neighbors(&self, id: NodeId) -> Option<&NeighborSet> {
        if self.contains(id) {
            Some(&self.neighbors[id as usize - 1])
        } else {
            None
        }
    }

    /// Degree (neighbor set size) of `id`, 0 when out of range
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).map_or(0, |set| set.len())
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        let mut self_loops = 0;
        let mut total = 0;
        for (idx, set) in self.neighbors.iter().enumerate() {
            total += set.len();
            if set.contains(&(idx as NodeId + 1)) {
                self_loops += 1;
            }
        }
        // Self loops appear once, every other edge twice.
        (total - self_loops) / 2 + self_loops
    }

    fn index_of(&self, id: NodeId) -> AdjacencyResult<usize> {
        if self.contains(id) {
            Ok(id as usize - 1)
        } else {
            Err(AdjacencyError::UnknownNode {
                node: id,
                node_count: self.neighbors.len(),
            })
        }
    }
}
