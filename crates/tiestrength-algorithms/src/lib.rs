pub mod common;
pub mod similarity;
pub mod topk;

pub use common::{AdjacencyError, AdjacencyModel, AdjacencyResult, NeighborSet, NodeId};
pub use similarity::{jaccard, tie_strengths};
pub use topk::{top_k, TopK};
