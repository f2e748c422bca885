//! Collaboration graph inputs
//!
//! This module turns the raw node and adjacency listings into:
//! - a `NodeRegistry` mapping 1-based ids to author labels
//! - a symmetric `AdjacencyModel` over the same id space

pub mod loader;
pub mod node;

pub use loader::{
    load_adjacency, load_adjacency_file, load_nodes, load_nodes_file, InputKind, LoadError,
    LoadResult,
};
pub use node::{Node, NodeRegistry};
pub use tiestrength_algorithms::{AdjacencyError, AdjacencyModel, NodeId};
