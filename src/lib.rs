//! Tie strength analysis for collaboration graphs
//!
//! Computes the Jaccard overlap of collaborator sets ("tie strength") for every
//! pair of authors in a co-authorship graph and reports each author's strongest
//! ties.
//!
//! # Pipeline
//!
//! - `graph`: load the node list and the adjacency list into a `NodeRegistry`
//!   and a symmetric `AdjacencyModel`
//! - `algo`: evaluate every node against every other node and keep its top-k ties
//! - `report`: write the tab-separated result table and summarise the
//!   distribution of strengths
//! - `persistence`: store the flattened strengths as a compressed snapshot
//!
//! ## Example Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use tiestrength::algo::{compute_ties, TieStrengthConfig};
//! use tiestrength::graph::{load_adjacency, load_nodes};
//!
//! let registry = load_nodes(Cursor::new("1 A\n2 B\n3 C\n")).unwrap();
//! let model = load_adjacency(Cursor::new("1 2 3\n2 3\n"), &registry).unwrap();
//!
//! let config = TieStrengthConfig { k: 1, ..Default::default() };
//! let report = compute_ties(&registry, &model, &config).unwrap();
//!
//! assert_eq!(report.rows[0].label, "A");
//! assert_eq!(report.rows[0].joined_labels(), "B");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;
pub mod persistence;
pub mod report;

use std::path::Path;
use thiserror::Error;

// Re-export main types for convenience
pub use algo::{
    compute_ties, AlgoError, AlgoResult, PairCounting, TieRow, TieStrengthConfig,
    TieStrengthReport, TopTie, DEFAULT_TOP_K,
};

pub use graph::{AdjacencyModel, LoadError, LoadResult, Node, NodeId, NodeRegistry};

pub use persistence::{SnapshotError, SnapshotResult, StrengthSnapshot};

pub use report::{Histogram, StrengthSummary};

/// Any failure of a batch run
#[derive(Error, Debug)]
pub enum TieError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Algo(#[from] AlgoError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TieResult<T> = Result<T, TieError>;

/// Load both input files and compute the report
pub fn compute_from_files(
    nodes: impl AsRef<Path>,
    adjacency: impl AsRef<Path>,
    config: &TieStrengthConfig,
) -> TieResult<(NodeRegistry, TieStrengthReport)> {
    let registry = graph::load_nodes_file(nodes)?;
    let model = graph::load_adjacency_file(adjacency, &registry)?;
    let report = compute_ties(&registry, &model, config)?;
    Ok((registry, report))
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
