//! Tie strength aggregation
//!
//! Drives the similarity and top-k algorithms from `tiestrength-algorithms`
//! over every node and collects the per-node result rows plus the flat list
//! of strengths used for distribution analysis.

use crate::graph::{AdjacencyModel, NodeId, NodeRegistry};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

// Re-export algorithms
pub use tiestrength_algorithms::{jaccard, tie_strengths, top_k, TopK};

/// Default number of strongest ties reported per node
pub const DEFAULT_TOP_K: usize = 3;

/// Aggregation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// Registry and adjacency model disagree on the id space
    #[error("Node list has {labels} entries but adjacency model covers {model} nodes")]
    NodeCountMismatch { labels: usize, model: usize },

    /// An id produced by the model has no label
    #[error("Node {0} has no label")]
    MissingLabel(NodeId),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// How evaluated pairs contribute to the flattened strength list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairCounting {
    /// One value per (focal, other) evaluation; every pair appears twice
    Ordered,
    /// One value per unordered pair
    #[default]
    Unordered,
}

/// Aggregation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TieStrengthConfig {
    /// Number of strongest ties kept per node
    pub k: usize,
    /// Evaluate focal nodes on the rayon thread pool
    pub parallel: bool,
    /// Pair counting for the flattened strengths
    pub pair_counting: PairCounting,
}

impl Default for TieStrengthConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_TOP_K,
            parallel: true,
            pair_counting: PairCounting::default(),
        }
    }
}

/// One of a node's strongest ties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopTie {
    pub node: NodeId,
    pub label: String,
    pub strength: f64,
}

/// Result row for one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieRow {
    pub node: NodeId,
    pub label: String,
    /// Number of distinct collaborators
    pub degree: usize,
    /// Strongest ties, strongest first
    pub top: Vec<TopTie>,
}

impl TieRow {
    /// Labels of the strongest ties joined with "; "
    pub fn joined_labels(&self) -> String {
        self.top
            .iter()
            .map(|t| t.label.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Output of a full aggregation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TieStrengthReport {
    /// Rows in node id order
    pub rows: Vec<TieRow>,
    /// Every collected strength, in focal node order
    pub strengths: Vec<f64>,
}

/// Evaluate a single focal node: its row and its contribution to the
/// flattened strengths.
pub fn evaluate_node(
    registry: &NodeRegistry,
    model: &AdjacencyModel,
    focal: NodeId,
    config: &TieStrengthConfig,
) -> AlgoResult<(TieRow, Vec<f64>)> {
    let label = registry.label(focal).ok_or(AlgoError::MissingLabel(focal))?;
    let ties = tie_strengths(model, focal);

    let strengths = match config.pair_counting {
        PairCounting::Ordered => ties.iter().map(|&(_, s)| s).collect(),
        PairCounting::Unordered => ties
            .iter()
            .filter(|&&(other, _)| other > focal)
            .map(|&(_, s)| s)
            .collect(),
    };

    let top = top_k(ties, config.k)
        .into_iter()
        .map(|(node, strength)| -> AlgoResult<TopTie> {
            let label = registry.label(node).ok_or(AlgoError::MissingLabel(node))?;
            Ok(TopTie {
                node,
                label: label.to_string(),
                strength,
            })
        })
        .collect::<AlgoResult<Vec<_>>>()?;

    let row = TieRow {
        node: focal,
        label: label.to_string(),
        degree: model.degree(focal),
        top,
    };
    debug!("Node {} ({}): degree {}, top [{}]", focal, row.label, row.degree, row.joined_labels());

    Ok((row, strengths))
}

/// Compute rows and flattened strengths for every node in id order.
///
/// Quadratic in the node count; intended for offline batch runs.
pub fn compute_ties(
    registry: &NodeRegistry,
    model: &AdjacencyModel,
    config: &TieStrengthConfig,
) -> AlgoResult<TieStrengthReport> {
    if registry.len() != model.node_count() {
        return Err(AlgoError::NodeCountMismatch {
            labels: registry.len(),
            model: model.node_count(),
        });
    }

    info!(
        "Computing tie strengths for {} nodes (k = {}, parallel = {}, pairs = {:?})",
        model.node_count(),
        config.k,
        config.parallel,
        config.pair_counting
    );
    let started = Instant::now();

    let focal_nodes: Vec<NodeId> = model.node_ids().collect();
    // Both paths keep results in focal id order
    let evaluated: Vec<(TieRow, Vec<f64>)> = if config.parallel {
        focal_nodes
            .into_par_iter()
            .map(|focal| evaluate_node(registry, model, focal, config))
            .collect::<AlgoResult<Vec<_>>>()?
    } else {
        focal_nodes
            .into_iter()
            .map(|focal| evaluate_node(registry, model, focal, config))
            .collect::<AlgoResult<Vec<_>>>()?
    };

    let mut report = TieStrengthReport {
        rows: Vec::with_capacity(evaluated.len()),
        strengths: Vec::new(),
    };
    for (row, strengths) in evaluated {
        report.rows.push(row);
        report.strengths.extend(strengths);
    }

    info!(
        "Computed {} rows and {} strengths in {:?}",
        report.rows.len(),
        report.strengths.len(),
        started.elapsed()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> (NodeRegistry, AdjacencyModel) {
        let registry = NodeRegistry::from_labels(["A", "B", "C"]);
        let model = AdjacencyModel::from_records(3, vec![(1, vec![2, 3]), (2, vec![3])]).unwrap();
        (registry, model)
    }

    #[test]
    fn test_triangle_rows() {
        let (registry, model) = abc();
        let config = TieStrengthConfig { k: 1, ..Default::default() };
        let report = compute_ties(&registry, &model, &config).unwrap();

        assert_eq!(report.rows.len(), 3);
        let first = &report.rows[0];
        assert_eq!(first.label, "A");
        assert_eq!(first.degree, 2);
        // 2 and 3 tie at 1/3; lower id wins
        assert_eq!(first.joined_labels(), "B");
        assert_eq!(report.rows[2].joined_labels(), "A");
    }

    #[test]
    fn test_pair_counting() {
        let (registry, model) = abc();

        let ordered = TieStrengthConfig { pair_counting: PairCounting::Ordered, ..Default::default() };
        let unordered = TieStrengthConfig { pair_counting: PairCounting::Unordered, ..Default::default() };

        let ordered = compute_ties(&registry, &model, &ordered).unwrap();
        let unordered = compute_ties(&registry, &model, &unordered).unwrap();

        assert_eq!(ordered.strengths.len(), 6);
        assert_eq!(unordered.strengths.len(), 3);
        assert_eq!(ordered.rows, unordered.rows);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let labels: Vec<String> = (1..=25).map(|i| format!("N{}", i)).collect();
        let registry = NodeRegistry::from_labels(labels);
        let records = (1..=25u64).map(|i| (i, vec![(i % 25) + 1, ((i * 7) % 25) + 1])).collect::<Vec<_>>();
        let model = AdjacencyModel::from_records(25, records).unwrap();

        let parallel = TieStrengthConfig { parallel: true, ..Default::default() };
        let sequential = TieStrengthConfig { parallel: false, ..Default::default() };

        assert_eq!(
            compute_ties(&registry, &model, &parallel).unwrap(),
            compute_ties(&registry, &model, &sequential).unwrap()
        );
    }

    #[test]
    fn test_isolated_nodes_and_short_rows() {
        let registry = NodeRegistry::from_labels(["A", "B"]);
        let model = AdjacencyModel::new(2);
        let report = compute_ties(&registry, &model, &TieStrengthConfig::default()).unwrap();

        // Only one other node exists, so k = 3 yields a single entry
        assert_eq!(report.rows[0].top.len(), 1);
        assert_eq!(report.rows[0].top[0].strength, 0.0);
        assert_eq!(report.rows[0].degree, 0);
        assert_eq!(report.strengths, vec![0.0]);
    }

    #[test]
    fn test_count_mismatch() {
        let registry = NodeRegistry::from_labels(["A"]);
        let model = AdjacencyModel::new(2);
        let err = compute_ties(&registry, &model, &TieStrengthConfig::default()).unwrap_err();
        assert_eq!(err, AlgoError::NodeCountMismatch { labels: 1, model: 2 });
    }

    #[test]
    fn test_empty_graph() {
        let report = compute_ties(&NodeRegistry::new(), &AdjacencyModel::new(0), &TieStrengthConfig::default()).unwrap();
        assert!(report.rows.is_empty());
        assert!(report.strengths.is_empty());
    }
}
