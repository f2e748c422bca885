//! Text input loaders
//!
//! Both inputs are whitespace-delimited, one record per line:
//! - node list: `<id> <label>`, where `<id>` must equal the line's 1-based position
//!   and `<label>` is the rest of the line, optionally wrapped in double quotes
//! - adjacency list: `<source> [<dest> ...]`
//!
//! Loading fails fast on the first malformed line and reports its line number.

use super::node::NodeRegistry;
use super::NodeId;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiestrength_algorithms::{AdjacencyError, AdjacencyModel};
use tracing::{debug, info};

/// Which input file a record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Nodes,
    Adjacency,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Nodes => write!(f, "nodes"),
            InputKind::Adjacency => write!(f, "adjacency"),
        }
    }
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum LoadError {
    /// Input file could not be opened
    #[error("Cannot open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Line could not be read (I/O failure or invalid UTF-8)
    #[error("{input} line {line}: {source}")]
    Read {
        input: InputKind,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Malformed record
    #[error("{input} line {line}: {message}")]
    Parse {
        input: InputKind,
        line: usize,
        message: String,
    },

    /// Node list id does not match its position
    #[error("nodes line {line}: id {found} does not match position {line}")]
    IdMismatch { line: usize, found: NodeId },

    /// Adjacency record references a node missing from the node list
    #[error("adjacency line {line}: {source}")]
    UnknownNode {
        line: usize,
        #[source]
        source: AdjacencyError,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

fn parse_error(input: InputKind, line: usize, message: impl Into<String>) -> LoadError {
    LoadError::Parse {
        input,
        line,
        message: message.into(),
    }
}

fn read_line(input: InputKind, line: usize, read: io::Result<String>) -> LoadResult<String> {
    read.map_err(|source| LoadError::Read { input, line, source })
}

/// Label text after the id: surrounding whitespace trimmed, then one pair of
/// enclosing double quotes removed.
fn parse_label(line: usize, rest: &str) -> LoadResult<&str> {
    let rest = rest.trim();
    let label = rest
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(rest);

    if label.is_empty() {
        return Err(parse_error(InputKind::Nodes, line, "missing label"));
    }
    // Labels are written into a tab-separated table
    if label.contains(['\t', '\r', '\n']) {
        return Err(parse_error(InputKind::Nodes, line, "label contains a tab or line break"));
    }
    Ok(label)
}

fn parse_id(input: InputKind, line: usize, field: &str) -> LoadResult<NodeId> {
    field
        .parse::<NodeId>()
        .map_err(|_| parse_error(input, line, format!("'{}' is not a node id", field)))
}

/// Read the node list. Node ids are line positions starting at 1.
pub fn load_nodes<R: BufRead>(reader: R) -> LoadResult<NodeRegistry> {
    let mut registry = NodeRegistry::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = read_line(InputKind::Nodes, line_no, line)?;
        let record = line.trim_start();
        if record.is_empty() {
            return Err(parse_error(InputKind::Nodes, line_no, "empty record"));
        }

        let (id_field, rest) = record.split_once(char::is_whitespace).unwrap_or((record, ""));
        let id = parse_id(InputKind::Nodes, line_no, id_field)?;
        if id != line_no as NodeId {
            return Err(LoadError::IdMismatch { line: line_no, found: id });
        }

        registry.push(parse_label(line_no, rest)?);
    }

    info!("Loaded {} nodes", registry.len());
    Ok(registry)
}

/// Read the adjacency list into a symmetric model over the registry's ids.
///
/// Several lines for the same source extend one neighbor set.
pub fn load_adjacency<R: BufRead>(reader: R, registry: &NodeRegistry) -> LoadResult<AdjacencyModel> {
    let mut model = AdjacencyModel::new(registry.len());
    let mut records = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = read_line(InputKind::Adjacency, line_no, line)?;
        let mut fields = line.split_whitespace();

        let source_field = fields
            .next()
            .ok_or_else(|| parse_error(InputKind::Adjacency, line_no, "empty record"))?;
        let source = parse_id(InputKind::Adjacency, line_no, source_field)?;
        let destinations = fields
            .map(|field| parse_id(InputKind::Adjacency, line_no, field))
            .collect::<LoadResult<Vec<_>>>()?;

        model
            .insert_record(source, &destinations)
            .map_err(|err| LoadError::UnknownNode { line: line_no, source: err })?;

        debug!("Adjacency line {}: node {} -> {} neighbors", line_no, source, destinations.len());
        records += 1;
    }

    info!(
        "Loaded {} adjacency records ({} undirected edges)",
        records,
        model.edge_count()
    );
    Ok(model)
}

fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the node list from a file
pub fn load_nodes_file(path: impl AsRef<Path>) -> LoadResult<NodeRegistry> {
    let path = path.as_ref();
    info!("Reading nodes from {:?}", path);
    load_nodes(open(path)?)
}

/// Read the adjacency list from a file
pub fn load_adjacency_file(path: impl AsRef<Path>, registry: &NodeRegistry) -> LoadResult<AdjacencyModel> {
    let path = path.as_ref();
    info!("Reading adjacency from {:?}", path);
    load_adjacency(open(path)?, registry)
}
