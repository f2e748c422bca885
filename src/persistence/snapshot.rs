//! Strength snapshot file format

use crate::algo::PairCounting;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Current on-disk format version
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

/// Snapshot errors
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Written by an incompatible version
    #[error("Unsupported snapshot format version {found} (expected {})", SNAPSHOT_FORMAT_VERSION)]
    UnsupportedVersion { found: u32 },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Flattened strengths of one run plus the metadata needed to interpret them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthSnapshot {
    pub format_version: u32,
    /// How pairs were counted when the strengths were collected
    pub pair_counting: PairCounting,
    pub node_count: usize,
    pub strengths: Vec<f64>,
}

impl StrengthSnapshot {
    pub fn new(pair_counting: PairCounting, node_count: usize, strengths: Vec<f64>) -> Self {
        Self {
            format_version: SNAPSHOT_FORMAT_VERSION,
            pair_counting,
            node_count,
            strengths,
        }
    }
}

/// Encode a snapshot into `writer`
pub fn write_snapshot<W: Write>(writer: W, snapshot: &StrengthSnapshot) -> SnapshotResult<()> {
    let mut encoder = GzEncoder::new(writer, Compression::default());
    bincode::serialize_into(&mut encoder, snapshot)?;
    encoder.finish()?.flush()?;
    Ok(())
}

/// Decode a snapshot from `reader`
pub fn read_snapshot<R: Read>(reader: R) -> SnapshotResult<StrengthSnapshot> {
    let decoder = GzDecoder::new(reader);
    let snapshot: StrengthSnapshot = bincode::deserialize_from(decoder)?;

    if snapshot.format_version != SNAPSHOT_FORMAT_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: snapshot.format_version,
        });
    }

    Ok(snapshot)
}

/// Write a snapshot file, replacing any existing file
pub fn save_snapshot(path: impl AsRef<Path>, snapshot: &StrengthSnapshot) -> SnapshotResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_snapshot(BufWriter::new(file), snapshot)?;
    info!("Saved {} strengths to {:?}", snapshot.strengths.len(), path);
    Ok(())
}

/// Read a snapshot file
pub fn load_snapshot(path: impl AsRef<Path>) -> SnapshotResult<StrengthSnapshot> {
    let path = path.as_ref();
    let snapshot = read_snapshot(BufReader::new(File::open(path)?))?;
    info!("Loaded {} strengths from {:?}", snapshot.strengths.len(), path);
    Ok(snapshot)
}
