//! Persistence of computed tie strengths
//!
//! The flattened strength collection is stored as a gzip-compressed bincode
//! snapshot so distributions can be re-rendered without recomputing.

pub mod snapshot;

pub use snapshot::{
    load_snapshot, read_snapshot, save_snapshot, write_snapshot, SnapshotError, SnapshotResult,
    StrengthSnapshot, SNAPSHOT_FORMAT_VERSION,
};
