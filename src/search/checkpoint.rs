// See LICENSE for the program's license.

//! Suspend-and-resume snapshots.
//!
//! A checkpoint pins down exactly one node of the search tree: the facings
//! placed along the placement order when the run was suspended. Because the
//! candidate order within each node is fixed, replaying that prefix and
//! resuming the candidate loops above it reproduces the interrupted
//! traversal with nothing recounted and nothing skipped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Facing;

/// Operational failures around checkpoints. The search itself cannot fail;
/// only the snapshot plumbing can.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("checkpoint i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed checkpoint: {0}")]
    Format(#[from] serde_json::Error),
    #[error("checkpoint does not match this search: {0}")]
    Mismatch(String),
}

/// A suspended search, serializable to JSON.
///
/// `prefix` holds the facing placed at each depth `0..prefix.len()` of the
/// placement order. The counters carry everything accumulated before the
/// suspension, including work in subtrees already exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub prefix: Vec<Facing>,
    pub valid: u64,
    pub placements: u64,
    pub positions: usize,
    pub exclude_loops: bool,
    pub rotational_cut: bool,
}

impl Checkpoint {
    /// Write the checkpoint as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), CheckpointError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read a checkpoint written by [`Checkpoint::save`].
    pub fn load(path: &Path) -> Result<Self, CheckpointError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
