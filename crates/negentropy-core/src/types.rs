//! Shared types used across all Negentropy crates.

use serde::{Deserialize, Serialize};

/// Unique identifier for a cell in the lattice.
///
/// Ids are plain integers assigned sequentially at creation and never
/// change for the lifetime of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u64);

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cell-{}", self.0)
    }
}

/// The current tick of the simulation.
pub type Tick = u64;
