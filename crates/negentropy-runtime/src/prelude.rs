//! Negentropy Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use negentropy_runtime::prelude::*;
//! ```

pub use crate::agent::Agent;
pub use crate::lattice::{Lattice, LatticeConfig, LatticeEvent};
pub use crate::metrics::{EntropyHistory, EntropySummary, LatticeStats, SeriesSummary};
pub use crate::simulation::{RunReport, Simulation, SimulationConfig};

pub use negentropy_core::prelude::*;
