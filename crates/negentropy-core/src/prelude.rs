//! Negentropy Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use negentropy_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::cell::Cell;
pub use crate::rule::{
    TransitionRule, ADAPTED_DRIFT_STEP, DEFAULT_DRIFT_STEP, MUTATION_AMPLITUDE,
    MUTATION_PROBABILITY,
};
pub use crate::types::{CellId, Tick};

// Re-export error types
pub use crate::error::{ConfigError, LatticeError, NegentropyError, Result};
