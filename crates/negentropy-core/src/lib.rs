//! # Negentropy Core
//!
//! Core types for entropy-preserving cellular lattices.
//!
//! The fundamental unit is the [`cell::Cell`]: a stateful entity holding a
//! continuous state in `[0, 1)`, an unbounded energy reserve, and a
//! replaceable [`rule::TransitionRule`]. Cells interact pairwise by
//! transferring energy proportional to their state difference, advance
//! their state through their rule each tick, and occasionally mutate the
//! rule itself.
//!
//! The lattice that wires cells together, the greedy agent policy, and the
//! simulation driver live in `negentropy-runtime`.
//!
//! ## Quick Start
//!
//! ```rust
//! use negentropy_core::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut cell = Cell::new(CellId(0), 0.95, 6.0);
//! cell.update_state(&mut rng);
//! assert!(cell.entropy_decay() >= 0.0);
//! ```

pub mod cell;
pub mod error;
pub mod prelude;
pub mod rule;
pub mod types;
