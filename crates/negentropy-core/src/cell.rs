//! Cell — the fundamental stateful entity.
//!
//! A cell holds a continuous state, an energy reserve, and its current
//! transition rule. It knows nothing about the lattice topology; neighbor
//! wiring and selection belong to `negentropy-runtime`. The operations
//! here are the four the simulation loop composes each tick:
//!
//! 1. `draw_energy` — pairwise exchange proportional to state difference
//! 2. `update_state` — advance state through the transition rule
//! 3. `maybe_mutate` — Bernoulli chance of replacing the rule
//! 4. `entropy_decay` — how far the state moved this tick

use crate::rule::{TransitionRule, MUTATION_PROBABILITY};
use crate::types::CellId;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single cell in the lattice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    /// Externally visible state, nominally in `[0, 1)`.
    pub state: f64,
    /// State at the start of the current tick, for entropy-decay tracking.
    prev_state: f64,
    /// Energy reserve. Unbounded — exchanges can drive it negative, which
    /// is accepted behavior, not an error.
    pub energy: f64,
    /// Current transition rule, replaceable at runtime.
    pub rule: TransitionRule,
}

impl Cell {
    /// Create a cell with the default drift rule.
    pub fn new(id: CellId, state: f64, energy: f64) -> Self {
        Self::with_rule(id, state, energy, TransitionRule::default_drift())
    }

    /// Create a cell with an explicit rule.
    pub fn with_rule(id: CellId, state: f64, energy: f64, rule: TransitionRule) -> Self {
        Self {
            id,
            state,
            prev_state: state,
            energy,
            rule,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    /// The state this cell held at the start of the current tick.
    pub fn prev_state(&self) -> f64 {
        self.prev_state
    }

    /// Extract energy from a neighbor based on state difference.
    ///
    /// The transfer amount is `|state - other.state|`: it is added to this
    /// cell and subtracted from the other, so the pairwise sum is
    /// conserved exactly. No bounds are enforced on either side.
    pub fn draw_energy(&mut self, other: &mut Cell) -> f64 {
        let transfer = (self.state - other.state).abs();
        self.energy += transfer;
        other.energy -= transfer;
        transfer
    }

    /// Advance the state through the transition rule, remembering the
    /// previous state for entropy tracking.
    pub fn update_state(&mut self, rng: &mut impl Rng) {
        self.prev_state = self.state;
        self.state = self.rule.apply(self.state, rng);
    }

    /// With probability [`MUTATION_PROBABILITY`], replace the transition
    /// rule with the jitter rule. Returns whether the mutation fired.
    ///
    /// The draw is independent per cell per call.
    pub fn maybe_mutate(&mut self, rng: &mut impl Rng) -> bool {
        if rng.random_bool(MUTATION_PROBABILITY) {
            self.rule = TransitionRule::mutated();
            true
        } else {
            false
        }
    }

    /// How far the state moved this tick: `|state - prev_state|`.
    ///
    /// Zero means perfectly stable; always non-negative.
    pub fn entropy_decay(&self) -> f64 {
        (self.state - self.prev_state).abs()
    }
}
