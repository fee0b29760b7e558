//! Transition rules — the per-cell state update function.
//!
//! Every cell owns exactly one rule, replaceable at runtime. A rule is a
//! unary map over the state interval, applied once per tick. Rules are a
//! tagged enum rather than boxed closures so they stay `Clone`,
//! serializable, and comparable in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Step size of the default drift rule every cell starts with.
pub const DEFAULT_DRIFT_STEP: f64 = 0.1;

/// Step size the agent installs when stabilizing its own cell.
pub const ADAPTED_DRIFT_STEP: f64 = 0.05;

/// Half-width of the uniform kick applied by a mutated (jitter) rule.
pub const MUTATION_AMPLITUDE: f64 = 1.0;

/// Per-call probability that a cell mutates its rule into a jitter rule.
pub const MUTATION_PROBABILITY: f64 = 0.1;

/// A cell's state update function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitionRule {
    /// Deterministic drift: `(x + step) mod 1`.
    Drift { step: f64 },
    /// Random walk: `(x + U(-amplitude, amplitude)) mod 1`.
    ///
    /// The kick is redrawn on every application, so a mutated rule stays
    /// nondeterministic for the rest of the run rather than fixing a
    /// perturbation once at mutation time. Deliberate: mutation installs
    /// a random walk, not a shifted drift.
    Jitter { amplitude: f64 },
}

impl TransitionRule {
    /// The drift rule every cell starts with.
    pub fn default_drift() -> Self {
        TransitionRule::Drift {
            step: DEFAULT_DRIFT_STEP,
        }
    }

    /// The smaller, more stable drift the agent adapts toward.
    pub fn adapted_drift() -> Self {
        TransitionRule::Drift {
            step: ADAPTED_DRIFT_STEP,
        }
    }

    /// The rule installed by mutation.
    pub fn mutated() -> Self {
        TransitionRule::Jitter {
            amplitude: MUTATION_AMPLITUDE,
        }
    }

    /// Apply the rule to a state value, producing the next state.
    ///
    /// The result is always wrapped into `[0, 1)` with `rem_euclid`, so
    /// negative intermediate values (possible under `Jitter`) land back
    /// inside the interval rather than staying negative.
    pub fn apply(&self, state: f64, rng: &mut impl Rng) -> f64 {
        match self {
            TransitionRule::Drift { step } => (state + step).rem_euclid(1.0),
            TransitionRule::Jitter { amplitude } => {
                let kick = rng.random_range(-*amplitude..*amplitude);
                (state + kick).rem_euclid(1.0)
            }
        }
    }

    /// Whether this rule is the product of a mutation.
    pub fn is_mutated(&self) -> bool {
        matches!(self, TransitionRule::Jitter { .. })
    }
}
