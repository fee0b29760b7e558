//! Agent — a greedy policy wrapper around one designated cell.
//!
//! The agent does not own its cell; the lattice does. It holds the cell's
//! id and acts on the lattice from outside the per-tick loop: before each
//! tick it drains energy from its most dissimilar neighbor and pins its
//! own transition rule back to the stable drift, and after each tick it
//! records its cell's entropy decay into a history series.

use crate::lattice::Lattice;
use negentropy_core::prelude::*;
use serde::Serialize;

/// The agent — wraps exactly one cell of the lattice.
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    cell: CellId,
    /// Observed entropy-decay values, one per tick.
    history: Vec<f64>,
}

impl Agent {
    pub fn new(cell: CellId) -> Self {
        Self {
            cell,
            history: Vec::new(),
        }
    }

    /// Id of the wrapped cell.
    pub fn cell_id(&self) -> CellId {
        self.cell
    }

    /// Entropy-decay history, one entry per observed tick.
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Draw energy from the neighbor with the largest state difference.
    ///
    /// Greedy, not globally optimal: the transfer amount equals the
    /// chosen difference, so the maximal difference maximizes this one
    /// draw. Ties go to the first maximal neighbor in iteration order.
    /// A no-op returning None when the cell is isolated.
    pub fn greedy_draw(&self, lattice: &mut Lattice) -> Option<f64> {
        let state = lattice.cell(self.cell)?.state;

        let mut best: Option<(CellId, f64)> = None;
        for neighbor in lattice.neighbor_ids(self.cell) {
            let diff = (state - lattice.cell(neighbor)?.state).abs();
            if best.map_or(true, |(_, b)| diff > b) {
                best = Some((neighbor, diff));
            }
        }

        let (target, _) = best?;
        lattice.draw_energy(self.cell, target)
    }

    /// Pin the wrapped cell's transition rule to the stable drift.
    ///
    /// Unconditional: this also undoes any mutation the cell picked up
    /// during the previous tick.
    pub fn stabilize(&self, lattice: &mut Lattice) {
        if let Some(cell) = lattice.cell_mut(self.cell) {
            cell.rule = TransitionRule::adapted_drift();
        }
    }

    /// Append the wrapped cell's current entropy decay to the history.
    pub fn observe(&mut self, lattice: &Lattice) {
        if let Some(cell) = lattice.cell(self.cell) {
            self.history.push(cell.entropy_decay());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lattice with an agent cell at state 0.5 and neighbors at the given states.
    fn star_lattice(neighbor_states: &[f64]) -> (Lattice, Agent) {
        let mut lattice = Lattice::new();
        let center = lattice.spawn(0.5, 5.0);
        for &state in neighbor_states {
            let id = lattice.spawn(state, 5.0);
            lattice.connect(center, id);
        }
        (lattice, Agent::new(center))
    }

    #[test]
    fn greedy_draw_picks_largest_state_difference() {
        let (mut lattice, agent) = star_lattice(&[0.1, 0.6, 0.9]);

        let transfer = agent.greedy_draw(&mut lattice).expect("has neighbors");

        // |0.5 - 0.9| = 0.4 is maximal (tied with the 0.1 neighbor; the
        // 0.9 neighbor comes first in iteration order and wins the tie).
        assert!((transfer - 0.4).abs() < 1e-12);
        assert!((lattice.cell(agent.cell_id()).unwrap().energy - 5.4).abs() < 1e-12);

        let energies: Vec<f64> = lattice.cells().skip(1).map(|c| c.energy).collect();
        assert!((energies[2] - 4.6).abs() < 1e-12, "0.9 neighbor should be drained");
    }

    #[test]
    fn greedy_draw_prefers_strictly_larger_difference() {
        let (mut lattice, agent) = star_lattice(&[0.45, 0.6, 0.95]);

        agent.greedy_draw(&mut lattice).expect("has neighbors");

        // Only the 0.95 neighbor (diff 0.45) should have lost energy.
        let drained: Vec<f64> = lattice.cells().skip(1).map(|c| c.energy).collect();
        assert!((drained[0] - 5.0).abs() < 1e-12);
        assert!((drained[1] - 5.0).abs() < 1e-12);
        assert!((drained[2] - 4.55).abs() < 1e-12);
    }

    #[test]
    fn greedy_draw_on_isolated_cell_is_a_noop() {
        let mut lattice = Lattice::new();
        let id = lattice.spawn(0.5, 5.0);
        let agent = Agent::new(id);

        assert!(agent.greedy_draw(&mut lattice).is_none());

        let cell = lattice.cell(id).unwrap();
        assert_eq!(cell.state, 0.5);
        assert_eq!(cell.energy, 5.0);
    }

    #[test]
    fn stabilize_overwrites_any_rule() {
        let mut lattice = Lattice::new();
        let id = lattice.spawn(0.5, 5.0);
        lattice.cell_mut(id).unwrap().rule = TransitionRule::mutated();

        let agent = Agent::new(id);
        agent.stabilize(&mut lattice);

        assert_eq!(
            lattice.cell(id).unwrap().rule,
            TransitionRule::Drift {
                step: ADAPTED_DRIFT_STEP
            }
        );
    }

    #[test]
    fn observe_appends_to_history() {
        let mut lattice = Lattice::new();
        let id = lattice.spawn(0.5, 5.0);
        let mut agent = Agent::new(id);

        agent.observe(&lattice);
        agent.observe(&lattice);

        assert_eq!(agent.history(), &[0.0, 0.0]);
    }
}
