//! Simulation driver — wires lattice and agent into a run.
//!
//! Per step, in this fixed order:
//! 1. `agent.greedy_draw` — drain the most dissimilar neighbor
//! 2. `agent.stabilize` — pin the agent cell's rule to the stable drift
//! 3. `lattice.step` — the per-cell exchange/update/mutate loop
//! 4. `agent.observe` — record the agent cell's entropy decay
//! 5. When recording, push both entropy series for later plotting
//!
//! The minimal variant is the same driver with `record_history` off: the
//! run happens purely for its side effects on state and energy.

use crate::agent::Agent;
use crate::lattice::{Lattice, LatticeConfig, LatticeEvent};
use crate::metrics::{EntropyHistory, LatticeStats};
use negentropy_core::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for a full simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lattice construction parameters.
    pub lattice: LatticeConfig,
    /// Number of ticks to run (default: 50).
    pub num_steps: u64,
    /// RNG seed; None seeds from the OS.
    pub seed: Option<u64>,
    /// Whether to record the two entropy-decay series (extended variant).
    pub record_history: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            lattice: LatticeConfig::default(),
            num_steps: 50,
            seed: None,
            record_history: true,
        }
    }
}

impl SimulationConfig {
    /// The minimal variant: 10 cells, 10 steps, no recording.
    pub fn minimal() -> Self {
        Self {
            lattice: LatticeConfig {
                num_cells: 10,
                ..LatticeConfig::default()
            },
            num_steps: 10,
            seed: None,
            record_history: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.lattice.validate()
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// The two parallel entropy series. Empty when recording is off.
    pub history: EntropyHistory,
    /// Final lattice statistics.
    pub stats: LatticeStats,
    /// Every lattice event of the run, tagged with the tick it completed.
    pub events: Vec<(Tick, LatticeEvent)>,
    /// Exchanges performed by the lattice loop (agent draws excluded).
    pub exchange_count: usize,
    /// Rule mutations that fired during the run.
    pub mutation_count: usize,
}

/// The simulation — owns the lattice, the agent, and the RNG.
pub struct Simulation {
    lattice: Lattice,
    agent: Agent,
    rng: StdRng,
    num_steps: u64,
    record_history: bool,
}

impl Simulation {
    /// Validate the config, build the lattice, and wrap a uniformly
    /// chosen cell in the agent.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let lattice = Lattice::generate(&config.lattice, &mut rng)?;
        let ids = lattice.cell_ids();
        let agent_cell = ids
            .choose(&mut rng)
            .copied()
            .ok_or_else(NegentropyError::empty_lattice)?;

        Ok(Self {
            lattice,
            agent: Agent::new(agent_cell),
            rng,
            num_steps: config.num_steps,
            record_history: config.record_history,
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Run all configured steps and report.
    pub fn run(&mut self) -> RunReport {
        let mut history = EntropyHistory::default();
        let mut event_log = Vec::new();
        let mut exchange_count = 0;
        let mut mutation_count = 0;

        for _ in 0..self.num_steps {
            self.agent.greedy_draw(&mut self.lattice);
            self.agent.stabilize(&mut self.lattice);

            let events = self.lattice.step(&mut self.rng);
            let tick = self.lattice.tick();
            for event in events {
                match &event {
                    LatticeEvent::Exchanged { .. } => exchange_count += 1,
                    LatticeEvent::Mutated { .. } => mutation_count += 1,
                    LatticeEvent::TickComplete { .. } => {}
                }
                event_log.push((tick, event));
            }

            self.agent.observe(&self.lattice);

            if self.record_history {
                history.environment.push(self.lattice.mean_entropy_decay());
                let agent_decay = self
                    .lattice
                    .cell(self.agent.cell_id())
                    .map(|c| c.entropy_decay())
                    .unwrap_or(0.0);
                history.agent.push(agent_decay);
            }
        }

        RunReport {
            history,
            stats: LatticeStats::compute(&self.lattice),
            events: event_log,
            exchange_count,
            mutation_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_matches_variant_parameters() {
        let config = SimulationConfig::minimal();
        assert_eq!(config.lattice.num_cells, 10);
        assert_eq!(config.num_steps, 10);
        assert!(!config.record_history);
    }

    #[test]
    fn invalid_lattice_config_is_rejected() {
        let config = SimulationConfig {
            lattice: LatticeConfig {
                num_cells: 0,
                ..LatticeConfig::default()
            },
            ..SimulationConfig::default()
        };
        assert!(Simulation::new(config).is_err());
    }
}
