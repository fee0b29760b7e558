//! Lattice — the undirected interaction graph of cells.
//!
//! The lattice is the organism. It owns every cell, wires them into a
//! sparse random graph at construction, and runs the per-tick update
//! loop. Backed by petgraph's undirected `Graph` with a HashMap index for
//! O(1) cell lookup by id; the undirected edge relation IS the neighbor
//! relation, so symmetry holds by construction and self-loops and
//! multi-edges are rejected at wiring time.
//!
//! Each tick, for every cell in insertion order:
//! 1. If it has at least one neighbor, pick one uniformly and draw energy
//! 2. Advance the state through the cell's transition rule
//! 3. Roll the rule-mutation chance
//!
//! A cell may be touched more than once per tick — once as the acting
//! cell and again as someone else's chosen neighbor. That is accepted
//! behavior; there is no ordering guarantee beyond insertion order.

use negentropy_core::prelude::*;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event emitted by the lattice during a tick.
#[derive(Debug, Clone, Serialize)]
pub enum LatticeEvent {
    /// One cell drew energy from another.
    Exchanged { from: CellId, to: CellId, amount: f64 },
    /// A cell mutated its transition rule.
    Mutated { id: CellId },
    /// A tick completed.
    TickComplete { tick: Tick },
}

/// Configuration for lattice construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatticeConfig {
    /// Number of cells to create (default: 20).
    pub num_cells: usize,
    /// Independent probability of wiring each unordered cell pair (default: 0.2).
    pub edge_probability: f64,
    /// Lower bound of the initial energy draw (default: 5.0).
    pub energy_min: f64,
    /// Upper bound of the initial energy draw (default: 10.0).
    pub energy_max: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            num_cells: 20,
            edge_probability: 0.2,
            energy_min: 5.0,
            energy_max: 10.0,
        }
    }
}

impl LatticeConfig {
    /// Check the configuration for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        if self.num_cells == 0 {
            return Err(NegentropyError::invalid_config(
                "num_cells",
                "0",
                "lattice needs at least one cell",
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(NegentropyError::out_of_range(
                "edge_probability",
                0.0,
                1.0,
                self.edge_probability,
            ));
        }
        if self.energy_max < self.energy_min {
            return Err(NegentropyError::invalid_config(
                "energy_max",
                self.energy_max.to_string(),
                "must be >= energy_min",
            ));
        }
        Ok(())
    }
}

/// The interaction lattice — owns all cells and the edge relation.
pub struct Lattice {
    graph: Graph<Cell, (), Undirected>,
    /// Map from cell id to petgraph's internal index.
    cell_index: HashMap<CellId, NodeIndex>,
    next_id: u64,
    tick: Tick,
}

impl Lattice {
    /// Create an empty lattice.
    pub fn new() -> Self {
        Self {
            graph: Graph::new_undirected(),
            cell_index: HashMap::new(),
            next_id: 0,
            tick: 0,
        }
    }

    /// Build a randomized lattice: `num_cells` cells with state ~ U(0,1),
    /// energy ~ U(energy_min, energy_max), and the default drift rule;
    /// every unordered pair wired with independent probability
    /// `edge_probability`. Isolated cells are permitted.
    ///
    /// Rejects invalid configs (see [`LatticeConfig::validate`]) instead
    /// of panicking on an out-of-range probability.
    pub fn generate(config: &LatticeConfig, rng: &mut impl Rng) -> Result<Self> {
        config.validate()?;
        let mut lattice = Self::new();

        let mut ids = Vec::with_capacity(config.num_cells);
        for _ in 0..config.num_cells {
            let state = rng.random_range(0.0..1.0);
            let energy = if config.energy_max > config.energy_min {
                rng.random_range(config.energy_min..config.energy_max)
            } else {
                config.energy_min
            };
            ids.push(lattice.spawn(state, energy));
        }

        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                if rng.random_bool(config.edge_probability) {
                    lattice.connect(ids[i], ids[j]);
                }
            }
        }

        Ok(lattice)
    }

    /// Add a cell with the default drift rule, assigning the next id.
    pub fn spawn(&mut self, state: f64, energy: f64) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        let idx = self.graph.add_node(Cell::new(id, state, energy));
        self.cell_index.insert(id, idx);
        id
    }

    /// Wire two cells as neighbors. Returns false (and does nothing) for
    /// unknown ids, self-loops, or already-wired pairs.
    pub fn connect(&mut self, a: CellId, b: CellId) -> bool {
        if a == b {
            return false;
        }
        let (Some(&a_idx), Some(&b_idx)) = (self.cell_index.get(&a), self.cell_index.get(&b))
        else {
            return false;
        };
        if self.graph.find_edge(a_idx, b_idx).is_some() {
            return false;
        }
        self.graph.add_edge(a_idx, b_idx, ());
        true
    }

    /// Perform one tick across all cells, in insertion order.
    pub fn step(&mut self, rng: &mut impl Rng) -> Vec<LatticeEvent> {
        let mut events = Vec::new();
        let indices: Vec<NodeIndex> = self.graph.node_indices().collect();

        for idx in indices {
            let neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
            if let Some(&chosen) = neighbors.choose(rng) {
                let (cell, neighbor) = self.graph.index_twice_mut(idx, chosen);
                let from = cell.id();
                let to = neighbor.id();
                let amount = cell.draw_energy(neighbor);
                events.push(LatticeEvent::Exchanged { from, to, amount });
            }

            let cell = &mut self.graph[idx];
            cell.update_state(rng);
            if cell.maybe_mutate(rng) {
                events.push(LatticeEvent::Mutated { id: cell.id() });
            }
        }

        self.tick += 1;
        events.push(LatticeEvent::TickComplete { tick: self.tick });
        events
    }

    /// Draw energy from `to` into `from` directly, bypassing random
    /// neighbor choice. Used by the agent's greedy policy. Returns the
    /// transfer amount, or None for unknown ids or `from == to`.
    pub fn draw_energy(&mut self, from: CellId, to: CellId) -> Option<f64> {
        if from == to {
            return None;
        }
        let from_idx = *self.cell_index.get(&from)?;
        let to_idx = *self.cell_index.get(&to)?;
        let (a, b) = self.graph.index_twice_mut(from_idx, to_idx);
        Some(a.draw_energy(b))
    }

    /// Get a cell by id.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cell_index.get(&id).map(|idx| &self.graph[*idx])
    }

    /// Get a mutable cell by id.
    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cell_index
            .get(&id)
            .copied()
            .map(|idx| &mut self.graph[idx])
    }

    /// All cells, in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.graph.node_weights()
    }

    /// All cell ids, in insertion order.
    pub fn cell_ids(&self) -> Vec<CellId> {
        self.graph.node_weights().map(|c| c.id()).collect()
    }

    /// Neighbor ids of a cell. Empty for unknown ids and isolated cells.
    pub fn neighbor_ids(&self, id: CellId) -> Vec<CellId> {
        let Some(&idx) = self.cell_index.get(&id) else {
            return Vec::new();
        };
        self.graph
            .neighbors(idx)
            .map(|n_idx| self.graph[n_idx].id())
            .collect()
    }

    pub fn cell_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Sum of all cell energies. Conserved by exchanges; only the initial
    /// draws determine it.
    pub fn total_energy(&self) -> f64 {
        self.graph.node_weights().map(|c| c.energy).sum()
    }

    /// Arithmetic mean of `entropy_decay()` across all cells, the agent's
    /// cell included.
    ///
    /// NaN for an empty lattice (mean of nothing); config validation
    /// rejects zero cells, so the shipped binaries never reach it.
    pub fn mean_entropy_decay(&self) -> f64 {
        let sum: f64 = self.graph.node_weights().map(|c| c.entropy_decay()).sum();
        sum / self.graph.node_count() as f64
    }
}

impl Default for Lattice {
    fn default() -> Self {
        Self::new()
    }
}
