//! Run metrics — serializable summaries of lattice state and entropy series.

use crate::lattice::Lattice;
use serde::{Deserialize, Serialize};

/// The two parallel entropy-decay series produced by a recorded run,
/// indexed by step number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntropyHistory {
    /// Mean entropy decay across the whole lattice, per step.
    pub environment: Vec<f64>,
    /// The agent cell's entropy decay, per step.
    pub agent: Vec<f64>,
}

impl EntropyHistory {
    pub fn len(&self) -> usize {
        self.environment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environment.is_empty()
    }
}

/// Snapshot statistics of a lattice.
#[derive(Debug, Clone, Serialize)]
pub struct LatticeStats {
    pub tick: u64,
    pub cells: usize,
    pub edges: usize,
    /// Cells with no neighbors.
    pub isolated_cells: usize,
    pub total_energy: f64,
    pub mean_energy: f64,
    /// Cells currently carrying a mutated (jitter) rule.
    pub mutated_rules: usize,
}

impl LatticeStats {
    pub fn compute(lattice: &Lattice) -> Self {
        let cells = lattice.cell_count();
        let isolated_cells = lattice
            .cell_ids()
            .into_iter()
            .filter(|id| lattice.neighbor_ids(*id).is_empty())
            .count();
        let mutated_rules = lattice.cells().filter(|c| c.rule.is_mutated()).count();
        let total_energy = lattice.total_energy();

        Self {
            tick: lattice.tick(),
            cells,
            edges: lattice.edge_count(),
            isolated_cells,
            total_energy,
            mean_energy: total_energy / cells as f64,
            mutated_rules,
        }
    }
}

/// Summary of one entropy series.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub last: f64,
}

impl SeriesSummary {
    /// NaN-filled for an empty series; callers only summarize recorded runs.
    pub fn of(series: &[f64]) -> Self {
        let n = series.len() as f64;
        Self {
            mean: series.iter().sum::<f64>() / n,
            min: series.iter().cloned().fold(f64::INFINITY, f64::min),
            max: series.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            last: series.last().copied().unwrap_or(f64::NAN),
        }
    }
}

/// Summaries of both series of a recorded run.
#[derive(Debug, Clone, Serialize)]
pub struct EntropySummary {
    pub environment: SeriesSummary,
    pub agent: SeriesSummary,
}

impl EntropySummary {
    pub fn of(history: &EntropyHistory) -> Self {
        Self {
            environment: SeriesSummary::of(&history.environment),
            agent: SeriesSummary::of(&history.agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::LatticeConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stats_count_isolated_cells() {
        let mut rng = StdRng::seed_from_u64(20);
        let config = LatticeConfig {
            num_cells: 7,
            edge_probability: 0.0,
            ..LatticeConfig::default()
        };
        let lattice = Lattice::generate(&config, &mut rng).unwrap();

        let stats = LatticeStats::compute(&lattice);
        assert_eq!(stats.cells, 7);
        assert_eq!(stats.edges, 0);
        assert_eq!(stats.isolated_cells, 7);
        assert_eq!(stats.mutated_rules, 0);
    }

    #[test]
    fn series_summary_basics() {
        let s = SeriesSummary::of(&[0.1, 0.4, 0.2]);
        assert!((s.mean - 0.2333333333).abs() < 1e-6);
        assert_eq!(s.min, 0.1);
        assert_eq!(s.max, 0.4);
        assert_eq!(s.last, 0.2);
    }
}
