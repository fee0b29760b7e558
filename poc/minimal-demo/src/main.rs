//! Minimal entropy demo: 10 cells, 10 steps, no recording.
//!
//! Runs the same agent/lattice operations as the extended demo purely for
//! their side effects on state and energy, then prints the final lattice
//! statistics.

use negentropy_core::prelude::*;
use negentropy_runtime::simulation::{Simulation, SimulationConfig};

fn main() {
    if let Err(e) = run() {
        eprintln!("minimal-demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = SimulationConfig::minimal();
    println!(
        "Running minimal variant: {} cells, {} steps",
        config.lattice.num_cells, config.num_steps
    );

    let mut sim = Simulation::new(config)?;
    let report = sim.run();

    let stats = &report.stats;
    println!(
        "Done: tick={} cells={} edges={} isolated={} mutated_rules={}",
        stats.tick, stats.cells, stats.edges, stats.isolated_cells, stats.mutated_rules
    );
    println!(
        "Energy: total={:.3} mean={:.3} ({} exchanges, {} mutations)",
        stats.total_energy, stats.mean_energy, report.exchange_count, report.mutation_count
    );
    Ok(())
}
