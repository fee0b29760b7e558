//! Entropy Decay Demo: Agent vs Environment
//!
//! Runs the extended variant — 20 cells, 50 steps — recording the
//! lattice-wide and agent-specific entropy-decay series each step, then
//! writes them as CSV and as a standalone HTML chart.
//!
//! Protocol per step:
//! 1. Agent drains its most dissimilar neighbor (greedy draw)
//! 2. Agent pins its rule back to the stable drift
//! 3. Lattice tick: per-cell exchange / update / mutate
//! 4. Both entropy-decay values are recorded

use negentropy_core::prelude::*;
use negentropy_runtime::export::write_entropy_csv;
use negentropy_runtime::metrics::EntropySummary;
use negentropy_runtime::simulation::{Simulation, SimulationConfig};
use std::path::Path;

fn main() {
    if let Err(e) = run() {
        eprintln!("entropy-demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║  Entropy Decay: Greedy Agent vs Environment         ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let config = SimulationConfig::default();
    println!(
        "  {} cells, edge probability {:.2}, {} steps",
        config.lattice.num_cells, config.lattice.edge_probability, config.num_steps
    );
    println!();

    let mut sim = Simulation::new(config)?;
    println!(
        "  Lattice: {} cells, {} edges; agent wraps {}",
        sim.lattice().cell_count(),
        sim.lattice().edge_count(),
        sim.agent().cell_id()
    );
    println!();

    let report = sim.run();

    // Per-step table, every 5th step
    println!("  {:>5} │ {:>12} {:>12}", "Step", "Environment", "Agent");
    println!("  {:─>5}─┼─{:─>12}─{:─>12}", "", "", "");
    for (step, (env, agent)) in report
        .history
        .environment
        .iter()
        .zip(report.history.agent.iter())
        .enumerate()
    {
        if step % 5 == 0 || step + 1 == report.history.len() {
            println!("  {:>5} │ {:>12.4} {:>12.4}", step, env, agent);
        }
    }
    println!();

    let summary = EntropySummary::of(&report.history);
    println!("── Summary ───────────────────────────────────────────");
    println!(
        "  Environment: mean={:.4} min={:.4} max={:.4} final={:.4}",
        summary.environment.mean,
        summary.environment.min,
        summary.environment.max,
        summary.environment.last
    );
    println!(
        "  Agent:       mean={:.4} min={:.4} max={:.4} final={:.4}",
        summary.agent.mean, summary.agent.min, summary.agent.max, summary.agent.last
    );
    println!(
        "  Lattice:     tick={} exchanges={} mutations={} total_energy={:.3}",
        report.stats.tick, report.exchange_count, report.mutation_count, report.stats.total_energy
    );
    println!();

    // Artifacts
    let out_dir = Path::new("poc/entropy-demo/output");
    std::fs::create_dir_all(out_dir)?;

    let csv_path = out_dir.join("entropy-decay.csv");
    write_entropy_csv(&csv_path, &report.history)?;
    println!("  CSV:  {}", csv_path.display());

    let html_path = out_dir.join("entropy-decay.html");
    std::fs::write(&html_path, negentropy_viz::generate_html(&report.history))?;
    println!("  HTML: {}", html_path.display());

    let json_path = out_dir.join("run-report.json");
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(&json_path, json)?;
    println!("  JSON: {}", json_path.display());

    println!();
    println!("══════════════════════════════════════════════════════");
    Ok(())
}
