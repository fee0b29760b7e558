//! End-to-end simulation tests: seeded determinism, history shape, and
//! conservation properties over whole runs.

use negentropy_runtime::prelude::*;

fn seeded_config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        seed: Some(seed),
        ..SimulationConfig::default()
    }
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let a = Simulation::new(seeded_config(42)).unwrap().run();
    let b = Simulation::new(seeded_config(42)).unwrap().run();

    assert_eq!(a.history.environment, b.history.environment);
    assert_eq!(a.history.agent, b.history.agent);
    assert_eq!(a.stats.total_energy, b.stats.total_energy);
    assert_eq!(a.mutation_count, b.mutation_count);
}

#[test]
fn different_seeds_diverge() {
    let a = Simulation::new(seeded_config(1)).unwrap().run();
    let b = Simulation::new(seeded_config(2)).unwrap().run();
    assert_ne!(a.history.environment, b.history.environment);
}

#[test]
fn recorded_run_yields_parallel_series_of_num_steps() {
    let report = Simulation::new(seeded_config(7)).unwrap().run();

    assert_eq!(report.history.environment.len(), 50);
    assert_eq!(report.history.agent.len(), 50);
    assert!(report.history.environment.iter().all(|v| *v >= 0.0));
    assert!(report.history.agent.iter().all(|v| *v >= 0.0));
}

#[test]
fn unrecorded_run_yields_empty_history() {
    let config = SimulationConfig {
        seed: Some(7),
        record_history: false,
        ..SimulationConfig::minimal()
    };
    let report = Simulation::new(config).unwrap().run();

    assert!(report.history.is_empty());
    assert_eq!(report.stats.tick, 10);
    assert_eq!(report.stats.cells, 10);
}

#[test]
fn run_report_retains_the_full_event_log() {
    let report = Simulation::new(seeded_config(3)).unwrap().run();

    // One TickComplete per step, tagged with its own tick.
    let tick_completes: Vec<u64> = report
        .events
        .iter()
        .filter_map(|(tick, event)| match event {
            LatticeEvent::TickComplete { .. } => Some(*tick),
            _ => None,
        })
        .collect();
    assert_eq!(tick_completes, (1..=50).collect::<Vec<u64>>());

    // The convenience counts are just summaries of the log.
    let exchanges = report
        .events
        .iter()
        .filter(|(_, e)| matches!(e, LatticeEvent::Exchanged { .. }))
        .count();
    let mutations = report
        .events
        .iter()
        .filter(|(_, e)| matches!(e, LatticeEvent::Mutated { .. }))
        .count();
    assert_eq!(exchanges, report.exchange_count);
    assert_eq!(mutations, report.mutation_count);
}

#[test]
fn total_energy_is_conserved_across_a_run() {
    // Both the lattice loop and the agent's draws are zero-sum transfers.
    let sim = Simulation::new(seeded_config(99)).unwrap();
    let before = sim.lattice().total_energy();

    let mut sim = sim;
    let report = sim.run();

    assert!((report.stats.total_energy - before).abs() < 1e-9);
}

#[test]
fn neighbor_symmetry_survives_a_full_run() {
    let mut sim = Simulation::new(seeded_config(5)).unwrap();
    sim.run();

    let lattice = sim.lattice();
    for a in lattice.cell_ids() {
        for b in lattice.neighbor_ids(a) {
            assert!(lattice.neighbor_ids(b).contains(&a));
        }
    }
}

#[test]
fn agent_history_tracks_every_step() {
    let mut sim = Simulation::new(seeded_config(13)).unwrap();
    let report = sim.run();

    assert_eq!(sim.agent().history().len(), 50);
    // The recorded agent series and the agent's own history are the same
    // observations, taken at the same point in the step sequence.
    assert_eq!(sim.agent().history(), report.history.agent.as_slice());
}

#[test]
fn agent_rule_ends_runs_stabilized_or_freshly_mutated() {
    let mut sim = Simulation::new(seeded_config(21)).unwrap();
    sim.run();

    // stabilize() runs before each tick, so after the final tick the
    // agent's rule is either the adapted drift or a mutation from that
    // last tick. It can never still be the default drift.
    let rule = sim.lattice().cell(sim.agent().cell_id()).unwrap().rule;
    assert_ne!(rule, TransitionRule::default_drift());
}
