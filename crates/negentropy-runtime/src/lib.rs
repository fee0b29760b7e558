//! # Negentropy Runtime
//!
//! The interaction lattice, the greedy agent, and the simulation driver.
//!
//! A [`lattice::Lattice`] owns a sparse random graph of cells; an
//! [`agent::Agent`] wraps one of them with a greedy energy-draw policy and
//! a stabilizing rule override; a [`simulation::Simulation`] runs the
//! fixed per-step sequence and records the two entropy-decay series that
//! `negentropy-viz` turns into a chart.

pub mod agent;
pub mod export;
pub mod lattice;
pub mod metrics;
pub mod prelude;
pub mod simulation;
