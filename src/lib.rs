//! SIRS epidemics on Watts–Strogatz small world networks.
//!
//! A run generates a ring lattice, rewires it into a small world, builds a
//! neighbour index and then applies synchronous SIRS ticks under either a
//! probabilistic or a fixed-duration transition rule, recording compartment
//! counts per tick. Every run owns its random number generators and state,
//! so independent runs can be executed in parallel.

pub mod config;
pub mod error;
pub mod grid;
pub mod json_parsing;
pub mod misc_types;
pub mod simulation;
pub mod sir_model;
pub mod small_world;
pub mod stats_methods;

pub use {
    config::{PolicyKind, PolicyParams, RecordingBoundary, SeedingPolicy, SimulationConfig},
    error::{Result, SirsError},
    simulation::{build_simulation, run_simulation, SimulationOutput},
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
