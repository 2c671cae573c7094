use {
    crate::grid::*,
    serde::{Deserialize, Serialize},
    std::num::*,
};

pub const DEFAULT_SYSTEM_SIZE: usize = 500;
pub const DEFAULT_DEGREE: usize = 10;
pub const DEFAULT_REWIRE_PROB: f64 = 0.05;
pub const DEFAULT_BETA: f64 = 0.03;
pub const DEFAULT_GAMMA: f64 = 0.1;
pub const DEFAULT_OMEGA: f64 = 0.01;
pub const DEFAULT_INFECTION_PERIOD: u32 = 3;
pub const DEFAULT_RECOVERY_PERIOD: u32 = 9;
pub const DEFAULT_STEPS: usize = 2000;
pub const DEFAULT_INITIAL_INFECTED_FRACTION: f64 = 0.02;
pub const DEFAULT_GRAPH_SEED: u64 = 875629289;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;

pub const DEFAULT_SCAN_SAMPLES: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(v) => v,
    None => panic!("zero samples"),
};
pub const DEFAULT_BURN_IN: usize = 500;
pub const ONE: NonZeroUsize = NonZeroUsize::MIN;

/// Evenly spaced values from `start` to `end`, both included.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct F64RangeBuilder {
    pub start: f64,
    pub end: f64,
    /// number of grid points
    pub steps: NonZeroUsize,
}

impl F64RangeBuilder {
    pub fn get_range(&self) -> GridRangeF64 {
        GridRangeF64::new(self.start, self.end, self.steps.get())
    }
}
