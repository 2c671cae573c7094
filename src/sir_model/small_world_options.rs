use {
    crate::{
        config::SimulationConfig,
        error::{Result, SirsError},
        small_world::RewireMode,
    },
    std::num::NonZeroUsize,
};

/// Everything needed to generate the contact network of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SWOptions {
    pub graph_seed: u64,
    pub rewire_prob: f64,
    pub rewire_mode: RewireMode,
    pub system_size: NonZeroUsize,
    pub degree: usize,
}

impl SWOptions {
    pub fn from_config(param: &SimulationConfig) -> Result<Self> {
        let system_size =
            NonZeroUsize::new(param.system_size).ok_or(SirsError::EmptyPopulation)?;
        Ok(Self {
            graph_seed: param.graph_seed,
            rewire_prob: param.rewire_prob,
            rewire_mode: param.rewire_mode,
            system_size,
            degree: param.degree,
        })
    }
}
