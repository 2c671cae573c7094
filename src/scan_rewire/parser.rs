use {
    crate::DriverResult,
    serde::{Deserialize, Serialize},
    serde_json::Value,
    sirs_small_world::{error::check_probability, misc_types::*, SimulationConfig, SirsError},
    std::{error::Error, num::*},
    structopt::StructOpt,
};

/// Scan the rewiring probability and measure the infected fraction
#[derive(Debug, StructOpt, Clone)]
pub struct ScanRewire {
    /// Specify the json file with the options
    /// If not given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// Number of threads to use
    #[structopt(long)]
    num_threads: Option<NonZeroUsize>,
}

impl ScanRewire {
    pub fn parse(&self) -> Result<(ScanRewireParams, Value), Box<dyn Error>> {
        crate::parse(self.json.as_ref())
    }

    pub fn execute(&self) -> DriverResult {
        let (param, json) = self.parse()?;
        super::execute::run_scan(param, json, self.num_threads)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScanRewireParams {
    /// Run template. Its rewiring probability is replaced by the grid
    /// values, its seeds seed the per run seeds.
    pub base: SimulationConfig,
    pub rewire_range: F64RangeBuilder,
    /// Independent networks and epidemics per grid point
    pub samples: NonZeroUsize,
    /// Recorded ticks ignored before measuring
    pub burn_in: usize,
}

impl ScanRewireParams {
    pub fn validate(&self) -> Result<(), SirsError> {
        self.base.validate()?;
        check_probability("rewire_range.start", self.rewire_range.start)?;
        check_probability("rewire_range.end", self.rewire_range.end)?;
        if self.burn_in >= self.base.steps {
            return Err(SirsError::BurnInTooLong {
                burn_in: self.burn_in,
                steps: self.base.steps,
            });
        }
        Ok(())
    }
}

impl Default for ScanRewireParams {
    fn default() -> Self {
        Self {
            base: SimulationConfig::default(),
            rewire_range: F64RangeBuilder {
                start: 0.0,
                end: 1.0,
                steps: NonZeroUsize::new(11).unwrap_or(ONE),
            },
            samples: DEFAULT_SCAN_SAMPLES,
            burn_in: DEFAULT_BURN_IN,
        }
    }
}
