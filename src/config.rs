//! Description of a single simulation run.
//!
//! A [`SimulationConfig`] is plain data, usually read from a json file. It is
//! validated as a whole before any graph is generated, so a bad parameter
//! never leads to a partial run.

use {
    crate::{
        error::{check_probability, Result, SirsError},
        misc_types::*,
        sir_model::{FixedDurationRule, InitialInfection, ProbabilisticRule, TransitionPolicy},
        small_world::{check_lattice_params, RewireMode},
    },
    serde::{Deserialize, Serialize},
    std::{fmt, num::NonZeroU32},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Probabilistic,
    FixedDuration,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probabilistic => write!(f, "probabilistic"),
            Self::FixedDuration => write!(f, "fixed_duration"),
        }
    }
}

/// Parameters of both transition policies. Only the ones belonging to the
/// selected policy are required, the rest is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PolicyParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infection_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_period: Option<u32>,
}

/// Who is infected at tick 0.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SeedingPolicy {
    /// `max(1, round(fraction * N))` distinct nodes drawn uniformly.
    Fraction(f64),
    /// Exactly this many distinct nodes drawn uniformly.
    Count(usize),
    /// These node ids.
    Nodes(Vec<usize>),
}

/// Where a time series point is taken relative to the tick it is labelled
/// with.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecordingBoundary {
    /// Point `t` holds the state before tick `t` is applied, so point 0 is
    /// the seeded state and the result of the final tick is not recorded.
    PreStep,
    /// Point `t` holds the state after tick `t` has been applied.
    #[default]
    PostStep,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// N
    pub system_size: usize,
    /// k, lattice degree
    pub degree: usize,
    /// c
    pub rewire_prob: f64,
    #[serde(default)]
    pub rewire_mode: RewireMode,

    pub policy: PolicyKind,
    #[serde(default)]
    pub params: PolicyParams,

    pub steps: usize,
    pub seeding: SeedingPolicy,
    #[serde(default)]
    pub boundary: RecordingBoundary,
    #[serde(default)]
    pub snapshots: bool,

    pub graph_seed: u64,
    pub sir_seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            system_size: DEFAULT_SYSTEM_SIZE,
            degree: DEFAULT_DEGREE,
            rewire_prob: DEFAULT_REWIRE_PROB,
            rewire_mode: RewireMode::Strict,
            policy: PolicyKind::Probabilistic,
            params: PolicyParams {
                beta: Some(DEFAULT_BETA),
                gamma: Some(DEFAULT_GAMMA),
                omega: Some(DEFAULT_OMEGA),
                infection_period: Some(DEFAULT_INFECTION_PERIOD),
                recovery_period: Some(DEFAULT_RECOVERY_PERIOD),
            },
            steps: DEFAULT_STEPS,
            seeding: SeedingPolicy::Fraction(DEFAULT_INITIAL_INFECTED_FRACTION),
            boundary: RecordingBoundary::PostStep,
            snapshots: false,
            graph_seed: DEFAULT_GRAPH_SEED,
            sir_seed: DEFAULT_SIR_SEED,
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter. Called before any work is done.
    pub fn validate(&self) -> Result<()> {
        check_lattice_params(self.system_size, self.degree)?;
        check_probability("rewire_prob", self.rewire_prob)?;
        self.transition_policy()?;
        self.initial_infection()?;
        Ok(())
    }

    /// Builds the selected rule, failing on missing or out of range
    /// parameters.
    pub fn transition_policy(&self) -> Result<TransitionPolicy> {
        let policy = self.policy;
        let params = &self.params;
        match policy {
            PolicyKind::Probabilistic => {
                let rate = |param: &'static str, value: Option<f64>| {
                    value
                        .ok_or(SirsError::MissingParameter { policy, param })
                        .and_then(|v| check_probability(param, v))
                };
                Ok(TransitionPolicy::Probabilistic(ProbabilisticRule {
                    beta: rate("beta", params.beta)?,
                    gamma: rate("gamma", params.gamma)?,
                    omega: rate("omega", params.omega)?,
                }))
            }
            PolicyKind::FixedDuration => {
                let period = |param: &'static str, value: Option<u32>| -> Result<NonZeroU32> {
                    let value = value.ok_or(SirsError::MissingParameter { policy, param })?;
                    NonZeroU32::new(value).ok_or(SirsError::NonPositiveDuration { name: param })
                };
                Ok(TransitionPolicy::FixedDuration(FixedDurationRule {
                    infection_period: period("infection_period", params.infection_period)?,
                    recovery_period: period("recovery_period", params.recovery_period)?,
                }))
            }
        }
    }

    /// Resolves the seeding policy against the system size.
    pub fn initial_infection(&self) -> Result<InitialInfection> {
        let n = self.system_size;
        if n == 0 {
            return Err(SirsError::EmptyPopulation);
        }
        match &self.seeding {
            SeedingPolicy::Fraction(fraction) => {
                let fraction = *fraction;
                if !(fraction > 0.0 && fraction <= 1.0) {
                    return Err(SirsError::InvalidSeedFraction(fraction));
                }
                let count = ((fraction * n as f64).round() as usize).clamp(1, n);
                Ok(InitialInfection::Random(count))
            }
            SeedingPolicy::Count(count) => {
                if *count == 0 || *count > n {
                    return Err(SirsError::InvalidSeedCount { count: *count, n });
                }
                Ok(InitialInfection::Random(*count))
            }
            SeedingPolicy::Nodes(nodes) => {
                if nodes.is_empty() {
                    return Err(SirsError::EmptySeedList);
                }
                if let Some(&node) = nodes.iter().find(|&&node| node >= n) {
                    return Err(SirsError::SeedNodeOutOfRange { node, n });
                }
                let mut nodes = nodes.clone();
                nodes.sort_unstable();
                nodes.dedup();
                Ok(InitialInfection::Nodes(nodes))
            }
        }
    }
}
