//! Errors raised while configuring a simulation.
//!
//! Everything in here is detected before a graph is generated or a single
//! tick is simulated.

use thiserror::Error;

use crate::config::PolicyKind;

#[derive(Debug, Error)]
pub enum SirsError {
    #[error("system size must be positive")]
    EmptyPopulation,

    #[error("degree k = {k} must be even")]
    OddDegree { k: usize },

    #[error("degree k = {k} must be smaller than the system size N = {n}")]
    DegreeTooLarge { k: usize, n: usize },

    /// Also raised for NaN.
    #[error("{name} = {value} is not a probability in [0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("the {policy} policy requires the parameter `{param}`")]
    MissingParameter {
        policy: PolicyKind,
        param: &'static str,
    },

    #[error("{name} must be a positive number of ticks")]
    NonPositiveDuration { name: &'static str },

    #[error("initial infected fraction {0} is outside (0, 1]")]
    InvalidSeedFraction(f64),

    #[error("initial infected count {count} is outside 1..={n}")]
    InvalidSeedCount { count: usize, n: usize },

    #[error("seed node {node} is outside 0..{n}")]
    SeedNodeOutOfRange { node: usize, n: usize },

    #[error("explicit seed node list is empty")]
    EmptySeedList,

    #[error("burn in of {burn_in} ticks leaves nothing of a {steps} tick run")]
    BurnInTooLong { burn_in: usize, steps: usize },

    #[error("unable to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SirsError>;

/// Checks that `value` lies in [0, 1].
pub fn check_probability(name: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SirsError::InvalidProbability { name, value })
    }
}
