use serde::{Deserialize, Serialize};

/// Compartment of a single node. Serialized as its one letter label.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Default)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState {
    #[default]
    #[serde(rename = "S")]
    Susceptible,
    #[serde(rename = "I")]
    Infected,
    #[serde(rename = "R")]
    Recovered,
}

impl InfectionState {
    pub fn sus_check(&self) -> bool {
        matches!(self, InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool {
        matches!(self, InfectionState::Infected)
    }
}
