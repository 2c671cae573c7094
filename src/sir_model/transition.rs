use {
    super::InfectionState,
    crate::config::PolicyKind,
    rand::Rng,
    serde::{Deserialize, Serialize},
    std::num::NonZeroU32,
};

/// Per node transition of the SIRS cycle.
///
/// Implementations only ever see the frozen state of the previous tick:
/// the node's own compartment and timer, how many of its neighbours were
/// infected and how many neighbours it has.
pub trait TransitionRule {
    /// Timer a node gets when it is seeded as infected at tick 0.
    fn seed_timer(&self) -> u32;

    fn transition<R: Rng>(
        &self,
        state: InfectionState,
        timer: u32,
        infected_neighbours: usize,
        degree: usize,
        rng: &mut R,
    ) -> (InfectionState, u32);
}

/// Rates per tick. No timers involved.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ProbabilisticRule {
    pub beta: f64,
    pub gamma: f64,
    pub omega: f64,
}

impl ProbabilisticRule {
    /// Chance that at least one of `infected` independent contacts transmits.
    pub fn infection_prob(&self, infected: usize) -> f64 {
        let exponent = i32::try_from(infected).unwrap_or(i32::MAX);
        1.0 - (1.0 - self.beta).powi(exponent)
    }
}

impl TransitionRule for ProbabilisticRule {
    fn seed_timer(&self) -> u32 {
        0
    }

    fn transition<R: Rng>(
        &self,
        state: InfectionState,
        _timer: u32,
        infected_neighbours: usize,
        _degree: usize,
        rng: &mut R,
    ) -> (InfectionState, u32) {
        let draw: f64 = rng.gen();
        let next = match state {
            InfectionState::Susceptible if draw < self.infection_prob(infected_neighbours) => {
                InfectionState::Infected
            }
            InfectionState::Infected if draw < self.gamma => InfectionState::Recovered,
            InfectionState::Recovered if draw < self.omega => InfectionState::Susceptible,
            unchanged => unchanged,
        };
        (next, 0)
    }
}

/// Infection and immunity last a fixed number of ticks. Infection pressure is
/// the infected share of the neighbourhood.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDurationRule {
    pub infection_period: NonZeroU32,
    pub recovery_period: NonZeroU32,
}

impl FixedDurationRule {
    pub fn infection_prob(infected: usize, degree: usize) -> f64 {
        if degree == 0 {
            0.0
        } else {
            infected as f64 / degree as f64
        }
    }
}

impl TransitionRule for FixedDurationRule {
    fn seed_timer(&self) -> u32 {
        self.infection_period.get()
    }

    fn transition<R: Rng>(
        &self,
        state: InfectionState,
        timer: u32,
        infected_neighbours: usize,
        degree: usize,
        rng: &mut R,
    ) -> (InfectionState, u32) {
        match state {
            InfectionState::Susceptible => {
                let draw: f64 = rng.gen();
                if draw < Self::infection_prob(infected_neighbours, degree) {
                    (InfectionState::Infected, self.infection_period.get())
                } else {
                    (InfectionState::Susceptible, 0)
                }
            }
            InfectionState::Infected => match timer.saturating_sub(1) {
                0 => (InfectionState::Recovered, self.recovery_period.get()),
                left => (InfectionState::Infected, left),
            },
            InfectionState::Recovered => match timer.saturating_sub(1) {
                0 => (InfectionState::Susceptible, 0),
                left => (InfectionState::Recovered, left),
            },
        }
    }
}

/// The transition rule picked by the configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum TransitionPolicy {
    Probabilistic(ProbabilisticRule),
    FixedDuration(FixedDurationRule),
}

impl TransitionPolicy {
    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Probabilistic(_) => PolicyKind::Probabilistic,
            Self::FixedDuration(_) => PolicyKind::FixedDuration,
        }
    }
}

impl TransitionRule for TransitionPolicy {
    fn seed_timer(&self) -> u32 {
        match self {
            Self::Probabilistic(rule) => rule.seed_timer(),
            Self::FixedDuration(rule) => rule.seed_timer(),
        }
    }

    fn transition<R: Rng>(
        &self,
        state: InfectionState,
        timer: u32,
        infected_neighbours: usize,
        degree: usize,
        rng: &mut R,
    ) -> (InfectionState, u32) {
        match self {
            Self::Probabilistic(rule) => {
                rule.transition(state, timer, infected_neighbours, degree, rng)
            }
            Self::FixedDuration(rule) => {
                rule.transition(state, timer, infected_neighbours, degree, rng)
            }
        }
    }
}
