use {
    super::InfectionState,
    serde::{Deserialize, Serialize},
};

/// Population per compartment.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub s: usize,
    pub i: usize,
    pub r: usize,
}

impl Counts {
    pub fn from_states(states: &[InfectionState]) -> Self {
        let mut counts = Self::default();
        states.iter().for_each(|state| match state {
            InfectionState::Susceptible => counts.s += 1,
            InfectionState::Infected => counts.i += 1,
            InfectionState::Recovered => counts.r += 1,
        });
        counts
    }

    pub fn total(&self) -> usize {
        self.s + self.i + self.r
    }
}

/// One recorded tick. Field names follow what the plotting side expects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeSeriesPoint {
    pub t: usize,
    #[serde(rename = "S")]
    pub s: usize,
    #[serde(rename = "I")]
    pub i: usize,
    #[serde(rename = "R")]
    pub r: usize,
    #[serde(rename = "SFrac")]
    pub s_frac: f64,
    #[serde(rename = "IFrac")]
    pub i_frac: f64,
    #[serde(rename = "RFrac")]
    pub r_frac: f64,
    /// Compartment of every node, indexed by node id. Only present when
    /// snapshots were requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub states: Option<Vec<InfectionState>>,
}

impl TimeSeriesPoint {
    pub fn counts(&self) -> Counts {
        Counts {
            s: self.s,
            i: self.i,
            r: self.r,
        }
    }
}

/// Collects one [`TimeSeriesPoint`] per recorded tick.
///
/// Only counts are kept unless snapshots are switched on, in which case every
/// point also carries a copy of all node states.
#[derive(Clone, Debug)]
pub struct TimeSeriesRecorder {
    system_size: usize,
    snapshots: bool,
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeriesRecorder {
    pub fn new(system_size: usize, snapshots: bool) -> Self {
        Self {
            system_size,
            snapshots,
            points: Vec::new(),
        }
    }

    pub fn with_capacity(system_size: usize, snapshots: bool, ticks: usize) -> Self {
        Self {
            system_size,
            snapshots,
            points: Vec::with_capacity(ticks),
        }
    }

    pub fn record(&mut self, t: usize, states: &[InfectionState]) -> &TimeSeriesPoint {
        debug_assert_eq!(states.len(), self.system_size);
        let counts = Counts::from_states(states);
        let n = self.system_size as f64;
        self.points.push(TimeSeriesPoint {
            t,
            s: counts.s,
            i: counts.i,
            r: counts.r,
            s_frac: counts.s as f64 / n,
            i_frac: counts.i as f64 / n,
            r_frac: counts.r as f64 / n,
            states: self.snapshots.then(|| states.to_vec()),
        });
        &self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[TimeSeriesPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&TimeSeriesPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn infected_fractions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.i_frac)
    }

    pub fn into_points(self) -> Vec<TimeSeriesPoint> {
        self.points
    }
}
