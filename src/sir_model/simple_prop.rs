use {
    super::*,
    crate::config::RecordingBoundary,
    rand::{seq::SliceRandom, SeedableRng},
    rand_pcg::Pcg64,
    std::ops::Deref,
};

/// Resolved seeding, see [`crate::config::SeedingPolicy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitialInfection {
    /// This many distinct nodes, drawn from a uniform permutation.
    Random(usize),
    Nodes(Vec<usize>),
}

/// Discrete time SIRS process on a fixed contact network.
///
/// Updates are synchronous. Every tick reads only the states of the previous
/// tick and writes into a second buffer which replaces the current one once
/// all nodes have been evaluated.
#[derive(Clone)]
pub struct SirsSimulation<P = TransitionPolicy> {
    base_model: SWModel,
    rule: P,
    seeding: InitialInfection,
    states: Vec<InfectionState>,
    timers: Vec<u32>,
    next_states: Vec<InfectionState>,
    next_timers: Vec<u32>,
    rng_type: Pcg64,
    tick: usize,
}

impl<P> Deref for SirsSimulation<P> {
    type Target = SWModel;
    fn deref(&self) -> &Self::Target {
        &self.base_model
    }
}

impl<P: TransitionRule> SirsSimulation<P> {
    /// Seeds the initial infection right away, so the returned simulation is
    /// at tick 0.
    pub fn from_base(
        base_model: SWModel,
        rule: P,
        seeding: InitialInfection,
        sir_seed: u64,
    ) -> Self {
        let n = base_model.n;
        let mut res = Self {
            base_model,
            rule,
            seeding,
            states: vec![InfectionState::Susceptible; n],
            timers: vec![0; n],
            next_states: vec![InfectionState::Susceptible; n],
            next_timers: vec![0; n],
            rng_type: Pcg64::seed_from_u64(sir_seed),
            tick: 0,
        };
        res.reset_sirs_simulation();
        res
    }

    /// Everyone susceptible, then the initial infection is drawn again.
    pub fn reset_sirs_simulation(&mut self) {
        self.states.fill(InfectionState::Susceptible);
        self.timers.fill(0);
        self.tick = 0;

        let seed_timer = self.rule.seed_timer();
        let n = self.states.len();
        let infected: Vec<usize> = match &self.seeding {
            InitialInfection::Random(count) => {
                let mut ids: Vec<usize> = (0..n).collect();
                ids.shuffle(&mut self.rng_type);
                ids.truncate((*count).min(n));
                ids
            }
            InitialInfection::Nodes(nodes) => nodes.clone(),
        };
        for id in infected {
            if let (Some(state), Some(timer)) = (self.states.get_mut(id), self.timers.get_mut(id)) {
                *state = InfectionState::Infected;
                *timer = seed_timer;
            }
        }
    }

    /// Applies one synchronous tick.
    pub fn step(&mut self) {
        let Self {
            base_model,
            rule,
            states,
            timers,
            next_states,
            next_timers,
            rng_type,
            ..
        } = self;
        let adjacency = &base_model.adjacency;

        for node in 0..states.len() {
            let state = states[node];
            let infected = if state.sus_check() {
                adjacency
                    .neighbors(node)
                    .iter()
                    .filter(|&&nb| states[nb].inf_check())
                    .count()
            } else {
                0
            };
            let (next, timer) =
                rule.transition(state, timers[node], infected, adjacency.degree(node), rng_type);
            next_states[node] = next;
            next_timers[node] = timer;
        }

        std::mem::swap(states, next_states);
        std::mem::swap(timers, next_timers);
        self.tick += 1;
    }

    /// Runs exactly `steps` ticks, recording one point per tick.
    pub fn run(
        &mut self,
        steps: usize,
        boundary: RecordingBoundary,
        recorder: &mut TimeSeriesRecorder,
    ) {
        self.run_until(steps, boundary, recorder, |_| false);
    }

    /// Like [`run`](Self::run), but `stop` is asked after every tick whether
    /// to end early. Returns the number of ticks applied.
    pub fn run_until<F>(
        &mut self,
        steps: usize,
        boundary: RecordingBoundary,
        recorder: &mut TimeSeriesRecorder,
        mut stop: F,
    ) -> usize
    where
        F: FnMut(&TimeSeriesPoint) -> bool,
    {
        for done in 0..steps {
            let point = match boundary {
                RecordingBoundary::PreStep => {
                    let point = recorder.record(self.tick, &self.states);
                    self.step();
                    point
                }
                RecordingBoundary::PostStep => {
                    self.step();
                    recorder.record(self.tick - 1, &self.states)
                }
            };
            if stop(point) {
                return done + 1;
            }
        }
        steps
    }

    /// Ticks applied since the last reset.
    pub fn tick(&self) -> usize {
        self.tick
    }

    pub fn states(&self) -> &[InfectionState] {
        &self.states
    }

    pub fn timers(&self) -> &[u32] {
        &self.timers
    }

    pub fn counts(&self) -> Counts {
        Counts::from_states(&self.states)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::small_world::RewireMode,
        std::num::{NonZeroU32, NonZeroUsize},
        InfectionState::*,
    };

    fn model(n: usize, k: usize, c: f64) -> SWModel {
        SWModel::try_from(SWOptions {
            graph_seed: 7,
            rewire_prob: c,
            rewire_mode: RewireMode::Strict,
            system_size: NonZeroUsize::new(n).unwrap(),
            degree: k,
        })
        .unwrap()
    }

    fn probabilistic(beta: f64, gamma: f64, omega: f64) -> TransitionPolicy {
        TransitionPolicy::Probabilistic(ProbabilisticRule { beta, gamma, omega })
    }

    fn fixed(i: u32, r: u32) -> TransitionPolicy {
        TransitionPolicy::FixedDuration(FixedDurationRule {
            infection_period: NonZeroU32::new(i).unwrap(),
            recovery_period: NonZeroU32::new(r).unwrap(),
        })
    }

    #[test]
    fn seeding_picks_distinct_nodes() {
        let sim = SirsSimulation::from_base(
            model(50, 4, 0.1),
            fixed(4, 2),
            InitialInfection::Random(7),
            11,
        );
        assert_eq!(sim.counts(), Counts { s: 43, i: 7, r: 0 });
        assert_eq!(sim.tick(), 0);
        for (state, timer) in sim.states().iter().zip(sim.timers()) {
            let expected = if state.inf_check() { 4 } else { 0 };
            assert_eq!(*timer, expected);
        }

        let again = SirsSimulation::from_base(
            model(50, 4, 0.1),
            fixed(4, 2),
            InitialInfection::Random(7),
            11,
        );
        assert_eq!(sim.states(), again.states());
    }

    #[test]
    fn reset_redraws_the_seeds() {
        let mut sim = SirsSimulation::from_base(
            model(200, 4, 0.0),
            probabilistic(0.2, 0.1, 0.1),
            InitialInfection::Random(3),
            5,
        );
        let first = sim.states().to_vec();
        sim.step();
        sim.reset_sirs_simulation();
        assert_eq!(sim.tick(), 0);
        assert_eq!(sim.counts().i, 3);
        assert_ne!(sim.states(), &first[..]);
    }

    #[test]
    fn infection_front_moves_one_hop_per_tick() {
        // ring with k = 2, certain transmission: an in place update would let
        // the infection run around the ring within a single tick
        let mut sim = SirsSimulation::from_base(
            model(21, 2, 0.0),
            probabilistic(1.0, 0.0, 0.0),
            InitialInfection::Nodes(vec![0]),
            1,
        );
        for t in 1..=10 {
            sim.step();
            assert_eq!(sim.counts().i, 1 + 2 * t);
        }
        sim.step();
        assert_eq!(sim.counts().i, 21);
    }

    #[test]
    fn fixed_durations_are_deterministic() {
        let (p, r) = (4, 3);
        let mut sim = SirsSimulation::from_base(
            model(30, 4, 0.0),
            fixed(p, r),
            InitialInfection::Nodes(vec![0]),
            3,
        );
        let mut history = vec![sim.states()[0]];
        for _ in 0..(p + r) {
            sim.step();
            history.push(sim.states()[0]);
        }
        let p = p as usize;
        let r = r as usize;
        assert!(history[..p].iter().all(|s| *s == Infected));
        assert!(history[p..p + r].iter().all(|s| *s == Recovered));
        assert_eq!(history[p + r], Susceptible);
    }

    #[test]
    fn no_transmission_drains_the_infected() {
        let mut sim = SirsSimulation::from_base(
            model(100, 4, 0.2),
            probabilistic(0.0, 0.3, 0.2),
            InitialInfection::Random(20),
            9,
        );
        let mut last = sim.counts().i;
        for _ in 0..300 {
            sim.step();
            let infected = sim.counts().i;
            assert!(infected <= last);
            last = infected;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn recording_boundaries() {
        let base = model(80, 6, 0.1);
        let policy = probabilistic(0.2, 0.1, 0.05);

        let mut pre = SirsSimulation::from_base(base.clone(), policy, InitialInfection::Random(4), 21);
        let mut rec = TimeSeriesRecorder::new(80, false);
        pre.run(30, RecordingBoundary::PreStep, &mut rec);
        assert_eq!(rec.len(), 30);
        assert_eq!(pre.tick(), 30);
        assert_eq!(rec.points()[0].t, 0);
        assert_eq!(rec.points()[0].i, 4);

        let mut post = SirsSimulation::from_base(base, policy, InitialInfection::Random(4), 21);
        let mut rec_post = TimeSeriesRecorder::new(80, false);
        post.run(30, RecordingBoundary::PostStep, &mut rec_post);
        assert_eq!(rec_post.len(), 30);

        // same seeds: post step point t is pre step point t + 1
        for (a, b) in rec.points()[1..].iter().zip(rec_post.points()) {
            assert_eq!(a.counts(), b.counts());
            assert_eq!(a.t, b.t + 1);
        }
        assert_eq!(rec_post.last().unwrap().counts(), post.counts());

        for p in rec.points().iter().chain(rec_post.points()) {
            assert_eq!(p.counts().total(), 80);
        }
    }

    #[test]
    fn early_stop_at_tick_boundary() {
        let mut sim = SirsSimulation::from_base(
            model(60, 4, 0.1),
            probabilistic(0.0, 0.5, 0.0),
            InitialInfection::Random(6),
            2,
        );
        let mut rec = TimeSeriesRecorder::new(60, false);
        let ticks = sim.run_until(1000, RecordingBoundary::PostStep, &mut rec, |p| p.i == 0);
        assert!(ticks < 1000);
        assert_eq!(ticks, rec.len());
        assert_eq!(sim.tick(), ticks);
        assert_eq!(rec.last().unwrap().i, 0);
    }

    #[test]
    fn runs_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<SirsSimulation>();
    }
}
