use {
    super::Edge,
    crate::error::{Result, SirsError},
    rand::Rng,
    rand_distr::{Bernoulli, Distribution, Uniform},
    serde::{Deserialize, Serialize},
    std::collections::HashSet,
    tracing::debug,
};

/// Upper bound on target draws for a single edge before it is left in place.
pub const DEFAULT_REWIRE_ATTEMPTS: usize = 256;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RewireMode {
    /// Redirect to a uniformly drawn node that is neither the source itself
    /// nor already one of its neighbours.
    #[default]
    Strict,
    /// Redirect to any uniformly drawn node. Self-loops and parallel edges
    /// may appear.
    Naive,
}

/// Bookkeeping of one rewiring pass.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewireStats {
    /// Edges whose coin flip asked for a new target and got one.
    pub rewired: usize,
    /// Edges that were selected but kept, because no valid target was found.
    pub skipped: usize,
    pub self_loops: usize,
    /// Edges repeating an earlier entry of the edge list.
    pub duplicates: usize,
}

#[derive(Clone, Debug)]
pub struct RewireEngine {
    mode: RewireMode,
    coin: Bernoulli,
    max_attempts: usize,
}

impl RewireEngine {
    pub fn new(mode: RewireMode, rewire_prob: f64) -> Result<Self> {
        let coin = Bernoulli::new(rewire_prob).map_err(|_| SirsError::InvalidProbability {
            name: "rewire_prob",
            value: rewire_prob,
        })?;
        Ok(Self {
            mode,
            coin,
            max_attempts: DEFAULT_REWIRE_ATTEMPTS,
        })
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn mode(&self) -> RewireMode {
        self.mode
    }

    /// Walks `edges` in order and, with the rewiring probability, moves the
    /// far endpoint of each one. The number of edges never changes.
    pub fn rewire<R: Rng>(&self, n: usize, edges: &mut [Edge], rng: &mut R) -> RewireStats {
        let mut stats = match self.mode {
            RewireMode::Strict => self.rewire_strict(n, edges, rng),
            RewireMode::Naive => self.rewire_naive(n, edges, rng),
        };
        let (self_loops, duplicates) = count_defects(edges);
        stats.self_loops = self_loops;
        stats.duplicates = duplicates;
        if stats.skipped > 0 {
            debug!(skipped = stats.skipped, "left edges unrewired, no valid target");
        }
        stats
    }

    fn rewire_strict<R: Rng>(&self, n: usize, edges: &mut [Edge], rng: &mut R) -> RewireStats {
        let mut stats = RewireStats::default();
        let mut adj: Vec<HashSet<usize>> = vec![HashSet::new(); n];
        for e in edges.iter() {
            adj[e.source].insert(e.target);
            adj[e.target].insert(e.source);
        }
        let target_dist = Uniform::new(0, n);

        for edge in edges.iter_mut() {
            if !self.coin.sample(rng) {
                continue;
            }
            let (u, v) = (edge.source, edge.target);
            adj[u].remove(&v);
            adj[v].remove(&u);

            match self.draw_target(u, &adj[u], n, &target_dist, rng) {
                Some(w) => {
                    adj[u].insert(w);
                    adj[w].insert(u);
                    *edge = Edge::new(u, w);
                    stats.rewired += 1;
                }
                None => {
                    adj[u].insert(v);
                    adj[v].insert(u);
                    stats.skipped += 1;
                }
            }
        }
        stats
    }

    fn draw_target<R: Rng>(
        &self,
        u: usize,
        neighbours: &HashSet<usize>,
        n: usize,
        target_dist: &Uniform<usize>,
        rng: &mut R,
    ) -> Option<usize> {
        // u is linked to everything else already
        if neighbours.len() + 1 >= n {
            return None;
        }
        (0..self.max_attempts)
            .map(|_| target_dist.sample(rng))
            .find(|&w| w != u && !neighbours.contains(&w))
    }

    fn rewire_naive<R: Rng>(&self, n: usize, edges: &mut [Edge], rng: &mut R) -> RewireStats {
        let mut stats = RewireStats::default();
        let target_dist = Uniform::new(0, n);
        for edge in edges.iter_mut() {
            if self.coin.sample(rng) {
                edge.target = target_dist.sample(rng);
                stats.rewired += 1;
            }
        }
        stats
    }
}

/// Counts self-loops and repeated edges (in either orientation).
pub fn count_defects(edges: &[Edge]) -> (usize, usize) {
    let mut seen = HashSet::with_capacity(edges.len());
    let mut self_loops = 0;
    let mut duplicates = 0;
    for e in edges {
        if e.is_self_loop() {
            self_loops += 1;
        }
        if !seen.insert(e.key()) {
            duplicates += 1;
        }
    }
    (self_loops, duplicates)
}
