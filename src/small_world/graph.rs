use {
    super::*,
    crate::error::Result,
    rand::Rng,
    serde::{Deserialize, Serialize},
    tracing::debug,
};

/// Undirected edge between two node ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }

    /// Orientation independent key, smaller id first.
    pub fn key(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: usize,
}

/// Node and edge lists handed to renderers and exporters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<Edge>,
}

/// A rewired ring lattice. Immutable once generated.
#[derive(Clone, Debug)]
pub struct SmallWorldGraph {
    system_size: usize,
    edges: Vec<Edge>,
    stats: RewireStats,
}

impl SmallWorldGraph {
    /// Builds the ring lattice for `n` and `k` and lets `rewire` redirect its
    /// edges.
    pub fn generate<R: Rng>(
        n: usize,
        k: usize,
        rewire: &RewireEngine,
        rng: &mut R,
    ) -> Result<Self> {
        let mut edges = ring_lattice(n, k)?;
        let stats = rewire.rewire(n, &mut edges, rng);
        debug!(
            n,
            k,
            edges = edges.len(),
            rewired = stats.rewired,
            skipped = stats.skipped,
            "generated small world graph"
        );
        Ok(Self {
            system_size: n,
            edges,
            stats,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.system_size
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn rewire_stats(&self) -> RewireStats {
        self.stats
    }

    pub fn adjacency(&self) -> AdjacencyIndex {
        AdjacencyIndex::from_edges(self.system_size, &self.edges)
    }

    pub fn export(&self) -> GraphExport {
        GraphExport {
            nodes: (0..self.system_size).map(|id| NodeRecord { id }).collect(),
            edges: self.edges.clone(),
        }
    }
}
