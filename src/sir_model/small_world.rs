use {
    super::*,
    crate::{
        error::{Result, SirsError},
        small_world::{AdjacencyIndex, RewireEngine, RewireStats, SmallWorldGraph},
    },
    rand::SeedableRng,
    rand_pcg::Pcg64,
    tracing::warn,
};

/// Contact network of a run: the generated graph plus its neighbour index.
#[derive(Clone, Debug)]
pub struct SWModel {
    pub graph: SmallWorldGraph,
    pub adjacency: AdjacencyIndex,
    pub n: usize,
    component_count: usize,
}

impl SWModel {
    pub fn graph(&self) -> &SmallWorldGraph {
        &self.graph
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn rewire_stats(&self) -> RewireStats {
        self.graph.rewire_stats()
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Small world results are only meaningful on a single component.
    pub fn is_connected(&self) -> bool {
        self.component_count == 1
    }
}

impl TryFrom<SWOptions> for SWModel {
    type Error = SirsError;

    fn try_from(param: SWOptions) -> Result<Self> {
        let n = param.system_size.get();
        let mut graph_rng = Pcg64::seed_from_u64(param.graph_seed);
        let rewire = RewireEngine::new(param.rewire_mode, param.rewire_prob)?;
        let graph = SmallWorldGraph::generate(n, param.degree, &rewire, &mut graph_rng)?;
        let adjacency = graph.adjacency();
        let component_count = adjacency.component_count();
        if component_count != 1 {
            warn!(
                component_count,
                rewire_prob = param.rewire_prob,
                graph_seed = param.graph_seed,
                "contact network is not connected"
            );
        }
        Ok(Self {
            graph,
            adjacency,
            n,
            component_count,
        })
    }
}
