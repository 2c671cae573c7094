use {
    super::Edge,
    std::collections::{HashSet, VecDeque},
};

/// Symmetric neighbour lookup built once from an edge list.
///
/// Neighbour lists are kept sorted so enumeration order, and therefore
/// everything downstream that consumes randomness per neighbour, is
/// reproducible. Membership queries go through a hash set per node.
/// Self-loops are dropped and parallel edges collapse into one.
#[derive(Clone, Debug)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<usize>>,
    lookup: Vec<HashSet<usize>>,
}

impl AdjacencyIndex {
    pub fn from_edges(n: usize, edges: &[Edge]) -> Self {
        let mut lookup: Vec<HashSet<usize>> = vec![HashSet::new(); n];
        for e in edges.iter().filter(|e| !e.is_self_loop()) {
            lookup[e.source].insert(e.target);
            lookup[e.target].insert(e.source);
        }
        let neighbors = lookup
            .iter()
            .map(|set| {
                let mut list: Vec<usize> = set.iter().copied().collect();
                list.sort_unstable();
                list
            })
            .collect();
        Self { neighbors, lookup }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    pub fn is_neighbor(&self, u: usize, v: usize) -> bool {
        self.lookup[u].contains(&v)
    }

    /// Sizes of all connected components, largest first.
    pub fn connected_components(&self) -> Vec<usize> {
        let n = self.vertex_count();
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        let mut sizes = Vec::new();

        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            queue.push_back(start);
            let mut size = 0;
            while let Some(node) = queue.pop_front() {
                size += 1;
                for &nb in &self.neighbors[node] {
                    if !visited[nb] {
                        visited[nb] = true;
                        queue.push_back(nb);
                    }
                }
            }
            sizes.push(size);
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes
    }

    pub fn component_count(&self) -> usize {
        self.connected_components().len()
    }

    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }
}
