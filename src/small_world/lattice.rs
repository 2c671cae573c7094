use {
    super::Edge,
    crate::error::{Result, SirsError},
};

/// Rejects lattice parameters that cannot describe a ring lattice:
/// `n` must be positive, `k` even and smaller than `n`.
pub fn check_lattice_params(n: usize, k: usize) -> Result<()> {
    if n == 0 {
        return Err(SirsError::EmptyPopulation);
    }
    if k % 2 != 0 {
        return Err(SirsError::OddDegree { k });
    }
    if k >= n {
        return Err(SirsError::DegreeTooLarge { k, n });
    }
    Ok(())
}

/// Ring lattice of `n` nodes where every node is linked to its `k/2` nearest
/// neighbours on either side.
///
/// Edges are emitted node by node as `(i, (i + j) mod n)` for `j = 1..=k/2`,
/// which is also the order the rewiring step walks them in.
pub fn ring_lattice(n: usize, k: usize) -> Result<Vec<Edge>> {
    check_lattice_params(n, k)?;
    let half = k / 2;
    let mut edges = Vec::with_capacity(n * half);
    for i in 0..n {
        for j in 1..=half {
            edges.push(Edge::new(i, (i + j) % n));
        }
    }
    Ok(edges)
}
