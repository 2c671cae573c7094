pub mod graph;
pub use graph::*;

pub mod lattice;
pub use lattice::*;

pub mod rewire;
pub use rewire::*;

pub mod adjacency;
pub use adjacency::*;
