pub mod grid_f64;
pub use grid_f64::*;
