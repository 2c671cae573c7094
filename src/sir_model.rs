pub mod sir_states;
pub use sir_states::*;

pub mod small_world_options;
pub use small_world_options::*;

pub mod small_world;
pub use small_world::*;

pub mod transition;
pub use transition::*;

pub mod recorder;
pub use recorder::*;

pub mod simple_prop;
pub use simple_prop::*;
