//! Pack drawing: weighted pools and the random source seam.

pub mod rng;
pub mod simulator;

pub use rng::{RandomSource, RngSource};
pub use simulator::{DrawEngine, DrawnCard, WeightedPool};
