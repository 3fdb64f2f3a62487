pub mod env;
pub mod error;
pub mod policies;
pub mod rng;
pub mod sampler;
pub mod utils;
