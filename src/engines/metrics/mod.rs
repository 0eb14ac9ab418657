pub mod engine;
pub mod stats;

pub use engine::{episode_fitness, generation_record};
