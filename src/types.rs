use serde::{Deserialize, Serialize};

/// Raw per-agent outcome of one simulated episode.
///
/// Produced by the simulation, consumed by the fitness formula in
/// `engines::metrics`. The fields mirror what the agent tracks while the
/// episode runs; nothing here is derived.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EpisodeMetrics {
    pub collisions: u32,
    pub shots_fired: u32,
    pub hits: u32,
    pub distance_traveled: f64,
    pub time_alive: f64,
}

/// Summary record emitted once per generation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub best_fitness: f64,
    pub worst_fitness: f64,
    pub mean_fitness: f64,
    pub median_fitness: f64,
    pub std_dev: f64,
    pub total_hits: u32,
    pub total_shots: u32,
}

impl GenerationRecord {
    /// Overall hit accuracy for the generation, in percent. 0 when no
    /// shots were fired.
    pub fn accuracy_pct(&self) -> f64 {
        if self.total_shots == 0 {
            0.0
        } else {
            self.total_hits as f64 * 100.0 / self.total_shots as f64
        }
    }
}
