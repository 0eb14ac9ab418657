pub mod traits;
pub mod evolution;
pub mod simulation;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::EvolutionConfig;
pub use simulation::{SensorThresholds, SimulationConfig};
