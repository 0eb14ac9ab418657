use super::{evolution::EvolutionConfig, simulation::SimulationConfig, traits::ConfigSection};
use crate::engines::policy::STATE_COUNT;
use crate::error::EvopilotError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), EvopilotError> {
        self.evolution.validate()?;
        self.simulation.validate()?;

        // Gene i of a policy addresses state id i, so the genome must
        // cover the full state space of the sensor scheme.
        if self.evolution.genome_length != STATE_COUNT {
            return Err(EvopilotError::Configuration(format!(
                "Genome length {} does not match the state space size {}",
                self.evolution.genome_length, STATE_COUNT
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvopilotError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EvopilotError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    pub fn update<F>(&self, f: F) -> Result<(), EvopilotError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        f(&mut config);
        config.validate()?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
