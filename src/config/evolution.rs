use super::traits::ConfigSection;
use crate::error::EvopilotError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub genome_length: usize,
    pub mutation_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 30,
            genome_length: crate::engines::policy::STATE_COUNT,
            mutation_rate: 0.02,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), EvopilotError> {
        // Truncation selection draws from the top half, so the population
        // must have a non-empty top half.
        if self.population_size < 2 {
            return Err(EvopilotError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(EvopilotError::Configuration(
                "Generation budget must be at least 1".to_string(),
            ));
        }
        if self.genome_length == 0 {
            return Err(EvopilotError::Configuration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        if self.mutation_rate < 0.0 || self.mutation_rate > 1.0 {
            return Err(EvopilotError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
