use super::traits::ConfigSection;
use crate::error::EvopilotError;
use serde::{Deserialize, Serialize};

/// Thresholds for classifying continuous observations into the discrete
/// sensor categories. Distances are in world units, closing speed is
/// negative when the hazard and agent are approaching each other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorThresholds {
    pub threat_critical_distance: f64,
    pub threat_critical_closing: f64,
    pub threat_high_distance: f64,
    pub threat_medium_distance: f64,
    pub threat_medium_closing: f64,
    pub wall_critical: f64,
    pub wall_very_near: f64,
    pub wall_near: f64,
}

impl Default for SensorThresholds {
    fn default() -> Self {
        Self {
            threat_critical_distance: 4.0,
            threat_critical_closing: -3.0,
            threat_high_distance: 6.0,
            threat_medium_distance: 8.0,
            threat_medium_closing: 3.0,
            wall_critical: 0.5,
            wall_very_near: 1.5,
            wall_near: 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Half-extent of the arena the agents are clamped to.
    pub x_bound: f64,
    pub y_bound: f64,
    /// Half-extent of the larger region hazards spawn on and fly across.
    pub hazard_x_bound: f64,
    pub hazard_y_bound: f64,
    /// Number of scripted hazard events per episode; the episode ends
    /// when the quota is consumed.
    pub hazard_quota: usize,
    pub hazard_min_speed: f64,
    pub hazard_max_speed: f64,
    /// Fixed simulation time step in seconds.
    pub time_step: f64,
    pub max_ammo: u32,
    pub fire_cooldown: f64,
    pub projectile_speed: f64,
    pub projectile_lifetime: f64,
    pub projectile_spawn_offset: f64,
    /// Contact radius for agent-hazard collisions.
    pub hazard_contact_radius: f64,
    /// Contact radius for projectile-hazard hits.
    pub projectile_contact_radius: f64,
    pub sensors: SensorThresholds,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            x_bound: 9.0,
            y_bound: 5.0,
            hazard_x_bound: 13.0,
            hazard_y_bound: 8.0,
            hazard_quota: 40,
            hazard_min_speed: 2.0,
            hazard_max_speed: 5.0,
            time_step: 0.02,
            max_ammo: 20,
            fire_cooldown: 1.0,
            projectile_speed: 10.0,
            projectile_lifetime: 3.0,
            projectile_spawn_offset: 1.0,
            hazard_contact_radius: 0.6,
            projectile_contact_radius: 0.4,
            sensors: SensorThresholds::default(),
        }
    }
}

impl ConfigSection for SimulationConfig {
    fn section_name() -> &'static str {
        "simulation"
    }

    fn validate(&self) -> Result<(), EvopilotError> {
        if self.x_bound <= 0.0 || self.y_bound <= 0.0 {
            return Err(EvopilotError::Configuration(
                "Arena bounds must be positive".to_string(),
            ));
        }
        if self.hazard_x_bound < self.x_bound || self.hazard_y_bound < self.y_bound {
            return Err(EvopilotError::Configuration(
                "Hazard bounds must enclose the arena bounds".to_string(),
            ));
        }
        if self.hazard_quota == 0 {
            return Err(EvopilotError::Configuration(
                "Hazard quota must be at least 1".to_string(),
            ));
        }
        if self.hazard_min_speed <= 0.0 || self.hazard_max_speed <= self.hazard_min_speed {
            return Err(EvopilotError::Configuration(
                "Hazard speed range must be positive and non-empty".to_string(),
            ));
        }
        if self.time_step <= 0.0 {
            return Err(EvopilotError::Configuration(
                "Time step must be positive".to_string(),
            ));
        }
        if self.fire_cooldown < 0.0 {
            return Err(EvopilotError::Configuration(
                "Fire cooldown cannot be negative".to_string(),
            ));
        }
        if self.projectile_speed <= 0.0 || self.projectile_lifetime <= 0.0 {
            return Err(EvopilotError::Configuration(
                "Projectile speed and lifetime must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
