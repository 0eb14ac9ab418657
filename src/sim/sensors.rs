use crate::config::SensorThresholds;
use crate::engines::policy::{ObservedState, RelativeDirection, ThreatLevel, WallProximity};
use crate::sim::vec2::Vec2;

/// Continuous observations of the active hazard from one agent's point
/// of view, before classification.
#[derive(Debug, Clone, Copy)]
pub struct Observation {
    /// Signed angle in degrees between the agent's and the hazard's
    /// position vectors; positive counter-clockwise.
    pub bearing_deg: f64,
    pub distance: f64,
    /// Relative speed along the hazard-to-agent axis; negative while
    /// the two are closing.
    pub closing_speed: f64,
}

/// Measure the active hazard relative to an agent.
pub fn observe(
    agent_pos: Vec2,
    agent_vel: Vec2,
    hazard_pos: Vec2,
    hazard_vel: Vec2,
) -> Observation {
    let bearing_deg = signed_angle_deg(agent_pos, hazard_pos);

    let heading = agent_pos - hazard_pos;
    let relative_velocity = agent_vel - hazard_vel;
    let closing_speed = relative_velocity.dot(heading.normalized());

    Observation {
        bearing_deg,
        distance: agent_pos.distance(hazard_pos),
        closing_speed,
    }
}

/// Classify a full observation into the discrete state triple.
pub fn classify(
    observation: &Observation,
    wall_distance: f64,
    thresholds: &SensorThresholds,
) -> ObservedState {
    ObservedState::new(
        classify_direction(observation.bearing_deg),
        classify_threat(observation.distance, observation.closing_speed, thresholds),
        classify_wall(wall_distance, thresholds),
    )
}

pub fn classify_direction(angle_deg: f64) -> RelativeDirection {
    let mut angle = angle_deg;
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle < -180.0 {
        angle += 360.0;
    }

    if (-45.0..45.0).contains(&angle) {
        RelativeDirection::Ahead
    } else if (45.0..135.0).contains(&angle) {
        RelativeDirection::Right
    } else if !(-135.0..135.0).contains(&angle) {
        RelativeDirection::Behind
    } else {
        RelativeDirection::Left
    }
}

pub fn classify_threat(
    distance: f64,
    closing_speed: f64,
    thresholds: &SensorThresholds,
) -> ThreatLevel {
    if distance < thresholds.threat_critical_distance
        && closing_speed < thresholds.threat_critical_closing
    {
        ThreatLevel::Critical
    } else if distance < thresholds.threat_high_distance && closing_speed < 0.0 {
        ThreatLevel::High
    } else if distance < thresholds.threat_medium_distance
        || closing_speed < thresholds.threat_medium_closing
    {
        ThreatLevel::Medium
    } else {
        ThreatLevel::Low
    }
}

pub fn classify_wall(distance: f64, thresholds: &SensorThresholds) -> WallProximity {
    if distance < thresholds.wall_critical {
        WallProximity::Critical
    } else if distance < thresholds.wall_very_near {
        WallProximity::VeryNear
    } else if distance < thresholds.wall_near {
        WallProximity::Near
    } else {
        WallProximity::None
    }
}

fn signed_angle_deg(from: Vec2, to: Vec2) -> f64 {
    from.cross(to).atan2(from.dot(to)).to_degrees()
}
