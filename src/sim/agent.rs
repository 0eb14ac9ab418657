use crate::config::SimulationConfig;
use crate::engines::policy::action::SPEED_SLOW;
use crate::engines::policy::{Action, ObservedState, Policy};
use crate::sim::vec2::Vec2;
use crate::types::EpisodeMetrics;

/// One simulated agent for the duration of a single episode.
///
/// The agent owns its decoded policy, its kinematic state and its raw
/// episode metrics. Heading is in degrees with 0 pointing north
/// (positive y) and positive turns going clockwise.
#[derive(Debug)]
pub struct Agent {
    position: Vec2,
    heading_deg: f64,
    speed: f64,
    current_action: Action,
    policy: Option<Policy>,
    state_id: usize,
    ammo: u32,
    last_shot_time: f64,
    fire_cooldown: f64,
    x_bound: f64,
    y_bound: f64,
    metrics: EpisodeMetrics,
}

impl Agent {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            heading_deg: 0.0,
            speed: SPEED_SLOW,
            current_action: Action::SlowForward,
            policy: None,
            state_id: 0,
            ammo: config.max_ammo,
            // Far enough in the past that the first shot is never
            // cooldown-gated.
            last_shot_time: -999.0,
            fire_cooldown: config.fire_cooldown,
            x_bound: config.x_bound,
            y_bound: config.y_bound,
            metrics: EpisodeMetrics::default(),
        }
    }

    /// Bind the decoded policy this agent acts by. Without one the
    /// agent keeps its default action for the whole episode.
    pub fn set_policy(&mut self, policy: Policy) {
        self.policy = Some(policy);
    }

    pub fn has_policy(&self) -> bool {
        self.policy.is_some()
    }

    pub fn set_state(&mut self, state: ObservedState) {
        self.state_id = state.id();
    }

    /// Decode and apply the action for the current state. Returns true
    /// when a shot was actually fired this call (the scheduler then
    /// spawns the projectile).
    ///
    /// Two fail-soft paths keep the previous action: no policy bound,
    /// and a state id outside the policy. A repeated movement action is
    /// an idempotent no-op; a repeated Fire decision always re-attempts
    /// the shot, subject to the ammo and cooldown gate.
    pub fn select_action(&mut self, now: f64) -> bool {
        let Some(policy) = &self.policy else {
            return false;
        };

        match policy.action_for(self.state_id) {
            Some(action) => self.apply_action(action, now),
            None => {
                log::warn!("Cannot select action for state id {}", self.state_id);
                false
            }
        }
    }

    fn apply_action(&mut self, action: Action, now: f64) -> bool {
        if action == self.current_action && !action.is_fire() {
            return false;
        }
        self.current_action = action;

        match action.motion() {
            Some(motion) => {
                self.speed = motion.speed;
                if motion.turn != 0.0 {
                    self.adjust_heading(motion.turn);
                }
                false
            }
            // Fire leaves speed and heading untouched; the agent keeps
            // drifting on its previous motion.
            None => self.try_fire(now),
        }
    }

    /// Attempt a shot. Gated on remaining ammunition and the cooldown
    /// interval; a gated attempt consumes nothing and is not an error.
    pub fn try_fire(&mut self, now: f64) -> bool {
        if self.ammo == 0 {
            return false;
        }
        if now - self.last_shot_time < self.fire_cooldown {
            return false;
        }

        self.ammo -= 1;
        self.metrics.shots_fired += 1;
        self.last_shot_time = now;
        true
    }

    /// Integrate one time step and accumulate distance/time metrics.
    /// The position is clamped to the arena bounds after the move, and
    /// the clamped displacement is what counts as distance traveled.
    pub fn step(&mut self, dt: f64) {
        let before = self.position;

        self.position += self.heading_vec() * (self.speed * dt);
        self.position.x = self.position.x.clamp(-self.x_bound, self.x_bound);
        self.position.y = self.position.y.clamp(-self.y_bound, self.y_bound);

        self.metrics.distance_traveled += self.position.distance(before);
        self.metrics.time_alive += dt;
    }

    fn adjust_heading(&mut self, delta_deg: f64) {
        self.heading_deg += delta_deg;
        while self.heading_deg < 0.0 {
            self.heading_deg += 360.0;
        }
        while self.heading_deg >= 360.0 {
            self.heading_deg -= 360.0;
        }
    }

    /// Unit vector of the current heading (0 degrees = north).
    pub fn heading_vec(&self) -> Vec2 {
        let radians = self.heading_deg.to_radians();
        Vec2::new(radians.sin(), radians.cos())
    }

    pub fn velocity(&self) -> Vec2 {
        self.heading_vec() * self.speed
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn current_action(&self) -> Action {
        self.current_action
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    /// Distance to the nearest arena boundary.
    pub fn closest_wall_distance(&self) -> f64 {
        let to_right = self.x_bound - self.position.x;
        let to_left = self.position.x + self.x_bound;
        let to_top = self.y_bound - self.position.y;
        let to_bottom = self.position.y + self.y_bound;

        to_right.min(to_left).min(to_top).min(to_bottom)
    }

    pub fn on_hazard_collision(&mut self) {
        self.metrics.collisions += 1;
    }

    pub fn on_hazard_destroyed(&mut self) {
        self.metrics.hits += 1;
    }

    pub fn metrics(&self) -> EpisodeMetrics {
        self.metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::generation::Genome;
    use crate::engines::policy::{RelativeDirection, ThreatLevel, WallProximity, STATE_COUNT};

    fn test_agent() -> Agent {
        Agent::new(&SimulationConfig::default())
    }

    fn agent_with_uniform_policy(action_gene: u32) -> Agent {
        let mut agent = test_agent();
        let genome = Genome::from_genes(vec![action_gene; STATE_COUNT]);
        agent.set_policy(Policy::from_genome(&genome, STATE_COUNT).unwrap());
        agent
    }

    #[test]
    fn test_default_action_without_policy() {
        let mut agent = test_agent();
        assert!(!agent.select_action(0.0));
        assert_eq!(agent.current_action(), Action::SlowForward);

        agent.step(1.0);
        // Heading north at slow speed.
        assert!((agent.position().y - 1.0).abs() < 1e-9);
        assert!(agent.position().x.abs() < 1e-9);
    }

    #[test]
    fn test_movement_clamped_to_bounds() {
        let mut agent = test_agent();
        for _ in 0..20 {
            agent.step(1.0);
        }
        assert_eq!(agent.position().y, 5.0);
        // Distance stops accumulating once pinned at the wall.
        assert!(agent.metrics().distance_traveled < 5.0 + 1e-9);
        assert_eq!(agent.metrics().time_alive, 20.0);
    }

    #[test]
    fn test_repeated_turn_is_idempotent() {
        // Gene 5 decodes to SlowRight (+45 degrees).
        let mut agent = agent_with_uniform_policy(5);
        agent.set_state(ObservedState::new(
            RelativeDirection::Ahead,
            ThreatLevel::Low,
            WallProximity::None,
        ));

        agent.select_action(0.0);
        let heading_after_first = agent.heading_vec();
        agent.select_action(0.1);
        agent.select_action(0.2);

        assert_eq!(agent.heading_vec(), heading_after_first);
    }

    #[test]
    fn test_repeated_fire_respects_cooldown_then_refires() {
        // Gene 12 decodes to Fire.
        let mut agent = agent_with_uniform_policy(12);
        agent.set_state(ObservedState::new(
            RelativeDirection::Ahead,
            ThreatLevel::Low,
            WallProximity::None,
        ));

        assert!(agent.select_action(0.0));
        // Within the cooldown window: gated, silently.
        assert!(!agent.select_action(0.5));
        // Past the cooldown: fires again despite the unchanged action.
        assert!(agent.select_action(1.0));
        assert_eq!(agent.metrics().shots_fired, 2);
    }

    #[test]
    fn test_fire_gated_by_ammo() {
        let mut agent = test_agent();
        let max_ammo = agent.ammo();

        for shot in 0..max_ammo {
            assert!(agent.try_fire(shot as f64 * 10.0));
        }
        assert!(!agent.try_fire(1e6));
        assert_eq!(agent.metrics().shots_fired, max_ammo);
        assert_eq!(agent.ammo(), 0);
    }

    #[test]
    fn test_out_of_range_state_keeps_previous_action() {
        let mut agent = agent_with_uniform_policy(0);
        // Policy covers the full state space; aim past the end.
        agent.state_id = STATE_COUNT;
        assert!(!agent.select_action(0.0));
        assert_eq!(agent.current_action(), Action::SlowForward);
    }

    #[test]
    fn test_closest_wall_distance() {
        let mut agent = test_agent();
        agent.position = Vec2::new(8.0, 0.0);
        assert_eq!(agent.closest_wall_distance(), 1.0);
        agent.position = Vec2::new(0.0, -4.5);
        assert_eq!(agent.closest_wall_distance(), 0.5);
    }
}
