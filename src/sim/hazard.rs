use crate::sim::vec2::Vec2;

/// One scripted hazard: a straight parametric flight from its spawn
/// point to its destination at fixed speed. Position updates are plain
/// interpolation, not physics.
#[derive(Debug, Clone)]
pub struct Hazard {
    start: Vec2,
    destination: Vec2,
    position: Vec2,
    velocity: Vec2,
    /// Interpolation parameter in [0, 1].
    progress: f64,
    flight_time: f64,
    arrived: bool,
}

impl Hazard {
    pub fn new(spawn: Vec2, destination: Vec2, speed: f64) -> Self {
        debug_assert!(speed > 0.0);
        let flight_time = spawn.distance(destination) / speed;
        let velocity = (destination - spawn).normalized() * speed;

        Self {
            start: spawn,
            destination,
            position: spawn,
            velocity,
            progress: 0.0,
            flight_time,
            arrived: false,
        }
    }

    pub fn step(&mut self, dt: f64) {
        if self.arrived {
            return;
        }

        self.progress += dt / self.flight_time;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.arrived = true;
        }
        self.position = Vec2::lerp(self.start, self.destination, self.progress);
    }

    pub fn destination_reached(&self) -> bool {
        self.arrived
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }
}
