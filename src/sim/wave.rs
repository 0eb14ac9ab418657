use crate::sim::vec2::Vec2;
use rand::Rng;

/// Spawn data for a single scripted hazard.
#[derive(Debug, Clone, Copy)]
pub struct HazardSpawn {
    pub spawn: Vec2,
    pub destination: Vec2,
    pub speed: f64,
}

/// The scripted hazard events of one episode. Generated once per run
/// from the shared RNG and replayed unchanged for every generation, so
/// fitness scores stay comparable across generations.
#[derive(Debug, Clone)]
pub struct WaveSchedule {
    spawns: Vec<HazardSpawn>,
}

impl WaveSchedule {
    /// Generate `count` hazards. Each spawns on a uniformly chosen edge
    /// of the hazard region and flies to a random point on the opposite
    /// edge at a whole-unit speed drawn from `[min_speed, max_speed)`.
    pub fn generate<R: Rng>(
        count: usize,
        x_bound: f64,
        y_bound: f64,
        min_speed: f64,
        max_speed: f64,
        rng: &mut R,
    ) -> Self {
        let mut spawns = Vec::with_capacity(count);

        for _ in 0..count {
            let side = rng.gen_range(0..4);

            let (spawn, destination) = match side {
                // Top edge, flying down.
                0 => (
                    Vec2::new(rng.gen_range(-x_bound..x_bound), y_bound),
                    Vec2::new(rng.gen_range(-x_bound..x_bound), -y_bound),
                ),
                // Right edge, flying left.
                1 => (
                    Vec2::new(x_bound, rng.gen_range(-y_bound..y_bound)),
                    Vec2::new(-x_bound, rng.gen_range(-y_bound..y_bound)),
                ),
                // Bottom edge, flying up.
                2 => (
                    Vec2::new(rng.gen_range(-x_bound..x_bound), -y_bound),
                    Vec2::new(rng.gen_range(-x_bound..x_bound), y_bound),
                ),
                // Left edge, flying right.
                _ => (
                    Vec2::new(-x_bound, rng.gen_range(-y_bound..y_bound)),
                    Vec2::new(x_bound, rng.gen_range(-y_bound..y_bound)),
                ),
            };

            let speed = rng.gen_range(min_speed..max_speed).floor().max(min_speed);

            spawns.push(HazardSpawn {
                spawn,
                destination,
                speed,
            });
        }

        Self { spawns }
    }

    pub fn len(&self) -> usize {
        self.spawns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&HazardSpawn> {
        self.spawns.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawns_on_edges_with_bounded_speed() {
        let mut rng = StdRng::seed_from_u64(21);
        let schedule = WaveSchedule::generate(50, 13.0, 8.0, 2.0, 5.0, &mut rng);

        assert_eq!(schedule.len(), 50);
        for i in 0..schedule.len() {
            let spawn = schedule.get(i).unwrap();
            let on_edge = spawn.spawn.x.abs() == 13.0 || spawn.spawn.y.abs() == 8.0;
            assert!(on_edge, "hazard {} spawned off-edge: {:?}", i, spawn.spawn);
            assert!(spawn.speed >= 2.0 && spawn.speed < 5.0);
            // Destination is on the opposite edge, so every flight has
            // positive length.
            assert!(spawn.spawn.distance(spawn.destination) > 0.0);
        }
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let generate = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            WaveSchedule::generate(10, 13.0, 8.0, 2.0, 5.0, &mut rng)
        };

        let a = generate(77);
        let b = generate(77);
        for i in 0..a.len() {
            let (sa, sb) = (a.get(i).unwrap(), b.get(i).unwrap());
            assert_eq!(sa.spawn, sb.spawn);
            assert_eq!(sa.destination, sb.destination);
            assert_eq!(sa.speed, sb.speed);
        }
    }
}
