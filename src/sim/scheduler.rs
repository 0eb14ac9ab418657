use crate::config::{AppConfig, SimulationConfig};
use crate::engines::generation::{default_gene, EvolutionEngine, Genome, ProgressCallback};
use crate::engines::metrics::{episode_fitness, generation_record};
use crate::engines::policy::{Policy, STATE_COUNT};
use crate::error::Result;
use crate::sim::agent::Agent;
use crate::sim::hazard::Hazard;
use crate::sim::projectile::Projectile;
use crate::sim::sensors;
use crate::sim::wave::WaveSchedule;
use crate::types::{EpisodeMetrics, GenerationRecord};
use rand::rngs::StdRng;

/// Drives the whole run: one simulated episode per generation, then the
/// evolution step, repeated until the generation budget is exhausted.
///
/// The scheduler owns the run's single RNG and threads it into every
/// operation that draws randomness, so a fixed seed reproduces a run
/// bit for bit. The hazard schedule is generated once and replayed for
/// every generation.
pub struct GenerationScheduler {
    simulation: SimulationConfig,
    generations: usize,
    engine: EvolutionEngine,
    schedule: WaveSchedule,
    rng: StdRng,
}

impl GenerationScheduler {
    pub fn new(config: &AppConfig, mut rng: StdRng) -> Result<Self> {
        config.validate()?;

        let engine = EvolutionEngine::new(&config.evolution, &mut rng, default_gene)?;
        let schedule = WaveSchedule::generate(
            config.simulation.hazard_quota,
            config.simulation.hazard_x_bound,
            config.simulation.hazard_y_bound,
            config.simulation.hazard_min_speed,
            config.simulation.hazard_max_speed,
            &mut rng,
        );

        Ok(Self {
            simulation: config.simulation.clone(),
            generations: config.evolution.generations,
            engine,
            schedule,
            rng,
        })
    }

    /// Run the full generation budget and return one record per
    /// generation.
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Vec<GenerationRecord> {
        let mut records = Vec::with_capacity(self.generations);
        for _ in 0..self.generations {
            records.push(self.run_generation(callback));
        }

        log::info!(
            "Run complete after {} generations, best fitness {:.2}",
            records.len(),
            self.engine.best_fitness()
        );
        records
    }

    /// One full generation: episode, evaluation, reproduction.
    pub fn run_generation<C: ProgressCallback>(&mut self, callback: &mut C) -> GenerationRecord {
        let generation = self.engine.generation();
        callback.on_generation_start(generation);

        let episodes = self.run_episode();

        // Hard barrier: the episode has fully finished before any
        // genome is evaluated, and the next episode starts only after
        // the population has been replaced wholly.
        let fitness: Vec<f64> = episodes.iter().map(episode_fitness).collect();
        self.engine.evaluate(|index| fitness[index]);

        let record = generation_record(generation, self.engine.population(), &episodes);
        log::info!(
            "Generation {} complete: best {:.2}, worst {:.2}, kills {}, shots {}",
            generation,
            record.best_fitness,
            record.worst_fitness,
            record.total_hits,
            record.total_shots
        );
        callback.on_generation_complete(&record);

        self.engine.reproduce(&mut self.rng);
        record
    }

    fn run_episode(&mut self) -> Vec<EpisodeMetrics> {
        let episode = Episode::new(&self.simulation, &self.schedule, self.engine.population());
        episode.run(self.simulation.time_step)
    }

    pub fn engine(&self) -> &EvolutionEngine {
        &self.engine
    }

    pub fn schedule(&self) -> &WaveSchedule {
        &self.schedule
    }
}

/// State of one in-flight episode: the agent registry (the genome index
/// is the agent handle), live projectiles, the active hazard and the
/// wave bookkeeping.
struct Episode<'a> {
    config: &'a SimulationConfig,
    schedule: &'a WaveSchedule,
    agents: Vec<Agent>,
    projectiles: Vec<Projectile>,
    hazard: Option<Hazard>,
    /// Per-agent hazard contact latch, so sustained overlap counts one
    /// collision per hazard rather than one per tick.
    contact: Vec<bool>,
    spawned: usize,
    resolved: usize,
    clock: f64,
}

impl<'a> Episode<'a> {
    fn new(config: &'a SimulationConfig, schedule: &'a WaveSchedule, population: &[Genome]) -> Self {
        let mut agents = Vec::with_capacity(population.len());
        for genome in population {
            let mut agent = Agent::new(config);
            match Policy::from_genome(genome, STATE_COUNT) {
                Ok(policy) => agent.set_policy(policy),
                Err(e) => log::warn!("Agent keeps its default action: {}", e),
            }
            agents.push(agent);
        }

        let contact = vec![false; agents.len()];
        Self {
            config,
            schedule,
            agents,
            projectiles: Vec::new(),
            hazard: None,
            contact,
            spawned: 0,
            resolved: 0,
            clock: 0.0,
        }
    }

    /// The episode ends when every scripted hazard event has been
    /// consumed, i.e. destroyed or arrived at its destination.
    fn complete(&self) -> bool {
        self.resolved >= self.schedule.len()
    }

    fn run(mut self, dt: f64) -> Vec<EpisodeMetrics> {
        while !self.complete() {
            self.step(dt);
        }
        self.agents.iter().map(|agent| agent.metrics()).collect()
    }

    /// Advance one lock-step tick: every agent senses and acts against
    /// the active hazard, every body integrates, contacts resolve, then
    /// the wave script advances.
    fn step(&mut self, dt: f64) {
        self.spawn_next_hazard();

        if let Some(hazard) = &self.hazard {
            let now = self.clock;
            for (index, agent) in self.agents.iter_mut().enumerate() {
                let observation = sensors::observe(
                    agent.position(),
                    agent.velocity(),
                    hazard.position(),
                    hazard.velocity(),
                );
                let state = sensors::classify(
                    &observation,
                    agent.closest_wall_distance(),
                    &self.config.sensors,
                );
                agent.set_state(state);

                if agent.select_action(now) {
                    let direction = agent.heading_vec();
                    let position =
                        agent.position() + direction * self.config.projectile_spawn_offset;
                    self.projectiles.push(Projectile::new(
                        position,
                        direction,
                        self.config.projectile_speed,
                        self.config.projectile_lifetime,
                        index,
                    ));
                }
            }
        }

        for agent in &mut self.agents {
            agent.step(dt);
        }
        if let Some(hazard) = &mut self.hazard {
            hazard.step(dt);
        }
        for projectile in &mut self.projectiles {
            projectile.step(dt);
        }
        self.projectiles.retain(|projectile| !projectile.expired());

        self.resolve_contacts();
        self.retire_hazard();

        self.clock += dt;
    }

    fn spawn_next_hazard(&mut self) {
        if self.hazard.is_some() || self.spawned >= self.schedule.len() {
            return;
        }
        if let Some(data) = self.schedule.get(self.spawned) {
            self.hazard = Some(Hazard::new(data.spawn, data.destination, data.speed));
            self.spawned += 1;
            self.contact.iter_mut().for_each(|latched| *latched = false);
        }
    }

    fn resolve_contacts(&mut self) {
        let Some(hazard) = &self.hazard else {
            return;
        };
        let hazard_pos = hazard.position();

        for (index, agent) in self.agents.iter_mut().enumerate() {
            let touching =
                agent.position().distance(hazard_pos) < self.config.hazard_contact_radius;
            if touching && !self.contact[index] {
                agent.on_hazard_collision();
            }
            self.contact[index] = touching;
        }

        // First projectile contact wins; it destroys the hazard and
        // credits the owner.
        let hit = self
            .projectiles
            .iter()
            .position(|p| p.position().distance(hazard_pos) < self.config.projectile_contact_radius);
        if let Some(index) = hit {
            let owner = self.projectiles[index].owner();
            self.projectiles.remove(index);
            self.agents[owner].on_hazard_destroyed();
            self.hazard = None;
            self.resolved += 1;
        }
    }

    fn retire_hazard(&mut self) {
        let arrived = self
            .hazard
            .as_ref()
            .map_or(false, |hazard| hazard.destination_reached());
        if arrived {
            self.hazard = None;
            self.resolved += 1;
        }
    }
}
