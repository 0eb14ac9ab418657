use crate::config::traits::ConfigSection;
use crate::config::EvolutionConfig;
use crate::engines::generation::genome::{Gene, Genome};
use crate::engines::generation::operators::select_parent;
use crate::error::Result;
use rand::rngs::StdRng;

/// Source of fresh gene values, used at population seeding and for
/// mutation replacement draws.
pub type GeneFn = fn(&mut StdRng) -> Gene;

/// Generational evolutionary search over fixed-length genomes.
///
/// Each generation runs two phases in order: evaluation (score every
/// genome through an externally supplied fitness callback, sort
/// ascending so the best genome is first, snapshot the generation's
/// best) and reproduction (breed a full replacement population through
/// truncation selection, single-point crossover and mutation).
///
/// The engine owns no randomness: every operation that draws random
/// numbers takes the run's RNG as a parameter, so a fixed seed
/// reproduces a run exactly.
pub struct EvolutionEngine {
    population: Vec<Genome>,
    generation: usize,
    best_fitness: f64,
    best_genes: Vec<Gene>,
    mutation_rate: f64,
    gene_fn: GeneFn,
}

impl EvolutionEngine {
    /// Build the randomized initial population. Fails with a
    /// configuration error when the config is invalid; in particular a
    /// population below 2 is rejected because truncation selection has
    /// no valid parent index once the top half is empty.
    pub fn new(config: &EvolutionConfig, rng: &mut StdRng, gene_fn: GeneFn) -> Result<Self> {
        config.validate()?;

        let population = (0..config.population_size)
            .map(|_| Genome::random(config.genome_length, rng, gene_fn))
            .collect();

        Ok(Self {
            population,
            generation: 1,
            best_fitness: 0.0,
            best_genes: vec![0; config.genome_length],
            mutation_rate: config.mutation_rate,
            gene_fn,
        })
    }

    /// Evaluation phase. Every genome is scored exactly once by its
    /// population index, then the population is sorted ascending by
    /// fitness. The sort is stable, so equal scores keep their relative
    /// order.
    ///
    /// The best-genome snapshot is overwritten with the argmin of the
    /// current generation alone; it is not a running minimum across
    /// generations.
    pub fn evaluate<F>(&mut self, mut fitness_fn: F)
    where
        F: FnMut(usize) -> f64,
    {
        for (index, genome) in self.population.iter_mut().enumerate() {
            genome.evaluate_fitness(index, &mut fitness_fn);
        }

        self.population.sort_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some(best) = self.population.first() {
            self.best_fitness = best.fitness();
            self.best_genes.clear();
            self.best_genes.extend_from_slice(best.genes());
        }
    }

    /// Reproduction phase. Every slot of the next population is filled
    /// with a mutated crossover child of two truncation-selected
    /// parents, then the old population is replaced wholly and the
    /// generation counter advances. There is no elitism: top performers
    /// reproduce but never survive unmodified.
    pub fn reproduce(&mut self, rng: &mut StdRng) {
        let rate = self.mutation_rate;
        let gene_fn = self.gene_fn;

        let mut next_population = Vec::with_capacity(self.population.len());
        for _ in 0..self.population.len() {
            let parent1 = select_parent(&self.population, rng);
            let parent2 = select_parent(&self.population, rng);

            let mut child = parent1.crossover(parent2, rng);
            child.mutate(rate, rng, gene_fn);
            next_population.push(child);
        }

        self.population = next_population;
        self.generation += 1;
    }

    /// Advance one full generation: evaluate, then breed the
    /// replacement population. Silent no-op on an empty population.
    pub fn new_generation<F>(&mut self, rng: &mut StdRng, fitness_fn: F)
    where
        F: FnMut(usize) -> f64,
    {
        if self.population.is_empty() {
            return;
        }
        self.evaluate(fitness_fn);
        self.reproduce(rng);
    }

    /// Current population, sorted ascending by fitness after
    /// `evaluate`; in reproduction order otherwise.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Best fitness of the most recently evaluated generation.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Copied gene array of the most recently evaluated generation's
    /// best genome. A read-only snapshot for reporting; it is never
    /// re-inserted into the population.
    pub fn best_genes(&self) -> &[Gene] {
        &self.best_genes
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }
}
