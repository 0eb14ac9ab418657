use rand::Rng;

/// A single gene. Values are unbounded; decoding reduces modulo the
/// action count, so any raw value maps to a valid action.
pub type Gene = u32;

/// One candidate control policy: a fixed-length gene sequence plus the
/// fitness cached from the most recent episode evaluation.
///
/// Gene `i` encodes the action taken in discrete state `i`, so the
/// genome length equals the state-space size. Genomes are pure data:
/// randomness and the fitness callback are threaded into each operation
/// explicitly, which keeps runs reproducible from one seeded RNG and
/// keeps genomes trivially cloneable.
///
/// Fitness is lower-is-better and is only meaningful after
/// `evaluate_fitness` has run for the current generation.
#[derive(Debug, Clone)]
pub struct Genome {
    genes: Vec<Gene>,
    fitness: f64,
}

impl Genome {
    /// Create a genome of `length` genes, each drawn from `gene_fn`.
    pub fn random<R, F>(length: usize, rng: &mut R, mut gene_fn: F) -> Self
    where
        R: Rng,
        F: FnMut(&mut R) -> Gene,
    {
        let genes = (0..length).map(|_| gene_fn(rng)).collect();
        Self { genes, fitness: 0.0 }
    }

    /// Build a genome from explicit genes. Fitness starts at 0.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self { genes, fitness: 0.0 }
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Score this genome via the externally supplied fitness function.
    /// `index` identifies the agent that ran this genome's episode.
    /// Overwrites the cached fitness and returns it.
    pub fn evaluate_fitness<F>(&mut self, index: usize, fitness_fn: &mut F) -> f64
    where
        F: FnMut(usize) -> f64,
    {
        self.fitness = fitness_fn(index);
        self.fitness
    }

    /// Single-point crossover. The point `c` is drawn uniformly from
    /// `[0, len)`: the child takes genes `[0, c)` from `self` and
    /// `[c, len)` from `other`, so `c == 0` clones `other`'s genes and
    /// `c == len-1` differs from `self` only in the last gene. Neither
    /// parent is modified.
    pub fn crossover<R: Rng>(&self, other: &Genome, rng: &mut R) -> Genome {
        debug_assert_eq!(self.len(), other.len());
        let point = rng.gen_range(0..self.genes.len());

        let mut genes = Vec::with_capacity(self.genes.len());
        genes.extend_from_slice(&self.genes[..point]);
        genes.extend_from_slice(&other.genes[point..]);

        Genome { genes, fitness: 0.0 }
    }

    /// Replace each gene independently with probability `rate` by a
    /// fresh draw from `gene_fn`. A rate of 0 never mutates; a rate of
    /// 1 replaces every gene.
    pub fn mutate<R, F>(&mut self, rate: f64, rng: &mut R, mut gene_fn: F)
    where
        R: Rng,
        F: FnMut(&mut R) -> Gene,
    {
        for gene in self.genes.iter_mut() {
            if rng.gen::<f64>() < rate {
                *gene = gene_fn(rng);
            }
        }
    }
}
