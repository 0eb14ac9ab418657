use super::genome::{Gene, Genome};
use rand::Rng;

/// Range raw genes are drawn from at seeding and mutation time. The
/// range only shapes the raw gene pool; decoding reduces modulo the
/// action count, so it has no effect on which actions are reachable.
pub const GENE_RANGE: std::ops::Range<Gene> = 0..1000;

/// Default gene source: uniform draw over `GENE_RANGE`.
pub fn default_gene<R: Rng>(rng: &mut R) -> Gene {
    rng.gen_range(GENE_RANGE)
}

/// Truncation selection: a uniform draw from the better half of an
/// already fitness-sorted population (best first). Every member of the
/// top half has equal probability; the bottom half never reproduces.
/// The same genome may be drawn for both parents of one crossover.
///
/// Requires `population.len() >= 2` so the top half is non-empty; the
/// engine enforces that at construction.
pub fn select_parent<'a, R: Rng>(population: &'a [Genome], rng: &mut R) -> &'a Genome {
    let half = population.len() / 2;
    &population[rng.gen_range(0..half)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_gene_in_range() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let gene = default_gene(&mut rng);
            assert!(GENE_RANGE.contains(&gene));
        }
    }

    #[test]
    fn test_select_parent_stays_in_top_half() {
        let mut rng = StdRng::seed_from_u64(10);
        let mut population: Vec<Genome> = (0..10)
            .map(|i| Genome::from_genes(vec![i as Gene; 4]))
            .collect();
        // Tag fitness so the slice order is the sorted order.
        let mut fitness_fn = |index: usize| index as f64;
        for (index, genome) in population.iter_mut().enumerate() {
            genome.evaluate_fitness(index, &mut fitness_fn);
        }

        for _ in 0..200 {
            let parent = select_parent(&population, &mut rng);
            assert!(parent.fitness() < 5.0);
        }
    }

    #[test]
    fn test_select_parent_minimum_population() {
        let mut rng = StdRng::seed_from_u64(11);
        let population = vec![
            Genome::from_genes(vec![1]),
            Genome::from_genes(vec![2]),
        ];
        // Top half has exactly one slot; always index 0.
        for _ in 0..20 {
            let parent = select_parent(&population, &mut rng);
            assert_eq!(parent.genes(), &[1]);
        }
    }
}
