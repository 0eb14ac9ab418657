use evopilot::config::EvolutionConfig;
use evopilot::engines::generation::{default_gene, select_parent, EvolutionEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn test_config(
    population_size: usize,
    genome_length: usize,
    mutation_rate: f64,
) -> EvolutionConfig {
    EvolutionConfig {
        population_size,
        generations: 5,
        genome_length,
        mutation_rate,
        seed: Some(42),
    }
}

/// The reference scenario: population 4, genome length 2, mutation rate
/// 0, stub fitness [3, 1, 4, 2] by index. After evaluation the
/// population must be the original genomes in index order [1, 3, 0, 2]
/// with fitness [1, 2, 3, 4].
#[test]
fn test_single_generation_reference_scenario() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = test_config(4, 2, 0.0);
    let mut engine = EvolutionEngine::new(&config, &mut rng, default_gene).unwrap();

    let original: Vec<Vec<u32>> = engine
        .population()
        .iter()
        .map(|g| g.genes().to_vec())
        .collect();

    let scores = [3.0, 1.0, 4.0, 2.0];
    engine.evaluate(|index| scores[index]);

    let fitness: Vec<f64> = engine.population().iter().map(|g| g.fitness()).collect();
    assert_eq!(fitness, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(engine.best_fitness(), 1.0);

    for (slot, &source_index) in [1usize, 3, 0, 2].iter().enumerate() {
        assert_eq!(
            engine.population()[slot].genes(),
            &original[source_index][..],
            "slot {} should hold pre-evaluation genome {}",
            slot,
            source_index
        );
    }
}

#[test]
fn test_children_inherit_only_from_top_half() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = test_config(4, 16, 0.0);
    let mut engine = EvolutionEngine::new(&config, &mut rng, default_gene).unwrap();

    engine.evaluate(|index| index as f64);
    let top_half: Vec<Vec<u32>> = engine.population()[..2]
        .iter()
        .map(|g| g.genes().to_vec())
        .collect();

    engine.reproduce(&mut rng);

    // With zero mutation, every child gene must come from one of the
    // two top-half parents at the same position.
    for child in engine.population() {
        for (position, &gene) in child.genes().iter().enumerate() {
            assert!(
                gene == top_half[0][position] || gene == top_half[1][position],
                "gene {} at position {} not inherited from the top half",
                gene,
                position
            );
        }
    }
}

#[test]
fn test_selection_bound_holds_under_repetition() {
    let mut rng = StdRng::seed_from_u64(8);
    let config = test_config(10, 4, 0.0);
    let mut engine = EvolutionEngine::new(&config, &mut rng, default_gene).unwrap();

    engine.evaluate(|index| index as f64);
    let cutoff = engine.population()[4].fitness();

    for _ in 0..500 {
        let parent = select_parent(engine.population(), &mut rng);
        assert!(parent.fitness() <= cutoff);
    }
}

#[test]
fn test_population_and_genome_length_invariant_over_many_generations() {
    let mut rng = StdRng::seed_from_u64(9);
    let config = test_config(12, 64, 0.2);
    let mut engine = EvolutionEngine::new(&config, &mut rng, default_gene).unwrap();

    for _ in 0..10 {
        engine.new_generation(&mut rng, |index| (index % 3) as f64);
        assert_eq!(engine.population().len(), 12);
        assert!(engine.population().iter().all(|g| g.len() == 64));
    }
    assert_eq!(engine.generation(), 11);
}

#[test]
fn test_full_mutation_draws_fresh_genes() {
    fn sentinel_gene(_: &mut StdRng) -> u32 {
        4242
    }

    let mut rng = StdRng::seed_from_u64(10);
    let config = test_config(4, 8, 1.0);
    let mut engine = EvolutionEngine::new(&config, &mut rng, sentinel_gene).unwrap();

    engine.new_generation(&mut rng, |index| index as f64);

    for genome in engine.population() {
        assert!(genome.genes().iter().all(|&g| g == 4242));
    }
}
