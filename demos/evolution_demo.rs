//! Minimal engine-only run: evolves genomes against a synthetic fitness
//! that rewards policies for keeping few idle states, without spinning
//! up the episode simulation.
//!
//! Run with: cargo run --example evolution_demo

use evopilot::config::EvolutionConfig;
use evopilot::engines::generation::{default_gene, EvolutionEngine, Genome};
use evopilot::engines::policy::Action;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Count how many states decode to Stop; fewer is better.
fn idle_states(genome: &Genome) -> f64 {
    genome
        .genes()
        .iter()
        .filter(|&&gene| Action::from_gene(gene) == Action::Stop)
        .count() as f64
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = EvolutionConfig {
        population_size: 30,
        generations: 20,
        genome_length: 64,
        mutation_rate: 0.02,
        seed: Some(42),
    };

    let mut rng = StdRng::seed_from_u64(config.seed.unwrap());
    let mut engine = EvolutionEngine::new(&config, &mut rng, default_gene)?;

    for _ in 0..config.generations {
        let scores: Vec<f64> = engine.population().iter().map(idle_states).collect();
        engine.new_generation(&mut rng, |index| scores[index]);
        println!(
            "Generation {:>2}: best {:.0} idle states",
            engine.generation() - 1,
            engine.best_fitness()
        );
    }

    println!(
        "\nBest policy keeps {} of 64 states idle",
        engine.best_fitness()
    );
    Ok(())
}
