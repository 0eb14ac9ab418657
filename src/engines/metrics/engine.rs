use crate::engines::generation::Genome;
use crate::engines::metrics::stats;
use crate::types::{EpisodeMetrics, GenerationRecord};

/// Fitness weights. Lower fitness is better: collisions dominate,
/// wasted shots cost a little, hits and survival/exploration earn
/// small rebates.
pub const COLLISION_PENALTY: f64 = 100.0;
pub const WASTED_SHOT_PENALTY: f64 = 1.0;
pub const HIT_BONUS: f64 = 10.0;
pub const DISTANCE_BONUS: f64 = 0.05;
pub const SURVIVAL_BONUS: f64 = 0.1;

/// Reduce one agent's episode outcome to its scalar fitness:
///
/// `100·collisions + max(0, shots − hits) − 10·hits − 0.05·distance − 0.1·time_alive`
pub fn episode_fitness(metrics: &EpisodeMetrics) -> f64 {
    let collision_penalty = metrics.collisions as f64 * COLLISION_PENALTY;
    let wasted_shots = metrics.shots_fired.saturating_sub(metrics.hits) as f64;
    let wasted_shot_penalty = wasted_shots * WASTED_SHOT_PENALTY;
    let hit_bonus = metrics.hits as f64 * HIT_BONUS;
    let efficiency_bonus = metrics.distance_traveled * DISTANCE_BONUS;
    let survival_bonus = metrics.time_alive * SURVIVAL_BONUS;

    collision_penalty + wasted_shot_penalty - hit_bonus - efficiency_bonus - survival_bonus
}

/// Build the per-generation summary from the evaluated population and
/// the episode outcomes that produced it.
pub fn generation_record(
    generation: usize,
    population: &[Genome],
    episodes: &[EpisodeMetrics],
) -> GenerationRecord {
    let fitness: Vec<f64> = population.iter().map(|g| g.fitness()).collect();

    let best_fitness = fitness.iter().copied().fold(f64::INFINITY, f64::min);
    let worst_fitness = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean_fitness = stats::mean(&fitness);

    GenerationRecord {
        generation,
        best_fitness: if fitness.is_empty() { 0.0 } else { best_fitness },
        worst_fitness: if fitness.is_empty() { 0.0 } else { worst_fitness },
        mean_fitness,
        median_fitness: stats::median(&fitness),
        std_dev: stats::std_dev(&fitness, mean_fitness),
        total_hits: episodes.iter().map(|m| m.hits).sum(),
        total_shots: episodes.iter().map(|m| m.shots_fired).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitness_formula_example() {
        let metrics = EpisodeMetrics {
            collisions: 2,
            shots_fired: 5,
            hits: 3,
            distance_traveled: 10.0,
            time_alive: 20.0,
        };
        // 200 + 2 - 30 - 0.5 - 2
        assert!((episode_fitness(&metrics) - 169.5).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_wasted_shots_never_negative() {
        let metrics = EpisodeMetrics {
            collisions: 0,
            shots_fired: 1,
            hits: 4,
            distance_traveled: 0.0,
            time_alive: 0.0,
        };
        // More hits than shots clamps the waste term to zero.
        assert_eq!(episode_fitness(&metrics), -40.0);
    }

    #[test]
    fn test_generation_record_statistics() {
        let mut population: Vec<Genome> = (0..4).map(|_| Genome::from_genes(vec![0; 2])).collect();
        let scores = [3.0, 1.0, 4.0, 2.0];
        for (index, genome) in population.iter_mut().enumerate() {
            genome.evaluate_fitness(index, &mut |i: usize| scores[i]);
        }
        let episodes = vec![
            EpisodeMetrics { hits: 1, shots_fired: 3, ..Default::default() },
            EpisodeMetrics { hits: 2, shots_fired: 2, ..Default::default() },
            EpisodeMetrics::default(),
            EpisodeMetrics::default(),
        ];

        let record = generation_record(7, &population, &episodes);
        assert_eq!(record.generation, 7);
        assert_eq!(record.best_fitness, 1.0);
        assert_eq!(record.worst_fitness, 4.0);
        assert_eq!(record.mean_fitness, 2.5);
        assert_eq!(record.median_fitness, 2.5);
        assert_eq!(record.total_hits, 3);
        assert_eq!(record.total_shots, 5);
        assert!((record.accuracy_pct() - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_generation_record_empty_population() {
        let record = generation_record(1, &[], &[]);
        assert_eq!(record.best_fitness, 0.0);
        assert_eq!(record.worst_fitness, 0.0);
        assert_eq!(record.mean_fitness, 0.0);
        assert_eq!(record.median_fitness, 0.0);
        assert_eq!(record.std_dev, 0.0);
    }
}
