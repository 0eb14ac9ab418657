use anyhow::Context;
use evopilot::config::ConfigManager;
use evopilot::sim::{GenerationScheduler, RunLog};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path))?;
    }
    let config = manager.get();
    config.validate()?;

    let rng = match config.evolution.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scheduler = GenerationScheduler::new(&config, rng)?;
    let mut run_log = RunLog::create("evopilot_run.txt", &config);

    let records = scheduler.run(&mut run_log);
    run_log.finish(
        &records,
        scheduler.engine().best_fitness(),
        scheduler.engine().best_genes(),
    );

    println!("Run complete: {} generations", records.len());
    println!("Best fitness: {:.2}", scheduler.engine().best_fitness());
    if let (Some(first), Some(last)) = (records.first(), records.last()) {
        println!(
            "Best fitness moved {:.2} -> {:.2} over the run",
            first.best_fitness, last.best_fitness
        );
    }
    println!("Run log written to {}", run_log.path().display());

    Ok(())
}
