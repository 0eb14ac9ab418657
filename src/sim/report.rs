use crate::config::AppConfig;
use crate::engines::generation::{Gene, ProgressCallback};
use crate::types::GenerationRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Plain text run log: a configuration header, one line per generation,
/// and a final summary. Write failures disable logging with an error
/// message instead of aborting the run.
pub struct RunLog {
    writer: Option<BufWriter<File>>,
    path: PathBuf,
}

impl RunLog {
    pub fn create<P: Into<PathBuf>>(path: P, config: &AppConfig) -> RunLog {
        let path = path.into();
        let writer = match File::create(&path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                log::error!("Failed to create run log {}: {}", path.display(), e);
                None
            }
        };

        let mut run_log = RunLog { writer, path };
        run_log.write_header(config);
        run_log
    }

    fn write_header(&mut self, config: &AppConfig) {
        let evolution = config.evolution.clone();
        let simulation = config.simulation.clone();
        self.try_write(move |w| {
            writeln!(w, "{}", "=".repeat(65))?;
            writeln!(w, "EVOPILOT - HAZARD AVOIDANCE & INTERCEPT EVOLUTION LOG")?;
            writeln!(w, "{}", "=".repeat(65))?;
            writeln!(
                w,
                "Log started: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )?;
            writeln!(w)?;
            writeln!(w, "CONFIGURATION:")?;
            writeln!(w, "  Population size: {}", evolution.population_size)?;
            writeln!(w, "  Mutation rate: {}", evolution.mutation_rate)?;
            writeln!(w, "  Generations: {}", evolution.generations)?;
            writeln!(w, "  Hazards per episode: {}", simulation.hazard_quota)?;
            writeln!(w, "  Ammo per agent: {}", simulation.max_ammo)?;
            writeln!(w)?;
            writeln!(w, "{}", "=".repeat(65))?;
            writeln!(w)?;
            writeln!(
                w,
                "{:<12} {:<15} {:<15} {:<15} {:<15} {:<15} {:<10} {:<10}",
                "Generation",
                "Best Fitness",
                "Worst Fitness",
                "Avg Fitness",
                "Median Fit",
                "Std Dev",
                "Kills",
                "Avg Acc%"
            )?;
            writeln!(w, "{}", "-".repeat(112))?;
            Ok(())
        });
    }

    pub fn log_generation(&mut self, record: &GenerationRecord) {
        let record = record.clone();
        self.try_write(move |w| {
            writeln!(
                w,
                "{:<12} {:<15.2} {:<15.2} {:<15.2} {:<15.2} {:<15.2} {:<10} {:<10.1}",
                record.generation,
                record.best_fitness,
                record.worst_fitness,
                record.mean_fitness,
                record.median_fitness,
                record.std_dev,
                record.total_hits,
                record.accuracy_pct()
            )?;
            Ok(())
        });
    }

    /// Write the closing summary and stop logging.
    pub fn finish(&mut self, records: &[GenerationRecord], best_fitness: f64, best_genes: &[Gene]) {
        let first_best = records.first().map(|r| r.best_fitness);
        let last_best = records.last().map(|r| r.best_fitness);
        let total_kills: u32 = records.iter().map(|r| r.total_hits).sum();
        let generations = records.len();
        let genes: Vec<String> = best_genes.iter().map(|g| g.to_string()).collect();

        self.try_write(move |w| {
            writeln!(w)?;
            writeln!(w, "{}", "=".repeat(65))?;
            writeln!(w, "FINAL SUMMARY")?;
            writeln!(w, "{}", "=".repeat(65))?;
            writeln!(
                w,
                "Completed: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )?;
            writeln!(w, "Total generations: {}", generations)?;
            writeln!(w, "Best fitness achieved: {:.2}", best_fitness)?;
            if let (Some(first), Some(last)) = (first_best, last_best) {
                writeln!(w, "Initial best fitness: {:.2}", first)?;
                writeln!(w, "Final best fitness: {:.2}", last)?;
                writeln!(w, "Total improvement: {:.2}", first - last)?;
            }
            writeln!(w, "Total kills across run: {}", total_kills)?;
            writeln!(w, "Best genes: {}", genes.join(" "))?;
            writeln!(w)?;
            writeln!(
                w,
                "Log file closed: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
            )?;
            Ok(())
        });

        self.writer = None;
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_write<F>(&mut self, write_fn: F)
    where
        F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
    {
        if let Some(writer) = &mut self.writer {
            let result = write_fn(&mut *writer).and_then(|_| writer.flush());
            if let Err(e) = result {
                log::error!("Run log write failed, disabling logging: {}", e);
                self.writer = None;
            }
        }
    }
}

impl ProgressCallback for RunLog {
    fn on_generation_start(&mut self, _generation: usize) {}

    fn on_generation_complete(&mut self, record: &GenerationRecord) {
        self.log_generation(record);
    }
}
