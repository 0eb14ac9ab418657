use crate::types::GenerationRecord;

/// Hook for observing generation boundaries without coupling the
/// scheduler to any particular reporting backend.
pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, record: &GenerationRecord);
}

/// Logs generation progress through the `log` facade.
pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        log::info!("Generation {} starting", generation);
    }

    fn on_generation_complete(&mut self, record: &GenerationRecord) {
        log::info!(
            "Generation {} complete: best {:.2}, mean {:.2}, kills {}, accuracy {:.1}%",
            record.generation,
            record.best_fitness,
            record.mean_fitness,
            record.total_hits,
            record.accuracy_pct()
        );
    }
}

/// Ignores all progress events. Useful in tests.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _record: &GenerationRecord) {}
}
