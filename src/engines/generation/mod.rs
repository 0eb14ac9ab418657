pub mod genome;
pub mod operators;
pub mod evolution_engine;
pub mod progress;

pub use genome::{Gene, Genome};
pub use evolution_engine::{EvolutionEngine, GeneFn};
pub use operators::{default_gene, select_parent, GENE_RANGE};
pub use progress::{ConsoleProgressCallback, ProgressCallback, SilentProgressCallback};
