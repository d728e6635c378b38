//! Genetic-algorithm search for job-to-machine assignment.
//!
//! # Encoding
//!
//! An [`Individual`] is a sequence of [`Gene`]s, one per catalog slot,
//! each pairing a job with a machine. Gene order is dispatch order.
//! Jobs are drawn independently per slot, so individuals may repeat or
//! omit jobs.
//!
//! # Submodules
//!
//! - [`operators`]: single-point crossover and machine-reassignment mutation
//! - [`selection`]: ranking, elitism and parent sampling
//!
//! # Reference
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"

mod chromosome;
mod config;
mod engine;
mod fitness;
pub mod operators;
pub mod selection;

pub use chromosome::{Gene, Individual, Population};
pub use config::GaConfig;
pub use engine::{EvolutionEngine, EvolutionResult, EvolutionRun, GenerationStats, RunState};
pub use fitness::FitnessEvaluator;
pub use operators::{
    GeneticOperators, crossover_at, machine_reassign_mutation, single_point_crossover,
};
pub use selection::{RankingOrder, Scored, SelectionError, SelectionStrategy};
