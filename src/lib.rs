//! Genetic-algorithm job-to-machine scheduler.
//!
//! Assigns the jobs of a catalog to a fixed pool of machines so as to
//! minimize total completion time, using an elitist generational GA.
//! Results are approximate: the search trades optimality for speed on
//! small-to-medium job sets.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `JobCatalog`, `MachineSet`,
//!   `Schedule`, `Assignment`
//! - **`ga`**: Chromosome, fitness, selection, operators and the
//!   `EvolutionEngine` generation loop
//! - **`export`**: Best individual → schedule records and summary
//! - **`validation`**: Precondition checks run before any generation
//!
//! # Example
//!
//! ```
//! use u_schedule_ga::ga::{EvolutionEngine, GaConfig};
//! use u_schedule_ga::models::{Job, JobCatalog, MachineSet};
//!
//! let catalog = JobCatalog::new(vec![
//!     Job::new("J1", 3.0),
//!     Job::new("J2", 5.0),
//!     Job::new("J3", 2.0),
//! ]);
//! let config = GaConfig::default().with_seed(1);
//! let engine = EvolutionEngine::new(catalog, MachineSet::default(), config)?;
//! let result = engine.run_seeded()?;
//! let exported = engine.exporter().export(&result.best)?;
//!
//! assert_eq!(exported.schedule.assignment_count(), 3);
//! assert_eq!(exported.summary.total_completion_time, -result.best_fitness);
//! # Ok::<(), u_schedule_ga::ScheduleError>(())
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization and Machine Learning"

mod error;
pub mod export;
pub mod ga;
pub mod models;
pub mod validation;

pub use error::ScheduleError;
