//! Error types.

use crate::ga::SelectionError;

/// Errors returned by the scheduling engine.
///
/// Precondition errors are reported by [`crate::ga::EvolutionEngine::new`]
/// (or [`crate::ga::EvolutionRun::with_population`] for an explicit
/// initial population) before any generation runs. A [`ScheduleError::Selection`] error can
/// only surface from inside the generation loop and aborts the run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    #[error("job catalog is empty")]
    EmptyJobCatalog,
    #[error("machine set is empty")]
    EmptyMachineSet,
    #[error("duplicate machine ID: {machine_id}")]
    DuplicateMachine { machine_id: String },
    #[error("invalid processing time for job '{job_id}': {value}")]
    InvalidProcessingTime { job_id: String, value: f64 },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("individual has {genes} genes, catalog has {expected} jobs")]
    GeneCountMismatch { genes: usize, expected: usize },
    #[error("gene {position} references job {job} on machine {machine}, outside the catalog or machine set")]
    GeneOutOfRange {
        position: usize,
        job: usize,
        machine: usize,
    },
    #[error("initial population, individual {index}: {source}")]
    InvalidPopulation {
        index: usize,
        source: Box<ScheduleError>,
    },
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}

impl ScheduleError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
