//! Export of the best individual to schedule records and summary metrics.
//!
//! The export is a literal transcription of the individual's genes:
//! coverage and uniqueness are not checked, so a job that appears twice
//! is exported twice and a missing job is simply absent. Gene indices
//! are checked; an individual referencing an unknown job or machine is
//! rejected rather than exported.
//!
//! # Output
//!
//! - [`Schedule`]: one [`Assignment`] per gene, in gene order, with the
//!   FIFO start/end times used by fitness evaluation.
//! - [`ScheduleSummary`]: record count, total processing time,
//!   per-machine assignment counts, total completion time, makespan.

mod summary;

use serde::{Deserialize, Serialize};

pub use summary::ScheduleSummary;

use crate::error::ScheduleError;
use crate::ga::{FitnessEvaluator, Individual};
use crate::models::{Assignment, JobCatalog, MachineSet, Schedule};

/// Exported schedule plus its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedSchedule {
    pub schedule: Schedule,
    pub summary: ScheduleSummary,
}

/// Converts individuals into schedules.
///
/// # Example
///
/// ```
/// use u_schedule_ga::export::ScheduleExporter;
/// use u_schedule_ga::ga::{Gene, Individual};
/// use u_schedule_ga::models::{Job, JobCatalog, MachineSet};
///
/// let catalog = JobCatalog::new(vec![Job::new("J1", 4.0), Job::new("J2", 6.0)]);
/// let machines = MachineSet::new(["M1", "M2"]);
/// // J2 twice, J1 never.
/// let best = Individual::from_genes(vec![Gene::new(1, 0), Gene::new(1, 1)]);
///
/// let exported = ScheduleExporter::new(&catalog, &machines).export(&best).unwrap();
/// assert_eq!(exported.summary.total_processing_time, 12.0);
/// assert_eq!(exported.summary.machine_counts["M1"], 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScheduleExporter<'a> {
    catalog: &'a JobCatalog,
    machines: &'a MachineSet,
}

impl<'a> ScheduleExporter<'a> {
    pub fn new(catalog: &'a JobCatalog, machines: &'a MachineSet) -> Self {
        Self { catalog, machines }
    }

    /// Transcribes `individual` gene by gene.
    ///
    /// # Errors
    /// [`ScheduleError::GeneOutOfRange`] for the first gene whose job or
    /// machine does not exist.
    pub fn to_schedule(&self, individual: &Individual) -> Result<Schedule, ScheduleError> {
        let rows = individual
            .genes()
            .iter()
            .enumerate()
            .map(|(position, gene)| {
                match (self.catalog.get(gene.job), self.machines.get(gene.machine)) {
                    (Some(job), Some(machine_id)) => Ok((job, machine_id)),
                    _ => Err(ScheduleError::GeneOutOfRange {
                        position,
                        job: gene.job,
                        machine: gene.machine,
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let timeline = FitnessEvaluator::new(self.catalog, self.machines).timeline(individual);
        let mut schedule = Schedule::new();
        for ((job, machine_id), (start, end)) in rows.into_iter().zip(timeline) {
            schedule.add_assignment(Assignment::new(
                job.id.as_str(),
                machine_id,
                job.processing_time,
                start,
                end,
            ));
        }
        Ok(schedule)
    }

    /// Schedule and summary for `individual`.
    ///
    /// # Errors
    /// See [`ScheduleExporter::to_schedule`].
    pub fn export(&self, individual: &Individual) -> Result<ExportedSchedule, ScheduleError> {
        let schedule = self.to_schedule(individual)?;
        let summary = ScheduleSummary::calculate(&schedule);
        tracing::debug!(
            records = summary.total_jobs,
            total_processing_time = summary.total_processing_time,
            "schedule exported"
        );
        Ok(ExportedSchedule { schedule, summary })
    }
}
