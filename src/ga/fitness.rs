//! Fitness evaluation.
//!
//! Machines are modelled as single-server FIFO queues. Genes are
//! dispatched in sequence order; a gene starts when its machine's
//! previous gene finishes, with no idle gaps.
//!
//! Fitness is the negated total completion time, so a larger fitness
//! value means a better schedule.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 3: total completion time (ΣC_j)

use super::Individual;
use crate::models::{JobCatalog, MachineSet};

/// Scores individuals against a job catalog and machine set.
///
/// # Example
///
/// ```
/// use u_schedule_ga::ga::{FitnessEvaluator, Gene, Individual};
/// use u_schedule_ga::models::{Job, JobCatalog, MachineSet};
///
/// let catalog = JobCatalog::new(vec![
///     Job::new("J1", 3.0),
///     Job::new("J2", 5.0),
///     Job::new("J3", 2.0),
/// ]);
/// let machines = MachineSet::default();
/// let evaluator = FitnessEvaluator::new(&catalog, &machines);
///
/// // All three jobs on M1: completions 3, 8, 10.
/// let ind = Individual::from_genes(vec![Gene::new(0, 0), Gene::new(1, 0), Gene::new(2, 0)]);
/// assert_eq!(evaluator.evaluate(&ind), -21.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    catalog: &'a JobCatalog,
    machines: &'a MachineSet,
}

impl<'a> FitnessEvaluator<'a> {
    pub fn new(catalog: &'a JobCatalog, machines: &'a MachineSet) -> Self {
        Self { catalog, machines }
    }

    /// Fitness: `-total_completion`.
    pub fn evaluate(&self, individual: &Individual) -> f64 {
        -self.total_completion(individual)
    }

    /// Sum over genes of each gene's completion time.
    pub fn total_completion(&self, individual: &Individual) -> f64 {
        self.timeline(individual).iter().map(|&(_, end)| end).sum()
    }

    /// `(start, end)` of every gene, in gene order.
    ///
    /// # Panics
    /// If a gene references a job or machine outside the catalog or
    /// machine set. Individuals created by the engine, or accepted by
    /// [`crate::validation::validate_individual`], always pass.
    pub fn timeline(&self, individual: &Individual) -> Vec<(f64, f64)> {
        let jobs = self.catalog.jobs();
        let mut machine_available = vec![0.0_f64; self.machines.len()];
        individual
            .genes()
            .iter()
            .map(|gene| {
                let processing = jobs[gene.job].processing_time;
                let start = machine_available[gene.machine];
                let end = start + processing;
                machine_available[gene.machine] = end;
                (start, end)
            })
            .collect()
    }
}
