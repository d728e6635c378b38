//! Genetic operators for gene-sequence chromosomes.
//!
//! - [`single_point_crossover`]: prefix of parent 1, suffix of parent 2.
//! - [`machine_reassign_mutation`]: per-gene machine redraw.
//!
//! Neither operator repairs job coverage; duplicated or missing jobs
//! pass through unchanged.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use u_schedule_ga::ga::{GeneticOperators, Individual};
//! use u_schedule_ga::models::{Job, JobCatalog, MachineSet};
//!
//! let catalog = JobCatalog::new(vec![Job::new("J1", 4.0), Job::new("J2", 6.0)]);
//! let machines = MachineSet::default();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let p1 = Individual::random(&catalog, &machines, &mut rng);
//! let p2 = Individual::random(&catalog, &machines, &mut rng);
//! let ops = GeneticOperators::new(0.1);
//! let child = ops.breed(&p1, &p2, &machines, &mut rng);
//! assert_eq!(child.len(), 2);
//! ```

use rand::Rng;

use super::{Gene, Individual};
use crate::models::MachineSet;

/// Single-point crossover with a uniformly drawn cut in `[1, L-1]`.
///
/// Parents shorter than two genes have no valid cut; the child is then
/// a copy of `p1`.
pub fn single_point_crossover<R: Rng + ?Sized>(
    p1: &Individual,
    p2: &Individual,
    rng: &mut R,
) -> Individual {
    let len = p1.len();
    if len < 2 {
        return p1.clone();
    }
    let cut = rng.random_range(1..len);
    crossover_at(p1, p2, cut)
}

/// Child of `p1[..cut]` followed by `p2[cut..]`.
pub fn crossover_at(p1: &Individual, p2: &Individual, cut: usize) -> Individual {
    debug_assert_eq!(p1.len(), p2.len());
    let head = &p1.genes()[..cut.min(p1.len())];
    let tail = p2.genes().get(cut..).unwrap_or(&[]);
    let genes: Vec<Gene> = head.iter().chain(tail).copied().collect();
    Individual::from_genes(genes)
}

/// Redraws each gene's machine with probability `rate`.
///
/// The replacement is uniform over the whole machine set and may equal
/// the current machine. Job components are never touched.
///
/// Returns the number of genes redrawn.
pub fn machine_reassign_mutation<R: Rng + ?Sized>(
    individual: &mut Individual,
    rate: f64,
    machines: &MachineSet,
    rng: &mut R,
) -> usize {
    let mut redrawn = 0;
    for gene in individual.genes_mut() {
        if rng.random::<f64>() < rate {
            gene.machine = rng.random_range(0..machines.len());
            redrawn += 1;
        }
    }
    redrawn
}

/// Crossover followed by mutation, as applied to every non-elite slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOperators {
    /// Per-gene mutation probability.
    pub mutation_rate: f64,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl GeneticOperators {
    pub fn new(mutation_rate: f64) -> Self {
        Self { mutation_rate }
    }

    /// Produces one child from two parents.
    pub fn breed<R: Rng + ?Sized>(
        &self,
        p1: &Individual,
        p2: &Individual,
        machines: &MachineSet,
        rng: &mut R,
    ) -> Individual {
        let mut child = single_point_crossover(p1, p2, rng);
        machine_reassign_mutation(&mut child, self.mutation_rate, machines, rng);
        child
    }
}
