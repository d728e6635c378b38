//! Gene-sequence chromosome for job-to-machine assignment.
//!
//! # Encoding
//!
//! An individual is an ordered sequence of genes, one per catalog slot.
//! Each gene pairs a job (index into the [`JobCatalog`]) with a machine
//! (index into the [`MachineSet`]). Gene order is dispatch order: each
//! machine processes its genes first-in first-out.
//!
//! Jobs are sampled independently per slot, so an individual is not a
//! permutation of the catalog. A job may appear several times or not at
//! all, and no operator repairs this.

use rand::Rng;

use crate::models::{JobCatalog, MachineSet};

/// One job-to-machine assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gene {
    /// Index into the job catalog.
    pub job: usize,
    /// Index into the machine set.
    pub machine: usize,
}

impl Gene {
    #[inline]
    pub fn new(job: usize, machine: usize) -> Self {
        Self { job, machine }
    }
}

/// A candidate schedule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: Vec<Gene>,
}

/// The individuals of one generation, in order.
pub type Population = Vec<Individual>;

impl Individual {
    /// Wraps an explicit gene sequence.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Creates a random individual with one gene per catalog job.
    ///
    /// Each gene's job and machine are drawn independently and uniformly.
    /// Both collections must be non-empty.
    pub fn random<R: Rng + ?Sized>(
        catalog: &JobCatalog,
        machines: &MachineSet,
        rng: &mut R,
    ) -> Self {
        let genes = (0..catalog.len())
            .map(|_| {
                Gene::new(
                    rng.random_range(0..catalog.len()),
                    rng.random_range(0..machines.len()),
                )
            })
            .collect();
        Self { genes }
    }

    /// Creates `size` random individuals.
    pub fn random_population<R: Rng + ?Sized>(
        size: usize,
        catalog: &JobCatalog,
        machines: &MachineSet,
        rng: &mut R,
    ) -> Population {
        (0..size)
            .map(|_| Self::random(catalog, machines, rng))
            .collect()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [Gene] {
        &mut self.genes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether every gene references a job and machine that exist.
    pub fn is_valid(&self, catalog: &JobCatalog, machines: &MachineSet) -> bool {
        self.genes
            .iter()
            .all(|g| g.job < catalog.len() && g.machine < machines.len())
    }

    /// Number of distinct catalog jobs present.
    pub fn distinct_jobs(&self) -> usize {
        let mut seen: Vec<usize> = self.genes.iter().map(|g| g.job).collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }

    /// Whether each catalog job appears exactly once.
    pub fn is_permutation(&self, catalog: &JobCatalog) -> bool {
        self.genes.len() == catalog.len() && self.distinct_jobs() == catalog.len()
    }
}
