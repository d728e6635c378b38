//! Job model and job catalog.
//!
//! A job is a single unit of work with a fixed processing duration.
//! Jobs are not split and carry no precedence constraints; a job's
//! duration does not depend on the machine that processes it.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A job to be scheduled.
///
/// Deserializes from either the crate's own field names or the column
/// headers of the uploaded job tables (`JobID`, `ProcessingTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier. Uniqueness is not enforced.
    #[serde(alias = "JobID", alias = "job_id")]
    pub id: String,
    /// Processing duration (time units). Must be positive and finite.
    #[serde(alias = "ProcessingTime", alias = "processingTime")]
    pub processing_time: f64,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: impl Into<String>, processing_time: f64) -> Self {
        Self {
            id: id.into(),
            processing_time,
        }
    }

    /// Whether the processing time is a usable duration.
    #[inline]
    pub fn has_valid_processing_time(&self) -> bool {
        self.processing_time.is_finite() && self.processing_time > 0.0
    }
}

/// Ordered, immutable collection of jobs available for scheduling.
///
/// Genes refer to jobs by their index in this catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobCatalog {
    jobs: Vec<Job>,
}

impl JobCatalog {
    /// Creates a catalog from a list of jobs, preserving order.
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// All jobs in catalog order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Job at the given catalog index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    /// Number of jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the catalog has no jobs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Sum of processing times over the catalog.
    pub fn total_processing_time(&self) -> f64 {
        self.jobs.iter().map(|j| j.processing_time).sum()
    }
}

impl From<Vec<Job>> for JobCatalog {
    fn from(jobs: Vec<Job>) -> Self {
        Self::new(jobs)
    }
}

impl FromIterator<Job> for JobCatalog {
    fn from_iter<I: IntoIterator<Item = Job>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
