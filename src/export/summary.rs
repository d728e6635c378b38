//! Schedule summary metrics.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total jobs | Number of exported records |
//! | Total processing time | Σ processing time over records |
//! | Machine counts | Records per machine (machines with none omitted) |
//! | Total completion time | Σ C_j over records |
//! | Makespan (C_max) | Latest completion time |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Schedule;

/// Aggregate statistics of an exported schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    /// Number of records (genes), duplicates included.
    pub total_jobs: usize,
    /// Sum of processing times over the records.
    pub total_processing_time: f64,
    /// Machine ID → number of records assigned to it.
    pub machine_counts: BTreeMap<String, usize>,
    /// Sum of completion times (the quantity the search minimizes).
    pub total_completion_time: f64,
    /// Latest completion time.
    pub makespan: f64,
}

impl ScheduleSummary {
    /// Computes the summary of a schedule.
    pub fn calculate(schedule: &Schedule) -> Self {
        Self {
            total_jobs: schedule.assignment_count(),
            total_processing_time: schedule.total_processing_time(),
            machine_counts: schedule.machine_counts(),
            total_completion_time: schedule.total_completion_time(),
            makespan: schedule.makespan(),
        }
    }
}
