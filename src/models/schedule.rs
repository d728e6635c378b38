//! Schedule (solution) model.
//!
//! A schedule is the literal transcription of a candidate's genes into
//! job-machine-time assignments, in gene order. It is not required to
//! cover every job exactly once.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An exported schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Job-machine assignments in dispatch order.
    pub assignments: Vec<Assignment>,
}

/// A single job-to-machine assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Assigned job ID.
    pub job_id: String,
    /// Assigned machine ID.
    pub machine_id: String,
    /// Job processing duration.
    pub processing_time: f64,
    /// Start time on the machine.
    pub start: f64,
    /// Completion time on the machine.
    pub end: f64,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        job_id: impl Into<String>,
        machine_id: impl Into<String>,
        processing_time: f64,
        start: f64,
        end: f64,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            machine_id: machine_id.into(),
            processing_time,
            start,
            end,
        }
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Latest completion time across all assignments.
    pub fn makespan(&self) -> f64 {
        self.assignments
            .iter()
            .map(|a| a.end)
            .fold(0.0, f64::max)
    }

    /// Sum of completion times across all assignments.
    pub fn total_completion_time(&self) -> f64 {
        self.assignments.iter().map(|a| a.end).sum()
    }

    /// Sum of processing times across all assignments.
    pub fn total_processing_time(&self) -> f64 {
        self.assignments.iter().map(|a| a.processing_time).sum()
    }

    /// Number of assignments per machine. Machines without assignments are absent.
    pub fn machine_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for a in &self.assignments {
            *counts.entry(a.machine_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}
