//! Scheduling domain models.
//!
//! Provides the data types consumed and produced by the GA core:
//! the job catalog and machine set it draws from, and the schedule
//! it exports.
//!
//! # Domain Mappings
//!
//! | u-schedule-ga | Manufacturing | Print Shop | Logistics |
//! |---------------|--------------|------------|-----------|
//! | Job | Work Order | Print Job | Shipment |
//! | Machine | Machine | Printer | Loading Dock |
//! | Schedule | Production Plan | Queue Plan | Dock Plan |

mod job;
mod machine;
mod schedule;

pub use job::{Job, JobCatalog};
pub use machine::{Machine, MachineSet};
pub use schedule::{Assignment, Schedule};
