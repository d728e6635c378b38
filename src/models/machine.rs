//! Machine model.
//!
//! Machines are single-server resources that process their assigned
//! jobs one at a time, first-in first-out in assignment order.

use serde::{Deserialize, Serialize};

/// Machine identifier.
pub type Machine = String;

/// Fixed, immutable set of machine identifiers.
///
/// Genes refer to machines by their index in this set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineSet {
    machines: Vec<Machine>,
}

impl MachineSet {
    /// Creates a machine set, preserving order.
    pub fn new<I, S>(machines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Machine>,
    {
        Self {
            machines: machines.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates `count` machines named `M1..=M{count}`.
    pub fn numbered(count: usize) -> Self {
        Self::new((1..=count).map(|i| format!("M{i}")))
    }

    /// All machine identifiers in set order.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Machine identifier at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.machines.get(index).map(|m| m.as_str())
    }

    /// Number of machines.
    #[inline]
    pub fn len(&self) -> usize {
        self.machines.len()
    }

    /// Whether the set has no machines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.machines.is_empty()
    }
}

/// Three machines: `M1`, `M2`, `M3`.
impl Default for MachineSet {
    fn default() -> Self {
        Self::numbered(3)
    }
}
