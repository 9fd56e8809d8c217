//! Process descriptor model.
//!
//! A process descriptor is the caller-owned input to every scheduling
//! policy: an identifier, a display label, an arrival time, a CPU burst,
//! and an optional priority.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The consumer defines what one unit means (ms, ticks, ...).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Simulation time in abstract units.
pub type Time = i64;

/// A process to be scheduled.
///
/// Descriptors are never mutated by the engine; each run works on its own
/// private copy of the scheduling state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    /// Unique process identifier (within one run).
    pub id: String,
    /// Human-readable name. Not used in computation.
    pub name: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time required.
    pub burst_time: Time,
    /// Scheduling priority (lower = more important). `None` ranks last.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl ProcessDescriptor {
    /// Creates a new process arriving at `arrival_time` with the given burst.
    ///
    /// The name defaults to the ID.
    pub fn new(id: impl Into<String>, arrival_time: Time, burst_time: Time) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Compares two processes by priority, most important first.
    ///
    /// An absent priority compares greater than any explicit one, so
    /// prioritized policies never prefer it.
    pub fn cmp_priority(&self, other: &Self) -> Ordering {
        priority_cmp(self.priority, other.priority)
    }
}

/// Orders optional priorities: lower value first, `None` last.
fn priority_cmp(a: Option<i32>, b: Option<i32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
