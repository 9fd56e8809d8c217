//! CPU scheduling policies.
//!
//! Six policies share one contract: they borrow a slice of
//! [`ProcessDescriptor`]s, simulate a single processor, and return a
//! [`SimulationResult`] (per-process records + timeline) or a
//! [`SimulationError`] for invalid input.
//!
//! | Policy | Selection key | Preemptive |
//! |--------|---------------|-----------|
//! | FCFS | arrival time | no |
//! | SJF | burst time | no |
//! | SRTF | remaining time | yes |
//! | Priority | priority value | no |
//! | Priority (preemptive) | priority value | yes |
//! | Round Robin | FIFO queue, time quantum | yes |
//!
//! # Tie-breaking
//! Ties on the selection key go to the process earliest in the caller's
//! input order. Preemptive policies never switch away from the running
//! process for a candidate that merely ties it.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::models::ProcessDescriptor;
//! use cpu_schedule::policy::{Algorithm, SimulationRequest};
//!
//! let processes = vec![
//!     ProcessDescriptor::new("A", 0, 4),
//!     ProcessDescriptor::new("B", 1, 2),
//! ];
//! let request = SimulationRequest::new(processes, Algorithm::RoundRobin).with_time_quantum(2);
//! let result = request.run().unwrap();
//! assert_eq!(result.timeline.len(), 3);
//! ```

mod fcfs;
mod priority;
mod round_robin;
mod sjf;
pub(crate) mod state;

pub use fcfs::fcfs;
pub use priority::{priority_non_preemptive, priority_preemptive};
pub use round_robin::round_robin;
pub use sjf::{sjf_non_preemptive, sjf_preemptive};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ProcessDescriptor, SimulationResult, Time};
use crate::validation::SimulationError;

/// Default round robin time quantum.
pub const DEFAULT_TIME_QUANTUM: Time = 4;

/// A scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-come, first-served.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest job first, non-preemptive.
    #[serde(rename = "sjf-nonpreemptive")]
    SjfNonPreemptive,
    /// Shortest remaining time first.
    #[serde(rename = "sjf-preemptive")]
    SjfPreemptive,
    /// Priority, non-preemptive.
    #[serde(rename = "priority-nonpreemptive")]
    PriorityNonPreemptive,
    /// Priority, preemptive.
    #[serde(rename = "priority-preemptive")]
    PriorityPreemptive,
    /// Round robin.
    #[serde(rename = "rr")]
    RoundRobin,
}

impl Algorithm {
    /// Every policy, in presentation order.
    pub fn all() -> [Algorithm; 6] {
        [
            Self::Fcfs,
            Self::SjfNonPreemptive,
            Self::SjfPreemptive,
            Self::PriorityNonPreemptive,
            Self::PriorityPreemptive,
            Self::RoundRobin,
        ]
    }

    /// Short identifier (e.g., "sjf-preemptive").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::SjfNonPreemptive => "sjf-nonpreemptive",
            Self::SjfPreemptive => "sjf-preemptive",
            Self::PriorityNonPreemptive => "priority-nonpreemptive",
            Self::PriorityPreemptive => "priority-preemptive",
            Self::RoundRobin => "rr",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First Come First Serve",
            Self::SjfNonPreemptive => "Shortest Job First",
            Self::SjfPreemptive => "Shortest Remaining Time First",
            Self::PriorityNonPreemptive => "Priority",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Whether the policy can interrupt a running process.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::SjfPreemptive | Self::PriorityPreemptive | Self::RoundRobin
        )
    }

    /// Whether the policy reads process priorities.
    pub fn uses_priority(&self) -> bool {
        matches!(self, Self::PriorityNonPreemptive | Self::PriorityPreemptive)
    }

    /// Runs this policy. `time_quantum` is only read by round robin.
    pub fn run(
        &self,
        processes: &[ProcessDescriptor],
        time_quantum: Time,
    ) -> Result<SimulationResult, SimulationError> {
        match self {
            Self::Fcfs => fcfs(processes),
            Self::SjfNonPreemptive => sjf_non_preemptive(processes),
            Self::SjfPreemptive => sjf_preemptive(processes),
            Self::PriorityNonPreemptive => priority_non_preemptive(processes),
            Self::PriorityPreemptive => priority_preemptive(processes),
            Self::RoundRobin => round_robin(processes, time_quantum),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown algorithm identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown scheduling algorithm '{}'", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Parses an identifier as produced by [`Algorithm::key`] (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|a| a.key() == lower)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// Input container for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<ProcessDescriptor>,
    /// Policy to apply.
    pub algorithm: Algorithm,
    /// Round robin time quantum.
    #[serde(default = "default_time_quantum")]
    pub time_quantum: Time,
}

fn default_time_quantum() -> Time {
    DEFAULT_TIME_QUANTUM
}

impl SimulationRequest {
    /// Creates a new request with the default time quantum.
    pub fn new(processes: Vec<ProcessDescriptor>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            time_quantum: DEFAULT_TIME_QUANTUM,
        }
    }

    /// Sets the round robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Runs the requested policy.
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        self.algorithm.run(&self.processes, self.time_quantum)
    }
}
