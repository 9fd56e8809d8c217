//! Simulation output model.
//!
//! A [`SimulationResult`] pairs the per-process performance records with
//! the execution timeline of one policy run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | Time the last unit of burst finishes |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first dispatch - arrival |

use serde::{Deserialize, Serialize};

use super::{ProcessDescriptor, Time, TimelineInterval};

/// Performance record of one completed process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The input descriptor.
    #[serde(flatten)]
    pub process: ProcessDescriptor,
    /// Time at which the process finished.
    pub completion_time: Time,
    /// completion - arrival.
    pub turnaround_time: Time,
    /// turnaround - burst.
    pub waiting_time: Time,
    /// First dispatch - arrival.
    pub response_time: Time,
}

impl ProcessResult {
    /// Derives the record from completion and first-dispatch times.
    pub fn new(process: ProcessDescriptor, completion_time: Time, first_dispatch: Time) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = first_dispatch - process.arrival_time;
        Self {
            process,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }

    /// Process ID.
    #[inline]
    pub fn id(&self) -> &str {
        &self.process.id
    }

    /// Whether the derived metrics satisfy
    /// `turnaround >= burst`, `waiting >= 0`, `0 <= response <= waiting`.
    pub fn metrics_consistent(&self) -> bool {
        self.turnaround_time >= self.process.burst_time
            && self.waiting_time >= 0
            && self.response_time >= 0
            && self.response_time <= self.waiting_time
    }
}

/// Output of one policy run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Completed process records, in caller input order.
    pub processes: Vec<ProcessResult>,
    /// Execution timeline.
    pub timeline: Vec<TimelineInterval>,
}

impl SimulationResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the run had no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Finds the record for a process.
    pub fn process(&self, id: &str) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Returns every interval in which the given subject ran.
    pub fn intervals_for(&self, id: &str) -> Vec<&TimelineInterval> {
        self.timeline.iter().filter(|i| i.subject_id == id).collect()
    }

    /// Makespan: latest completion time (0 if empty).
    pub fn makespan(&self) -> Time {
        self.processes
            .iter()
            .map(|p| p.completion_time)
            .max()
            .unwrap_or(0)
    }

    /// Total idle time on the timeline.
    pub fn idle_time(&self) -> Time {
        self.timeline
            .iter()
            .filter(|i| i.is_idle())
            .map(|i| i.duration())
            .sum()
    }

    /// Number of transitions from one process directly to another.
    ///
    /// Idle gaps are not counted as switches.
    pub fn context_switches(&self) -> usize {
        self.timeline
            .windows(2)
            .filter(|w| !w[0].is_idle() && !w[1].is_idle() && w[0].subject_id != w[1].subject_id)
            .count()
    }
}
