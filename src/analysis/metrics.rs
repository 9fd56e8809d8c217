//! Aggregate performance metrics.
//!
//! Computes summary statistics over the process records of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean waiting | mean(turnaround - burst) |
//! | Mean turnaround | mean(completion - arrival) |
//! | Mean response | mean(first dispatch - arrival) |
//! | Makespan | Latest completion time |
//! | CPU utilization | busy time / makespan |
//! | Throughput | processes / makespan |
//!
//! Every mean and ratio is 0.0 for an empty set.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, SimulationResult, Time};

/// Summary statistics of one policy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Number of processes.
    pub process_count: usize,
    /// Mean waiting time.
    pub mean_waiting: f64,
    /// Mean turnaround time.
    pub mean_turnaround: f64,
    /// Mean response time.
    pub mean_response: f64,
    /// Latest completion time.
    pub makespan: Time,
    /// Total CPU time spent running processes.
    pub busy_time: Time,
    /// Idle time within `[0, makespan]`.
    pub total_idle_time: Time,
    /// busy / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Process-to-process switches. `None` when no timeline was available.
    pub context_switches: Option<usize>,
}

impl AggregateMetrics {
    /// Computes metrics from process records alone.
    ///
    /// Idle time is derived as `makespan - busy`, which holds for any
    /// record set produced by a single-processor run starting at t=0.
    pub fn calculate(processes: &[ProcessResult]) -> Self {
        let count = processes.len();
        // Wide totals: per-record times fit in `Time`, their sums may not
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut total_response: i128 = 0;
        let mut total_burst: i128 = 0;
        let mut makespan: Time = 0;

        for p in processes {
            total_waiting += i128::from(p.waiting_time);
            total_turnaround += i128::from(p.turnaround_time);
            total_response += i128::from(p.response_time);
            total_burst += i128::from(p.process.burst_time);
            makespan = makespan.max(p.completion_time);
        }
        let busy = Time::try_from(total_burst).unwrap_or(Time::MAX);

        let mean = |total: i128| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                busy as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            process_count: count,
            mean_waiting: mean(total_waiting),
            mean_turnaround: mean(total_turnaround),
            mean_response: mean(total_response),
            makespan,
            busy_time: busy,
            total_idle_time: makespan.saturating_sub(busy).max(0),
            cpu_utilization,
            throughput,
            context_switches: None,
        }
    }

    /// Computes metrics from a full run, including timeline-derived figures.
    pub fn from_result(result: &SimulationResult) -> Self {
        let mut metrics = Self::calculate(&result.processes);
        metrics.total_idle_time = result.idle_time();
        metrics.context_switches = Some(result.context_switches());
        metrics
    }
}
