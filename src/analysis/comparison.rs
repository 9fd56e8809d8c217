//! Side-by-side policy comparison.
//!
//! Runs several policies over the same process set and ranks them by an
//! aggregate metric. A report is built fresh per call; nothing is cached
//! between calls.

use serde::{Deserialize, Serialize};

use super::AggregateMetrics;
use crate::models::{ProcessDescriptor, SimulationResult, Time};
use crate::policy::Algorithm;
use crate::validation::SimulationError;

/// Metric used to rank policies. Lower is better for every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Mean waiting time.
    Waiting,
    /// Mean turnaround time.
    Turnaround,
    /// Mean response time.
    Response,
}

impl Criterion {
    fn score(&self, metrics: &AggregateMetrics) -> f64 {
        match self {
            Self::Waiting => metrics.mean_waiting,
            Self::Turnaround => metrics.mean_turnaround,
            Self::Response => metrics.mean_response,
        }
    }
}

/// Outcome of one policy within a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Policy that produced this entry.
    pub algorithm: Algorithm,
    /// Full simulation output.
    pub result: SimulationResult,
    /// Summary of `result`.
    pub metrics: AggregateMetrics,
}

/// Results of several policies over one process set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// One entry per requested policy, in request order.
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    /// Finds the entry for a policy.
    pub fn get(&self, algorithm: Algorithm) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// The entry with the lowest score under `criterion`.
    ///
    /// Ties go to the earlier entry.
    pub fn best_by(&self, criterion: Criterion) -> Option<&ComparisonEntry> {
        self.entries.iter().fold(None, |best, entry| match best {
            Some(b) if criterion.score(&b.metrics) <= criterion.score(&entry.metrics) => Some(b),
            _ => Some(entry),
        })
    }

    /// Entries ordered by `criterion`, best first (stable for ties).
    pub fn ranked_by(&self, criterion: Criterion) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<&ComparisonEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| {
            criterion
                .score(&a.metrics)
                .partial_cmp(&criterion.score(&b.metrics))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs each algorithm over `processes` and collects the results.
///
/// Duplicate algorithms are run once. Fails on the first policy that
/// rejects the input.
///
/// # Example
///
/// ```
/// use cpu_schedule::analysis::{compare, Criterion};
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::policy::Algorithm;
///
/// let processes = vec![
///     ProcessDescriptor::new("Long", 0, 10),
///     ProcessDescriptor::new("Short", 1, 1),
/// ];
/// let report = compare(&processes, &[Algorithm::Fcfs, Algorithm::SjfPreemptive], 2).unwrap();
/// let best = report.best_by(Criterion::Waiting).unwrap();
/// assert_eq!(best.algorithm, Algorithm::SjfPreemptive);
/// ```
pub fn compare(
    processes: &[ProcessDescriptor],
    algorithms: &[Algorithm],
    time_quantum: Time,
) -> Result<ComparisonReport, SimulationError> {
    let mut report = ComparisonReport::default();
    for &algorithm in algorithms {
        if report.get(algorithm).is_some() {
            continue;
        }
        let result = algorithm.run(processes, time_quantum)?;
        let metrics = AggregateMetrics::from_result(&result);
        report.entries.push(ComparisonEntry {
            algorithm,
            result,
            metrics,
        });
    }
    Ok(report)
}

/// Runs every algorithm over `processes`.
pub fn compare_all(
    processes: &[ProcessDescriptor],
    time_quantum: Time,
) -> Result<ComparisonReport, SimulationError> {
    compare(processes, &Algorithm::all(), time_quantum)
}
