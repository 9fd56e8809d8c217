//! Run metrics and policy comparison.
//!
//! # Metrics
//!
//! `AggregateMetrics` summarizes one run: mean waiting, turnaround and
//! response times, makespan, utilization, and throughput.
//!
//! # Comparison
//!
//! `compare` runs several policies over the same input and ranks them
//! by a chosen metric.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2:
//!   Scheduling Criteria

mod comparison;
mod metrics;

pub use comparison::{compare, compare_all, ComparisonEntry, ComparisonReport, Criterion};
pub use metrics::AggregateMetrics;
