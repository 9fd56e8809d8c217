//! Execution timeline (Gantt chart) model.
//!
//! A timeline is an ordered sequence of half-open intervals `[start, end)`
//! recording which process, or idle time, occupies the processor.
//!
//! # Invariants
//! For a completed run the intervals:
//! - start at t=0,
//! - are contiguous (each `start_time` equals the previous `end_time`),
//! - never overlap, and never have zero length.

use serde::{Deserialize, Serialize};

use super::{ProcessDescriptor, Time};

/// Subject ID used for idle intervals.
pub const IDLE_ID: &str = "idle";

/// Subject name used for idle intervals.
pub const IDLE_NAME: &str = "Idle";

/// One Gantt chart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInterval {
    /// Process ID, or [`IDLE_ID`].
    pub subject_id: String,
    /// Process name, or [`IDLE_NAME`].
    pub subject_name: String,
    /// Interval start (inclusive).
    pub start_time: Time,
    /// Interval end (exclusive).
    pub end_time: Time,
}

impl TimelineInterval {
    /// Creates a new interval.
    pub fn new(
        subject_id: impl Into<String>,
        subject_name: impl Into<String>,
        start_time: Time,
        end_time: Time,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            subject_name: subject_name.into(),
            start_time,
            end_time,
        }
    }

    /// Creates an idle interval.
    pub fn idle(start_time: Time, end_time: Time) -> Self {
        Self::new(IDLE_ID, IDLE_NAME, start_time, end_time)
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> Time {
        self.end_time - self.start_time
    }

    /// Whether this interval records idle time.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.subject_id == IDLE_ID
    }
}

/// Accumulates timeline intervals as a policy advances its clock.
///
/// Consecutive run intervals for the same process are merged, so a
/// preemptive policy that keeps running one process across several
/// decision points produces a single entry.
#[derive(Debug, Clone, Default)]
pub struct TimelineBuilder {
    intervals: Vec<TimelineInterval>,
}

impl TimelineBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an idle interval `[from, to)`.
    ///
    /// Empty ranges are ignored.
    pub fn record_idle(&mut self, from: Time, to: Time) {
        if to <= from {
            return;
        }
        self.push_or_extend(IDLE_ID, IDLE_NAME, from, to);
    }

    /// Appends a run interval `[from, to)` for `subject`.
    ///
    /// Extends the previous interval instead when it belongs to the same
    /// subject and ends exactly at `from`. Empty ranges are ignored.
    pub fn record_run(&mut self, subject: &ProcessDescriptor, from: Time, to: Time) {
        if to <= from {
            return;
        }
        self.push_or_extend(&subject.id, &subject.name, from, to);
    }

    fn push_or_extend(&mut self, id: &str, name: &str, from: Time, to: Time) {
        if let Some(last) = self.intervals.last_mut() {
            if last.subject_id == id && last.end_time == from {
                last.end_time = to;
                return;
            }
        }
        self.intervals.push(TimelineInterval::new(id, name, from, to));
    }

    /// End time of the last recorded interval (0 if empty).
    pub fn end_time(&self) -> Time {
        self.intervals.last().map(|i| i.end_time).unwrap_or(0)
    }

    /// Number of intervals recorded so far.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval has been recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Consumes the builder and returns the intervals.
    pub fn finish(self) -> Vec<TimelineInterval> {
        self.intervals
    }
}
