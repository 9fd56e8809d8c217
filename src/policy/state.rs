//! Per-run simulation state shared by all policies.
//!
//! Holds the simulation clock, the private working copy of every process
//! (remaining time, first dispatch, completion, queue membership), and the
//! timeline under construction. One `SimulationState` is owned exclusively
//! by one policy run and consumed when the run finishes.
//!
//! # Event model
//! Policies never step the clock one unit at a time. They either:
//! - run a process up to an explicit decision point
//!   ([`SimulationState::next_decision_point`]), or
//! - jump over an idle gap to the next pending arrival
//!   ([`SimulationState::advance_idle`]).

use std::cmp::Ordering;

use log::trace;

use crate::models::{ProcessDescriptor, ProcessResult, SimulationResult, Time, TimelineBuilder};

/// Mutable scheduling record for one process during a run.
#[derive(Debug)]
pub(crate) struct WorkingProcess<'a> {
    /// The caller's descriptor (read-only).
    pub process: &'a ProcessDescriptor,
    /// CPU time still required.
    pub remaining: Time,
    /// Clock value at the first dispatch.
    pub first_dispatch: Option<Time>,
    /// Clock value at completion.
    pub completion: Option<Time>,
    /// Whether the process currently sits in a ready queue.
    pub queued: bool,
}

impl<'a> WorkingProcess<'a> {
    fn new(process: &'a ProcessDescriptor) -> Self {
        Self {
            process,
            remaining: process.burst_time,
            first_dispatch: None,
            completion: None,
            queued: false,
        }
    }

    /// Whether the process has finished its burst.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }
}

/// Clock, working copies, and timeline of one policy run.
#[derive(Debug)]
pub(crate) struct SimulationState<'a> {
    clock: Time,
    procs: Vec<WorkingProcess<'a>>,
    /// Process indices sorted by (arrival, input position).
    by_arrival: Vec<usize>,
    /// Prefix of `by_arrival` already handed out by `admit_arrivals`.
    admitted: usize,
    completed: usize,
    timeline: TimelineBuilder,
}

impl<'a> SimulationState<'a> {
    /// Builds working copies of `processes`, preserving input order.
    pub fn new(processes: &'a [ProcessDescriptor]) -> Self {
        let procs: Vec<WorkingProcess<'a>> = processes.iter().map(WorkingProcess::new).collect();

        // Stable sort: equal arrivals keep input order
        let mut by_arrival: Vec<usize> = (0..procs.len()).collect();
        by_arrival.sort_by_key(|&i| procs[i].process.arrival_time);

        Self {
            clock: 0,
            procs,
            by_arrival,
            admitted: 0,
            completed: 0,
            timeline: TimelineBuilder::new(),
        }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> Time {
        self.clock
    }

    /// Whether every process has completed. True immediately for no processes.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.completed == self.procs.len()
    }

    /// Working copy of process `idx`.
    #[inline]
    pub fn process(&self, idx: usize) -> &WorkingProcess<'a> {
        &self.procs[idx]
    }

    /// Mutable working copy of process `idx`.
    #[inline]
    pub fn process_mut(&mut self, idx: usize) -> &mut WorkingProcess<'a> {
        &mut self.procs[idx]
    }

    /// Whether process `idx` has arrived and not completed.
    #[inline]
    pub fn is_ready(&self, idx: usize) -> bool {
        let w = &self.procs[idx];
        !w.is_completed() && w.process.arrival_time <= self.clock
    }

    /// Number of processes that have arrived by the current clock.
    ///
    /// They form the prefix `by_arrival[..n]`.
    fn arrived_count(&self) -> usize {
        self.by_arrival
            .partition_point(|&i| self.procs[i].process.arrival_time <= self.clock)
    }

    /// Earliest arrival strictly after `time`.
    ///
    /// A process arriving after the clock cannot have run yet, so no
    /// completion filter is needed.
    pub fn next_arrival_after(&self, time: Time) -> Option<Time> {
        let pos = self
            .by_arrival
            .partition_point(|&i| self.procs[i].process.arrival_time <= time);
        self.by_arrival
            .get(pos)
            .map(|&i| self.procs[i].process.arrival_time)
    }

    /// Next point at which a preemptive policy must re-evaluate its choice
    /// while running process `idx`: its completion or the next arrival,
    /// whichever comes first.
    pub fn next_decision_point(&self, idx: usize) -> Time {
        let finish = self.clock + self.procs[idx].remaining;
        match self.next_arrival_after(self.clock) {
            Some(arrival) => arrival.min(finish),
            None => finish,
        }
    }

    /// Selects the ready process that orders first under `cmp`.
    ///
    /// Ties go to the process earliest in input order, except that a ready
    /// `incumbent` tying the best candidate is kept (no preemption on ties).
    pub fn select_ready_by<F>(&self, cmp: F, incumbent: Option<usize>) -> Option<usize>
    where
        F: Fn(&WorkingProcess<'a>, &WorkingProcess<'a>) -> Ordering,
    {
        let mut best: Option<usize> = None;
        for &idx in &self.by_arrival[..self.arrived_count()] {
            if self.procs[idx].is_completed() {
                continue;
            }
            best = match best {
                None => Some(idx),
                Some(b) => match cmp(&self.procs[idx], &self.procs[b]) {
                    Ordering::Less => Some(idx),
                    Ordering::Equal if idx < b => Some(idx),
                    _ => Some(b),
                },
            };
        }

        match (best, incumbent) {
            (Some(b), Some(inc))
                if inc != b
                    && self.is_ready(inc)
                    && cmp(&self.procs[inc], &self.procs[b]) == Ordering::Equal =>
            {
                Some(inc)
            }
            _ => best,
        }
    }

    /// Returns processes that have arrived by the current clock and were
    /// not returned before, in (arrival, input position) order.
    pub fn admit_arrivals(&mut self) -> Vec<usize> {
        let start = self.admitted;
        while let Some(&idx) = self.by_arrival.get(self.admitted) {
            if self.procs[idx].process.arrival_time > self.clock {
                break;
            }
            self.admitted += 1;
        }
        self.by_arrival[start..self.admitted].to_vec()
    }

    /// Jumps the clock to the next pending arrival, recording the gap as idle.
    ///
    /// Callers invoke this only when no process is ready. Every process
    /// that has arrived is then complete, so the next pending arrival is
    /// the first one after the clock.
    pub fn advance_idle(&mut self) {
        debug_assert!(
            self.by_arrival[..self.arrived_count()]
                .iter()
                .all(|&i| self.procs[i].is_completed()),
            "idle jump with a ready process"
        );
        let Some(next) = self.next_arrival_after(self.clock) else {
            return;
        };
        if next > self.clock {
            trace!("idle [{}, {})", self.clock, next);
            self.timeline.record_idle(self.clock, next);
            self.clock = next;
        }
    }

    /// Runs process `idx` from the current clock until `until`.
    ///
    /// Records the first dispatch, the timeline interval, and completion.
    /// Returns `true` if the process completed.
    pub fn run(&mut self, idx: usize, until: Time) -> bool {
        let start = self.clock;
        let slice = until - start;
        debug_assert!(slice > 0, "empty run slice");
        debug_assert!(slice <= self.procs[idx].remaining, "slice exceeds remaining burst");

        let w = &mut self.procs[idx];
        if w.first_dispatch.is_none() {
            w.first_dispatch = Some(start);
        }
        w.remaining -= slice;
        trace!(
            "run {} [{}, {}) remaining={}",
            w.process.id,
            start,
            until,
            w.remaining
        );

        self.timeline.record_run(w.process, start, until);
        self.clock = until;

        if w.remaining == 0 {
            w.completion = Some(until);
            self.completed += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the state and builds the run's result.
    pub fn finish(self) -> SimulationResult {
        let processes = self
            .procs
            .into_iter()
            .filter_map(|w| match (w.completion, w.first_dispatch) {
                (Some(completion), Some(first)) => {
                    Some(ProcessResult::new(w.process.clone(), completion, first))
                }
                _ => None,
            })
            .collect();

        SimulationResult {
            processes,
            timeline: self.timeline.finish(),
        }
    }
}
