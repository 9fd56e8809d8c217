//! Round Robin.
//!
//! # Algorithm
//! 1. Admit every process that has arrived by the current clock to the
//!    back of a FIFO ready queue, in arrival order.
//! 2. Re-append the process preempted at this instant, *after* the
//!    arrivals of step 1.
//! 3. Dispatch the queue head for `min(quantum, remaining)` time units.
//! 4. If the queue is empty, jump to the next arrival (idle).
//!
//! Each working process carries a `queued` flag, so it sits in the queue at
//! most once at any time.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use log::{debug, trace};

use super::state::SimulationState;
use crate::models::{ProcessDescriptor, SimulationResult, Time};
use crate::validation::{validate_round_robin, SimulationError};

/// Simulates round robin scheduling with the given time quantum.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::policy::round_robin;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 4),
///     ProcessDescriptor::new("B", 1, 2),
/// ];
/// let result = round_robin(&processes, 2).unwrap();
/// assert_eq!(result.process("B").unwrap().completion_time, 4);
/// assert_eq!(result.process("A").unwrap().completion_time, 6);
/// ```
pub fn round_robin(
    processes: &[ProcessDescriptor],
    time_quantum: Time,
) -> Result<SimulationResult, SimulationError> {
    validate_round_robin(processes, time_quantum)?;
    debug!(
        "rr: simulating {} processes, quantum {}",
        processes.len(),
        time_quantum
    );

    let mut state = SimulationState::new(processes);
    let mut ready: VecDeque<usize> = VecDeque::new();
    let mut preempted: Option<usize> = None;

    while !state.is_done() {
        for idx in state.admit_arrivals() {
            enqueue(&mut state, &mut ready, idx);
        }
        if let Some(idx) = preempted.take() {
            enqueue(&mut state, &mut ready, idx);
        }

        let Some(idx) = ready.pop_front() else {
            state.advance_idle();
            continue;
        };
        state.process_mut(idx).queued = false;

        let slice = time_quantum.min(state.process(idx).remaining);
        let until = state.now() + slice;
        if !state.run(idx, until) {
            trace!("rr: quantum expired for {} at {}", state.process(idx).process.id, until);
            preempted = Some(idx);
        }
    }

    let result = state.finish();
    debug!("rr: makespan {}", result.makespan());
    Ok(result)
}

fn enqueue(state: &mut SimulationState<'_>, ready: &mut VecDeque<usize>, idx: usize) {
    let w = state.process_mut(idx);
    if w.queued || w.is_completed() {
        return;
    }
    w.queued = true;
    ready.push_back(idx);
}
