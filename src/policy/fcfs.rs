//! First-Come, First-Served.
//!
//! # Algorithm
//! 1. Among arrived, incomplete processes pick the earliest arrival
//!    (ties: input order).
//! 2. Run it to completion.
//! 3. If nothing has arrived, jump to the next arrival and record idle time.
//!
//! # Complexity
//! O(n²) selection over n processes.

use log::debug;

use super::state::SimulationState;
use crate::models::{ProcessDescriptor, SimulationResult};
use crate::validation::{validate_processes, SimulationError};

/// Simulates non-preemptive first-come, first-served scheduling.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::policy::fcfs;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 5),
///     ProcessDescriptor::new("B", 1, 3),
/// ];
/// let result = fcfs(&processes).unwrap();
/// assert_eq!(result.process("B").unwrap().waiting_time, 4);
/// ```
pub fn fcfs(processes: &[ProcessDescriptor]) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    debug!("fcfs: simulating {} processes", processes.len());

    let mut state = SimulationState::new(processes);
    while !state.is_done() {
        let selected = state.select_ready_by(
            |a, b| a.process.arrival_time.cmp(&b.process.arrival_time),
            None,
        );

        let Some(idx) = selected else {
            state.advance_idle();
            continue;
        };

        let until = state.now() + state.process(idx).remaining;
        state.run(idx, until);
    }

    let result = state.finish();
    debug!("fcfs: makespan {}", result.makespan());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 5),
            ProcessDescriptor::new("B", 1, 3),
        ];
        let result = fcfs(&processes).unwrap();

        let a = result.intervals_for("A");
        let b = result.intervals_for("B");
        assert_eq!((a[0].start_time, a[0].end_time), (0, 5));
        assert_eq!((b[0].start_time, b[0].end_time), (5, 8));
        assert_eq!(result.process("A").unwrap().waiting_time, 0);
        assert_eq!(result.process("B").unwrap().waiting_time, 4);
    }

    #[test]
    fn test_fcfs_orders_by_arrival_not_input() {
        let processes = vec![
            ProcessDescriptor::new("Late", 2, 1),
            ProcessDescriptor::new("Early", 0, 3),
        ];
        let result = fcfs(&processes).unwrap();

        assert_eq!(result.timeline[0].subject_id, "Early");
        assert_eq!(result.timeline[1].subject_id, "Late");
        // Output keeps input order
        assert_eq!(result.processes[0].id(), "Late");
        assert_eq!(result.process("Late").unwrap().completion_time, 4);
    }

    #[test]
    fn test_fcfs_arrival_tie_uses_input_order() {
        let processes = vec![
            ProcessDescriptor::new("Long", 0, 10),
            ProcessDescriptor::new("Short", 0, 1),
        ];
        let result = fcfs(&processes).unwrap();
        assert_eq!(result.timeline[0].subject_id, "Long");
        assert_eq!(result.process("Short").unwrap().response_time, 10);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![
            ProcessDescriptor::new("A", 2, 2),
            ProcessDescriptor::new("B", 7, 1),
        ];
        let result = fcfs(&processes).unwrap();

        let kinds: Vec<(&str, i64, i64)> = result
            .timeline
            .iter()
            .map(|i| (i.subject_id.as_str(), i.start_time, i.end_time))
            .collect();
        assert_eq!(
            kinds,
            vec![("idle", 0, 2), ("A", 2, 4), ("idle", 4, 7), ("B", 7, 8)]
        );
        assert_eq!(result.process("B").unwrap().waiting_time, 0);
    }

    #[test]
    fn test_fcfs_empty() {
        let result = fcfs(&[]).unwrap();
        assert!(result.is_empty());
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_fcfs_rejects_zero_burst() {
        let processes = vec![ProcessDescriptor::new("A", 0, 0)];
        let err = fcfs(&processes).unwrap_err();
        assert!(err.has_kind(ValidationErrorKind::NonPositiveBurst));
    }
}
