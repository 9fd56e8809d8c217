//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower priority value = more important. A process without a priority
//! ranks below every process that has one.
//!
//! # Algorithm
//!
//! **Non-preemptive**: among arrived, incomplete processes pick the most
//! important one (ties: input order) and run it to completion.
//!
//! **Preemptive**: pick the most important process, run it until its
//! completion or the next arrival, then re-evaluate. An arrival of equal
//! priority does not preempt the running process.

use log::{debug, trace};

use super::state::SimulationState;
use crate::models::{ProcessDescriptor, SimulationResult};
use crate::validation::{validate_processes, SimulationError};

/// Simulates non-preemptive priority scheduling.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::policy::priority_non_preemptive;
///
/// let processes = vec![
///     ProcessDescriptor::new("Batch", 0, 1).with_priority(5),
///     ProcessDescriptor::new("Shell", 0, 1).with_priority(1),
/// ];
/// let result = priority_non_preemptive(&processes).unwrap();
/// assert_eq!(result.timeline[0].subject_id, "Shell");
/// ```
pub fn priority_non_preemptive(
    processes: &[ProcessDescriptor],
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    debug!("priority: simulating {} processes", processes.len());

    let mut state = SimulationState::new(processes);
    while !state.is_done() {
        let selected = state.select_ready_by(|a, b| a.process.cmp_priority(b.process), None);

        let Some(idx) = selected else {
            state.advance_idle();
            continue;
        };

        let until = state.now() + state.process(idx).remaining;
        state.run(idx, until);
    }

    let result = state.finish();
    debug!("priority: makespan {}", result.makespan());
    Ok(result)
}

/// Simulates preemptive priority scheduling.
pub fn priority_preemptive(
    processes: &[ProcessDescriptor],
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    debug!("priority-preemptive: simulating {} processes", processes.len());

    let mut state = SimulationState::new(processes);
    let mut running: Option<usize> = None;

    while !state.is_done() {
        let selected =
            state.select_ready_by(|a, b| a.process.cmp_priority(b.process), running);

        let Some(idx) = selected else {
            running = None;
            state.advance_idle();
            continue;
        };

        if let Some(prev) = running.filter(|&prev| prev != idx) {
            trace!(
                "priority-preemptive: {} preempts {} at {}",
                state.process(idx).process.id,
                state.process(prev).process.id,
                state.now()
            );
        }

        let until = state.next_decision_point(idx);
        let completed = state.run(idx, until);
        running = if completed { None } else { Some(idx) };
    }

    let result = state.finish();
    debug!("priority-preemptive: makespan {}", result.makespan());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(result: &SimulationResult) -> Vec<(&str, i64, i64)> {
        result
            .timeline
            .iter()
            .map(|i| (i.subject_id.as_str(), i.start_time, i.end_time))
            .collect()
    }

    #[test]
    fn test_priority_selects_lowest_value() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 3).with_priority(3),
            ProcessDescriptor::new("B", 0, 2).with_priority(1),
            ProcessDescriptor::new("C", 0, 1).with_priority(2),
        ];
        let result = priority_non_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("B", 0, 2), ("C", 2, 3), ("A", 3, 6)]);
    }

    #[test]
    fn test_missing_priority_runs_last() {
        let processes = vec![
            ProcessDescriptor::new("None", 0, 2),
            ProcessDescriptor::new("Low", 0, 2).with_priority(100),
        ];
        let result = priority_non_preemptive(&processes).unwrap();
        assert_eq!(result.timeline[0].subject_id, "Low");
    }

    #[test]
    fn test_zero_priority_is_not_missing() {
        let processes = vec![
            ProcessDescriptor::new("One", 0, 2).with_priority(1),
            ProcessDescriptor::new("Zero", 0, 2).with_priority(0),
        ];
        let result = priority_non_preemptive(&processes).unwrap();
        assert_eq!(result.timeline[0].subject_id, "Zero");
    }

    #[test]
    fn test_priority_tie_uses_input_order() {
        let processes = vec![
            ProcessDescriptor::new("First", 0, 5).with_priority(2),
            ProcessDescriptor::new("Second", 0, 1).with_priority(2),
        ];
        let result = priority_non_preemptive(&processes).unwrap();
        assert_eq!(result.timeline[0].subject_id, "First");
    }

    #[test]
    fn test_priority_non_preemptive_waits_for_completion() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 4).with_priority(5),
            ProcessDescriptor::new("B", 1, 2).with_priority(1),
        ];
        let result = priority_non_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 4), ("B", 4, 6)]);
    }

    #[test]
    fn test_priority_preemptive_preempts_on_arrival() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 4).with_priority(5),
            ProcessDescriptor::new("B", 1, 2).with_priority(1),
        ];
        let result = priority_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 6)]);

        let a = result.process("A").unwrap();
        assert_eq!(a.response_time, 0);
        assert_eq!(a.waiting_time, 2);
        assert_eq!(result.process("B").unwrap().response_time, 0);
    }

    #[test]
    fn test_priority_preemptive_no_preemption_on_tie() {
        let processes = vec![
            ProcessDescriptor::new("B", 1, 2).with_priority(3),
            ProcessDescriptor::new("A", 0, 4).with_priority(3),
        ];
        let result = priority_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 4), ("B", 4, 6)]);
    }

    #[test]
    fn test_priority_preemptive_missing_priority_never_preempts() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 3).with_priority(9),
            ProcessDescriptor::new("B", 1, 1),
        ];
        let result = priority_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 3), ("B", 3, 4)]);
    }

    #[test]
    fn test_priority_preemptive_with_idle() {
        let processes = vec![
            ProcessDescriptor::new("A", 2, 2).with_priority(1),
            ProcessDescriptor::new("B", 6, 1).with_priority(1),
        ];
        let result = priority_preemptive(&processes).unwrap();
        assert_eq!(
            spans(&result),
            vec![("idle", 0, 2), ("A", 2, 4), ("idle", 4, 6), ("B", 6, 7)]
        );
    }

    #[test]
    fn test_priority_empty() {
        assert!(priority_non_preemptive(&[]).unwrap().is_empty());
        assert!(priority_preemptive(&[]).unwrap().is_empty());
    }
}
