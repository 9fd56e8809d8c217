//! Shortest Job First, non-preemptive and preemptive (SRTF).
//!
//! # Algorithm
//!
//! **Non-preemptive**: among arrived, incomplete processes pick the smallest
//! burst time (ties: input order) and run it to completion.
//!
//! **Preemptive** (Shortest Remaining Time First): pick the smallest
//! *remaining* time, run it until the next decision point (its completion
//! or the next arrival), then re-evaluate. A newly arrived process that only
//! ties the running one does not preempt it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2

use log::{debug, trace};

use super::state::SimulationState;
use crate::models::{ProcessDescriptor, SimulationResult};
use crate::validation::{validate_processes, SimulationError};

/// Simulates non-preemptive shortest-job-first scheduling.
pub fn sjf_non_preemptive(
    processes: &[ProcessDescriptor],
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    debug!("sjf: simulating {} processes", processes.len());

    let mut state = SimulationState::new(processes);
    while !state.is_done() {
        let selected = state.select_ready_by(
            |a, b| a.process.burst_time.cmp(&b.process.burst_time),
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
    debug!("sjf: makespan {}", result.makespan());
    Ok(result)
}

/// Simulates preemptive shortest-job-first (shortest remaining time first).
///
/// # Example
///
/// ```
/// use cpu_schedule::models::ProcessDescriptor;
/// use cpu_schedule::policy::sjf_preemptive;
///
/// let processes = vec![
///     ProcessDescriptor::new("A", 0, 8),
///     ProcessDescriptor::new("B", 1, 4),
/// ];
/// let result = sjf_preemptive(&processes).unwrap();
/// assert_eq!(result.process("A").unwrap().completion_time, 12);
/// assert_eq!(result.process("B").unwrap().completion_time, 5);
/// ```
pub fn sjf_preemptive(
    processes: &[ProcessDescriptor],
) -> Result<SimulationResult, SimulationError> {
    validate_processes(processes)?;
    debug!("srtf: simulating {} processes", processes.len());

    let mut state = SimulationState::new(processes);
    let mut running: Option<usize> = None;

    while !state.is_done() {
        let selected = state.select_ready_by(|a, b| a.remaining.cmp(&b.remaining), running);

        let Some(idx) = selected else {
            running = None;
            state.advance_idle();
            continue;
        };

        if let Some(prev) = running.filter(|&prev| prev != idx) {
            trace!(
                "srtf: {} preempts {} at {}",
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
    debug!("srtf: makespan {}", result.makespan());
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
    fn test_sjf_tie_uses_input_order() {
        let processes = vec![
            ProcessDescriptor::new("X", 0, 4),
            ProcessDescriptor::new("Y", 0, 4),
        ];
        let result = sjf_non_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("X", 0, 4), ("Y", 4, 8)]);
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 7),
            ProcessDescriptor::new("B", 2, 4),
            ProcessDescriptor::new("C", 4, 1),
            ProcessDescriptor::new("D", 5, 4),
        ];
        let result = sjf_non_preemptive(&processes).unwrap();
        // A runs first (only arrival), then C (1), then B and D tie at 4 → B
        assert_eq!(
            spans(&result),
            vec![("A", 0, 7), ("C", 7, 8), ("B", 8, 12), ("D", 12, 16)]
        );
        assert_eq!(result.process("C").unwrap().waiting_time, 3);
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 8),
            ProcessDescriptor::new("B", 1, 1),
        ];
        let result = sjf_non_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 8), ("B", 8, 9)]);
    }

    #[test]
    fn test_srtf_preemption() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 8),
            ProcessDescriptor::new("B", 1, 4),
        ];
        let result = sjf_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 1), ("B", 1, 5), ("A", 5, 12)]);
        assert_eq!(result.process("A").unwrap().completion_time, 12);
        assert_eq!(result.process("B").unwrap().completion_time, 5);
        assert_eq!(result.process("A").unwrap().response_time, 0);
    }

    #[test]
    fn test_srtf_merges_uninterrupted_runs() {
        // C arrives at 2 but is longer than A's remaining time
        let processes = vec![
            ProcessDescriptor::new("A", 0, 4),
            ProcessDescriptor::new("C", 2, 6),
        ];
        let result = sjf_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 4), ("C", 4, 10)]);
    }

    #[test]
    fn test_srtf_no_preemption_on_tie() {
        // At t=2, A has 3 remaining and B arrives with 3: A keeps the CPU
        let processes = vec![
            ProcessDescriptor::new("B", 2, 3),
            ProcessDescriptor::new("A", 0, 5),
        ];
        let result = sjf_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 5), ("B", 5, 8)]);
    }

    #[test]
    fn test_srtf_textbook_example() {
        let processes = vec![
            ProcessDescriptor::new("P1", 0, 8),
            ProcessDescriptor::new("P2", 1, 4),
            ProcessDescriptor::new("P3", 2, 9),
            ProcessDescriptor::new("P4", 3, 5),
        ];
        let result = sjf_preemptive(&processes).unwrap();
        assert_eq!(
            spans(&result),
            vec![
                ("P1", 0, 1),
                ("P2", 1, 5),
                ("P4", 5, 10),
                ("P1", 10, 17),
                ("P3", 17, 26)
            ]
        );
        let total_wait: i64 = result.processes.iter().map(|p| p.waiting_time).sum();
        assert_eq!(total_wait, 26);
    }

    #[test]
    fn test_srtf_idle_then_arrival() {
        let processes = vec![
            ProcessDescriptor::new("A", 0, 1),
            ProcessDescriptor::new("B", 3, 2),
        ];
        let result = sjf_preemptive(&processes).unwrap();
        assert_eq!(spans(&result), vec![("A", 0, 1), ("idle", 1, 3), ("B", 3, 5)]);
    }

    #[test]
    fn test_sjf_empty() {
        assert!(sjf_non_preemptive(&[]).unwrap().is_empty());
        assert!(sjf_preemptive(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_sjf_rejects_invalid() {
        let processes = vec![ProcessDescriptor::new("A", 0, -1)];
        assert!(sjf_non_preemptive(&processes).is_err());
        assert!(sjf_preemptive(&processes).is_err());
    }
}
