//! Input validation for scheduling runs.
//!
//! Checks process descriptors and policy parameters before any simulation
//! work is done. Detects:
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process IDs
//! - Non-positive round robin time quantum
//! - Workloads whose latest arrival plus total burst exceeds `Time::MAX`
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;
use std::fmt;

use crate::models::{ProcessDescriptor, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t=0.
    NegativeArrival,
    /// Two processes share the same ID.
    DuplicateId,
    /// Round robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Latest arrival plus total burst exceeds the time range.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Failure of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The input violates the engine contract. No partial result exists.
    InvalidInput(Vec<ValidationError>),
}

impl SimulationError {
    /// The individual validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
        }
    }

    /// Whether any error is of the given kind.
    pub fn has_kind(&self, kind: ValidationErrorKind) -> bool {
        self.errors().iter().any(|e| e.kind == kind)
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

/// Validates process descriptors.
///
/// Checks:
/// 1. Every burst time is positive
/// 2. No arrival time is negative
/// 3. No duplicate process IDs
/// 4. The latest arrival plus the sum of all bursts fits in [`Time`]
///
/// Every completion time is bounded by check 4, so a run over accepted
/// input never overflows the clock. An empty slice is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[ProcessDescriptor]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut latest_arrival: Time = 0;
    let mut total_burst: Option<Time> = Some(0);

    for p in processes {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }

        latest_arrival = latest_arrival.max(p.arrival_time);
        if p.burst_time > 0 {
            total_burst = total_burst.and_then(|t| t.checked_add(p.burst_time));
        }
    }

    if total_burst
        .and_then(|t| t.checked_add(latest_arrival))
        .is_none()
    {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            format!(
                "Latest arrival {latest_arrival} plus total burst exceeds {}",
                Time::MAX
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round robin time quantum.
pub fn validate_quantum(time_quantum: Time) -> ValidationResult {
    if time_quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {time_quantum}"),
        )]);
    }
    Ok(())
}

/// Validates processes and a quantum together, merging all errors.
pub fn validate_round_robin(processes: &[ProcessDescriptor], time_quantum: Time) -> ValidationResult {
    let mut errors = validate_quantum(time_quantum).err().unwrap_or_default();
    if let Err(mut process_errors) = validate_processes(processes) {
        errors.append(&mut process_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
