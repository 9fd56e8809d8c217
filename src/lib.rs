//! Single-processor CPU scheduling simulator.
//!
//! Simulates classical scheduling policies over a fixed set of processes
//! and reports per-process performance records and an execution timeline.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ProcessDescriptor`, `ProcessResult`,
//!   `SimulationResult`, `TimelineInterval`, `TimelineBuilder`
//! - **`policy`**: FCFS, SJF, SRTF, Priority (both modes), Round Robin,
//!   and the `Algorithm` / `SimulationRequest` entry points
//! - **`analysis`**: Aggregate metrics and multi-policy comparison
//! - **`validation`**: Input checks and the `SimulationError` type
//! - **`workload`**: Seeded random process sets
//!
//! # Model
//!
//! One processor, instantaneous context switches, and complete advance
//! knowledge of arrival and burst times. Every run is a pure computation
//! over borrowed input; runs share no state and may execute in parallel.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod analysis;
pub mod models;
pub mod policy;
pub mod validation;
pub mod workload;
