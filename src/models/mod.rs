//! CPU scheduling domain models.
//!
//! Provides the data types exchanged with the policy engine: the input
//! process descriptor, the per-process output record, and the execution
//! timeline.
//!
//! # Lifecycle
//!
//! | Shape | Owner | Mutability |
//! |-------|-------|------------|
//! | `ProcessDescriptor` | Caller | Never mutated by the engine |
//! | working copy | One policy run | Private, discarded at the end |
//! | `ProcessResult` / `SimulationResult` | Caller | Built once, returned by value |

mod process;
mod result;
mod timeline;

pub use process::{ProcessDescriptor, Time};
pub use result::{ProcessResult, SimulationResult};
pub use timeline::{TimelineBuilder, TimelineInterval, IDLE_ID, IDLE_NAME};
