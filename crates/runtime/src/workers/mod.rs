//! Worker tasks that back the runtime orchestration.
//!
//! The session worker owns all session state; timer tasks feed delayed
//! transitions back into it.

mod scheduler;
mod session;

pub use scheduler::Scheduler;
pub use session::{Command, SessionWorker};
