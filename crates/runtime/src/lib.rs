//! Runtime orchestration for a PandaLearn session.
//!
//! This crate wires the pure game engines from `game-core` into a single
//! session worker task, a topic-based event bus, and timer tasks that drive
//! the wheel landing and battle advance. Consumers embed [`Runtime`] and talk
//! to the session through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`session`] defines screens, snapshots and command guards
//! - `workers` keeps the session task and its timers internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod session;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{ContentEvent, Event, EventBus, GameEvent, SessionEvent, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use session::{ActiveGame, Screen, SessionError, SessionSnapshot, TimerKind};
