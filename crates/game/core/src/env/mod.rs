//! Environment services injected into the game engines.
//!
//! The engines never reach for ambient state: randomness arrives through
//! [`RandomSource`] so the runtime can seed it and tests can script it.
mod rng;

pub use rng::{PcgRng, RandomSource, ScriptedRng, shuffle};
