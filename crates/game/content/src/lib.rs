//! Built-in content and configuration loaders.
//!
//! This crate houses the static data the app starts with:
//! - Wheel words, matching pairs and battle questions (seed the
//!   [`ContentLibrary`](game_core::ContentLibrary) on every start)
//! - The hero catalog (never edited)
//! - Game configuration (data-driven via TOML)
//!
//! Content edited in the Teacher Room lives only in memory; nothing here is
//! written back.

pub mod defaults;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use defaults::{
    DEFAULT_BATTLE_QUESTIONS, DEFAULT_MATCH_PAIRS, DEFAULT_WHEEL_WORDS, HEROES, default_library,
    hero,
};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult};
