//! Deterministic game logic and data types shared across clients.
//!
//! `game-core` defines the canonical rules of the three mini-games (word
//! wheel, pair matching, hero battle) and the content model edited in the
//! Teacher Room. Every API here is pure: randomness is injected through
//! [`env::RandomSource`] and timing is left to the caller, which receives
//! durations in [`wheel::SpinPlan`] and [`config::BattleConfig`].
pub mod battle;
pub mod config;
pub mod content;
pub mod env;
pub mod error;
pub mod matching;
pub mod wheel;

pub use battle::{
    AnswerOutcome, BattleError, BattleOutcome, BattlePhase, BattleState, HeroSelection, Round, Side,
};
pub use config::{BattleConfig, GameConfig, MissPolicy, PointerPlacement, WheelConfig};
pub use content::{
    BattleQuestion, ContentEdit, ContentId, ContentLibrary, EditError, Hero, HeroId, WordPair,
};
pub use env::{PcgRng, RandomSource, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
pub use matching::{Column, MatchCard, MatchingBoard, MatchingError, SelectOutcome};
pub use wheel::{SpinPlan, WheelError, WheelState, landing_index};
