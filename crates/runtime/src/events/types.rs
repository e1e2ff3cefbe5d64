//! Event types for different topics.

use std::sync::Arc;

use game_core::{
    AnswerOutcome, BattleOutcome, Column, ContentId, ContentLibrary, HeroId, SelectOutcome, Side,
    SpinPlan,
};

use crate::session::Screen;

/// Events related to navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    ScreenChanged { from: Screen, to: Screen },
}

/// Events emitted by the running mini-game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A spin was accepted; the wheel lands after `plan.duration`.
    WheelSpun { plan: SpinPlan },

    WheelLanded { index: usize, word: String },

    CardSelected {
        column: Column,
        pair_id: ContentId,
        outcome: SelectOutcome,
    },

    /// Columns reshuffled and matches cleared.
    BoardReset,

    HeroToggled { hero: HeroId, chosen: bool },

    /// A question was dealt to `active_side`.
    RoundStarted {
        index: usize,
        total: usize,
        active_side: Side,
    },

    AnswerGiven {
        side: Side,
        outcome: AnswerOutcome,
        scores: [u32; 2],
    },

    BattleFinished {
        outcome: BattleOutcome,
        scores: [u32; 2],
    },

    /// Back to hero selection.
    BattleReset,
}

/// Events related to Teacher Room edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// The session library was replaced.
    LibraryUpdated {
        edit: &'static str,
        library: Arc<ContentLibrary>,
    },
}
