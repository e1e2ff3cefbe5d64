//! Presentation-neutral views derived from a [`runtime::SessionSnapshot`].
//!
//! Every frontend renders the same [`ViewModel`]; only styling differs,
//! and that is routed through [`PresentationMapper`].
mod battle;
mod dashboard;
mod matching;
mod screen;
mod teacher;
mod wheel;

pub use battle::{
    BattleView, DRAW_TITLE, FIGHT_LABEL, FighterView, HeroCard, QuestionView, SELECT_TITLE,
    VICTORY_TITLE, YOUR_TURN,
};
pub use dashboard::{DashboardView, GREETING, GameCard, PROMPT};
pub use matching::{
    CardState, CardView, HINT as MATCH_HINT, MatchingView, TITLE as MATCH_TITLE, WIN_TEXT,
    WIN_TITLE,
};
pub use screen::{ScreenView, ViewModel};
pub use teacher::{
    RowKey, SectionView, TITLE as TEACHER_TITLE, TeacherRow, TeacherSection, TeacherView,
};
pub use wheel::{SpinAnimation, WheelSlice, WheelView, slice_label};

use crate::message::MessageLevel;

/// Maps view-model states to frontend-specific styles.
pub trait PresentationMapper {
    type Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style;

    /// Fill for wheel slice `index`; neighbours should contrast.
    fn style_slice(&self, index: usize) -> Self::Style;

    fn style_card(&self, state: CardState) -> Self::Style;

    /// Score bar style for a fill ratio in `[0, 1]`.
    fn style_score(&self, ratio: f64) -> Self::Style;

    fn emphasize_current(&self, base: Self::Style) -> Self::Style;
}
