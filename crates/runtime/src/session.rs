//! Session-level types shared by the worker and its clients.

use std::sync::Arc;

use game_core::{
    BattleError, BattleState, ContentLibrary, EditError, ErrorSeverity, GameError, MatchingBoard,
    MatchingError, WheelError, WheelState,
};

/// Screens the session can show.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
pub enum Screen {
    #[default]
    Dashboard,
    Wheel,
    Matching,
    Battle,
    #[strum(to_string = "Teacher Room")]
    TeacherRoom,
}

impl Screen {
    /// True for the three mini-game screens.
    pub fn is_game(self) -> bool {
        matches!(self, Self::Wheel | Self::Matching | Self::Battle)
    }
}

/// The game running on the current screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActiveGame {
    #[default]
    Idle,
    Wheel(WheelState),
    Matching(MatchingBoard),
    Battle(BattleState),
}

impl ActiveGame {
    pub fn as_wheel(&self) -> Option<&WheelState> {
        match self {
            Self::Wheel(wheel) => Some(wheel),
            _ => None,
        }
    }

    pub fn as_matching(&self) -> Option<&MatchingBoard> {
        match self {
            Self::Matching(board) => Some(board),
            _ => None,
        }
    }

    pub fn as_battle(&self) -> Option<&BattleState> {
        match self {
            Self::Battle(battle) => Some(battle),
            _ => None,
        }
    }
}

/// Timed transitions the worker can have pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum TimerKind {
    WheelLanding,
    BattleAdvance,
}

/// Read-only copy of the session handed to clients.
#[derive(Clone, Debug, Default)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub library: Arc<ContentLibrary>,
    pub game: ActiveGame,
    pub pending_timer: Option<TimerKind>,
}

/// Input guards raised while handling a session command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Wheel(#[from] WheelError),

    #[error(transparent)]
    Matching(#[from] MatchingError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Edit(#[from] EditError),

    #[error("{expected} is not running (current screen: {actual})")]
    GameNotActive { expected: Screen, actual: Screen },
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Wheel(err) => err.severity(),
            Self::Matching(err) => err.severity(),
            Self::Battle(err) => err.severity(),
            Self::Edit(err) => err.severity(),
            Self::GameNotActive { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Wheel(err) => err.error_code(),
            Self::Matching(err) => err.error_code(),
            Self::Battle(err) => err.error_code(),
            Self::Edit(err) => err.error_code(),
            Self::GameNotActive { .. } => "SESSION_GAME_NOT_ACTIVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_three_screens_are_games() {
        use strum::IntoEnumIterator;

        let games: Vec<Screen> = Screen::iter().filter(|s| s.is_game()).collect();
        assert_eq!(games, vec![Screen::Wheel, Screen::Matching, Screen::Battle]);
        assert_eq!(Screen::TeacherRoom.to_string(), "Teacher Room");
    }

    #[test]
    fn session_error_delegates_classification() {
        let err = SessionError::from(WheelError::AlreadySpinning);
        assert_eq!(err.severity(), ErrorSeverity::Recoverable);
        assert_eq!(err.error_code(), "WHEEL_ALREADY_SPINNING");

        let err = SessionError::GameNotActive {
            expected: Screen::Battle,
            actual: Screen::Dashboard,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            err.to_string(),
            "Battle is not running (current screen: Dashboard)"
        );
    }
}
