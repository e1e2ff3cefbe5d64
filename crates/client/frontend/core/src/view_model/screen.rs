//! Top-level view model.

use runtime::{ActiveGame, Screen, SessionSnapshot};

use super::{BattleView, DashboardView, MatchingView, TeacherView, WheelView};

/// Everything a frontend needs to draw the current screen.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreenView {
    Dashboard(DashboardView),
    Wheel(WheelView),
    Matching(MatchingView),
    Battle(BattleView),
    TeacherRoom(TeacherView),
}

/// Snapshot-derived view owned by the event loop.
///
/// Rebuilt from a fresh [`SessionSnapshot`] whenever the session changes;
/// between snapshots only the wheel rotation moves, driven by the frontend's
/// spin animation.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub screen: Screen,
    pub body: ScreenView,
}

impl ViewModel {
    /// `wheel_rotation` overrides the drawn rotation while a spin animates.
    pub fn from_snapshot(snapshot: &SessionSnapshot, wheel_rotation: Option<u64>) -> Self {
        let body = match (&snapshot.screen, &snapshot.game) {
            (Screen::Wheel, ActiveGame::Wheel(wheel)) => {
                ScreenView::Wheel(WheelView::from_state(wheel, wheel_rotation))
            }
            (Screen::Matching, ActiveGame::Matching(board)) => {
                ScreenView::Matching(MatchingView::from_board(board))
            }
            (Screen::Battle, ActiveGame::Battle(battle)) => {
                ScreenView::Battle(BattleView::from_state(battle))
            }
            (Screen::TeacherRoom, _) => {
                ScreenView::TeacherRoom(TeacherView::from_library(&snapshot.library))
            }
            _ => ScreenView::Dashboard(DashboardView::from_library(&snapshot.library)),
        };

        Self {
            screen: snapshot.screen,
            body,
        }
    }

    /// Updates the drawn wheel rotation without a new snapshot.
    pub fn set_wheel_rotation(&mut self, rotation: u64) {
        if let ScreenView::Wheel(wheel) = &mut self.body {
            wheel.rotation = rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_core::{ContentLibrary, WheelConfig, WheelState};

    use super::*;

    #[test]
    fn screen_selects_body() {
        let library = Arc::new(ContentLibrary::new(vec!["猫".to_string()], Vec::new(), Vec::new()));
        let wheel = WheelState::new(library.wheel_words().to_vec(), &WheelConfig::default()).unwrap();

        let snapshot = SessionSnapshot {
            screen: Screen::Wheel,
            library: Arc::clone(&library),
            game: ActiveGame::Wheel(wheel),
            pending_timer: None,
        };
        let mut view = ViewModel::from_snapshot(&snapshot, Some(90));
        let ScreenView::Wheel(wheel) = &view.body else {
            panic!("expected wheel view");
        };
        assert_eq!(wheel.rotation, 90);

        view.set_wheel_rotation(180);
        let ScreenView::Wheel(wheel) = &view.body else {
            panic!("expected wheel view");
        };
        assert_eq!(wheel.rotation, 180);

        let idle = SessionSnapshot {
            library,
            ..SessionSnapshot::default()
        };
        assert!(matches!(
            ViewModel::from_snapshot(&idle, None).body,
            ScreenView::Dashboard(_)
        ));
    }
}
