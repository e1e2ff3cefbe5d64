//! Per-screen command handling.
//!
//! Cursor keys only touch [`AppState`](crate::state::AppState); everything that
//! changes the session goes through the runtime handle. Refused inputs are
//! logged and otherwise ignored, so the screen simply stays as it was.

use anyhow::Result;
use client_frontend_core::{
    EventConsumer,
    view_model::{BattleView, ScreenView},
};
use game_core::Column;
use runtime::Screen;

use super::super::EventLoop;
use crate::{
    input::{Direction, KeyAction},
    state::{DASHBOARD_ENTRIES, OverlayChoice, TeacherFocus},
};

/// Returns `Ok(true)` when the session accepted the command.
///
/// Rejections are input guards and are dropped here. Anything else means the
/// runtime is gone and is propagated.
fn settle(command: &'static str, result: runtime::Result<()>) -> Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(err) => match err.as_rejection() {
            Some(guard) => {
                tracing::debug!(command, error = %guard, "Input ignored");
                Ok(false)
            }
            None => Err(err.into()),
        },
    }
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub(in crate::event) async fn navigate(&mut self, screen: Screen) -> Result<bool> {
        let result = self.handle.navigate(screen).await;
        settle("navigate", result)
    }

    pub(in crate::event) async fn handle_dashboard_action(&mut self, action: KeyAction) -> Result<()> {
        match action {
            KeyAction::Move(direction) => self.app_state.move_dashboard(direction),
            KeyAction::Confirm => {
                let screen = self.app_state.selected_dashboard_entry();
                self.navigate(screen).await?;
            }
            KeyAction::Select(index) if index < DASHBOARD_ENTRIES.len() => {
                self.app_state.dashboard_cursor = index;
                self.navigate(DASHBOARD_ENTRIES[index]).await?;
            }
            _ => {}
        }
        Ok(())
    }

    pub(in crate::event) async fn handle_wheel_action(&mut self, action: KeyAction) -> Result<()> {
        if action == KeyAction::Confirm {
            let result = self.handle.spin().await;
            settle("spin", result)?;
        }
        Ok(())
    }

    pub(in crate::event) async fn handle_matching_action(&mut self, action: KeyAction) -> Result<()> {
        let ScreenView::Matching(view) = &self.view_model.body else {
            return Ok(());
        };

        if view.complete {
            return self.handle_overlay_action(action, Screen::Matching).await;
        }

        match action {
            KeyAction::Move(direction) => {
                let (left, right) = (view.left.len(), view.right.len());
                self.app_state
                    .move_matching(direction, |column| match column {
                        Column::Left => left,
                        Column::Right => right,
                    });
            }
            KeyAction::Confirm => {
                let cursor = self.app_state.matching_cursor;
                let Some(card) = view.column(cursor.column).get(cursor.row) else {
                    return Ok(());
                };
                let pair_id = card.pair_id;
                let result = self.handle.select_card(cursor.column, pair_id).await;
                settle("select_card", result)?;
            }
            _ => {}
        }
        Ok(())
    }

    pub(in crate::event) async fn handle_battle_action(&mut self, action: KeyAction) -> Result<()> {
        let ScreenView::Battle(view) = &self.view_model.body else {
            return Ok(());
        };

        match view {
            BattleView::Selecting { heroes, .. } => {
                let roster_len = heroes.len();
                let pick = match action {
                    KeyAction::Move(direction) => {
                        self.app_state.move_hero(direction, roster_len);
                        None
                    }
                    KeyAction::Confirm => heroes.get(self.app_state.battle_cursor),
                    KeyAction::Select(index) => heroes.get(index),
                    KeyAction::Fight => {
                        let result = self.handle.start_fight().await;
                        settle("start_fight", result)?;
                        return Ok(());
                    }
                    _ => None,
                };
                if let Some(card) = pick {
                    let hero = card.hero.id;
                    let result = self.handle.toggle_hero(hero).await;
                    settle("toggle_hero", result)?;
                }
            }
            BattleView::Fighting { .. } => {
                let option = match action {
                    KeyAction::Move(direction) => {
                        self.app_state.move_option(direction);
                        None
                    }
                    KeyAction::Confirm => Some(self.app_state.battle_cursor),
                    KeyAction::Select(index) => Some(index),
                    _ => None,
                };
                if let Some(option) = option {
                    let result = self.handle.answer(option).await;
                    settle("answer", result)?;
                }
            }
            BattleView::Finished { .. } => {
                return self.handle_overlay_action(action, Screen::Battle).await;
            }
        }
        Ok(())
    }

    /// Finish overlays offer a replay or the way back to the menu.
    async fn handle_overlay_action(&mut self, action: KeyAction, screen: Screen) -> Result<()> {
        match action {
            KeyAction::Move(Direction::Left | Direction::Right) => {
                self.app_state.overlay = self.app_state.overlay.toggle();
            }
            KeyAction::Confirm => match self.app_state.overlay {
                OverlayChoice::Replay => {
                    let result = if screen == Screen::Battle {
                        self.handle.new_battle().await
                    } else {
                        self.handle.play_again().await
                    };
                    if settle("replay", result)? {
                        self.app_state.overlay = OverlayChoice::default();
                    }
                }
                OverlayChoice::Menu => {
                    self.navigate(Screen::Dashboard).await?;
                }
            },
            _ => {}
        }
        Ok(())
    }

    pub(in crate::event) async fn handle_teacher_action(&mut self, action: KeyAction) -> Result<()> {
        let ScreenView::TeacherRoom(view) = &self.view_model.body else {
            return Ok(());
        };
        let teacher = &mut self.app_state.teacher;

        if teacher.focus == TeacherFocus::Form {
            match action {
                KeyAction::Text(input) => teacher.form.input(input),
                KeyAction::Move(direction) => teacher.form.move_field(direction),
                KeyAction::Confirm => {
                    let edit = teacher.section.add_edit(&teacher.form.values);
                    let result = self.handle.edit(edit).await;
                    if settle("edit", result)? {
                        self.app_state.teacher.reset_form();
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        let rows = &view.section(teacher.section).rows;
        match action {
            KeyAction::Move(direction) => {
                let row_count = rows.len();
                self.app_state.move_teacher_row(direction, row_count);
            }
            KeyAction::NextSection => teacher.select_section(teacher.section.next()),
            KeyAction::PrevSection => teacher.select_section(teacher.section.prev()),
            KeyAction::NewEntry | KeyAction::Confirm => teacher.open_form(),
            KeyAction::Delete => {
                let Some(row) = rows.get(teacher.row) else {
                    return Ok(());
                };
                let edit = row.key.removal();
                let result = self.handle.edit(edit).await;
                settle("edit", result)?;
            }
            _ => {}
        }
        Ok(())
    }
}
