//! Input handling (keyboard polling and global keys).

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use runtime::Screen;
use tokio::time::Duration;

use super::super::EventLoop;
use crate::{input::KeyAction, presentation::terminal::Tui, state::TeacherFocus};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Poll for keyboard input and handle UI interactions.
    pub(in crate::event) async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, terminal).await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Handle key press and dispatch to the active screen.
    pub(in crate::event) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        terminal: &mut Tui,
    ) -> Result<bool> {
        let screen = self.snapshot.screen;
        let mode = self.app_state.input_mode(screen);

        match self.input.handle_key(key, mode) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Bye bye! 👋");
                self.render(terminal)?;
                return Ok(true);
            }
            KeyAction::None => return Ok(false),
            KeyAction::OpenTeacherRoom => {
                self.navigate(Screen::TeacherRoom).await?;
            }
            KeyAction::Back => {
                if screen == Screen::TeacherRoom && self.app_state.teacher.focus == TeacherFocus::Form
                {
                    self.app_state.teacher.close_form();
                } else if screen != Screen::Dashboard {
                    self.navigate(Screen::Dashboard).await?;
                }
            }
            action => match screen {
                Screen::Dashboard => self.handle_dashboard_action(action).await?,
                Screen::Wheel => self.handle_wheel_action(action).await?,
                Screen::Matching => self.handle_matching_action(action).await?,
                Screen::Battle => self.handle_battle_action(action).await?,
                Screen::TeacherRoom => self.handle_teacher_action(action).await?,
            },
        }

        self.render(terminal)?;
        Ok(false)
    }
}
