//! UI rendering using the widget architecture with ViewModel.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
    state::AppState,
};
use client_frontend_core::{
    message::MessageLog,
    view_model::{ScreenView, ViewModel},
};

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub message_panel_height: u16,
}

/// Render the terminal UI using ViewModel and widget system.
///
/// Every screen shares the header, message panel and footer. The body widget
/// is picked from the screen view and draws its own finish overlay.
pub fn render_with_view_model(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme::new();

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                        // Header
                Constraint::Min(0),                           // Screen body
                Constraint::Length(ctx.message_panel_height), // Messages
                Constraint::Length(2),                        // Footer
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.view_model);

        match &ctx.view_model.body {
            ScreenView::Dashboard(view) => {
                widgets::dashboard::render(frame, chunks[1], view, ctx.app_state, &theme);
            }
            ScreenView::Wheel(view) => {
                widgets::wheel::render(frame, chunks[1], view, &theme);
            }
            ScreenView::Matching(view) => {
                widgets::matching::render(frame, chunks[1], view, ctx.app_state, &theme);
            }
            ScreenView::Battle(view) => {
                widgets::battle::render(frame, chunks[1], view, ctx.app_state, &theme);
            }
            ScreenView::TeacherRoom(view) => {
                widgets::teacher_room::render(frame, chunks[1], view, &ctx.app_state.teacher);
            }
        }

        let recent_messages: Vec<_> = ctx
            .messages
            .recent(ctx.message_panel_height.saturating_sub(2) as usize)
            .cloned()
            .collect();
        widgets::messages::render(frame, chunks[2], &recent_messages, &theme);

        widgets::footer::render(frame, chunks[3], ctx.view_model, ctx.app_state);
    })?;

    Ok(())
}

/// Create a centered rectangle for modal overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 50, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 10);
    }
}
