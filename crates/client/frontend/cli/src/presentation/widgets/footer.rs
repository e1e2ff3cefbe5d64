//! Footer widget listing the keys that work on the current screen.

use client_frontend_core::view_model::{BattleView, ScreenView, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::state::{AppState, TeacherFocus};

pub fn key_hints(view_model: &ViewModel, app_state: &AppState) -> &'static str {
    match &view_model.body {
        ScreenView::Dashboard(_) => "↑↓/1-4 choose · Enter play · t Teacher Room · q quit",
        ScreenView::Wheel(_) => "Space spin · Esc menu · q quit",
        ScreenView::Matching(view) if view.complete => "←→ choose · Enter confirm · Esc menu",
        ScreenView::Matching(_) => "←→ column · ↑↓ card · Enter pick · Esc menu",
        ScreenView::Battle(BattleView::Selecting { .. }) => {
            "arrows move · Enter/1-8 pick hero · f FIGHT · Esc menu"
        }
        ScreenView::Battle(BattleView::Fighting { .. }) => "←→ choose · Enter/1-2 answer · Esc menu",
        ScreenView::Battle(BattleView::Finished { .. }) => "←→ choose · Enter confirm · Esc menu",
        ScreenView::TeacherRoom(_) => match app_state.teacher.focus {
            TeacherFocus::Rows => "Tab section · ↑↓ row · n add · x delete · Esc menu",
            TeacherFocus::Form => "type · Tab next field · Enter add · Esc cancel",
        },
    }
}

pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, app_state: &AppState) {
    let hints = Paragraph::new(Line::from(key_hints(view_model, app_state)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}
