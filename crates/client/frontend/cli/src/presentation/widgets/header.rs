//! Header widget showing the app title and the current screen.

use client_frontend_core::view_model::{
    MATCH_TITLE, ScreenView, TEACHER_TITLE, ViewModel,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header panel with the screen name and a short status.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel) {
    let status = match &view_model.body {
        ScreenView::Dashboard(_) => "Let's learn!".to_string(),
        ScreenView::Wheel(wheel) => format!("{} words on the wheel", wheel.slices.len()),
        ScreenView::Matching(matching) => format!("{MATCH_TITLE}  {}", matching.progress_label()),
        ScreenView::Battle(_) => "Two players, one keyboard".to_string(),
        ScreenView::TeacherRoom(_) => TEACHER_TITLE.to_string(),
    };

    let text = vec![Line::from(vec![
        Span::styled(
            "🐼 PandaLearn",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(
            view_model.screen.to_string(),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" | "),
        Span::styled(status, Style::default().fg(Color::LightGreen)),
    ])];

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
