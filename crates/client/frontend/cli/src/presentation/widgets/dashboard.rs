//! Dashboard: greeting, three game cards and the Teacher Room entry.

use client_frontend_core::view_model::{DashboardView, GREETING, GameCard, PROMPT, PresentationMapper};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::{AppState, DASHBOARD_ENTRIES};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &DashboardView,
    app_state: &AppState,
    theme: &T,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Greeting
            Constraint::Min(5),    // Game cards
            Constraint::Length(3), // Teacher Room
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(
            GREETING,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(PROMPT, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(greeting, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[1]);

    let selected = app_state.selected_dashboard_entry();
    for (position, card) in view.cards.iter().enumerate() {
        let is_selected = card.screen == selected;
        render_card(frame, columns[position], position + 1, card, is_selected, theme);
    }

    let teacher_selected = selected == DASHBOARD_ENTRIES[DASHBOARD_ENTRIES.len() - 1];
    let teacher_style = if teacher_selected {
        theme.emphasize_current(Style::default().fg(Color::Magenta))
    } else {
        Style::default().fg(Color::Magenta)
    };
    let teacher = Paragraph::new(Line::from(vec![
        Span::styled(
            if teacher_selected { "► " } else { "  " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("4  Teacher Room 🍎  (edit words and questions)", teacher_style),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(teacher, chunks[2]);
}

fn render_card<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    number: usize,
    card: &GameCard,
    is_selected: bool,
    theme: &T,
) {
    let border = if is_selected {
        theme.emphasize_current(Style::default().fg(Color::Yellow))
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items = if card.is_playable() {
        Span::styled(format!("{} items", card.items), Style::default().fg(Color::Green))
    } else {
        Span::styled("Ask your teacher to add some!", Style::default().fg(Color::LightRed))
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::raw(card.icon)),
        Line::from(Span::styled(
            card.title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.tagline, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(items),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {number} ")),
    );

    frame.render_widget(body, area);
}
