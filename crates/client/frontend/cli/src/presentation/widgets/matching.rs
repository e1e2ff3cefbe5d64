//! Pair matching board: two card columns and the completion popup.

use client_frontend_core::view_model::{
    CardState, CardView, MATCH_HINT, MATCH_TITLE, MatchingView, PresentationMapper, WIN_TEXT,
    WIN_TITLE,
};
use game_core::Column;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
};

use super::overlay::{self, Popup};
use crate::state::AppState;

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &MatchingView,
    app_state: &AppState,
    theme: &T,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Hint
            Constraint::Min(3),    // Columns
            Constraint::Length(1), // Progress
        ])
        .split(area);

    let hint = Paragraph::new(vec![
        Line::from(MATCH_TITLE),
        Line::from(Span::styled(MATCH_HINT, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (column, area, title) in [
        (Column::Left, columns[0], " 中文 "),
        (Column::Right, columns[1], " English "),
    ] {
        let cursor = app_state.matching_cursor;
        let focused_row = (cursor.column == column && !view.complete).then_some(cursor.row);
        render_column(frame, area, title, view.column(column), focused_row, theme);
    }

    let ratio = if view.total == 0 {
        0.0
    } else {
        view.matched as f64 / view.total as f64
    };
    let gauge = Gauge::default()
        .gauge_style(theme.style_score(ratio))
        .ratio(ratio)
        .label(view.progress_label());
    frame.render_widget(gauge, chunks[2]);

    if view.complete {
        overlay::render(
            frame,
            area,
            Popup {
                title: " 🎉 ",
                lines: vec![
                    Line::from(WIN_TITLE),
                    Line::from(""),
                    Line::from(WIN_TEXT),
                ],
                replay_label: "Play Again",
                menu_label: "Go to Menu",
            },
            app_state.overlay,
        );
    }
}

fn render_column<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    cards: &[CardView],
    focused_row: Option<usize>,
    theme: &T,
) {
    let items: Vec<ListItem> = cards
        .iter()
        .enumerate()
        .map(|(row, card)| {
            let focused = focused_row == Some(row);
            let mut style = theme.style_card(card.state);
            if focused {
                style = theme.emphasize_current(style);
            }
            let marker = match card.state {
                CardState::Matched => "✓ ",
                _ if focused => "► ",
                _ => "  ",
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(card.text.as_str(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    frame.render_widget(list, area);
}
