//! Finish popup shared by the matching and battle screens.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{presentation::ui::centered_rect, state::OverlayChoice};

pub struct Popup<'a> {
    pub title: &'a str,
    pub lines: Vec<Line<'a>>,
    pub replay_label: &'a str,
    pub menu_label: &'a str,
}

pub fn render(frame: &mut Frame, area: Rect, popup: Popup, choice: OverlayChoice) {
    let area = centered_rect(60, 60, area);

    let mut lines = popup.lines;
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        button(popup.replay_label, choice == OverlayChoice::Replay),
        Span::raw("   "),
        button(popup.menu_label, choice == OverlayChoice::Menu),
    ]));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(Span::styled(
                    popup.title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn button(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    Span::styled(format!(" {label} "), style)
}
