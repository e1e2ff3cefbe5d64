//! Hero battle: selection grid, the fight board and the finish popup.

use client_frontend_core::view_model::{
    BattleView, DRAW_TITLE, FIGHT_LABEL, FighterView, HeroCard, PresentationMapper, QuestionView,
    SELECT_TITLE, VICTORY_TITLE, YOUR_TURN,
};
use game_core::{AnswerOutcome, BattleOutcome};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::overlay::{self, Popup};
use crate::state::{AppState, HERO_COLUMNS};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &BattleView,
    app_state: &AppState,
    theme: &T,
) {
    match view {
        BattleView::Selecting { heroes, can_fight } => {
            render_selection(frame, area, heroes, *can_fight, app_state.battle_cursor, theme);
        }
        BattleView::Fighting { fighters, question } => {
            render_fight(
                frame,
                area,
                fighters,
                question.as_ref(),
                app_state.battle_cursor,
                theme,
            );
        }
        BattleView::Finished {
            fighters,
            outcome,
            headline,
        } => {
            render_fight(frame, area, fighters, None, app_state.battle_cursor, theme);

            let title = match outcome {
                BattleOutcome::Winner(_) => VICTORY_TITLE,
                BattleOutcome::Draw => DRAW_TITLE,
            };
            overlay::render(
                frame,
                area,
                Popup {
                    title,
                    lines: vec![
                        Line::from(Span::styled(
                            headline.as_str(),
                            Style::default().add_modifier(Modifier::BOLD),
                        )),
                        Line::from(""),
                        Line::from(format!(
                            "{} : {}",
                            fighters[0].score, fighters[1].score
                        )),
                    ],
                    replay_label: "New Battle",
                    menu_label: "Menu",
                },
                app_state.overlay,
            );
        }
    }
}

fn render_selection<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    heroes: &[HeroCard],
    can_fight: bool,
    cursor: usize,
    theme: &T,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(4),    // Grid
            Constraint::Length(3), // Fight button
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        SELECT_TITLE,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let row_count = heroes.len().div_ceil(HERO_COLUMNS).max(1) as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Ratio(1, row_count)))
        .split(chunks[1]);

    for (row, row_area) in rows.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, HERO_COLUMNS as u32); HERO_COLUMNS])
            .split(*row_area);

        for (column, cell) in cells.iter().enumerate() {
            let index = row * HERO_COLUMNS + column;
            let Some(card) = heroes.get(index) else {
                continue;
            };

            let mut border = if card.chosen {
                Style::default().fg(Color::LightGreen)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            if index == cursor {
                border = theme.emphasize_current(border.fg(Color::Yellow));
            }

            let body = Paragraph::new(vec![
                Line::from(card.hero.icon),
                Line::from(card.hero.name),
                Line::from(if card.chosen { "✓ chosen" } else { "" }),
            ])
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ", index + 1)),
            );
            frame.render_widget(body, *cell);
        }
    }

    let fight_style = if can_fight {
        theme.emphasize_current(Style::default().fg(Color::Black).bg(Color::LightRed))
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let fight = Paragraph::new(Line::from(Span::styled(
        format!(" {FIGHT_LABEL} "),
        fight_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(fight, chunks[2]);
}

fn render_fight<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    fighters: &[FighterView; 2],
    question: Option<&QuestionView>,
    cursor: usize,
    theme: &T,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25), // Player 1
            Constraint::Percentage(50), // Question
            Constraint::Percentage(25), // Player 2
        ])
        .split(area);

    render_fighter(frame, columns[0], &fighters[0], theme);
    render_fighter(frame, columns[2], &fighters[1], theme);

    if let Some(question) = question {
        render_question(frame, columns[1], question, cursor, theme);
    }
}

fn render_fighter<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    fighter: &FighterView,
    theme: &T,
) {
    let mut border = Style::default().fg(Color::DarkGray);
    if fighter.active {
        border = theme.emphasize_current(border.fg(Color::Yellow));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", fighter.side));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(1), // Score bar
            Constraint::Min(0),
        ])
        .split(inner);

    let mut lines = vec![Line::from(Span::styled(
        fighter.name(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if fighter.active {
        lines.push(Line::from(Span::styled(
            YOUR_TURN,
            Style::default().fg(Color::LightRed),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        chunks[0],
    );

    let gauge = Gauge::default()
        .gauge_style(theme.style_score(fighter.score_ratio))
        .ratio(fighter.score_ratio)
        .label(fighter.score.to_string());
    frame.render_widget(gauge, chunks[1]);
}

fn render_question<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    question: &QuestionView,
    cursor: usize,
    theme: &T,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", question.label));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Prompt
            Constraint::Length(3), // Options
            Constraint::Min(0),    // Feedback
        ])
        .split(inner);

    let prompt = Paragraph::new(Line::from(Span::styled(
        question.prompt.as_str(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(prompt, chunks[0]);

    let options = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    for (index, option) in question.options.iter().enumerate() {
        let mut border = Style::default().fg(Color::Gray);
        if index == cursor && !question.is_locked() {
            border = theme.emphasize_current(border.fg(Color::Yellow));
        }
        let button = Paragraph::new(Line::from(option.as_str()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ", index + 1)),
            );
        frame.render_widget(button, options[index]);
    }

    let feedback = match question.last_outcome {
        Some(AnswerOutcome::Correct) => {
            Span::styled("✨ Correct!", Style::default().fg(Color::LightGreen))
        }
        Some(AnswerOutcome::Wrong) => Span::styled("💥 Missed!", Style::default().fg(Color::LightRed)),
        None => Span::raw(""),
    };
    frame.render_widget(
        Paragraph::new(Line::from(feedback)).alignment(Alignment::Center),
        chunks[2],
    );
}
