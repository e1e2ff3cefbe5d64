//! Teacher Room: tabbed lists of the editable collections plus an add form.

use client_frontend_core::view_model::{SectionView, TeacherSection, TeacherView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
};
use strum::IntoEnumIterator;

use crate::state::{TeacherFocus, TeacherState};

pub fn render(frame: &mut Frame, area: Rect, view: &TeacherView, teacher: &TeacherState) {
    let section = teacher.section;
    let form_height = section.fields().len() as u16 + 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Section tabs
            Constraint::Min(3),              // Rows
            Constraint::Length(form_height), // Add form
        ])
        .split(area);

    let titles: Vec<&str> = TeacherSection::iter().map(TeacherSection::title).collect();
    let selected = TeacherSection::iter()
        .position(|candidate| candidate == section)
        .unwrap_or_default();
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(tabs, chunks[0]);

    render_rows(frame, chunks[1], view.section(section), teacher);
    render_form(frame, chunks[2], teacher);
}

fn render_rows(frame: &mut Frame, area: Rect, section: &SectionView, teacher: &TeacherState) {
    let rows_focused = teacher.focus == TeacherFocus::Rows;

    let items: Vec<ListItem> = if section.rows.is_empty() {
        vec![ListItem::new(Span::styled(
            "Nothing here yet. Press n to add one.",
            Style::default().fg(Color::Gray),
        ))]
    } else {
        section
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let current = rows_focused && index == teacher.row;
                let style = if current {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::raw(if current { "► " } else { "  " }),
                    Span::styled(row.text.as_str(), style),
                    Span::styled(
                        if current { "   [x] delete" } else { "" },
                        Style::default().fg(Color::LightRed),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ({}) ", section.section.title(), section.rows.len())),
    );
    frame.render_widget(list, area);
}

fn render_form(frame: &mut Frame, area: Rect, teacher: &TeacherState) {
    let editing = teacher.focus == TeacherFocus::Form;
    let section = teacher.section;

    let lines: Vec<Line> = section
        .fields()
        .iter()
        .zip(&teacher.form.values)
        .enumerate()
        .map(|(index, (placeholder, value))| {
            let active = editing && index == teacher.form.field;
            let content = if value.is_empty() {
                Span::styled(*placeholder, Style::default().fg(Color::DarkGray))
            } else {
                Span::raw(value.as_str())
            };
            Line::from(vec![
                Span::styled(
                    if active { "▍" } else { " " },
                    Style::default().fg(Color::Yellow),
                ),
                content,
            ])
        })
        .collect();

    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" + {} ", section.add_label())),
    );
    frame.render_widget(form, area);
}
