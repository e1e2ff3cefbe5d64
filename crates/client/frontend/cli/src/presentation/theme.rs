//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::{
    message::MessageLevel,
    view_model::{CardState, PresentationMapper},
};
use ratatui::style::{Color, Modifier, Style};

/// Slice colors cycle through this palette in clockwise order.
const SLICE_COLORS: [Color; 6] = [
    Color::Rgb(255, 107, 107),
    Color::Rgb(78, 205, 196),
    Color::Rgb(255, 230, 109),
    Color::Rgb(26, 83, 92),
    Color::Rgb(247, 255, 247),
    Color::Rgb(255, 159, 28),
];

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn style_message(&self, level: MessageLevel) -> Self::Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Success => Style::default().fg(Color::LightGreen),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
        }
    }

    fn style_slice(&self, index: usize) -> Self::Style {
        let background = SLICE_COLORS[index % SLICE_COLORS.len()];
        let foreground = match background {
            Color::Rgb(26, 83, 92) => Color::White,
            _ => Color::Black,
        };
        Style::default().bg(background).fg(foreground)
    }

    fn style_card(&self, state: CardState) -> Self::Style {
        match state {
            CardState::Open => Style::default().fg(Color::White),
            CardState::Selected => Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            CardState::Matched => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }

    fn style_score(&self, ratio: f64) -> Self::Style {
        let color = match (ratio * 100.0) as u32 {
            75..=100 => Color::Green,
            50..=74 => Color::LightGreen,
            25..=49 => Color::Yellow,
            _ => Color::LightRed,
        };

        Style::default().fg(color)
    }

    fn emphasize_current(&self, base_style: Self::Style) -> Self::Style {
        base_style.add_modifier(Modifier::BOLD)
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }
}

impl Default for RatatuiTheme {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbouring_slices_differ() {
        let theme = RatatuiTheme::new();
        for index in 0..SLICE_COLORS.len() {
            assert_ne!(theme.style_slice(index), theme.style_slice(index + 1));
        }
        assert_eq!(theme.style_slice(0), theme.style_slice(SLICE_COLORS.len()));
    }

    #[test]
    fn selected_cards_stand_out() {
        let theme = RatatuiTheme::new();
        assert_ne!(
            theme.style_card(CardState::Selected),
            theme.style_card(CardState::Open)
        );
        assert_eq!(
            theme.emphasize_current(Style::default()),
            Style::default().add_modifier(Modifier::BOLD)
        );
    }
}
