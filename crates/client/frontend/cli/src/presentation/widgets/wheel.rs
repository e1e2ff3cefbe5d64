//! Magic Wheel widget.
//!
//! The disc is painted cell by cell. Each cell asks the view which slice sits
//! at its screen angle, so the slice drawn under the pointer is always the one
//! the session lands on.

use client_frontend_core::view_model::{PresentationMapper, WheelView};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;
/// Labels sit at this fraction of the radius.
const LABEL_RADIUS: f64 = 0.6;
const POINTER_RADIUS: f64 = 1.12;

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &WheelView,
    theme: &T,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Magic Wheel 🎡 ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner);

    draw_disc(frame.buffer_mut(), chunks[0], view, theme);
    render_panel(frame, chunks[1], view, theme);
}

fn render_panel<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view: &WheelView,
    theme: &T,
) {
    let button_style = if view.spinning {
        Style::default().fg(Color::DarkGray)
    } else {
        theme.emphasize_current(Style::default().fg(Color::Black).bg(Color::Yellow))
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {} ", view.spin_label()), button_style)),
        Line::from(""),
    ];

    match (&view.landed_word, view.spinning) {
        (Some(word), false) => {
            lines.push(Line::from("You got:"));
            lines.push(Line::from(Span::styled(
                word.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from("Say it out loud! 🗣️"));
        }
        _ => lines.push(Line::from(Span::styled(
            "Press Space and see where it stops!",
            Style::default().fg(Color::Gray),
        ))),
    }

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(panel, area);
}

fn draw_disc<T: PresentationMapper<Style = Style>>(
    buf: &mut Buffer,
    area: Rect,
    view: &WheelView,
    theme: &T,
) {
    let slice_count = view.slices.len();
    if slice_count == 0 || area.width < 8 || area.height < 6 {
        return;
    }

    let radius_y = (f64::from(area.height) / 2.0 - 1.0)
        .min(f64::from(area.width) / (2.0 * CELL_ASPECT) - 1.0)
        .max(1.0);
    let radius_x = radius_y * CELL_ASPECT;
    let center_x = f64::from(area.x) + f64::from(area.width) / 2.0;
    let center_y = f64::from(area.y) + f64::from(area.height) / 2.0;

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = (f64::from(x) + 0.5 - center_x) / radius_x;
            let dy = (f64::from(y) + 0.5 - center_y) / radius_y;
            if dx * dx + dy * dy > 1.0 {
                continue;
            }

            let index = view.slice_at(screen_angle(dx, dy));
            let mut style = theme.style_slice(index);
            if view.slices[index].landed {
                style = theme.emphasize_current(style);
            }
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_char(' ').set_style(style);
            }
        }
    }

    for slice in &view.slices {
        let angle = label_angle(slice.index, slice_count, view.rotation).to_radians();
        let x = center_x + angle.sin() * radius_x * LABEL_RADIUS;
        let y = center_y - angle.cos() * radius_y * LABEL_RADIUS;
        let label = Span::raw(slice.label.as_str());
        let start = (x - label.width() as f64 / 2.0).max(f64::from(area.x));

        let mut style = theme.style_slice(slice.index);
        if slice.landed {
            style = theme.emphasize_current(style);
        }
        buf.set_string(start as u16, y as u16, &slice.label, style);
    }

    let pointer = f64::from(view.pointer_offset).to_radians();
    let x = center_x + pointer.sin() * radius_x * POINTER_RADIUS;
    let y = center_y - pointer.cos() * radius_y * POINTER_RADIUS;
    let position = Position::new(x as u16, y as u16);
    if area.contains(position)
        && let Some(cell) = buf.cell_mut(position)
    {
        cell.set_symbol(pointer_glyph(view.pointer_offset))
            .set_style(Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD));
    }
}

/// Degrees clockwise from 12 o'clock for a point relative to the center.
fn screen_angle(dx: f64, dy: f64) -> u32 {
    let degrees = dx.atan2(-dy).to_degrees().rem_euclid(360.0);
    (degrees as u32) % 360
}

/// Screen angle of the middle of slice `index` once the wheel has turned.
fn label_angle(index: usize, slice_count: usize, rotation: u64) -> f64 {
    let width = 360.0 / slice_count as f64;
    ((index as f64 + 0.5) * width + (rotation % 360) as f64).rem_euclid(360.0)
}

fn pointer_glyph(offset: u32) -> &'static str {
    match offset % 360 {
        45..135 => "◀",
        135..225 => "▲",
        225..315 => "▶",
        _ => "▼",
    }
}

#[cfg(test)]
mod tests {
    use client_frontend_core::view_model::WheelSlice;

    use super::*;

    fn view(count: usize, rotation: u64) -> WheelView {
        WheelView {
            slices: (0..count)
                .map(|index| WheelSlice {
                    index,
                    label: format!("w{index}"),
                    landed: false,
                })
                .collect(),
            rotation,
            pointer_offset: 90,
            spinning: false,
            landed_word: None,
        }
    }

    #[test]
    fn screen_angle_runs_clockwise_from_top() {
        assert_eq!(screen_angle(0.0, -1.0), 0);
        assert_eq!(screen_angle(1.0, 0.0), 90);
        assert_eq!(screen_angle(0.0, 1.0), 180);
        assert_eq!(screen_angle(-1.0, 0.0), 270);
    }

    #[test]
    fn labels_sit_inside_their_slice() {
        for rotation in [0, 45, 200, 7 * 360 + 130] {
            let view = view(5, rotation);
            for slice in &view.slices {
                let angle = label_angle(slice.index, 5, rotation) as u32;
                assert_eq!(view.slice_at(angle), slice.index, "rotation {rotation}");
            }
        }
    }

    #[test]
    fn pointer_glyph_faces_the_wheel() {
        assert_eq!(pointer_glyph(0), "▼");
        assert_eq!(pointer_glyph(90), "◀");
        assert_eq!(pointer_glyph(180), "▲");
        assert_eq!(pointer_glyph(270), "▶");
    }
}
