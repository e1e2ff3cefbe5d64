//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextInput {
    Char(char),
    Backspace,
}

/// Whether keys drive navigation or go into a text field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputMode {
    #[default]
    Navigate,
    TextEntry,
}

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Leave the current form, or return to the dashboard.
    Back,
    OpenTeacherRoom,
    Move(Direction),
    /// Spin, select, answer or submit, depending on the screen.
    Confirm,
    /// Direct pick by number, zero-based.
    Select(usize),
    NextSection,
    PrevSection,
    Delete,
    NewEntry,
    Fight,
    Text(TextInput),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: InputMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match mode {
            InputMode::Navigate => self.navigate(key.code),
            InputMode::TextEntry => self.text_entry(key.code),
        }
    }

    fn navigate(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Move(Direction::Left),
            KeyCode::Right => KeyAction::Move(Direction::Right),
            KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Tab => KeyAction::NextSection,
            KeyCode::BackTab => KeyAction::PrevSection,
            KeyCode::Delete => KeyAction::Delete,
            KeyCode::Esc | KeyCode::Backspace => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        if let Some(digit) = raw.to_digit(10)
            && digit > 0
        {
            return KeyAction::Select(digit as usize - 1);
        }

        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            't' => KeyAction::OpenTeacherRoom,
            'h' => KeyAction::Move(Direction::Left),
            'j' => KeyAction::Move(Direction::Down),
            'k' => KeyAction::Move(Direction::Up),
            'l' => KeyAction::Move(Direction::Right),
            ' ' => KeyAction::Confirm,
            'f' => KeyAction::Fight,
            'n' => KeyAction::NewEntry,
            'x' => KeyAction::Delete,
            _ => KeyAction::None,
        }
    }

    fn text_entry(&self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Char(ch) => KeyAction::Text(TextInput::Char(ch)),
            KeyCode::Backspace => KeyAction::Text(TextInput::Backspace),
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Tab | KeyCode::Down => KeyAction::Move(Direction::Down),
            KeyCode::BackTab | KeyCode::Up => KeyAction::Move(Direction::Up),
            KeyCode::Esc => KeyAction::Back,
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        let mode = InputMode::Navigate;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('h')), mode),
            KeyAction::Move(Direction::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('K')), mode),
            KeyAction::Move(Direction::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Down), mode),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn maps_confirm_and_quit() {
        let handler = InputHandler::new();
        let mode = InputMode::Navigate;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' ')), mode),
            KeyAction::Confirm
        );
        assert_eq!(handler.handle_key(key(KeyCode::Enter), mode), KeyAction::Confirm);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), mode),
            KeyAction::Quit
        );

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c, InputMode::TextEntry), KeyAction::Quit);
    }

    #[test]
    fn digits_pick_zero_based() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('1')), InputMode::Navigate),
            KeyAction::Select(0)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('0')), InputMode::Navigate),
            KeyAction::None
        );
    }

    #[test]
    fn text_entry_captures_letters() {
        let handler = InputHandler::new();
        let mode = InputMode::TextEntry;
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('q')), mode),
            KeyAction::Text(TextInput::Char('q'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('苹')), mode),
            KeyAction::Text(TextInput::Char('苹'))
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Backspace), mode),
            KeyAction::Text(TextInput::Backspace)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc), mode), KeyAction::Back);
        assert_eq!(
            handler.handle_key(key(KeyCode::Tab), mode),
            KeyAction::Move(Direction::Down)
        );
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('z')), InputMode::Navigate),
            KeyAction::None
        );
    }
}
