//! Application state for cursors and Teacher Room forms.
//!
//! Everything here is UI-only. Session state lives in the runtime and reaches
//! the CLI through snapshots.

use client_frontend_core::view_model::TeacherSection;
use game_core::{BattlePhase, BattleState, Column, MatchingBoard};
use runtime::{ActiveGame, Screen};

use crate::input::{Direction, InputMode, TextInput};

/// Menu entries on the dashboard: the three games, then the Teacher Room.
pub const DASHBOARD_ENTRIES: [Screen; 4] = [
    Screen::Wheel,
    Screen::Matching,
    Screen::Battle,
    Screen::TeacherRoom,
];

/// Heroes per row on the selection grid.
pub const HERO_COLUMNS: usize = 4;

/// Buttons on the matching and battle finish overlays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayChoice {
    /// "Play Again" or "New Battle".
    #[default]
    Replay,
    Menu,
}

impl OverlayChoice {
    pub fn toggle(self) -> Self {
        match self {
            Self::Replay => Self::Menu,
            Self::Menu => Self::Replay,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchingCursor {
    pub column: Column,
    pub row: usize,
}

impl Default for MatchingCursor {
    fn default() -> Self {
        Self {
            column: Column::Left,
            row: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeacherFocus {
    #[default]
    Rows,
    Form,
}

/// Add-entry form for one Teacher Room section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub values: Vec<String>,
    pub field: usize,
}

impl FormState {
    pub fn new(section: TeacherSection) -> Self {
        Self {
            values: vec![String::new(); section.fields().len()],
            field: 0,
        }
    }

    pub fn input(&mut self, input: TextInput) {
        let Some(value) = self.values.get_mut(self.field) else {
            return;
        };
        match input {
            TextInput::Char(ch) => value.push(ch),
            TextInput::Backspace => {
                value.pop();
            }
        }
    }

    pub fn move_field(&mut self, direction: Direction) {
        self.field = match direction {
            Direction::Down | Direction::Right => step(self.field, self.values.len(), 1),
            Direction::Up | Direction::Left => step(self.field, self.values.len(), -1),
        };
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeacherState {
    pub section: TeacherSection,
    pub focus: TeacherFocus,
    pub row: usize,
    pub form: FormState,
}

impl Default for TeacherState {
    fn default() -> Self {
        Self::at(TeacherSection::default())
    }
}

impl TeacherState {
    fn at(section: TeacherSection) -> Self {
        Self {
            section,
            focus: TeacherFocus::Rows,
            row: 0,
            form: FormState::new(section),
        }
    }

    /// Switching section drops any half-typed entry.
    pub fn select_section(&mut self, section: TeacherSection) {
        *self = Self::at(section);
    }

    pub fn open_form(&mut self) {
        self.focus = TeacherFocus::Form;
    }

    pub fn close_form(&mut self) {
        self.focus = TeacherFocus::Rows;
    }

    /// Clears the form after a successful add.
    pub fn reset_form(&mut self) {
        self.form = FormState::new(self.section);
        self.focus = TeacherFocus::Rows;
    }
}

/// Mutable UI state tracking cursors on every screen.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub dashboard_cursor: usize,
    pub matching_cursor: MatchingCursor,
    /// Hero index while selecting, answer option while fighting.
    pub battle_cursor: usize,
    pub overlay: OverlayChoice,
    pub teacher: TeacherState,
    battle_phase: Option<BattlePhase>,
    matching_complete: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_mode(&self, screen: Screen) -> InputMode {
        if screen == Screen::TeacherRoom && self.teacher.focus == TeacherFocus::Form {
            InputMode::TextEntry
        } else {
            InputMode::Navigate
        }
    }

    /// Resets the cursors of the screen being entered.
    pub fn enter_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Dashboard | Screen::Wheel => {}
            Screen::Matching => self.matching_cursor = MatchingCursor::default(),
            Screen::Battle => self.battle_cursor = 0,
            Screen::TeacherRoom => self.teacher = TeacherState::default(),
        }
        self.overlay = OverlayChoice::default();
    }

    /// Tracks game progress between snapshots. A new battle phase resets the
    /// battle cursor, and any finish or replay resets the overlay button.
    pub fn sync_game(&mut self, game: &ActiveGame) {
        let phase = game.as_battle().map(BattleState::phase);
        if phase != self.battle_phase {
            self.battle_phase = phase;
            self.battle_cursor = 0;
            self.overlay = OverlayChoice::default();
        }

        let complete = game.as_matching().is_some_and(MatchingBoard::is_complete);
        if complete != self.matching_complete {
            self.matching_complete = complete;
            self.overlay = OverlayChoice::default();
        }
    }

    pub fn selected_dashboard_entry(&self) -> Screen {
        DASHBOARD_ENTRIES[self.dashboard_cursor.min(DASHBOARD_ENTRIES.len() - 1)]
    }

    pub fn move_dashboard(&mut self, direction: Direction) {
        let delta = match direction {
            Direction::Up | Direction::Left => -1,
            Direction::Down | Direction::Right => 1,
        };
        self.dashboard_cursor = step(self.dashboard_cursor, DASHBOARD_ENTRIES.len(), delta);
    }

    /// Moves within a column or across to the other one. `column_len` gives
    /// the card count of each column.
    pub fn move_matching(&mut self, direction: Direction, column_len: impl Fn(Column) -> usize) {
        let cursor = &mut self.matching_cursor;
        match direction {
            Direction::Left | Direction::Right => {
                cursor.column = cursor.column.other();
                cursor.row = cursor.row.min(column_len(cursor.column).saturating_sub(1));
            }
            Direction::Up => cursor.row = step(cursor.row, column_len(cursor.column), -1),
            Direction::Down => cursor.row = step(cursor.row, column_len(cursor.column), 1),
        }
    }

    /// Moves over the hero grid.
    pub fn move_hero(&mut self, direction: Direction, roster_len: usize) {
        if roster_len == 0 {
            return;
        }
        let delta = match direction {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -(HERO_COLUMNS as isize),
            Direction::Down => HERO_COLUMNS as isize,
        };
        self.battle_cursor = step(self.battle_cursor, roster_len, delta);
    }

    /// Two answer options sit side by side.
    pub fn move_option(&mut self, direction: Direction) {
        self.battle_cursor = match direction {
            Direction::Left | Direction::Up => 0,
            Direction::Right | Direction::Down => 1,
        };
    }

    pub fn move_teacher_row(&mut self, direction: Direction, row_count: usize) {
        let delta = match direction {
            Direction::Up => -1,
            Direction::Down => 1,
            Direction::Left => {
                self.teacher.select_section(self.teacher.section.prev());
                return;
            }
            Direction::Right => {
                self.teacher.select_section(self.teacher.section.next());
                return;
            }
        };
        self.teacher.row = step(self.teacher.row, row_count, delta);
    }

    /// Keeps the row cursor inside a list that may have shrunk.
    pub fn clamp_teacher_row(&mut self, row_count: usize) {
        self.teacher.row = self.teacher.row.min(row_count.saturating_sub(1));
    }
}

/// Wrapping step over `len` positions. Returns 0 for an empty range.
fn step(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((current as isize + delta).rem_euclid(len)) as usize
}

#[cfg(test)]
mod tests {
    use game_content::HEROES;
    use game_core::{BattleConfig, BattleQuestion, ContentId, ScriptedRng, WordPair};

    use super::*;

    #[test]
    fn dashboard_cursor_wraps() {
        let mut state = AppState::new();
        assert_eq!(state.selected_dashboard_entry(), Screen::Wheel);

        state.move_dashboard(Direction::Up);
        assert_eq!(state.selected_dashboard_entry(), Screen::TeacherRoom);
        state.move_dashboard(Direction::Down);
        assert_eq!(state.selected_dashboard_entry(), Screen::Wheel);
    }

    #[test]
    fn matching_cursor_clamps_when_switching_columns() {
        let mut state = AppState::new();
        let lens = |column: Column| match column {
            Column::Left => 5,
            Column::Right => 2,
        };
        for _ in 0..4 {
            state.move_matching(Direction::Down, lens);
        }
        assert_eq!(state.matching_cursor.row, 4);

        state.move_matching(Direction::Right, lens);
        assert_eq!(state.matching_cursor.column, Column::Right);
        assert_eq!(state.matching_cursor.row, 1);
    }

    #[test]
    fn hero_grid_moves_by_rows() {
        let mut state = AppState::new();
        state.move_hero(Direction::Down, 8);
        assert_eq!(state.battle_cursor, 4);
        state.move_hero(Direction::Left, 8);
        assert_eq!(state.battle_cursor, 3);
        state.move_hero(Direction::Up, 8);
        assert_eq!(state.battle_cursor, 7);
    }

    #[test]
    fn fight_starts_on_the_first_option() {
        let questions = vec![BattleQuestion::new(ContentId(1), "大", "Big", "Small")];
        let mut battle = BattleState::new(HEROES.to_vec(), questions, BattleConfig::default());
        let mut state = AppState::new();
        state.sync_game(&ActiveGame::Battle(battle.clone()));

        for _ in 0..5 {
            state.move_hero(Direction::Right, HEROES.len());
        }
        assert_eq!(state.battle_cursor, 5);
        battle.toggle_hero(HEROES[5].id).unwrap();
        battle.toggle_hero(HEROES[0].id).unwrap();
        battle.start_fight(&mut ScriptedRng::new([0])).unwrap();

        state.sync_game(&ActiveGame::Battle(battle.clone()));
        assert_eq!(state.battle_cursor, 0);
        assert!(battle.answer(state.battle_cursor).is_ok());

        state.move_option(Direction::Right);
        state.sync_game(&ActiveGame::Battle(battle));
        assert_eq!(state.battle_cursor, 1);
    }

    #[test]
    fn replay_reopens_overlay_on_the_replay_button() {
        let pairs = vec![WordPair::new(ContentId(1), "火", "Fire")];
        let mut rng = ScriptedRng::new([0]);
        let mut board = MatchingBoard::new(pairs, &mut rng).unwrap();
        let mut state = AppState::new();
        state.sync_game(&ActiveGame::Matching(board.clone()));

        board.select(Column::Left, ContentId(1)).unwrap();
        board.select(Column::Right, ContentId(1)).unwrap();
        state.sync_game(&ActiveGame::Matching(board.clone()));
        state.overlay = state.overlay.toggle();
        assert_eq!(state.overlay, OverlayChoice::Menu);

        board.play_again(&mut rng);
        state.sync_game(&ActiveGame::Matching(board.clone()));
        assert_eq!(state.overlay, OverlayChoice::Replay);

        board.select(Column::Left, ContentId(1)).unwrap();
        board.select(Column::Right, ContentId(1)).unwrap();
        state.sync_game(&ActiveGame::Matching(board));
        assert_eq!(state.overlay, OverlayChoice::Replay);
    }

    #[test]
    fn form_edits_active_field() {
        let mut state = AppState::new();
        state.teacher.select_section(TeacherSection::Pairs);
        state.teacher.open_form();
        assert_eq!(state.input_mode(Screen::TeacherRoom), InputMode::TextEntry);
        assert_eq!(state.input_mode(Screen::Dashboard), InputMode::Navigate);

        let form = &mut state.teacher.form;
        form.input(TextInput::Char('水'));
        form.move_field(Direction::Down);
        for ch in "Waterr".chars() {
            form.input(TextInput::Char(ch));
        }
        form.input(TextInput::Backspace);
        assert_eq!(form.values, vec!["水".to_string(), "Water".to_string()]);

        form.move_field(Direction::Down);
        assert_eq!(form.field, 0);

        state.teacher.reset_form();
        assert_eq!(state.teacher.focus, TeacherFocus::Rows);
        assert!(state.teacher.form.values.iter().all(String::is_empty));
    }

    #[test]
    fn switching_sections_resets_form() {
        let mut state = AppState::new();
        state.teacher.form.input(TextInput::Char('猫'));
        state.move_teacher_row(Direction::Right, 3);
        assert_eq!(state.teacher.section, TeacherSection::Pairs);
        assert_eq!(state.teacher.form.values.len(), 2);
        assert!(state.teacher.form.values.iter().all(String::is_empty));
    }

    #[test]
    fn step_handles_empty_ranges() {
        assert_eq!(step(0, 0, 1), 0);
        assert_eq!(step(0, 3, -1), 2);
        assert_eq!(step(2, 3, 1), 0);
    }
}
