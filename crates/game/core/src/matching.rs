//! Pair matching board: two shuffled columns, one selection per column.

use std::collections::BTreeSet;

use crate::content::{ContentId, WordPair};
use crate::env::{RandomSource, shuffle};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised by matching inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchingError {
    #[error("pair {pair_id} is already matched")]
    AlreadyMatched { pair_id: ContentId },

    #[error("pair {pair_id} is not on the board")]
    UnknownPair { pair_id: ContentId },

    #[error("every pair is already matched")]
    BoardComplete,

    #[error("there are no pairs to match")]
    NoPairs,
}

impl GameError for MatchingError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyMatched { .. } => "MATCH_ALREADY_MATCHED",
            Self::UnknownPair { .. } => "MATCH_UNKNOWN_PAIR",
            Self::BoardComplete => "MATCH_BOARD_COMPLETE",
            Self::NoPairs => "MATCH_NO_PAIRS",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One card in a column. Left cards carry the source term, right cards the
/// translation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchCard {
    pub pair_id: ContentId,
    pub text: String,
}

/// What a selection did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The card is now the armed selection in its column.
    Armed,
    /// The armed card was selected again and released.
    Disarmed,
    /// Both columns held the same pair.
    Matched { pair_id: ContentId, completed: bool },
    /// The columns disagreed; the new card stays armed and the other column
    /// is cleared.
    Mismatched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingBoard {
    pairs: Vec<WordPair>,
    left: Vec<MatchCard>,
    right: Vec<MatchCard>,
    selected_left: Option<ContentId>,
    selected_right: Option<ContentId>,
    matched: BTreeSet<ContentId>,
}

impl MatchingBoard {
    /// Deals a fresh board from `pairs`. An empty list is rejected.
    pub fn new(pairs: Vec<WordPair>, rng: &mut dyn RandomSource) -> Result<Self, MatchingError> {
        if pairs.is_empty() {
            return Err(MatchingError::NoPairs);
        }
        let mut board = Self {
            pairs,
            left: Vec::new(),
            right: Vec::new(),
            selected_left: None,
            selected_right: None,
            matched: BTreeSet::new(),
        };
        board.deal(rng);
        Ok(board)
    }

    fn deal(&mut self, rng: &mut dyn RandomSource) {
        self.left = self
            .pairs
            .iter()
            .map(|pair| MatchCard {
                pair_id: pair.id,
                text: pair.source_text.clone(),
            })
            .collect();
        self.right = self
            .pairs
            .iter()
            .map(|pair| MatchCard {
                pair_id: pair.id,
                text: pair.translation.clone(),
            })
            .collect();
        shuffle(rng, &mut self.left);
        shuffle(rng, &mut self.right);

        self.selected_left = None;
        self.selected_right = None;
        self.matched.clear();
    }

    pub fn column(&self, column: Column) -> &[MatchCard] {
        match column {
            Column::Left => &self.left,
            Column::Right => &self.right,
        }
    }

    pub fn selected(&self, column: Column) -> Option<ContentId> {
        match column {
            Column::Left => self.selected_left,
            Column::Right => self.selected_right,
        }
    }

    fn selected_mut(&mut self, column: Column) -> &mut Option<ContentId> {
        match column {
            Column::Left => &mut self.selected_left,
            Column::Right => &mut self.selected_right,
        }
    }

    pub fn is_matched(&self, pair_id: ContentId) -> bool {
        self.matched.contains(&pair_id)
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    pub fn total_pairs(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_complete(&self) -> bool {
        !self.pairs.is_empty() && self.matched.len() == self.pairs.len()
    }

    /// Applies a selection of `pair_id` in `column`.
    ///
    /// # Errors
    ///
    /// Rejected once the board is complete, for ids not on the board, and
    /// for cards that are already matched. Rejections leave the board as is.
    pub fn select(
        &mut self,
        column: Column,
        pair_id: ContentId,
    ) -> Result<SelectOutcome, MatchingError> {
        if self.is_complete() {
            return Err(MatchingError::BoardComplete);
        }
        if !self.column(column).iter().any(|card| card.pair_id == pair_id) {
            return Err(MatchingError::UnknownPair { pair_id });
        }
        if self.is_matched(pair_id) {
            return Err(MatchingError::AlreadyMatched { pair_id });
        }

        if self.selected(column) == Some(pair_id) {
            *self.selected_mut(column) = None;
            return Ok(SelectOutcome::Disarmed);
        }

        match self.selected(column.other()) {
            Some(other) if other == pair_id => {
                self.matched.insert(pair_id);
                self.selected_left = None;
                self.selected_right = None;
                Ok(SelectOutcome::Matched {
                    pair_id,
                    completed: self.is_complete(),
                })
            }
            Some(_) => {
                *self.selected_mut(column) = Some(pair_id);
                *self.selected_mut(column.other()) = None;
                Ok(SelectOutcome::Mismatched)
            }
            None => {
                *self.selected_mut(column) = Some(pair_id);
                Ok(SelectOutcome::Armed)
            }
        }
    }

    /// Reshuffles both columns and clears every match and selection.
    pub fn play_again(&mut self, rng: &mut dyn RandomSource) {
        self.deal(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    fn pairs() -> Vec<WordPair> {
        vec![
            WordPair::new(ContentId(1), "火", "Fire"),
            WordPair::new(ContentId(2), "水", "Water"),
            WordPair::new(ContentId(3), "山", "Mountain"),
        ]
    }

    #[test]
    fn empty_pairs_are_rejected() {
        let mut rng = PcgRng::new(0);
        assert_eq!(
            MatchingBoard::new(Vec::new(), &mut rng),
            Err(MatchingError::NoPairs)
        );
    }

    #[test]
    fn columns_keep_every_pair_id() {
        let mut rng = PcgRng::new(11);
        let board = MatchingBoard::new(pairs(), &mut rng).unwrap();

        for column in [Column::Left, Column::Right] {
            let mut ids: Vec<u32> = board.column(column).iter().map(|c| c.pair_id.0).collect();
            ids.sort_unstable();
            assert_eq!(ids, vec![1, 2, 3]);
        }
        let fire = board
            .column(Column::Right)
            .iter()
            .find(|card| card.pair_id == ContentId(1))
            .unwrap();
        assert_eq!(fire.text, "Fire");
    }

    #[test]
    fn single_pair_completes_board() {
        let mut rng = ScriptedRng::new([0]);
        let mut board =
            MatchingBoard::new(vec![WordPair::new(ContentId(1), "火", "Fire")], &mut rng)
                .unwrap();

        assert_eq!(
            board.select(Column::Left, ContentId(1)),
            Ok(SelectOutcome::Armed)
        );
        assert_eq!(
            board.select(Column::Right, ContentId(1)),
            Ok(SelectOutcome::Matched {
                pair_id: ContentId(1),
                completed: true
            })
        );
        assert!(board.is_complete());
        assert_eq!(board.matched_count(), board.total_pairs());
        assert_eq!(
            board.select(Column::Left, ContentId(1)),
            Err(MatchingError::BoardComplete)
        );
    }

    #[test]
    fn reselecting_armed_card_disarms_it() {
        let mut rng = PcgRng::new(5);
        let mut board = MatchingBoard::new(pairs(), &mut rng).unwrap();

        board.select(Column::Right, ContentId(2)).unwrap();
        assert_eq!(board.selected(Column::Right), Some(ContentId(2)));
        assert_eq!(
            board.select(Column::Right, ContentId(2)),
            Ok(SelectOutcome::Disarmed)
        );
        assert_eq!(board.selected(Column::Right), None);
    }

    #[test]
    fn same_column_selection_replaces_armed_card() {
        let mut rng = PcgRng::new(5);
        let mut board = MatchingBoard::new(pairs(), &mut rng).unwrap();

        board.select(Column::Left, ContentId(1)).unwrap();
        assert_eq!(
            board.select(Column::Left, ContentId(3)),
            Ok(SelectOutcome::Armed)
        );
        assert_eq!(board.selected(Column::Left), Some(ContentId(3)));
    }

    #[test]
    fn mismatch_keeps_new_card_and_clears_other_column() {
        let mut rng = PcgRng::new(5);
        let mut board = MatchingBoard::new(pairs(), &mut rng).unwrap();

        board.select(Column::Left, ContentId(1)).unwrap();
        assert_eq!(
            board.select(Column::Right, ContentId(2)),
            Ok(SelectOutcome::Mismatched)
        );
        assert_eq!(board.selected(Column::Left), None);
        assert_eq!(board.selected(Column::Right), Some(ContentId(2)));
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn matched_and_unknown_cards_are_rejected() {
        let mut rng = PcgRng::new(5);
        let mut board = MatchingBoard::new(pairs(), &mut rng).unwrap();

        board.select(Column::Left, ContentId(2)).unwrap();
        board.select(Column::Right, ContentId(2)).unwrap();

        let before = board.clone();
        assert_eq!(
            board.select(Column::Left, ContentId(2)),
            Err(MatchingError::AlreadyMatched {
                pair_id: ContentId(2)
            })
        );
        assert_eq!(
            board.select(Column::Right, ContentId(42)),
            Err(MatchingError::UnknownPair {
                pair_id: ContentId(42)
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn play_again_resets_progress() {
        let mut rng = PcgRng::new(8);
        let mut board = MatchingBoard::new(pairs(), &mut rng).unwrap();
        for id in 1..=3 {
            board.select(Column::Left, ContentId(id)).unwrap();
            board.select(Column::Right, ContentId(id)).unwrap();
        }
        assert!(board.is_complete());

        board.play_again(&mut rng);
        assert!(!board.is_complete());
        assert_eq!(board.matched_count(), 0);
        assert_eq!(board.selected(Column::Left), None);
        assert_eq!(board.column(Column::Left).len(), 3);
    }
}
