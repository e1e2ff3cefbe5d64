use game_core::{Column, ContentId, MatchingBoard};

pub const TITLE: &str = "Match the Pairs! 🧩";
pub const HINT: &str = "Pick a Chinese word, then its translation.";
pub const WIN_TITLE: &str = "GREAT JOB!";
pub const WIN_TEXT: &str = "You matched all the words!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    Open,
    Selected,
    Matched,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub pair_id: ContentId,
    pub text: String,
    pub state: CardState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchingView {
    pub left: Vec<CardView>,
    pub right: Vec<CardView>,
    pub matched: usize,
    pub total: usize,
    pub complete: bool,
}

impl MatchingView {
    pub fn from_board(board: &MatchingBoard) -> Self {
        Self {
            left: cards(board, Column::Left),
            right: cards(board, Column::Right),
            matched: board.matched_count(),
            total: board.total_pairs(),
            complete: board.is_complete(),
        }
    }

    pub fn column(&self, column: Column) -> &[CardView] {
        match column {
            Column::Left => &self.left,
            Column::Right => &self.right,
        }
    }

    pub fn progress_label(&self) -> String {
        format!("{} / {} matched", self.matched, self.total)
    }
}

fn cards(board: &MatchingBoard, column: Column) -> Vec<CardView> {
    let selected = board.selected(column);
    board
        .column(column)
        .iter()
        .map(|card| {
            let state = if board.is_matched(card.pair_id) {
                CardState::Matched
            } else if selected == Some(card.pair_id) {
                CardState::Selected
            } else {
                CardState::Open
            };
            CardView {
                pair_id: card.pair_id,
                text: card.text.clone(),
                state,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use game_core::{ScriptedRng, WordPair};

    use super::*;

    fn board() -> MatchingBoard {
        let pairs = vec![
            WordPair::new(ContentId(1), "火", "Fire"),
            WordPair::new(ContentId(2), "水", "Water"),
        ];
        MatchingBoard::new(pairs, &mut ScriptedRng::new(vec![0])).unwrap()
    }

    fn state_of(cards: &[CardView], id: ContentId) -> CardState {
        cards
            .iter()
            .find(|card| card.pair_id == id)
            .map(|card| card.state)
            .unwrap()
    }

    #[test]
    fn card_states_track_board() {
        let mut board = board();
        board.select(Column::Left, ContentId(1)).unwrap();
        board.select(Column::Right, ContentId(1)).unwrap();
        board.select(Column::Left, ContentId(2)).unwrap();

        let view = MatchingView::from_board(&board);
        assert_eq!(state_of(&view.left, ContentId(1)), CardState::Matched);
        assert_eq!(state_of(&view.right, ContentId(1)), CardState::Matched);
        assert_eq!(state_of(&view.left, ContentId(2)), CardState::Selected);
        assert_eq!(state_of(&view.right, ContentId(2)), CardState::Open);
        assert_eq!(view.progress_label(), "1 / 2 matched");
        assert!(!view.complete);
    }

    #[test]
    fn columns_hold_each_side_of_the_pair() {
        let view = MatchingView::from_board(&board());
        let mut left: Vec<&str> = view.column(Column::Left).iter().map(|c| c.text.as_str()).collect();
        left.sort_unstable();
        assert_eq!(left, vec!["水", "火"]);
        assert!(view.right.iter().all(|card| card.state == CardState::Open));
    }
}
