//! Turns runtime events into player-facing message text.
//!
//! Frontends decide which events are worth showing (see
//! [`MessageVisibility`](crate::config::MessageVisibility)); this module only
//! decides what they say.
use game_core::{
    AnswerOutcome, BattleOutcome, ContentId, ContentLibrary, Hero, HeroId, SelectOutcome, Side,
};
use runtime::{ContentEvent, Event, GameEvent, Screen, SessionEvent};

use crate::message::{MessageEntry, MessageLevel};

/// Formats events against the content they refer to.
pub struct MessageFormatter<'a> {
    library: &'a ContentLibrary,
    heroes: &'a [Hero],
}

impl<'a> MessageFormatter<'a> {
    pub fn new(library: &'a ContentLibrary, heroes: &'a [Hero]) -> Self {
        Self { library, heroes }
    }

    /// Returns `None` for events that carry nothing worth telling the player.
    pub fn format(&self, event: &Event) -> Option<MessageEntry> {
        match event {
            Event::Session(event) => Some(self.session(event)),
            Event::Game(event) => self.game(event),
            Event::Content(event) => Some(self.content(event)),
        }
    }

    fn session(&self, event: &SessionEvent) -> MessageEntry {
        let SessionEvent::ScreenChanged { to, .. } = event;
        let text = match to {
            Screen::Dashboard => "Back to the menu.".to_string(),
            Screen::Wheel => "Magic Wheel: press Space to spin!".to_string(),
            Screen::Matching => "Pair Match: pick a word, then its translation.".to_string(),
            Screen::Battle => "Hero Battle: choose 2 heroes!".to_string(),
            Screen::TeacherRoom => "Teacher Room opened.".to_string(),
        };
        MessageEntry::new(text, MessageLevel::Info)
    }

    fn game(&self, event: &GameEvent) -> Option<MessageEntry> {
        let entry = match event {
            GameEvent::WheelSpun { .. } => {
                MessageEntry::new("The wheel is spinning...", MessageLevel::Info)
            }
            GameEvent::WheelLanded { word, .. } => MessageEntry::new(
                format!("The wheel picked {word}! Say it out loud!"),
                MessageLevel::Success,
            ),
            GameEvent::CardSelected { outcome, .. } => return self.card_selected(*outcome),
            GameEvent::BoardReset => {
                MessageEntry::new("Cards shuffled. Play again!", MessageLevel::Info)
            }
            GameEvent::HeroToggled { hero, chosen } => {
                let name = self.hero_label(*hero);
                let text = if *chosen {
                    format!("{name} joins the battle!")
                } else {
                    format!("{name} steps back.")
                };
                MessageEntry::new(text, MessageLevel::Info)
            }
            GameEvent::RoundStarted {
                index,
                total,
                active_side,
            } => MessageEntry::new(
                format!("Question {} of {total}: {active_side}, your turn!", index + 1),
                MessageLevel::Info,
            ),
            GameEvent::AnswerGiven {
                side,
                outcome,
                scores,
            } => answer_given(*side, *outcome, *scores),
            GameEvent::BattleFinished { outcome, scores } => battle_finished(*outcome, *scores),
            GameEvent::BattleReset => {
                MessageEntry::new("Choose 2 heroes for a new battle.", MessageLevel::Info)
            }
        };
        Some(entry)
    }

    fn card_selected(&self, outcome: SelectOutcome) -> Option<MessageEntry> {
        match outcome {
            SelectOutcome::Armed | SelectOutcome::Disarmed => None,
            SelectOutcome::Matched { pair_id, completed } => {
                let pair = self.pair_label(pair_id);
                let text = if completed {
                    format!("{pair}. GREAT JOB! You matched all the words!")
                } else {
                    format!("{pair}. Nice match!")
                };
                Some(MessageEntry::new(text, MessageLevel::Success))
            }
            SelectOutcome::Mismatched => Some(MessageEntry::new(
                "Not a pair, try again!",
                MessageLevel::Warning,
            )),
        }
    }

    fn content(&self, event: &ContentEvent) -> MessageEntry {
        let ContentEvent::LibraryUpdated { edit, library } = event;
        MessageEntry::new(
            format!(
                "Teacher Room: {} ({} words, {} pairs, {} questions)",
                edit_label(edit),
                library.wheel_words().len(),
                library.pairs().len(),
                library.questions().len()
            ),
            MessageLevel::Info,
        )
    }

    fn hero_label(&self, id: HeroId) -> String {
        self.heroes
            .iter()
            .find(|hero| hero.id == id)
            .map_or_else(|| id.to_string(), |hero| format!("{} {}", hero.icon, hero.name))
    }

    fn pair_label(&self, id: ContentId) -> String {
        self.library.pair(id).map_or_else(
            || format!("Pair {id}"),
            |pair| format!("{} = {}", pair.source_text, pair.translation),
        )
    }
}

fn answer_given(side: Side, outcome: AnswerOutcome, scores: [u32; 2]) -> MessageEntry {
    let [one, two] = scores;
    match outcome {
        AnswerOutcome::Correct => MessageEntry::new(
            format!("✨ {side} got it right! ({one} : {two})"),
            MessageLevel::Success,
        ),
        AnswerOutcome::Wrong => MessageEntry::new(
            format!("💥 {side} missed! ({one} : {two})"),
            MessageLevel::Warning,
        ),
    }
}

fn battle_finished(outcome: BattleOutcome, scores: [u32; 2]) -> MessageEntry {
    let [one, two] = scores;
    match outcome {
        BattleOutcome::Winner(side) => MessageEntry::new(
            format!("VICTORY! 🎉 {side} wins {one} : {two}!"),
            MessageLevel::Success,
        ),
        BattleOutcome::Draw => MessageEntry::new(
            format!("It's a draw, {one} : {two}. Both heroes fought well!"),
            MessageLevel::Info,
        ),
    }
}

fn edit_label(edit: &str) -> &'static str {
    match edit {
        "add_wheel_word" => "wheel word added",
        "remove_wheel_word" => "wheel word removed",
        "add_pair" => "pair added",
        "remove_pair" => "pair removed",
        "add_question" => "question added",
        "remove_question" => "question removed",
        _ => "content updated",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use game_core::{Column, ContentEdit, WordPair};

    use super::*;

    const HEROES: [Hero; 1] = [Hero {
        id: HeroId(1),
        name: "Fire Dragon",
        icon: "🐉",
    }];

    fn library() -> ContentLibrary {
        ContentLibrary::new(
            vec!["猫".to_string()],
            vec![WordPair::new(ContentId(1), "火", "Fire")],
            Vec::new(),
        )
    }

    #[test]
    fn matched_pair_names_both_sides() {
        let library = library();
        let formatter = MessageFormatter::new(&library, &HEROES);

        let entry = formatter
            .format(&Event::Game(GameEvent::CardSelected {
                column: Column::Right,
                pair_id: ContentId(1),
                outcome: SelectOutcome::Matched {
                    pair_id: ContentId(1),
                    completed: true,
                },
            }))
            .unwrap();
        assert_eq!(entry.level, MessageLevel::Success);
        assert!(entry.text.starts_with("火 = Fire."));
        assert!(entry.text.contains("GREAT JOB!"));
    }

    #[test]
    fn arming_a_card_is_silent() {
        let library = library();
        let formatter = MessageFormatter::new(&library, &HEROES);

        let event = Event::Game(GameEvent::CardSelected {
            column: Column::Left,
            pair_id: ContentId(1),
            outcome: SelectOutcome::Armed,
        });
        assert!(formatter.format(&event).is_none());
    }

    #[test]
    fn heroes_are_named_when_known() {
        let library = library();
        let formatter = MessageFormatter::new(&library, &HEROES);

        let joined = formatter
            .format(&Event::Game(GameEvent::HeroToggled {
                hero: HeroId(1),
                chosen: true,
            }))
            .unwrap();
        assert_eq!(joined.text, "🐉 Fire Dragon joins the battle!");

        let unknown = formatter
            .format(&Event::Game(GameEvent::HeroToggled {
                hero: HeroId(9),
                chosen: false,
            }))
            .unwrap();
        assert_eq!(unknown.text, "h9 steps back.");
    }

    #[test]
    fn rounds_count_from_one() {
        let library = library();
        let formatter = MessageFormatter::new(&library, &HEROES);

        let entry = formatter
            .format(&Event::Game(GameEvent::RoundStarted {
                index: 0,
                total: 5,
                active_side: Side::Two,
            }))
            .unwrap();
        assert_eq!(entry.text, "Question 1 of 5: Player 2, your turn!");
    }

    #[test]
    fn draw_and_winner_read_differently() {
        let draw = battle_finished(BattleOutcome::Draw, [2, 2]);
        assert_eq!(draw.level, MessageLevel::Info);
        assert!(draw.text.contains("draw"));

        let win = battle_finished(BattleOutcome::Winner(Side::One), [3, 1]);
        assert_eq!(win.level, MessageLevel::Success);
        assert!(win.text.contains("Player 1 wins 3 : 1"));
    }

    #[test]
    fn library_updates_report_counts() {
        let library = library();
        let formatter = MessageFormatter::new(&library, &HEROES);

        let edit = ContentEdit::AddWheelWord {
            text: "狗".to_string(),
        };
        let updated = edit.apply(&library).unwrap();
        let entry = formatter
            .format(&Event::Content(ContentEvent::LibraryUpdated {
                edit: edit.as_str(),
                library: Arc::new(updated),
            }))
            .unwrap();
        assert_eq!(
            entry.text,
            "Teacher Room: wheel word added (2 words, 1 pairs, 0 questions)"
        );
    }
}
