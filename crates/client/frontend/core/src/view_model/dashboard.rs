use game_core::ContentLibrary;
use runtime::Screen;

pub const GREETING: &str = "Welcome, Little Dragon! 🐉";
pub const PROMPT: &str = "Which game do you want to play today?";

/// One entry on the game menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameCard {
    pub screen: Screen,
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Size of the content list the game draws from.
    pub items: usize,
}

impl GameCard {
    /// A game with an empty list cannot start.
    pub fn is_playable(&self) -> bool {
        self.items > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardView {
    pub cards: [GameCard; 3],
}

impl DashboardView {
    pub fn from_library(library: &ContentLibrary) -> Self {
        Self {
            cards: [
                GameCard {
                    screen: Screen::Wheel,
                    icon: "🎡",
                    title: "Magic Wheel",
                    tagline: "Spin & Say!",
                    items: library.wheel_words().len(),
                },
                GameCard {
                    screen: Screen::Matching,
                    icon: "🧩",
                    title: "Pair Match",
                    tagline: "Connect Them!",
                    items: library.pairs().len(),
                },
                GameCard {
                    screen: Screen::Battle,
                    icon: "⚔️",
                    title: "Hero Battle",
                    tagline: "Defeat the Boss!",
                    items: library.questions().len(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{ContentId, WordPair};

    use super::*;

    #[test]
    fn cards_follow_list_sizes() {
        let library = ContentLibrary::new(
            vec!["猫".to_string(), "狗".to_string()],
            vec![WordPair::new(ContentId(1), "火", "Fire")],
            Vec::new(),
        );
        let view = DashboardView::from_library(&library);

        let screens: Vec<Screen> = view.cards.iter().map(|card| card.screen).collect();
        assert_eq!(screens, vec![Screen::Wheel, Screen::Matching, Screen::Battle]);
        assert_eq!(view.cards[0].items, 2);
        assert!(view.cards[1].is_playable());
        assert!(!view.cards[2].is_playable());
    }
}
