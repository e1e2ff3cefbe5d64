//! Content every session starts from.

use game_core::{BattleQuestion, ContentId, ContentLibrary, Hero, HeroId, WordPair};

pub const DEFAULT_WHEEL_WORDS: [&str; 8] = [
    "你好 (Nǐ hǎo)",
    "谢谢 (Xièxiè)",
    "猫 (Māo)",
    "狗 (Gǒu)",
    "熊猫 (Xióngmāo)",
    "苹果 (Píngguǒ)",
    "好 (Hǎo)",
    "我爱你 (Wǒ ài nǐ)",
];

/// `(id, source text, translation)`
pub const DEFAULT_MATCH_PAIRS: [(u32, &str, &str); 6] = [
    (1, "妈妈", "Mama"),
    (2, "老师", "Teacher"),
    (3, "中国", "China"),
    (4, "山", "Mountain"),
    (5, "火", "Fire"),
    (6, "水", "Water"),
];

/// `(id, prompt, correct answer, wrong answer)`
pub const DEFAULT_BATTLE_QUESTIONS: [(u32, &str, &str, &str); 5] = [
    (1, "太阳 (Tàiyáng)", "Sun", "Moon"),
    (2, "月亮 (Yuèliàng)", "Moon", "Sun"),
    (3, "大 (Dà)", "Big", "Small"),
    (4, "小 (Xiǎo)", "Small", "Big"),
    (5, "书 (Shū)", "Book", "Pen"),
];

pub const HEROES: [Hero; 8] = [
    Hero {
        id: HeroId(1),
        name: "Fire Dragon",
        icon: "🐲",
    },
    Hero {
        id: HeroId(2),
        name: "Magic Panda",
        icon: "🐼",
    },
    Hero {
        id: HeroId(3),
        name: "Samurai Jack",
        icon: "🥷",
    },
    Hero {
        id: HeroId(4),
        name: "Golden Phoenix",
        icon: "🐦‍🔥",
    },
    Hero {
        id: HeroId(5),
        name: "Ice Tiger",
        icon: "🐯",
    },
    Hero {
        id: HeroId(6),
        name: "Iron Robot",
        icon: "🤖",
    },
    Hero {
        id: HeroId(7),
        name: "Space Pony",
        icon: "🦄",
    },
    Hero {
        id: HeroId(8),
        name: "Ninja Cat",
        icon: "🐱",
    },
];

/// Looks up a hero in the catalog.
pub fn hero(id: HeroId) -> Option<&'static Hero> {
    HEROES.iter().find(|hero| hero.id == id)
}

/// Builds the library a fresh session starts with.
pub fn default_library() -> ContentLibrary {
    let words = DEFAULT_WHEEL_WORDS.iter().map(|w| w.to_string()).collect();
    let pairs = DEFAULT_MATCH_PAIRS
        .iter()
        .map(|&(id, source, translation)| WordPair::new(ContentId(id), source, translation))
        .collect();
    let questions = DEFAULT_BATTLE_QUESTIONS
        .iter()
        .map(|&(id, prompt, correct, wrong)| {
            BattleQuestion::new(ContentId(id), prompt, correct, wrong)
        })
        .collect();

    ContentLibrary::new(words, pairs, questions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_library_is_complete() {
        let library = default_library();
        assert_eq!(library.wheel_words().len(), 8);
        assert_eq!(library.pairs().len(), 6);
        assert_eq!(library.questions().len(), 5);
        assert_eq!(library.pair(ContentId(5)).unwrap().translation, "Fire");
    }

    #[test]
    fn hero_ids_are_unique() {
        let mut ids: Vec<u8> = HEROES.iter().map(|hero| hero.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), HEROES.len());
        assert_eq!(hero(HeroId(2)).map(|h| h.name), Some("Magic Panda"));
        assert!(hero(HeroId(42)).is_none());
    }
}
