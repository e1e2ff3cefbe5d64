//! Vocabulary content shared by the mini-games and edited in the Teacher Room.
//!
//! [`ContentLibrary`] is immutable: every edit returns a new library and the
//! caller swaps it in wholesale. Games copy what they need when they start,
//! so an edit never reaches into a running game.

use std::fmt;

use crate::error::{ErrorSeverity, GameError};

/// Identifier of a word pair or battle question, unique within its list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentId(pub u32);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A term in the language being learned and its translation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordPair {
    pub id: ContentId,
    pub source_text: String,
    pub translation: String,
}

impl WordPair {
    pub fn new(id: ContentId, source_text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            source_text: source_text.into(),
            translation: translation.into(),
        }
    }
}

/// A two-option battle question.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleQuestion {
    pub id: ContentId,
    pub prompt: String,
    pub correct_answer: String,
    pub wrong_answer: String,
}

impl BattleQuestion {
    pub fn new(
        id: ContentId,
        prompt: impl Into<String>,
        correct_answer: impl Into<String>,
        wrong_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            correct_answer: correct_answer.into(),
            wrong_answer: wrong_answer.into(),
        }
    }
}

/// Identifier of a hero in the static catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(pub u8);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// Static catalog entry for a battle hero. Never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub id: HeroId,
    pub name: &'static str,
    pub icon: &'static str,
}

/// Errors raised by Teacher Room edits.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("no wheel word at position {index}")]
    WordNotFound { index: usize },

    #[error("no word pair with id {id}")]
    PairNotFound { id: ContentId },

    #[error("no battle question with id {id}")]
    QuestionNotFound { id: ContentId },

    #[error("no free id left for {list}")]
    IdsExhausted { list: &'static str },
}

impl GameError for EditError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "EDIT_EMPTY_FIELD",
            Self::WordNotFound { .. } => "EDIT_WORD_NOT_FOUND",
            Self::PairNotFound { .. } => "EDIT_PAIR_NOT_FOUND",
            Self::QuestionNotFound { .. } => "EDIT_QUESTION_NOT_FOUND",
            Self::IdsExhausted { .. } => "EDIT_IDS_EXHAUSTED",
        }
    }
}

/// Session-wide vocabulary: wheel words, matching pairs, battle questions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentLibrary {
    wheel_words: Vec<String>,
    pairs: Vec<WordPair>,
    questions: Vec<BattleQuestion>,
}

impl ContentLibrary {
    /// Builds a library from raw lists.
    ///
    /// Entries whose id already appeared earlier in the same list are dropped,
    /// so ids are unique within each list.
    pub fn new(
        wheel_words: Vec<String>,
        pairs: Vec<WordPair>,
        questions: Vec<BattleQuestion>,
    ) -> Self {
        Self {
            wheel_words,
            pairs: dedup_by_id(pairs, |pair| pair.id),
            questions: dedup_by_id(questions, |question| question.id),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn wheel_words(&self) -> &[String] {
        &self.wheel_words
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn questions(&self) -> &[BattleQuestion] {
        &self.questions
    }

    pub fn pair(&self, id: ContentId) -> Option<&WordPair> {
        self.pairs.iter().find(|pair| pair.id == id)
    }

    pub fn question(&self, id: ContentId) -> Option<&BattleQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Appends a wheel word.
    pub fn with_wheel_word(&self, text: &str) -> Result<Self, EditError> {
        let word = required(text, "wheel word")?;
        let mut next = self.clone();
        next.wheel_words.push(word);
        Ok(next)
    }

    /// Removes the wheel word at `index`.
    pub fn without_wheel_word(&self, index: usize) -> Result<Self, EditError> {
        if index >= self.wheel_words.len() {
            return Err(EditError::WordNotFound { index });
        }
        let mut next = self.clone();
        next.wheel_words.remove(index);
        Ok(next)
    }

    /// Appends a word pair under a fresh id.
    pub fn with_pair(&self, source_text: &str, translation: &str) -> Result<Self, EditError> {
        let source_text = required(source_text, "source text")?;
        let translation = required(translation, "translation")?;
        let id = next_id(self.pairs.iter().map(|pair| pair.id), "word pairs")?;

        let mut next = self.clone();
        next.pairs.push(WordPair {
            id,
            source_text,
            translation,
        });
        Ok(next)
    }

    /// Removes the word pair with `id`.
    pub fn without_pair(&self, id: ContentId) -> Result<Self, EditError> {
        if self.pair(id).is_none() {
            return Err(EditError::PairNotFound { id });
        }
        let mut next = self.clone();
        next.pairs.retain(|pair| pair.id != id);
        Ok(next)
    }

    /// Appends a battle question under a fresh id.
    pub fn with_question(
        &self,
        prompt: &str,
        correct_answer: &str,
        wrong_answer: &str,
    ) -> Result<Self, EditError> {
        let prompt = required(prompt, "question")?;
        let correct_answer = required(correct_answer, "correct answer")?;
        let wrong_answer = required(wrong_answer, "wrong answer")?;
        let id = next_id(
            self.questions.iter().map(|question| question.id),
            "battle questions",
        )?;

        let mut next = self.clone();
        next.questions.push(BattleQuestion {
            id,
            prompt,
            correct_answer,
            wrong_answer,
        });
        Ok(next)
    }

    /// Removes the battle question with `id`.
    pub fn without_question(&self, id: ContentId) -> Result<Self, EditError> {
        if self.question(id).is_none() {
            return Err(EditError::QuestionNotFound { id });
        }
        let mut next = self.clone();
        next.questions.retain(|question| question.id != id);
        Ok(next)
    }
}

/// A single Teacher Room edit, applied with [`ContentEdit::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentEdit {
    AddWheelWord {
        text: String,
    },
    RemoveWheelWord {
        index: usize,
    },
    AddPair {
        source_text: String,
        translation: String,
    },
    RemovePair {
        id: ContentId,
    },
    AddQuestion {
        prompt: String,
        correct_answer: String,
        wrong_answer: String,
    },
    RemoveQuestion {
        id: ContentId,
    },
}

impl ContentEdit {
    /// Returns the library with this edit applied. `library` is not touched.
    pub fn apply(&self, library: &ContentLibrary) -> Result<ContentLibrary, EditError> {
        match self {
            Self::AddWheelWord { text } => library.with_wheel_word(text),
            Self::RemoveWheelWord { index } => library.without_wheel_word(*index),
            Self::AddPair {
                source_text,
                translation,
            } => library.with_pair(source_text, translation),
            Self::RemovePair { id } => library.without_pair(*id),
            Self::AddQuestion {
                prompt,
                correct_answer,
                wrong_answer,
            } => library.with_question(prompt, correct_answer, wrong_answer),
            Self::RemoveQuestion { id } => library.without_question(*id),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AddWheelWord { .. } => "add_wheel_word",
            Self::RemoveWheelWord { .. } => "remove_wheel_word",
            Self::AddPair { .. } => "add_pair",
            Self::RemovePair { .. } => "remove_pair",
            Self::AddQuestion { .. } => "add_question",
            Self::RemoveQuestion { .. } => "remove_question",
        }
    }
}

fn required(text: &str, field: &'static str) -> Result<String, EditError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(EditError::EmptyField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

/// One past the largest id, or the smallest free id once the largest one is
/// `u32::MAX`.
fn next_id(
    ids: impl Iterator<Item = ContentId>,
    list: &'static str,
) -> Result<ContentId, EditError> {
    let used: std::collections::HashSet<u32> = ids.map(|id| id.0).collect();
    let max = used.iter().copied().max().unwrap_or(0);
    max.checked_add(1)
        .or_else(|| (1..=u32::MAX).find(|candidate| !used.contains(candidate)))
        .map(ContentId)
        .ok_or(EditError::IdsExhausted { list })
}

fn dedup_by_id<T>(items: Vec<T>, id_of: impl Fn(&T) -> ContentId) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(id_of(item)))
        .collect()
}
