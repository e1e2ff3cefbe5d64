use game_core::{ContentEdit, ContentId, ContentLibrary};

pub const TITLE: &str = "Teacher Room 🍎";

/// The three editable collections, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum TeacherSection {
    #[default]
    WheelWords,
    Pairs,
    Questions,
}

impl TeacherSection {
    pub fn title(self) -> &'static str {
        match self {
            Self::WheelWords => "🎡 Magic Wheel Words",
            Self::Pairs => "🧩 Matching Pairs",
            Self::Questions => "⚔️ Battle Questions",
        }
    }

    /// Placeholder for each input of the section's add form.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::WheelWords => &["e.g. 苹果"],
            Self::Pairs => &["Chinese Word", "Translation"],
            Self::Questions => &["Question word", "Correct", "Wrong"],
        }
    }

    pub fn add_label(self) -> &'static str {
        match self {
            Self::Questions => "Add Battle Task",
            _ => "Add",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::WheelWords => Self::Pairs,
            Self::Pairs => Self::Questions,
            Self::Questions => Self::WheelWords,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::WheelWords => Self::Questions,
            Self::Pairs => Self::WheelWords,
            Self::Questions => Self::Pairs,
        }
    }

    /// Builds the add edit from form values in [`fields`](Self::fields)
    /// order. Missing values count as empty and are rejected by the library.
    pub fn add_edit(self, values: &[String]) -> ContentEdit {
        let field = |index: usize| values.get(index).cloned().unwrap_or_default();
        match self {
            Self::WheelWords => ContentEdit::AddWheelWord { text: field(0) },
            Self::Pairs => ContentEdit::AddPair {
                source_text: field(0),
                translation: field(1),
            },
            Self::Questions => ContentEdit::AddQuestion {
                prompt: field(0),
                correct_answer: field(1),
                wrong_answer: field(2),
            },
        }
    }
}

/// Identifies a row for deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKey {
    /// Wheel words have no id; they are removed by position.
    Word(usize),
    Pair(ContentId),
    Question(ContentId),
}

impl RowKey {
    pub fn removal(self) -> ContentEdit {
        match self {
            Self::Word(index) => ContentEdit::RemoveWheelWord { index },
            Self::Pair(id) => ContentEdit::RemovePair { id },
            Self::Question(id) => ContentEdit::RemoveQuestion { id },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeacherRow {
    pub key: RowKey,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub section: TeacherSection,
    pub rows: Vec<TeacherRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeacherView {
    pub sections: [SectionView; 3],
}

impl TeacherView {
    pub fn from_library(library: &ContentLibrary) -> Self {
        let words = library
            .wheel_words()
            .iter()
            .enumerate()
            .map(|(index, word)| TeacherRow {
                key: RowKey::Word(index),
                text: word.clone(),
            })
            .collect();
        let pairs = library
            .pairs()
            .iter()
            .map(|pair| TeacherRow {
                key: RowKey::Pair(pair.id),
                text: format!("{} → {}", pair.source_text, pair.translation),
            })
            .collect();
        let questions = library
            .questions()
            .iter()
            .map(|question| TeacherRow {
                key: RowKey::Question(question.id),
                text: format!(
                    "{}  ✓ {}  ✗ {}",
                    question.prompt, question.correct_answer, question.wrong_answer
                ),
            })
            .collect();

        Self {
            sections: [
                SectionView {
                    section: TeacherSection::WheelWords,
                    rows: words,
                },
                SectionView {
                    section: TeacherSection::Pairs,
                    rows: pairs,
                },
                SectionView {
                    section: TeacherSection::Questions,
                    rows: questions,
                },
            ],
        }
    }

    pub fn section(&self, section: TeacherSection) -> &SectionView {
        match section {
            TeacherSection::WheelWords => &self.sections[0],
            TeacherSection::Pairs => &self.sections[1],
            TeacherSection::Questions => &self.sections[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{BattleQuestion, EditError, WordPair};

    use super::*;

    fn library() -> ContentLibrary {
        ContentLibrary::new(
            vec!["猫".to_string(), "狗".to_string()],
            vec![WordPair::new(ContentId(4), "火", "Fire")],
            vec![BattleQuestion::new(ContentId(2), "大", "Big", "Small")],
        )
    }

    #[test]
    fn rows_remove_what_they_show() {
        let library = library();
        let view = TeacherView::from_library(&library);

        let dog = &view.section(TeacherSection::WheelWords).rows[1];
        assert_eq!(dog.text, "狗");
        let updated = dog.key.removal().apply(&library).unwrap();
        assert_eq!(updated.wheel_words(), ["猫".to_string()]);

        let fire = &view.section(TeacherSection::Pairs).rows[0];
        assert_eq!(fire.text, "火 → Fire");
        let updated = fire.key.removal().apply(&library).unwrap();
        assert!(updated.pairs().is_empty());

        let big = &view.section(TeacherSection::Questions).rows[0];
        assert_eq!(big.key, RowKey::Question(ContentId(2)));
    }

    #[test]
    fn add_forms_build_matching_edits() {
        let library = library();
        let values = vec!["  水 ".to_string(), "Water".to_string()];
        let updated = TeacherSection::Pairs
            .add_edit(&values)
            .apply(&library)
            .unwrap();
        let added = updated.pairs().last().unwrap();
        assert_eq!(added.source_text, "水");
        assert_eq!(added.id, ContentId(5));

        // The question form is missing its decoy.
        let partial = TeacherSection::Questions.add_edit(&values);
        assert!(matches!(
            partial.apply(&library),
            Err(EditError::EmptyField { .. })
        ));
    }

    #[test]
    fn sections_cycle_both_ways() {
        use strum::IntoEnumIterator;

        for (position, section) in TeacherSection::iter().enumerate() {
            assert_eq!(section.next().prev(), section);
            assert_eq!(section.fields().len(), position + 1);
        }
    }
}
