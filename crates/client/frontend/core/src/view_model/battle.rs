use game_core::{AnswerOutcome, BattleOutcome, BattlePhase, BattleState, Hero, Side};

pub const SELECT_TITLE: &str = "Choose 2 Heroes! ⚔️";
pub const FIGHT_LABEL: &str = "FIGHT!";
pub const VICTORY_TITLE: &str = "VICTORY! 🎉";
pub const DRAW_TITLE: &str = "DRAW! 🤝";
pub const YOUR_TURN: &str = "🔥 YOUR TURN!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroCard {
    pub hero: Hero,
    pub chosen: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FighterView {
    pub side: Side,
    pub hero: Option<Hero>,
    pub score: u32,
    /// Score over the question count, for the score bar.
    pub score_ratio: f64,
    pub active: bool,
}

impl FighterView {
    pub fn name(&self) -> String {
        self.hero.map_or_else(
            || self.side.to_string(),
            |hero| format!("{} {}", hero.icon, hero.name),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    /// "Question i of N", counted from one.
    pub label: String,
    pub prompt: String,
    pub options: [String; 2],
    pub last_outcome: Option<AnswerOutcome>,
}

impl QuestionView {
    /// Answered rounds wait for the advance timer.
    pub fn is_locked(&self) -> bool {
        self.last_outcome.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BattleView {
    Selecting {
        heroes: Vec<HeroCard>,
        can_fight: bool,
    },
    Fighting {
        fighters: [FighterView; 2],
        question: Option<QuestionView>,
    },
    Finished {
        fighters: [FighterView; 2],
        outcome: BattleOutcome,
        headline: String,
    },
}

impl BattleView {
    pub fn from_state(state: &BattleState) -> Self {
        match state.phase() {
            BattlePhase::Selecting => Self::Selecting {
                heroes: state
                    .roster()
                    .iter()
                    .map(|hero| HeroCard {
                        hero: *hero,
                        chosen: state.selection().contains(hero.id),
                    })
                    .collect(),
                can_fight: state.selection().is_full(),
            },
            BattlePhase::Fighting => Self::Fighting {
                fighters: fighters(state),
                question: question(state),
            },
            BattlePhase::Finished => {
                let fighters = fighters(state);
                let outcome = state.outcome().unwrap_or(BattleOutcome::Draw);
                let headline = match outcome {
                    BattleOutcome::Winner(side) => format!("{} Wins!", fighters[side.index()].name()),
                    BattleOutcome::Draw => "Both heroes are champions!".to_string(),
                };
                Self::Finished {
                    fighters,
                    outcome,
                    headline,
                }
            }
        }
    }
}

fn fighters(state: &BattleState) -> [FighterView; 2] {
    let active_side = state.round().map(|round| round.active_side);
    let total = state.question_count().max(1) as f64;
    [Side::One, Side::Two].map(|side| {
        let score = state.score(side);
        FighterView {
            side,
            hero: state.hero(side).copied(),
            score,
            score_ratio: (f64::from(score) / total).min(1.0),
            active: active_side == Some(side),
        }
    })
}

fn question(state: &BattleState) -> Option<QuestionView> {
    let current = state.current_question()?;
    let round = state.round()?;
    Some(QuestionView {
        label: format!(
            "Question {} of {}",
            state.current_index() + 1,
            state.question_count()
        ),
        prompt: current.prompt.clone(),
        options: round.options.clone(),
        last_outcome: round.last_outcome,
    })
}

#[cfg(test)]
mod tests {
    use game_core::{
        BattleConfig, BattleQuestion, ContentId, HeroId, MissPolicy, ScriptedRng,
    };

    use super::*;

    fn roster() -> Vec<Hero> {
        vec![
            Hero {
                id: HeroId(1),
                name: "Fire Dragon",
                icon: "🐉",
            },
            Hero {
                id: HeroId(2),
                name: "Magic Panda",
                icon: "🐼",
            },
            Hero {
                id: HeroId(3),
                name: "Ninja Cat",
                icon: "🐱",
            },
        ]
    }

    fn battle(questions: usize) -> BattleState {
        let questions = (1..=questions as u32)
            .map(|id| BattleQuestion::new(ContentId(id), "大", "Big", "Small"))
            .collect();
        BattleState::new(roster(), questions, BattleConfig::default())
    }

    #[test]
    fn selection_marks_chosen_heroes() {
        let mut state = battle(1);
        state.toggle_hero(HeroId(2)).unwrap();

        let BattleView::Selecting { heroes, can_fight } = BattleView::from_state(&state) else {
            panic!("expected selection view");
        };
        assert_eq!(heroes.len(), 3);
        assert!(heroes[1].chosen);
        assert!(!heroes[0].chosen);
        assert!(!can_fight);
    }

    #[test]
    fn fighting_shows_question_and_active_side() {
        let mut state = battle(4);
        state.toggle_hero(HeroId(1)).unwrap();
        state.toggle_hero(HeroId(3)).unwrap();
        // Side one, correct answer first.
        let mut rng = ScriptedRng::new(vec![0]);
        state.start_fight(&mut rng).unwrap();
        state.answer(0).unwrap();

        let BattleView::Fighting { fighters, question } = BattleView::from_state(&state) else {
            panic!("expected fight view");
        };
        let question = question.unwrap();
        assert_eq!(question.label, "Question 1 of 4");
        assert_eq!(question.prompt, "大");
        assert!(question.is_locked());
        assert!(fighters[0].active);
        assert!(!fighters[1].active);
        assert_eq!(fighters[0].score, 1);
        assert!((fighters[0].score_ratio - 0.25).abs() < f64::EPSILON);
        assert_eq!(fighters[1].name(), "🐱 Ninja Cat");
    }

    #[test]
    fn finish_names_the_winner_or_a_draw() {
        let config = BattleConfig {
            miss_policy: MissPolicy::NoPenalty,
            ..BattleConfig::default()
        };
        let mut state = BattleState::new(
            roster(),
            vec![BattleQuestion::new(ContentId(1), "大", "Big", "Small")],
            config,
        );
        state.toggle_hero(HeroId(1)).unwrap();
        state.toggle_hero(HeroId(2)).unwrap();
        let mut rng = ScriptedRng::new(vec![0]);
        state.start_fight(&mut rng).unwrap();

        // A miss with no penalty leaves the scores level.
        state.answer(1).unwrap();
        state.advance(&mut rng).unwrap();

        let BattleView::Finished {
            outcome, headline, ..
        } = BattleView::from_state(&state)
        else {
            panic!("expected finish view");
        };
        assert_eq!(outcome, BattleOutcome::Draw);
        assert_eq!(headline, "Both heroes are champions!");

        state.new_battle();
        state.toggle_hero(HeroId(1)).unwrap();
        state.toggle_hero(HeroId(2)).unwrap();
        state.start_fight(&mut rng).unwrap();
        state.answer(0).unwrap();
        state.advance(&mut rng).unwrap();

        let BattleView::Finished { headline, .. } = BattleView::from_state(&state) else {
            panic!("expected finish view");
        };
        assert_eq!(headline, "🐉 Fire Dragon Wins!");
    }
}
