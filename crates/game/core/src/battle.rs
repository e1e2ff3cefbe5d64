//! Two-player hero battle.
//!
//! ```text
//! Selecting --start_fight--> Fighting --advance (last question)--> Finished
//!     ^                                                               |
//!     +--------------------------- new_battle ------------------------+
//! ```
//!
//! Each question goes to a randomly drawn side. An answer locks the round
//! until [`BattleState::advance`] is called; the runtime does that after
//! [`BattleConfig::advance_delay_ms`].

use arrayvec::ArrayVec;

use crate::config::{BattleConfig, GameConfig, MissPolicy};
use crate::content::{BattleQuestion, Hero, HeroId};
use crate::env::RandomSource;
use crate::error::{ErrorSeverity, GameError};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Side {
    #[strum(to_string = "Player 1")]
    One,
    #[strum(to_string = "Player 2")]
    Two,
}

impl Side {
    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum BattlePhase {
    Selecting,
    Fighting,
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Winner(Side),
    Draw,
}

/// Errors raised by battle inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error("hero {id} is not in the roster")]
    UnknownHero { id: HeroId },

    #[error("two heroes are already chosen")]
    SelectionFull,

    #[error("need {required} heroes to fight, have {selected}")]
    NotEnoughHeroes { selected: usize, required: usize },

    #[error("there are no battle questions")]
    NoQuestions,

    #[error("not allowed during {actual} phase (expected {expected})")]
    WrongPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },

    #[error("this question was already answered")]
    AlreadyAnswered,

    #[error("the current question has not been answered")]
    NotAnswered,

    #[error("option {index} does not exist")]
    InvalidOption { index: usize },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyAnswered => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHero { .. } => "BATTLE_UNKNOWN_HERO",
            Self::SelectionFull => "BATTLE_SELECTION_FULL",
            Self::NotEnoughHeroes { .. } => "BATTLE_NOT_ENOUGH_HEROES",
            Self::NoQuestions => "BATTLE_NO_QUESTIONS",
            Self::WrongPhase { .. } => "BATTLE_WRONG_PHASE",
            Self::AlreadyAnswered => "BATTLE_ALREADY_ANSWERED",
            Self::NotAnswered => "BATTLE_NOT_ANSWERED",
            Self::InvalidOption { .. } => "BATTLE_INVALID_OPTION",
        }
    }
}

/// Heroes chosen for the next fight, in pick order. The first pick plays
/// for [`Side::One`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroSelection {
    heroes: ArrayVec<HeroId, { GameConfig::HEROES_PER_BATTLE }>,
}

impl HeroSelection {
    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heroes.is_full()
    }

    pub fn as_slice(&self) -> &[HeroId] {
        &self.heroes
    }

    pub fn for_side(&self, side: Side) -> Option<HeroId> {
        self.heroes.get(side.index()).copied()
    }

    /// Adds `id`, or removes it if already chosen. Returns whether the hero
    /// is chosen afterwards.
    fn toggle(&mut self, id: HeroId) -> Result<bool, BattleError> {
        if let Some(pos) = self.heroes.iter().position(|chosen| *chosen == id) {
            self.heroes.remove(pos);
            return Ok(false);
        }
        self.heroes
            .try_push(id)
            .map_err(|_| BattleError::SelectionFull)?;
        Ok(true)
    }
}

/// The question currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    pub active_side: Side,
    /// Both answers in presentation order.
    pub options: [String; 2],
    correct_option: usize,
    pub last_outcome: Option<AnswerOutcome>,
}

impl Round {
    pub fn is_answered(&self) -> bool {
        self.last_outcome.is_some()
    }

    pub fn correct_option(&self) -> usize {
        self.correct_option
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattleState {
    roster: Vec<Hero>,
    questions: Vec<BattleQuestion>,
    config: BattleConfig,
    phase: BattlePhase,
    selection: HeroSelection,
    current_index: usize,
    scores: [u32; 2],
    round: Option<Round>,
}

impl BattleState {
    /// Opens the hero selection over `roster` with the given questions.
    pub fn new(roster: Vec<Hero>, questions: Vec<BattleQuestion>, config: BattleConfig) -> Self {
        Self {
            roster,
            questions,
            config,
            phase: BattlePhase::Selecting,
            selection: HeroSelection::default(),
            current_index: 0,
            scores: [0; 2],
            round: None,
        }
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn roster(&self) -> &[Hero] {
        &self.roster
    }

    pub fn selection(&self) -> &HeroSelection {
        &self.selection
    }

    /// Hero playing for `side`, once chosen.
    pub fn hero(&self, side: Side) -> Option<&Hero> {
        let id = self.selection.for_side(side)?;
        self.roster.iter().find(|hero| hero.id == id)
    }

    pub fn questions(&self) -> &[BattleQuestion] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&BattleQuestion> {
        match self.phase {
            BattlePhase::Fighting => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    fn expect_phase(&self, expected: BattlePhase) -> Result<(), BattleError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(BattleError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Chooses or releases a hero. Returns whether the hero is chosen
    /// afterwards.
    pub fn toggle_hero(&mut self, id: HeroId) -> Result<bool, BattleError> {
        self.expect_phase(BattlePhase::Selecting)?;
        if !self.roster.iter().any(|hero| hero.id == id) {
            return Err(BattleError::UnknownHero { id });
        }
        self.selection.toggle(id)
    }

    /// Starts the fight and deals the first question.
    ///
    /// # Errors
    ///
    /// Rejected unless exactly two heroes are chosen and at least one
    /// question exists. The phase stays `Selecting` on rejection.
    pub fn start_fight(&mut self, rng: &mut dyn RandomSource) -> Result<&Round, BattleError> {
        self.expect_phase(BattlePhase::Selecting)?;
        if !self.selection.is_full() {
            return Err(BattleError::NotEnoughHeroes {
                selected: self.selection.len(),
                required: GameConfig::HEROES_PER_BATTLE,
            });
        }
        if self.questions.is_empty() {
            return Err(BattleError::NoQuestions);
        }

        self.phase = BattlePhase::Fighting;
        self.current_index = 0;
        self.scores = [0; 2];
        Ok(self.deal_round(rng))
    }

    fn deal_round(&mut self, rng: &mut dyn RandomSource) -> &Round {
        let question = &self.questions[self.current_index];
        let active_side = if rng.coin() { Side::Two } else { Side::One };
        let correct_first = !rng.coin();

        let (options, correct_option) = if correct_first {
            (
                [question.correct_answer.clone(), question.wrong_answer.clone()],
                0,
            )
        } else {
            (
                [question.wrong_answer.clone(), question.correct_answer.clone()],
                1,
            )
        };

        self.round.insert(Round {
            active_side,
            options,
            correct_option,
            last_outcome: None,
        })
    }

    /// Answers the current question for the active side.
    ///
    /// A correct answer scores for the active side. A wrong one applies the
    /// configured [`MissPolicy`]. Either way the round locks until
    /// [`advance`](Self::advance).
    pub fn answer(&mut self, option_index: usize) -> Result<AnswerOutcome, BattleError> {
        let miss_policy = self.config.miss_policy;
        let phase = self.phase;
        // A round is dealt for exactly as long as the fight lasts.
        let Some(round) = self
            .round
            .as_mut()
            .filter(|_| phase == BattlePhase::Fighting)
        else {
            return Err(BattleError::WrongPhase {
                expected: BattlePhase::Fighting,
                actual: phase,
            });
        };
        if round.is_answered() {
            return Err(BattleError::AlreadyAnswered);
        }
        if option_index >= round.options.len() {
            return Err(BattleError::InvalidOption {
                index: option_index,
            });
        }

        let outcome = if option_index == round.correct_option {
            self.scores[round.active_side.index()] += 1;
            AnswerOutcome::Correct
        } else {
            if miss_policy == MissPolicy::OpponentScores {
                self.scores[round.active_side.opponent().index()] += 1;
            }
            AnswerOutcome::Wrong
        };
        round.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// Moves past an answered question: deals the next one, or finishes the
    /// battle after the last question.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> Result<BattlePhase, BattleError> {
        self.expect_phase(BattlePhase::Fighting)?;
        if !self.round.as_ref().is_some_and(Round::is_answered) {
            return Err(BattleError::NotAnswered);
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.deal_round(rng);
        } else {
            self.phase = BattlePhase::Finished;
            self.round = None;
        }
        Ok(self.phase)
    }

    /// Result of a finished battle; `None` before the last question is
    /// settled.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if self.phase != BattlePhase::Finished {
            return None;
        }
        let [one, two] = self.scores;
        Some(match one.cmp(&two) {
            core::cmp::Ordering::Greater => BattleOutcome::Winner(Side::One),
            core::cmp::Ordering::Less => BattleOutcome::Winner(Side::Two),
            core::cmp::Ordering::Equal => BattleOutcome::Draw,
        })
    }

    /// Back to hero selection with nothing chosen and zero scores.
    pub fn new_battle(&mut self) {
        self.phase = BattlePhase::Selecting;
        self.selection = HeroSelection::default();
        self.current_index = 0;
        self.scores = [0; 2];
        self.round = None;
    }
}
