//! Session worker that owns the screen, the content library and the active
//! game.
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies
//! them to the game-core engines, and publishes events to the EventBus.
//! Timer firings arrive on a second channel so that dropping every handle
//! still stops the worker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{
    BattleError, BattlePhase, BattleState, Column, ContentEdit, ContentId, ContentLibrary,
    GameConfig, GameError, Hero, HeroId, MatchingBoard, RandomSource, WheelState,
};

use super::scheduler::Scheduler;
use crate::api::Result;
use crate::events::{ContentEvent, Event, EventBus, GameEvent, SessionEvent};
use crate::session::{ActiveGame, Screen, SessionError, SessionSnapshot, TimerKind};

type Reply = oneshot::Sender<Result<()>>;

/// Commands that can be sent to the session worker
pub enum Command {
    /// Switch screens, tearing down the current game.
    Navigate { screen: Screen, reply: Reply },
    /// Spin the wheel.
    Spin { reply: Reply },
    /// Select a card on the matching board.
    SelectCard {
        column: Column,
        pair_id: ContentId,
        reply: Reply,
    },
    /// Reshuffle the matching board.
    PlayAgain { reply: Reply },
    ToggleHero { hero: HeroId, reply: Reply },
    StartFight { reply: Reply },
    Answer { option: usize, reply: Reply },
    /// Return the battle to hero selection.
    NewBattle { reply: Reply },
    /// Apply a Teacher Room edit.
    Edit { edit: ContentEdit, reply: Reply },
    /// Query the current session (read-only).
    QuerySnapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
    /// Sent by a scheduled timer task.
    TimerFired { ticket: u64 },
}

/// Background task that processes session commands one at a time.
pub struct SessionWorker {
    config: GameConfig,
    library: Arc<ContentLibrary>,
    roster: Vec<Hero>,
    screen: Screen,
    game: ActiveGame,
    rng: Box<dyn RandomSource>,
    scheduler: Scheduler,
    command_rx: mpsc::Receiver<Command>,
    timer_rx: mpsc::UnboundedReceiver<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    /// Creates a new session worker on the dashboard.
    pub fn new(
        config: GameConfig,
        library: Arc<ContentLibrary>,
        roster: Vec<Hero>,
        rng: Box<dyn RandomSource>,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();

        info!(
            wheel_words = library.wheel_words().len(),
            pairs = library.pairs().len(),
            questions = library.questions().len(),
            heroes = roster.len(),
            "SessionWorker initialized"
        );

        Self {
            config,
            library,
            roster,
            screen: Screen::Dashboard,
            game: ActiveGame::Idle,
            rng,
            scheduler: Scheduler::new(timer_tx),
            command_rx,
            timer_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every command sender is gone.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                Some(cmd) = self.timer_rx.recv() => self.handle_command(cmd),
            }
        }
        self.scheduler.cancel();
        debug!(target: "runtime::worker", "SessionWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Navigate { screen, reply } => {
                let result = self.navigate(screen);
                self.reply("Navigate", reply, result);
            }
            Command::Spin { reply } => {
                let result = self.spin();
                self.reply("Spin", reply, result);
            }
            Command::SelectCard {
                column,
                pair_id,
                reply,
            } => {
                let result = self.select_card(column, pair_id);
                self.reply("SelectCard", reply, result);
            }
            Command::PlayAgain { reply } => {
                let result = self.play_again();
                self.reply("PlayAgain", reply, result);
            }
            Command::ToggleHero { hero, reply } => {
                let result = self.toggle_hero(hero);
                self.reply("ToggleHero", reply, result);
            }
            Command::StartFight { reply } => {
                let result = self.start_fight();
                self.reply("StartFight", reply, result);
            }
            Command::Answer { option, reply } => {
                let result = self.answer(option);
                self.reply("Answer", reply, result);
            }
            Command::NewBattle { reply } => {
                let result = self.new_battle();
                self.reply("NewBattle", reply, result);
            }
            Command::Edit { edit, reply } => {
                let result = self.edit(&edit);
                self.reply("Edit", reply, result);
            }
            Command::QuerySnapshot { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    debug!("QuerySnapshot reply channel closed (caller dropped)");
                }
            }
            Command::TimerFired { ticket } => self.handle_timer(ticket),
        }
    }

    /// Logs rejections and forwards the result to the caller.
    fn reply(
        &self,
        command: &'static str,
        reply: Reply,
        result: std::result::Result<(), SessionError>,
    ) {
        if let Err(err) = &result {
            debug!(
                target: "runtime::worker",
                command,
                code = err.error_code(),
                severity = err.severity().as_str(),
                screen = %self.screen,
                "Command rejected: {err}"
            );
        }
        if reply.send(result.map_err(Into::into)).is_err() {
            debug!("{command} reply channel closed (caller dropped)");
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            screen: self.screen,
            library: Arc::clone(&self.library),
            game: self.game.clone(),
            pending_timer: self.scheduler.pending(),
        }
    }

    fn publish_game(&self, event: GameEvent) {
        self.event_bus.publish(Event::Game(event));
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    fn navigate(&mut self, screen: Screen) -> std::result::Result<(), SessionError> {
        let game = self.start_game(screen)?;

        if let Some(kind) = self.scheduler.cancel() {
            debug!(target: "runtime::worker", timer = %kind, "Cancelled pending timer");
        }
        let from = self.screen;
        self.screen = screen;
        self.game = game;

        info!(target: "runtime::worker", %from, to = %screen, "Screen changed");
        self.event_bus
            .publish(Event::Session(SessionEvent::ScreenChanged { from, to: screen }));
        Ok(())
    }

    /// Builds a fresh game for `screen` from the current library.
    fn start_game(&mut self, screen: Screen) -> std::result::Result<ActiveGame, SessionError> {
        let game = match screen {
            Screen::Dashboard | Screen::TeacherRoom => ActiveGame::Idle,
            Screen::Wheel => ActiveGame::Wheel(WheelState::new(
                self.library.wheel_words().to_vec(),
                &self.config.wheel,
            )?),
            Screen::Matching => ActiveGame::Matching(MatchingBoard::new(
                self.library.pairs().to_vec(),
                self.rng.as_mut(),
            )?),
            Screen::Battle => {
                if self.library.questions().is_empty() {
                    return Err(BattleError::NoQuestions.into());
                }
                ActiveGame::Battle(BattleState::new(
                    self.roster.clone(),
                    self.library.questions().to_vec(),
                    self.config.battle.clone(),
                ))
            }
        };
        Ok(game)
    }

    // ------------------------------------------------------------------
    // Wheel
    // ------------------------------------------------------------------

    fn spin(&mut self) -> std::result::Result<(), SessionError> {
        let actual = self.screen;
        let ActiveGame::Wheel(wheel) = &mut self.game else {
            return Err(not_active(Screen::Wheel, actual));
        };
        let plan = wheel.spin(&self.config.wheel, self.rng.as_mut())?;

        debug!(
            target: "runtime::worker",
            laps = plan.laps,
            extra = plan.extra_degrees,
            rotation = plan.target_rotation,
            "Wheel spinning"
        );
        self.scheduler.schedule(TimerKind::WheelLanding, plan.duration);
        self.publish_game(GameEvent::WheelSpun { plan });
        Ok(())
    }

    fn land_wheel(&mut self) {
        let ActiveGame::Wheel(wheel) = &mut self.game else {
            return;
        };
        let index = wheel.index_under_pointer();
        if let Some(word) = wheel.land().map(str::to_string) {
            info!(target: "runtime::worker", index, %word, "Wheel landed");
            self.publish_game(GameEvent::WheelLanded { index, word });
        }
    }

    // ------------------------------------------------------------------
    // Matching
    // ------------------------------------------------------------------

    fn select_card(
        &mut self,
        column: Column,
        pair_id: ContentId,
    ) -> std::result::Result<(), SessionError> {
        let actual = self.screen;
        let ActiveGame::Matching(board) = &mut self.game else {
            return Err(not_active(Screen::Matching, actual));
        };
        let outcome = board.select(column, pair_id)?;

        self.publish_game(GameEvent::CardSelected {
            column,
            pair_id,
            outcome,
        });
        Ok(())
    }

    fn play_again(&mut self) -> std::result::Result<(), SessionError> {
        let actual = self.screen;
        let ActiveGame::Matching(board) = &mut self.game else {
            return Err(not_active(Screen::Matching, actual));
        };
        board.play_again(self.rng.as_mut());

        self.publish_game(GameEvent::BoardReset);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Battle
    // ------------------------------------------------------------------

    fn battle_mut(&mut self) -> std::result::Result<&mut BattleState, SessionError> {
        let actual = self.screen;
        match &mut self.game {
            ActiveGame::Battle(battle) => Ok(battle),
            _ => Err(not_active(Screen::Battle, actual)),
        }
    }

    fn toggle_hero(&mut self, hero: HeroId) -> std::result::Result<(), SessionError> {
        let chosen = self.battle_mut()?.toggle_hero(hero)?;

        self.publish_game(GameEvent::HeroToggled { hero, chosen });
        Ok(())
    }

    fn start_fight(&mut self) -> std::result::Result<(), SessionError> {
        let actual = self.screen;
        let ActiveGame::Battle(battle) = &mut self.game else {
            return Err(not_active(Screen::Battle, actual));
        };
        let active_side = battle.start_fight(self.rng.as_mut())?.active_side;
        let total = battle.question_count();

        info!(target: "runtime::worker", questions = total, "Battle started");
        self.publish_game(GameEvent::RoundStarted {
            index: 0,
            total,
            active_side,
        });
        Ok(())
    }

    fn answer(&mut self, option: usize) -> std::result::Result<(), SessionError> {
        let delay = Duration::from_millis(self.config.battle.advance_delay_ms);
        let battle = self.battle_mut()?;
        let side = battle
            .round()
            .map(|round| round.active_side)
            .ok_or(BattleError::WrongPhase {
                expected: BattlePhase::Fighting,
                actual: battle.phase(),
            })?;
        let outcome = battle.answer(option)?;
        let scores = battle.scores();

        self.scheduler.schedule(TimerKind::BattleAdvance, delay);
        self.publish_game(GameEvent::AnswerGiven {
            side,
            outcome,
            scores,
        });
        Ok(())
    }

    fn advance_battle(&mut self) {
        let ActiveGame::Battle(battle) = &mut self.game else {
            return;
        };
        match battle.advance(self.rng.as_mut()) {
            Ok(BattlePhase::Finished) => {
                let scores = battle.scores();
                if let Some(outcome) = battle.outcome() {
                    info!(target: "runtime::worker", ?outcome, ?scores, "Battle finished");
                    self.publish_game(GameEvent::BattleFinished { outcome, scores });
                }
            }
            Ok(_) => {
                let index = battle.current_index();
                let total = battle.question_count();
                if let Some(active_side) = battle.round().map(|round| round.active_side) {
                    self.publish_game(GameEvent::RoundStarted {
                        index,
                        total,
                        active_side,
                    });
                }
            }
            Err(err) => {
                debug!(target: "runtime::worker", error = %err, "Battle advance skipped");
            }
        }
    }

    fn new_battle(&mut self) -> std::result::Result<(), SessionError> {
        self.battle_mut()?.new_battle();
        self.scheduler.cancel();

        self.publish_game(GameEvent::BattleReset);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Teacher Room
    // ------------------------------------------------------------------

    fn edit(&mut self, edit: &ContentEdit) -> std::result::Result<(), SessionError> {
        let library = Arc::new(edit.apply(&self.library)?);
        self.library = Arc::clone(&library);

        info!(
            target: "runtime::worker",
            edit = edit.as_str(),
            wheel_words = library.wheel_words().len(),
            pairs = library.pairs().len(),
            questions = library.questions().len(),
            "Content library updated"
        );
        self.event_bus
            .publish(Event::Content(ContentEvent::LibraryUpdated {
                edit: edit.as_str(),
                library,
            }));
        Ok(())
    }

    // ------------------------------------------------------------------
    // Timers
    // ------------------------------------------------------------------

    fn handle_timer(&mut self, ticket: u64) {
        match self.scheduler.fire(ticket) {
            Some(TimerKind::WheelLanding) => self.land_wheel(),
            Some(TimerKind::BattleAdvance) => self.advance_battle(),
            None => debug!(target: "runtime::worker", ticket, "Ignoring stale timer"),
        }
    }
}

fn not_active(expected: Screen, actual: Screen) -> SessionError {
    SessionError::GameNotActive { expected, actual }
}
