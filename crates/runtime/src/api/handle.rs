//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! driving the session or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Column, ContentEdit, ContentId, HeroId};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::session::{Screen, SessionSnapshot};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Sends a command built around a fresh reply channel and awaits the
    /// worker's answer.
    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Switch to `screen`. Entering a game screen starts a fresh game from
    /// the current library; an empty list rejects the switch.
    pub async fn navigate(&self, screen: Screen) -> Result<()> {
        self.request(|reply| Command::Navigate { screen, reply })
            .await?
    }

    /// Spin the wheel. Rejected while it is still spinning.
    pub async fn spin(&self) -> Result<()> {
        self.request(|reply| Command::Spin { reply }).await?
    }

    /// Select the card for `pair_id` in `column`.
    pub async fn select_card(&self, column: Column, pair_id: ContentId) -> Result<()> {
        self.request(|reply| Command::SelectCard {
            column,
            pair_id,
            reply,
        })
        .await?
    }

    /// Reshuffle the matching board.
    pub async fn play_again(&self) -> Result<()> {
        self.request(|reply| Command::PlayAgain { reply }).await?
    }

    pub async fn toggle_hero(&self, hero: HeroId) -> Result<()> {
        self.request(|reply| Command::ToggleHero { hero, reply })
            .await?
    }

    pub async fn start_fight(&self) -> Result<()> {
        self.request(|reply| Command::StartFight { reply }).await?
    }

    /// Answer the current battle question with the option at `option`.
    pub async fn answer(&self, option: usize) -> Result<()> {
        self.request(|reply| Command::Answer { option, reply })
            .await?
    }

    pub async fn new_battle(&self) -> Result<()> {
        self.request(|reply| Command::NewBattle { reply }).await?
    }

    /// Apply a Teacher Room edit to the session library.
    pub async fn edit(&self, edit: ContentEdit) -> Result<()> {
        self.request(|reply| Command::Edit { edit, reply }).await?
    }

    /// Query the current session (read-only snapshot)
    pub async fn query_snapshot(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QuerySnapshot { reply }).await
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Session` - Screen changes
    /// - `Topic::Game` - Spins, matches, answers and results
    /// - `Topic::Content` - Teacher Room edits
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut game_rx = handle.subscribe(Topic::Game);
    /// while let Ok(event) = game_rx.recv().await {
    ///     // Handle game events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
