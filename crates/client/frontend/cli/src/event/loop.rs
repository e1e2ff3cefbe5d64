//! Event loop orchestrating runtime events, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Runtime event consumption and snapshot refreshes
//! - Keyboard input processing (session commands and UI navigation)
//! - Rendering, including the client-side wheel animation

use std::collections::HashMap;
use std::time::Instant;

use anyhow::{Context, Result};
use runtime::{Event as RuntimeEvent, GameEvent, RuntimeHandle, SessionSnapshot, Topic};
use tokio::{
    sync::{broadcast, broadcast::error::RecvError},
    time::{self, Duration},
};

use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};
use client_frontend_core::{
    EventConsumer,
    view_model::{ScreenView, SpinAnimation, ViewModel},
};

/// Event loop owning the UI state and coordinating updates.
///
/// This is the main orchestrator that:
/// - Caches the latest session snapshot and derives the ViewModel from it
/// - Eases the wheel between spin start and landing
/// - Handles user input and forwards commands to the runtime
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) handle: RuntimeHandle,
    pub(crate) subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
    pub(crate) input: InputHandler,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) snapshot: SessionSnapshot,
    pub(crate) view_model: ViewModel,
    pub(crate) animation: Option<SpinAnimation>,
    pub(crate) cli_config: CliConfig,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub fn new(
        handle: RuntimeHandle,
        subscriptions: HashMap<Topic, broadcast::Receiver<RuntimeEvent>>,
        consumer: C,
        snapshot: SessionSnapshot,
        cli_config: CliConfig,
    ) -> Self {
        let view_model = ViewModel::from_snapshot(&snapshot, None);
        let mut app_state = AppState::new();
        app_state.sync_game(&snapshot.game);

        Self {
            handle,
            subscriptions,
            input: InputHandler::new(),
            consumer,
            app_state,
            snapshot,
            view_model,
            animation: None,
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut session_rx = self.take_subscription(Topic::Session)?;
        let mut game_rx = self.take_subscription(Topic::Game)?;
        let mut content_rx = self.take_subscription(Topic::Content)?;

        let mut frames =
            time::interval(Duration::from_millis(self.cli_config.ui.frame_interval_ms));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            let quit = tokio::select! {
                result = session_rx.recv() => self.handle_runtime_event(result, terminal).await?,
                result = game_rx.recv() => self.handle_runtime_event(result, terminal).await?,
                result = content_rx.recv() => self.handle_runtime_event(result, terminal).await?,
                _ = frames.tick() => self.handle_frame_tick(terminal).await?,
            };
            if quit {
                break;
            }
        }

        Ok(self.consumer)
    }

    fn take_subscription(&mut self, topic: Topic) -> Result<broadcast::Receiver<RuntimeEvent>> {
        self.subscriptions
            .remove(&topic)
            .with_context(|| format!("missing subscription for {topic:?}"))
    }

    /// Handle runtime event and refresh the cached snapshot when needed.
    async fn handle_runtime_event(
        &mut self,
        result: Result<RuntimeEvent, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(event) => {
                match &event {
                    RuntimeEvent::Game(GameEvent::WheelSpun { plan }) => {
                        self.animation = Some(SpinAnimation::start(plan, Instant::now()));
                    }
                    RuntimeEvent::Game(GameEvent::WheelLanded { .. })
                    | RuntimeEvent::Session(_) => {
                        self.animation = None;
                    }
                    _ => {}
                }

                let impact = self.consumer.on_event(&event);
                if impact.requires_refresh {
                    self.refresh_snapshot().await?;
                }
                if impact.requires_redraw {
                    self.render(terminal)?;
                }
                Ok(false)
            }
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                self.refresh_snapshot().await?;
                self.render(terminal)?;
                Ok(false)
            }
        }
    }

    /// Advance the wheel animation, then poll the keyboard.
    async fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if let Some(animation) = self.animation {
            self.view_model
                .set_wheel_rotation(animation.rotation_at(Instant::now()));
            self.render(terminal)?;
        }
        self.handle_input_tick(terminal).await
    }

    /// Re-query the session and rebuild the view model.
    pub(crate) async fn refresh_snapshot(&mut self) -> Result<()> {
        let previous = self.snapshot.screen;
        self.snapshot = self.handle.query_snapshot().await?;
        if self.snapshot.screen != previous {
            self.app_state.enter_screen(self.snapshot.screen);
        }
        self.app_state.sync_game(&self.snapshot.game);

        let rotation = self
            .animation
            .map(|animation| animation.rotation_at(Instant::now()));
        self.view_model = ViewModel::from_snapshot(&self.snapshot, rotation);
        self.clamp_cursors();
        Ok(())
    }

    fn clamp_cursors(&mut self) {
        if let ScreenView::TeacherRoom(view) = &self.view_model.body {
            let row_count = view.section(self.app_state.teacher.section).rows.len();
            self.app_state.clamp_teacher_row(row_count);
        }
    }
}
