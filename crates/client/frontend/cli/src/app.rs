//! Glue code tying the runtime handle and the terminal UI together.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use runtime::{RuntimeHandle, Topic};

use crate::config::CliConfig;
use crate::event::{CliEventConsumer, EventLoop};
use crate::presentation::terminal;
use client_frontend_core::{
    EventConsumer, FrontendConfig,
    frontend::Frontend,
    message::{MessageEntry, MessageLevel, MessageLog},
    view_model::GREETING,
};

/// Terminal frontend. Owns only UI configuration; the runtime is handed in.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: RuntimeHandle) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        // Subscribe before the first snapshot so no event slips between them.
        let subscriptions =
            handle.subscribe_multiple(&[Topic::Session, Topic::Game, Topic::Content]);
        let snapshot = handle.query_snapshot().await?;

        let mut messages = MessageLog::new(self.frontend_config.messages.capacity);
        messages.push(MessageEntry::new(GREETING, MessageLevel::Success));

        let consumer = CliEventConsumer::new(
            messages,
            self.frontend_config.messages.visibility.clone(),
            Arc::clone(&snapshot.library),
            &game_content::HEROES,
        );

        let event_loop = EventLoop::new(
            handle,
            subscriptions,
            consumer,
            snapshot,
            self.cli_config.clone(),
        );

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let consumer = event_loop.run(&mut terminal).await?;
        tracing::info!(
            messages = consumer.message_log().len(),
            "CLI frontend exiting"
        );

        Ok(())
    }
}
