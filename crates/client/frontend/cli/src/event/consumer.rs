//! Maintains the CLI message log in response to runtime events.
use std::sync::Arc;

use game_core::{ContentLibrary, Hero};
use runtime::{ContentEvent, Event};

use client_frontend_core::{
    MessageVisibility,
    event::{EventConsumer, EventImpact},
    format::MessageFormatter,
    message::MessageLog,
};

pub struct CliEventConsumer {
    log: MessageLog,
    visibility: MessageVisibility,
    /// Latest library, kept for naming pairs in match messages.
    library: Arc<ContentLibrary>,
    heroes: &'static [Hero],
}

impl CliEventConsumer {
    pub fn new(
        log: MessageLog,
        visibility: MessageVisibility,
        library: Arc<ContentLibrary>,
        heroes: &'static [Hero],
    ) -> Self {
        Self {
            log,
            visibility,
            library,
            heroes,
        }
    }

    fn push_formatted(&mut self, event: &Event) {
        let formatter = MessageFormatter::new(&self.library, self.heroes);
        if let Some(entry) = formatter.format(event) {
            self.log.push(entry);
        }
    }
}

impl EventConsumer for CliEventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact {
        match event {
            Event::Session(_) => {
                self.push_formatted(event);
                EventImpact::refresh()
            }
            Event::Game(game_event) => {
                if self.visibility.should_show(game_event) {
                    self.push_formatted(event);
                }
                EventImpact::refresh()
            }
            Event::Content(ContentEvent::LibraryUpdated { library, .. }) => {
                self.library = Arc::clone(library);
                self.push_formatted(event);
                EventImpact::refresh()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    fn take_message_log(self) -> MessageLog {
        self.log
    }
}
