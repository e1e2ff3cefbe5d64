//! Utilities for reacting to runtime events inside UI layers.
use runtime::Event;

use crate::message::MessageLog;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    /// The frontend's cached snapshot is stale and should be re-queried.
    pub requires_refresh: bool,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            requires_refresh: false,
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            requires_refresh: false,
        }
    }

    pub const fn refresh() -> Self {
        Self {
            requires_redraw: true,
            requires_refresh: true,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            requires_refresh: self.requires_refresh || other.requires_refresh,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, event: &Event) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
    fn take_message_log(self) -> MessageLog
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_keeps_strongest_request() {
        let impact = EventImpact::none().combine(EventImpact::redraw());
        assert_eq!(impact, EventImpact::redraw());

        let impact = EventImpact::redraw().combine(EventImpact::refresh());
        assert!(impact.requires_refresh);
        assert_eq!(EventImpact::none().combine(EventImpact::none()), EventImpact::none());
    }
}
