//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

use runtime::GameEvent;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig) -> Self {
        Self { messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SHOW_WHEEL_MESSAGES` - Show wheel spin/landing messages (default: true)
    /// - `SHOW_MATCH_MESSAGES` - Show matching messages (default: true)
    /// - `SHOW_BATTLE_MESSAGES` - Show battle messages (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        if let Some(show) = read_env_bool("SHOW_WHEEL_MESSAGES") {
            config.messages.visibility.show_wheel = show;
        }
        if let Some(show) = read_env_bool("SHOW_MATCH_MESSAGES") {
            config.messages.visibility.show_matching = show;
        }
        if let Some(show) = read_env_bool("SHOW_BATTLE_MESSAGES") {
            config.messages.visibility.show_battle = show;
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
    pub visibility: MessageVisibility,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            capacity: 64,
            visibility: MessageVisibility::default(),
        }
    }
}

/// Controls which game events produce visible messages.
///
/// Navigation and Teacher Room edits are always logged.
#[derive(Clone, Debug)]
pub struct MessageVisibility {
    pub show_wheel: bool,
    pub show_matching: bool,
    pub show_battle: bool,
}

impl Default for MessageVisibility {
    fn default() -> Self {
        Self {
            show_wheel: true,
            show_matching: true,
            show_battle: true,
        }
    }
}

impl MessageVisibility {
    /// Returns true if messages should be generated for this event.
    pub fn should_show(&self, event: &GameEvent) -> bool {
        match event {
            GameEvent::WheelSpun { .. } | GameEvent::WheelLanded { .. } => self.show_wheel,
            GameEvent::CardSelected { .. } | GameEvent::BoardReset => self.show_matching,
            GameEvent::HeroToggled { .. }
            | GameEvent::RoundStarted { .. }
            | GameEvent::AnswerGiven { .. }
            | GameEvent::BattleFinished { .. }
            | GameEvent::BattleReset => self.show_battle,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_filters_by_game() {
        let visibility = MessageVisibility {
            show_wheel: false,
            ..MessageVisibility::default()
        };
        assert!(!visibility.should_show(&GameEvent::WheelLanded {
            index: 0,
            word: "猫".to_string()
        }));
        assert!(visibility.should_show(&GameEvent::BoardReset));
        assert!(visibility.should_show(&GameEvent::BattleReset));
    }
}
