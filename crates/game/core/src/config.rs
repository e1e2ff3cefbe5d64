//! Game configuration constants and tunable parameters.

use core::ops::RangeInclusive;

/// Where the wheel pointer is drawn, measured clockwise from 12 o'clock.
///
/// Slices are laid out clockwise starting at 12 o'clock, so the placement
/// angle is exactly the offset the landing computation must add. Renderers
/// draw the pointer at the same placement so the visual and computed slice
/// always agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PointerPlacement {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

impl PointerPlacement {
    /// Offset in degrees added to the unrotated angle under the pointer.
    pub const fn offset_degrees(self) -> u32 {
        match self {
            Self::Top => 0,
            Self::Right => 90,
            Self::Bottom => 180,
            Self::Left => 270,
        }
    }
}

/// What a wrong answer does to the scores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissPolicy {
    /// A miss awards nothing.
    #[default]
    NoPenalty,
    /// A miss awards the opposing side one point.
    OpponentScores,
}

/// Wheel-of-words tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WheelConfig {
    pub pointer: PointerPlacement,
    /// Minimum number of full laps per spin.
    pub min_laps: u32,
    /// Maximum number of full laps per spin (inclusive).
    pub max_laps: u32,
    /// Animation length before the wheel lands.
    pub spin_duration_ms: u64,
}

impl WheelConfig {
    pub const DEFAULT_MIN_LAPS: u32 = 7;
    pub const DEFAULT_MAX_LAPS: u32 = 14;
    pub const DEFAULT_SPIN_DURATION_MS: u64 = 4000;

    /// Lap range with the bounds put in order.
    pub fn laps(&self) -> RangeInclusive<u32> {
        let lo = self.min_laps.min(self.max_laps);
        let hi = self.min_laps.max(self.max_laps);
        lo..=hi
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            pointer: PointerPlacement::default(),
            min_laps: Self::DEFAULT_MIN_LAPS,
            max_laps: Self::DEFAULT_MAX_LAPS,
            spin_duration_ms: Self::DEFAULT_SPIN_DURATION_MS,
        }
    }
}

/// Hero battle tunables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    pub miss_policy: MissPolicy,
    /// Pause after an answer before the next question appears.
    pub advance_delay_ms: u64,
}

impl BattleConfig {
    pub const DEFAULT_ADVANCE_DELAY_MS: u64 = 1500;
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            miss_policy: MissPolicy::default(),
            advance_delay_ms: Self::DEFAULT_ADVANCE_DELAY_MS,
        }
    }
}

/// Top-level game configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub wheel: WheelConfig,
    pub battle: BattleConfig,
}

impl GameConfig {
    /// Number of heroes that must be chosen before a battle starts.
    pub const HEROES_PER_BATTLE: usize = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_miss_policy(mut self, miss_policy: MissPolicy) -> Self {
        self.battle.miss_policy = miss_policy;
        self
    }

    pub fn with_pointer(mut self, pointer: PointerPlacement) -> Self {
        self.wheel.pointer = pointer;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_offsets_follow_clockwise_layout() {
        assert_eq!(PointerPlacement::Top.offset_degrees(), 0);
        assert_eq!(PointerPlacement::Right.offset_degrees(), 90);
        assert_eq!(PointerPlacement::Bottom.offset_degrees(), 180);
        assert_eq!(PointerPlacement::Left.offset_degrees(), 270);
    }

    #[test]
    fn laps_range_is_ordered() {
        let config = WheelConfig {
            min_laps: 12,
            max_laps: 3,
            ..WheelConfig::default()
        };
        assert_eq!(config.laps(), 3..=12);
        assert_eq!(WheelConfig::default().laps(), 7..=14);
    }

    #[test]
    fn builder_helpers() {
        let config = GameConfig::new()
            .with_miss_policy(MissPolicy::OpponentScores)
            .with_pointer(PointerPlacement::Left);
        assert_eq!(config.battle.miss_policy, MissPolicy::OpponentScores);
        assert_eq!(config.wheel.pointer, PointerPlacement::Left);
    }
}
