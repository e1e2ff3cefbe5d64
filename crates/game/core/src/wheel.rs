//! Wheel of words: random rotation and the slice under the pointer.
//!
//! A spin only computes the final angle. The caller animates toward
//! [`SpinPlan::target_rotation`] and calls [`WheelState::land`] once
//! [`SpinPlan::duration`] has elapsed.

use std::time::Duration;

use crate::config::WheelConfig;
use crate::env::RandomSource;
use crate::error::{ErrorSeverity, GameError};

const FULL_TURN: u64 = 360;

/// Errors raised by wheel inputs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WheelError {
    #[error("the wheel is still spinning")]
    AlreadySpinning,

    #[error("the wheel has no words")]
    NoWords,
}

impl GameError for WheelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadySpinning => ErrorSeverity::Recoverable,
            Self::NoWords => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySpinning => "WHEEL_ALREADY_SPINNING",
            Self::NoWords => "WHEEL_NO_WORDS",
        }
    }
}

/// Outcome of accepting a spin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinPlan {
    pub laps: u32,
    /// Extra degrees past the full laps, in `[0, 360)`.
    pub extra_degrees: u32,
    /// Cumulative rotation the wheel must end on.
    pub target_rotation: u64,
    pub duration: Duration,
    /// Slice that will sit under the pointer after landing.
    pub landing_index: usize,
}

/// Maps a cumulative rotation to the slice under the pointer.
///
/// Slices run clockwise from 12 o'clock and the wheel turns clockwise, so
/// the wheel angle under a pointer drawn at `pointer_offset` degrees is
/// `(360 - rotation % 360 + pointer_offset) % 360`. Returns 0 for an empty
/// wheel; otherwise the result is always in `[0, slice_count)`.
pub fn landing_index(rotation: u64, slice_count: usize, pointer_offset: u32) -> usize {
    if slice_count == 0 {
        return 0;
    }
    let angle = (FULL_TURN - rotation % FULL_TURN + u64::from(pointer_offset)) % FULL_TURN;
    // floor(angle / (360 / n)) without floating point.
    let index = (angle * slice_count as u64 / FULL_TURN) as usize;
    index.min(slice_count - 1)
}

/// State of one wheel session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelState {
    words: Vec<String>,
    current_rotation: u64,
    spinning: bool,
    landed_word: Option<String>,
    pointer_offset: u32,
}

impl WheelState {
    /// Starts a wheel over `words`. An empty list is rejected.
    pub fn new(words: Vec<String>, config: &WheelConfig) -> Result<Self, WheelError> {
        if words.is_empty() {
            return Err(WheelError::NoWords);
        }
        Ok(Self {
            words,
            current_rotation: 0,
            spinning: false,
            landed_word: None,
            pointer_offset: config.pointer.offset_degrees(),
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn current_rotation(&self) -> u64 {
        self.current_rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    pub fn landed_word(&self) -> Option<&str> {
        self.landed_word.as_deref()
    }

    pub fn pointer_offset(&self) -> u32 {
        self.pointer_offset
    }

    /// Index of the slice currently under the pointer.
    pub fn index_under_pointer(&self) -> usize {
        landing_index(self.current_rotation, self.words.len(), self.pointer_offset)
    }

    /// Accepts a spin: advances the rotation and marks the wheel as spinning.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::AlreadySpinning`] while a previous spin has not
    /// landed; the state is left untouched.
    pub fn spin(
        &mut self,
        config: &WheelConfig,
        rng: &mut dyn RandomSource,
    ) -> Result<SpinPlan, WheelError> {
        if self.spinning {
            return Err(WheelError::AlreadySpinning);
        }

        let extra_degrees = rng.below(FULL_TURN as u32);
        let laps_range = config.laps();
        let laps = rng.range(*laps_range.start(), *laps_range.end());

        self.current_rotation = self
            .current_rotation
            .saturating_add(u64::from(laps) * FULL_TURN + u64::from(extra_degrees));
        self.spinning = true;
        self.landed_word = None;

        Ok(SpinPlan {
            laps,
            extra_degrees,
            target_rotation: self.current_rotation,
            duration: Duration::from_millis(config.spin_duration_ms),
            landing_index: self.index_under_pointer(),
        })
    }

    /// Stops the wheel and records the word under the pointer.
    ///
    /// Returns `None` if the wheel was not spinning.
    pub fn land(&mut self) -> Option<&str> {
        if !self.spinning {
            return None;
        }
        self.spinning = false;
        let index = self.index_under_pointer();
        self.landed_word = self.words.get(index).cloned();
        self.landed_word.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PointerPlacement;
    use crate::env::{PcgRng, ScriptedRng};

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn landing_index_follows_pointer_offset() {
        // 725 % 360 = 5; (355 + 90) % 360 = 85 -> first half.
        assert_eq!(landing_index(725, 2, 90), 0);
        // (355 + 270) % 360 = 265 -> second half.
        assert_eq!(landing_index(725, 2, 270), 1);
        assert_eq!(landing_index(0, 4, 0), 0);
        assert_eq!(landing_index(90, 4, 0), 3);
        assert_eq!(landing_index(0, 4, 90), 1);
    }

    #[test]
    fn landing_index_is_always_in_bounds() {
        for n in 1..=13usize {
            for rotation in (0..2000u64).step_by(7) {
                for offset in [0, 90, 180, 270] {
                    assert!(landing_index(rotation, n, offset) < n);
                }
            }
        }
        assert_eq!(landing_index(123, 0, 90), 0);
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert_eq!(
            WheelState::new(Vec::new(), &WheelConfig::default()),
            Err(WheelError::NoWords)
        );
    }

    #[test]
    fn spin_draws_offset_then_laps() {
        let config = WheelConfig::default();
        let mut wheel = WheelState::new(words(&["A", "B"]), &config).unwrap();
        // below(360) -> 5, range(7, 14) -> 7 + 2 % 8 = 9.
        let mut rng = ScriptedRng::new([5, 2]);

        let plan = wheel.spin(&config, &mut rng).unwrap();
        assert_eq!(plan.extra_degrees, 5);
        assert_eq!(plan.laps, 9);
        assert_eq!(plan.target_rotation, 9 * 360 + 5);
        assert_eq!(plan.duration, Duration::from_millis(4000));
        assert!(wheel.is_spinning());
        assert_eq!(wheel.landed_word(), None);
    }

    #[test]
    fn spinning_twice_is_rejected_without_changes() {
        let config = WheelConfig::default();
        let mut wheel = WheelState::new(words(&["A", "B", "C"]), &config).unwrap();
        let mut rng = PcgRng::new(1);
        wheel.spin(&config, &mut rng).unwrap();

        let before = wheel.clone();
        assert_eq!(
            wheel.spin(&config, &mut rng),
            Err(WheelError::AlreadySpinning)
        );
        assert_eq!(wheel, before);
    }

    #[test]
    fn land_picks_word_under_pointer() {
        let config = WheelConfig {
            pointer: PointerPlacement::Left,
            ..WheelConfig::default()
        };
        let mut wheel = WheelState::new(words(&["A", "B"]), &config).unwrap();
        // 2 laps + 5 degrees = 725.
        let config = WheelConfig {
            min_laps: 2,
            max_laps: 2,
            ..config
        };
        let mut rng = ScriptedRng::new([5, 0]);
        let plan = wheel.spin(&config, &mut rng).unwrap();
        assert_eq!(plan.target_rotation, 725);
        assert_eq!(plan.landing_index, 1);

        assert_eq!(wheel.land(), Some("B"));
        assert!(!wheel.is_spinning());
        assert_eq!(wheel.landed_word(), Some("B"));
    }

    #[test]
    fn land_without_spin_is_noop() {
        let mut wheel = WheelState::new(words(&["A"]), &WheelConfig::default()).unwrap();
        assert_eq!(wheel.land(), None);
        assert_eq!(wheel.landed_word(), None);
    }

    #[test]
    fn rotation_accumulates_and_next_spin_clears_landing() {
        let config = WheelConfig::default();
        let mut wheel = WheelState::new(words(&["A", "B", "C"]), &config).unwrap();
        let mut rng = PcgRng::new(3);

        let first = wheel.spin(&config, &mut rng).unwrap();
        wheel.land();
        assert!(wheel.landed_word().is_some());

        let second = wheel.spin(&config, &mut rng).unwrap();
        assert!(second.target_rotation > first.target_rotation);
        assert!(second.target_rotation - first.target_rotation >= 7 * 360);
        assert_eq!(wheel.landed_word(), None);
    }
}
