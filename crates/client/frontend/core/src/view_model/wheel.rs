use std::time::{Duration, Instant};

use game_core::{SpinPlan, WheelState, landing_index};

const FULL_TURN: u64 = 360;
const LABEL_LIMIT: usize = 10;
const LABEL_KEEP: usize = 8;

/// Shortens labels longer than ten characters to eight plus `...`.
pub fn slice_label(word: &str) -> String {
    if word.chars().count() > LABEL_LIMIT {
        let mut label: String = word.chars().take(LABEL_KEEP).collect();
        label.push_str("...");
        label
    } else {
        word.to_string()
    }
}

/// Client-side easing of the wheel between two rotations.
///
/// The session only knows the start and end of a spin; frontends interpolate
/// in between and never decide the outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinAnimation {
    from: u64,
    to: u64,
    started: Instant,
    duration: Duration,
}

impl SpinAnimation {
    pub fn start(plan: &SpinPlan, started: Instant) -> Self {
        let travel = u64::from(plan.laps) * FULL_TURN + u64::from(plan.extra_degrees);
        Self {
            from: plan.target_rotation.saturating_sub(travel),
            to: plan.target_rotation,
            started,
            duration: plan.duration,
        }
    }

    pub fn target(&self) -> u64 {
        self.to
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).min(1.0)
    }

    /// Rotation to draw at `now`, decelerating towards the target.
    pub fn rotation_at(&self, now: Instant) -> u64 {
        let eased = ease_out_cubic(self.progress(now));
        let travelled = ((self.to - self.from) as f64 * eased).round() as u64;
        (self.from + travelled).min(self.to)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelSlice {
    pub index: usize,
    pub label: String,
    /// The slice the last spin landed on.
    pub landed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelView {
    pub slices: Vec<WheelSlice>,
    /// Rotation being drawn; trails the session's rotation while animating.
    pub rotation: u64,
    pub pointer_offset: u32,
    pub spinning: bool,
    pub landed_word: Option<String>,
}

impl WheelView {
    /// Builds the view, drawing at `displayed_rotation` when an animation is
    /// in flight.
    pub fn from_state(state: &WheelState, displayed_rotation: Option<u64>) -> Self {
        let landed_index = state
            .landed_word()
            .filter(|_| !state.is_spinning())
            .map(|_| state.index_under_pointer());

        let slices = state
            .words()
            .iter()
            .enumerate()
            .map(|(index, word)| WheelSlice {
                index,
                label: slice_label(word),
                landed: landed_index == Some(index),
            })
            .collect();

        Self {
            slices,
            rotation: displayed_rotation.unwrap_or_else(|| state.current_rotation()),
            pointer_offset: state.pointer_offset(),
            spinning: state.is_spinning(),
            landed_word: state.landed_word().map(str::to_string),
        }
    }

    /// Slice drawn at `screen_angle` degrees clockwise from 12 o'clock.
    ///
    /// Uses the same mapping as the landing rule, so the slice painted under
    /// the pointer is always the one the session reports.
    pub fn slice_at(&self, screen_angle: u32) -> usize {
        landing_index(self.rotation, self.slices.len(), screen_angle % 360)
    }

    pub fn under_pointer(&self) -> usize {
        self.slice_at(self.pointer_offset)
    }

    pub fn spin_label(&self) -> &'static str {
        if self.spinning {
            "Spinning..."
        } else {
            "SPIN IT! 🎡"
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{PointerPlacement, ScriptedRng, WheelConfig};

    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn long_labels_are_shortened() {
        assert_eq!(slice_label("苹果"), "苹果");
        assert_eq!(slice_label("abcdefghij"), "abcdefghij");
        assert_eq!(slice_label("abcdefghijk"), "abcdefgh...");
    }

    #[test]
    fn pointer_slice_matches_landed_word() {
        let config = WheelConfig {
            pointer: PointerPlacement::Left,
            min_laps: 2,
            max_laps: 2,
            ..WheelConfig::default()
        };
        let mut wheel = WheelState::new(words(&["A", "B"]), &config).unwrap();
        let mut rng = ScriptedRng::new(vec![5]);
        wheel.spin(&config, &mut rng).unwrap();
        wheel.land();

        let view = WheelView::from_state(&wheel, None);
        assert_eq!(view.landed_word.as_deref(), Some("B"));
        assert_eq!(view.under_pointer(), 1);
        assert!(view.slices[1].landed);
        assert!(!view.slices[0].landed);
    }

    #[test]
    fn every_screen_angle_maps_to_a_slice() {
        let wheel = WheelState::new(words(&["A", "B", "C"]), &WheelConfig::default()).unwrap();
        let view = WheelView::from_state(&wheel, Some(1_234));
        for angle in 0..360 {
            assert!(view.slice_at(angle) < 3);
        }
    }

    #[test]
    fn animation_decelerates_onto_target() {
        let plan = SpinPlan {
            laps: 7,
            extra_degrees: 40,
            target_rotation: 7 * 360 + 40,
            duration: Duration::from_millis(4000),
            landing_index: 0,
        };
        let start = Instant::now();
        let animation = SpinAnimation::start(&plan, start);

        assert_eq!(animation.rotation_at(start), 0);
        let halfway = animation.rotation_at(start + Duration::from_millis(2000));
        // Ease-out covers more than half the distance in the first half.
        assert!(halfway > animation.target() / 2);
        assert!(!animation.is_finished(start + Duration::from_millis(3999)));

        let end = start + Duration::from_millis(5000);
        assert!(animation.is_finished(end));
        assert_eq!(animation.rotation_at(end), animation.target());
    }
}
