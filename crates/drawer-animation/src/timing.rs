//! Duration policy for drawer transitions.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::easing::Easing;

/// Duration of a transition across the whole container.
pub const DEFAULT_TRANSITION_DURATION_MILLIS: u64 = 400;

/// How long a transition takes and how its progress is eased.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionTiming {
    pub duration_millis: u64,
    /// Scale the duration by the fraction of the container travelled, so
    /// short hops are quicker than full-height slides.
    pub duration_is_proportional_to_distance: bool,
    pub easing: Easing,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration_millis: DEFAULT_TRANSITION_DURATION_MILLIS,
            duration_is_proportional_to_distance: true,
            easing: Easing::default(),
        }
    }
}

impl TransitionTiming {
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.duration_millis)
    }

    /// Duration of a transition from `start_y` to `end_y`.
    pub fn duration_for(&self, start_y: f32, end_y: f32, container_height: f32) -> Duration {
        let total = self.total_duration();
        if !self.duration_is_proportional_to_distance {
            return total;
        }
        if container_height.is_nan() || container_height <= 0.0 {
            return Duration::ZERO;
        }

        let fraction = ((end_y - start_y).abs() / container_height).min(1.0);
        if !fraction.is_finite() {
            return Duration::ZERO;
        }
        let nanos = total.as_nanos() as f64 * f64::from(fraction);
        Duration::from_nanos(nanos.round() as u64)
    }
}
