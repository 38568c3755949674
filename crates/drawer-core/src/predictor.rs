//! Choosing the resting state a released drag commits to.

use crate::geometry::DrawerGeometry;
use crate::state::DrawerState;

/// Direction of a release, from the sign of its vertical speed.
///
/// Y grows downward, so a negative speed moves the drawer up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMotion {
    Up,
    Down,
    Stationary,
}

impl VerticalMotion {
    pub fn from_speed(speed_y: f32) -> Self {
        if speed_y < 0.0 {
            VerticalMotion::Up
        } else if speed_y > 0.0 {
            VerticalMotion::Down
        } else {
            VerticalMotion::Stationary
        }
    }
}

impl DrawerGeometry {
    /// Whether `speed_y` is fast enough to skip positional reasoning.
    pub fn is_flick(&self, speed_y: f32) -> bool {
        let threshold = self.config().flick_speed_threshold;
        threshold != 0.0 && speed_y.abs() > threshold
    }

    /// Resting state a drag released at `current` with vertical speed
    /// `speed_y` should settle in.
    ///
    /// A flick always commits to an extreme. Otherwise the release position
    /// relative to the marks decides, with a stationary release treated like
    /// an upward one: a drawer let go without motion stays open rather than
    /// dismissing.
    pub fn predict_next(&self, current: DrawerState, speed_y: f32) -> DrawerState {
        let speed_y = if speed_y.is_finite() {
            speed_y
        } else {
            log::warn!("ignoring non-finite release speed {speed_y}");
            0.0
        };
        let motion = VerticalMotion::from_speed(speed_y);
        let config = self.config();

        if self.is_flick(speed_y) {
            let next = match motion {
                VerticalMotion::Up => DrawerState::FullyExpanded,
                _ => DrawerState::Collapsed,
            };
            log::debug!("flick at {speed_y} commits to {next:?}");
            return next;
        }

        let y = self.position_of(current);

        let next = if y < self.upper_mark_y() {
            match motion {
                VerticalMotion::Up | VerticalMotion::Stationary => DrawerState::FullyExpanded,
                VerticalMotion::Down => {
                    if config.supports_partial_expansion && config.dismisses_in_stages {
                        DrawerState::PartiallyExpanded
                    } else {
                        DrawerState::Collapsed
                    }
                }
            }
        } else if y < self.lower_mark_y() {
            match motion {
                VerticalMotion::Down => DrawerState::Collapsed,
                VerticalMotion::Up | VerticalMotion::Stationary => {
                    if config.supports_partial_expansion {
                        DrawerState::PartiallyExpanded
                    } else {
                        DrawerState::FullyExpanded
                    }
                }
            }
        } else {
            DrawerState::Collapsed
        };

        log::debug!("release at y={y} moving {motion:?} ({speed_y}) settles to {next:?}");
        next
    }
}

#[cfg(test)]
#[path = "tests/predictor_tests.rs"]
mod tests;
