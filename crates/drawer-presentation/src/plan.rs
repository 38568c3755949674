//! Transitions handed to an animation driver.

use std::time::Duration;

use drawer_animation::{Easing, PositionAnimator};
use drawer_core::{DrawerState, VisualProperties};

/// Everything an animation driver needs to move the drawer between two
/// states and animate its visual properties alongside.
///
/// Once the driver finishes, report the outcome through
/// [`DrawerController::transition_did_end`](crate::DrawerController::transition_did_end).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPlan {
    pub starting_state: DrawerState,
    pub ending_state: DrawerState,
    pub starting_y: f32,
    pub ending_y: f32,
    pub duration: Duration,
    pub easing: Easing,
    pub starting_properties: VisualProperties,
    pub ending_properties: VisualProperties,
    /// Whether the dimming layer changes during this transition.
    pub animates_dimming: bool,
    /// Whether the handle fades in lockstep with the position.
    pub animates_handle: bool,
}

impl TransitionPlan {
    pub fn is_expanding(&self) -> bool {
        self.ending_y < self.starting_y
    }

    pub fn distance(&self) -> f32 {
        (self.ending_y - self.starting_y).abs()
    }

    /// A tween over this plan's positions, duration and easing.
    pub fn animator(&self) -> PositionAnimator {
        PositionAnimator::new(self.starting_y, self.ending_y, self.duration, self.easing)
    }
}
