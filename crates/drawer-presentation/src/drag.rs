//! A single drag gesture on the drawer.

use drawer_core::DrawerState;
use web_time::Instant;

use crate::velocity::{VelocityTracker, MAX_RELEASE_SPEED};

/// State carried from the moment a drag begins until it ends or is cancelled.
#[derive(Debug, Clone)]
pub struct DragSession {
    starting_state: DrawerState,
    origin_y: f32,
    started_at: Instant,
    tracker: VelocityTracker,
}

impl DragSession {
    pub fn begin(starting_state: DrawerState, origin_y: f32, now: Instant) -> Self {
        let mut tracker = VelocityTracker::new();
        tracker.add_sample(0, origin_y);
        Self {
            starting_state,
            origin_y,
            started_at: now,
            tracker,
        }
    }

    /// State the drawer was in when the drag began; a cancelled drag returns
    /// here.
    pub fn starting_state(&self) -> DrawerState {
        self.starting_state
    }

    pub fn origin_y(&self) -> f32 {
        self.origin_y
    }

    /// Drawer Y for the pointer's total vertical translation since the drag
    /// began, before any clamping to the travel range.
    pub fn position_for(&self, translation_y: f32) -> f32 {
        self.origin_y + translation_y
    }

    /// Records where the drawer actually is at `now`.
    ///
    /// Pass the clamped position: samples the drawer never reached would
    /// show up as a spike at release.
    pub fn record(&mut self, y: f32, now: Instant) {
        self.tracker.add_sample(self.elapsed_ms(now), y);
    }

    /// Vertical speed at release, in pixels per second.
    pub fn release_speed(&self) -> f32 {
        self.tracker.velocity_capped(MAX_RELEASE_SPEED)
    }

    fn elapsed_ms(&self, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
    }
}
