//! Frame-driven tween between two drawer positions.
//!
//! The host feeds frame timestamps (nanoseconds, as delivered by a frame
//! clock) into [`PositionAnimator::on_frame`] and applies the returned Y to
//! the drawer. The first frame pins the start time. The animator finishes at
//! its end, at its start after [`reverse`](PositionAnimator::reverse), or
//! wherever it was when [`stop`](PositionAnimator::stop) interrupted it.

use std::time::Duration;

use crate::easing::Easing;

/// Where an animator was when it finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPosition {
    /// Reached the ending Y.
    End,
    /// Ran back to the starting Y after being reversed.
    Start,
    /// Interrupted in flight; the drawer rests wherever the last frame left it.
    Current,
}

/// Result of advancing the animator by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorStep {
    Running(f32),
    Finished { y: f32, position: AnimationPosition },
}

impl AnimatorStep {
    pub fn y(&self) -> f32 {
        match *self {
            AnimatorStep::Running(y) | AnimatorStep::Finished { y, .. } => y,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionAnimator {
    start_y: f32,
    end_y: f32,
    duration_nanos: u64,
    easing: Easing,
    /// Linear progress from start (`0`) to end (`1`).
    progress: f32,
    reversed: bool,
    last_frame_nanos: Option<u64>,
    current_y: f32,
    outcome: Option<AnimationPosition>,
}

impl PositionAnimator {
    pub fn new(start_y: f32, end_y: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            start_y,
            end_y,
            duration_nanos: u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX),
            easing,
            progress: 0.0,
            reversed: false,
            last_frame_nanos: None,
            current_y: start_y,
            outcome: None,
        }
    }

    pub fn start_y(&self) -> f32 {
        self.start_y
    }

    pub fn end_y(&self) -> f32 {
        self.end_y
    }

    pub fn current_y(&self) -> f32 {
        self.current_y
    }

    pub fn duration(&self) -> Duration {
        Duration::from_nanos(self.duration_nanos)
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<AnimationPosition> {
        self.outcome
    }

    /// Advances to `frame_time_nanos` and returns the drawer's Y for it.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> AnimatorStep {
        if let Some(position) = self.outcome {
            return AnimatorStep::Finished {
                y: self.current_y,
                position,
            };
        }

        let elapsed = match self.last_frame_nanos.replace(frame_time_nanos) {
            Some(last) => frame_time_nanos.saturating_sub(last),
            None => 0,
        };

        if self.duration_nanos == 0 {
            self.progress = if self.reversed { 0.0 } else { 1.0 };
        } else {
            let delta = (elapsed as f64 / self.duration_nanos as f64) as f32;
            self.progress = if self.reversed {
                (self.progress - delta).max(0.0)
            } else {
                (self.progress + delta).min(1.0)
            };
        }

        if !self.reversed && self.progress >= 1.0 {
            return self.finish(self.end_y, AnimationPosition::End);
        }
        if self.reversed && self.progress <= 0.0 {
            return self.finish(self.start_y, AnimationPosition::Start);
        }

        let eased = self.easing.transform(self.progress);
        self.current_y = self.start_y + (self.end_y - self.start_y) * eased;
        AnimatorStep::Running(self.current_y)
    }

    /// Flips the direction of travel; the animator then heads back to its
    /// start, taking as long as it has already run.
    pub fn reverse(&mut self) {
        if self.outcome.is_none() {
            self.reversed = !self.reversed;
            log::trace!("animator reversed at progress {}", self.progress);
        }
    }

    /// Interrupts the animation, leaving the drawer at its current Y.
    ///
    /// Returns `None` if the animator had already finished.
    pub fn stop(&mut self) -> Option<AnimatorStep> {
        if self.outcome.is_some() {
            return None;
        }
        log::debug!("animator stopped at y={}", self.current_y);
        Some(self.finish(self.current_y, AnimationPosition::Current))
    }

    fn finish(&mut self, y: f32, position: AnimationPosition) -> AnimatorStep {
        self.current_y = y;
        self.outcome = Some(position);
        AnimatorStep::Finished { y, position }
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
