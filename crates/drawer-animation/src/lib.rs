//! Animation support for drawer transitions.
//!
//! Provides the easing curves and duration policy a transition is planned
//! with, and [`PositionAnimator`], a frame-driven tween that moves the drawer
//! between two Y coordinates and reports where it ended up.

mod animator;
mod easing;
mod timing;

pub use animator::{AnimationPosition, AnimatorStep, PositionAnimator};
pub use easing::Easing;
pub use timing::{TransitionTiming, DEFAULT_TRANSITION_DURATION_MILLIS};
