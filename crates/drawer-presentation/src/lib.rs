//! Presentation layer for draggable drawers.
//!
//! [`DrawerController`] turns drags, releases and taps into
//! [`TransitionPlan`]s, using the pure engine in `drawer_core` to classify
//! positions and predict where a release settles. The host drives each plan
//! with the [`PositionAnimator`] it hands out and reports the outcome back.
//!
//! Presets bundling a [`DrawerConfiguration`] with its [`TransitionTiming`]
//! load from TOML through [`PresentationConfiguration`].

mod controller;
mod drag;
mod plan;
mod preset;
mod velocity;

pub use controller::{DrawerController, DrawerEvent, GestureAvailability, PresentedFrame};
pub use drag::DragSession;
pub use plan::TransitionPlan;
pub use preset::{PresentationConfiguration, PresetError};
pub use velocity::{VelocityTracker, ASSUME_STOPPED_MS, MAX_RELEASE_SPEED};

pub use drawer_animation::{
    AnimationPosition, AnimatorStep, Easing, PositionAnimator, TransitionTiming,
};
pub use drawer_core::{
    ConfigError, ContainerLayout, DrawerConfiguration, DrawerGeometry, DrawerState,
    VisualProperties,
};
