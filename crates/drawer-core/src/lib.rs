//! Position and state engine for draggable drawer panels.
//!
//! A drawer slides vertically over its container and rests in one of up to
//! three positions: fully expanded, partially expanded, or collapsed. This
//! crate holds the pure computations behind it:
//!
//! - [`geometry`] derives the canonical Y coordinates for one layout pass,
//! - [`classifier`] maps positions to [`DrawerState`]s and back,
//! - [`predictor`] decides where a released drag settles,
//! - [`interpolators`] derive dimming, handle, corner and chrome values.
//!
//! Nothing here keeps state between calls. The host owns the drawer's
//! current position and rebuilds a [`DrawerGeometry`] on every layout pass.

pub mod classifier;
pub mod config;
pub mod error;
pub mod geometry;
pub mod interpolators;
pub mod predictor;
pub mod state;
pub mod tolerance;

pub use config::{
    CornerRadius, CornerRadiusPolicy, DrawerConfiguration, FullExpansionBehaviour,
    HandleConfiguration,
};
pub use error::ConfigError;
pub use geometry::{ContainerLayout, DrawerGeometry, DEFAULT_STATUS_BAR_HEIGHT};
pub use interpolators::VisualProperties;
pub use predictor::VerticalMotion;
pub use state::{DrawerState, TransitionPosition};
pub use tolerance::POSITION_EPSILON;
