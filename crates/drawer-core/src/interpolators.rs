//! Visual quantities derived from the drawer's position.
//!
//! Every value here is a pure function of a state and the geometry frame, so
//! a host can evaluate it at both ends of a transition and animate the
//! property in lockstep with the position. Degenerate geometry (two
//! canonical positions coinciding) yields `0` instead of a division by zero.

use crate::config::CornerRadiusPolicy;
use crate::geometry::DrawerGeometry;
use crate::state::DrawerState;
use crate::tolerance::{approx_eq, POSITION_EPSILON};

/// Snapshot of every position-driven visual property.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualProperties {
    pub dimming_alpha: f32,
    pub handle_alpha: f32,
    pub corner_radius: f32,
    pub secondary_chrome_alpha: f32,
}

impl DrawerGeometry {
    /// `1` at the partial position, `0` at both extremes, linear in between.
    ///
    /// Without partial expansion this is a single ramp from `1` at the
    /// fully-expanded position down to `0` when collapsed.
    pub fn triangular_value(&self, state: DrawerState) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }

        let y = self.position_of(state);
        let full_y = self.full_y();
        let partial_y = self.partial_y();
        let height = self.container_height();

        let fraction = if self.config().supports_partial_expansion {
            if y < partial_y {
                (y - full_y) / (partial_y - full_y)
            } else {
                1.0 - (y - partial_y) / (height - partial_y)
            }
        } else {
            1.0 - (y - full_y) / (height - full_y)
        };

        fraction.clamp(0.0, 1.0)
    }

    /// Progress of `state` from `from` (`0`) to `to` (`1`), clamped.
    ///
    /// Both endpoints must be resting states. Passing a transitioning
    /// endpoint is a caller bug: it asserts in debug builds and yields `0`
    /// otherwise.
    pub fn linear_value(&self, state: DrawerState, from: DrawerState, to: DrawerState) -> f32 {
        debug_assert!(from.is_resting(), "linear_value start must be a resting state");
        debug_assert!(to.is_resting(), "linear_value end must be a resting state");
        if !from.is_resting() || !to.is_resting() {
            log::error!("linear_value called with a transitioning endpoint ({from:?} -> {to:?})");
            return 0.0;
        }

        let begin_y = self.position_of(from);
        let end_y = self.position_of(to);
        if approx_eq(begin_y, end_y) {
            return 0.0;
        }

        let y = self.position_of(state);
        ((begin_y - y) / (begin_y - end_y)).clamp(0.0, 1.0)
    }

    /// Alpha of the dimming layer: ramps from `0` when collapsed up to
    /// `background_dimming_alpha` at the partial position.
    pub fn dimming_alpha(&self, state: DrawerState) -> f32 {
        self.config().background_dimming_alpha
            * self.linear_value(state, DrawerState::Collapsed, DrawerState::PartiallyExpanded)
    }

    pub fn handle_alpha(&self, state: DrawerState) -> f32 {
        self.triangular_value(state)
    }

    /// Alpha for chrome that only appears during the upper half of travel,
    /// such as a navigation bar.
    pub fn secondary_chrome_alpha(&self, state: DrawerState) -> f32 {
        self.linear_value(
            state,
            DrawerState::PartiallyExpanded,
            DrawerState::FullyExpanded,
        )
    }

    pub fn corner_radius(&self, state: DrawerState) -> f32 {
        let radius = self.config().corner_radius;
        match radius.policy {
            CornerRadiusPolicy::MaximumAtPartialY => radius.maximum * self.triangular_value(state),
            CornerRadiusPolicy::AlwaysShowBelowStatusBar => {
                let status_bar_height = self.status_bar_height();
                if status_bar_height <= POSITION_EPSILON {
                    return 0.0;
                }
                let y = self.position_of(state).clamp(0.0, status_bar_height);
                radius.maximum * y / status_bar_height
            }
        }
    }

    pub fn visual_properties(&self, state: DrawerState) -> VisualProperties {
        VisualProperties {
            dimming_alpha: self.dimming_alpha(state),
            handle_alpha: self.handle_alpha(state),
            corner_radius: self.corner_radius(state),
            secondary_chrome_alpha: self.secondary_chrome_alpha(state),
        }
    }
}

#[cfg(test)]
#[path = "tests/interpolator_tests.rs"]
mod tests;
