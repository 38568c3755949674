//! Mapping between continuous positions and discrete drawer states.

use crate::geometry::DrawerGeometry;
use crate::state::{DrawerState, TransitionPosition};
use crate::tolerance::{approx_eq, approx_ge, approx_le};

impl DrawerGeometry {
    /// Snaps `y` to the closest canonical resting position.
    ///
    /// The marks, not the midpoints, decide which side wins: anything at or
    /// above the upper mark snaps to full, anything at or below the lower mark
    /// snaps to collapsed. Between the marks the partial position wins when
    /// it exists; otherwise the side of the partial position decides.
    ///
    /// Every canonical position maps to itself, so snapping is idempotent
    /// even when a zero gap puts a mark on a canonical position.
    pub fn nearest(&self, y: f32) -> f32 {
        let supports_partial = self.config().supports_partial_expansion;

        if approx_le(y, self.full_y()) {
            self.full_y()
        } else if approx_ge(y, self.container_height()) {
            self.container_height()
        } else if supports_partial && !self.is_degenerate() && approx_eq(y, self.partial_y()) {
            self.partial_y()
        } else if approx_le(y, self.upper_mark_y()) {
            self.full_y()
        } else if approx_ge(y, self.lower_mark_y()) {
            self.container_height()
        } else if approx_le(y, self.partial_y()) {
            if supports_partial {
                self.partial_y()
            } else {
                self.full_y()
            }
        } else if supports_partial {
            self.partial_y()
        } else {
            self.container_height()
        }
    }

    /// Classifies `y` as a resting state, or as transitioning when it falls
    /// strictly between resting positions.
    ///
    /// With `snap_to_nearest`, in-between positions resolve to the state at
    /// [`nearest`](Self::nearest) instead.
    pub fn classify(&self, y: f32, snap_to_nearest: bool) -> DrawerState {
        if approx_le(y, self.full_y()) {
            return DrawerState::FullyExpanded;
        }
        if approx_ge(y, self.container_height()) {
            return DrawerState::Collapsed;
        }
        if approx_eq(y, self.partial_y()) {
            return DrawerState::PartiallyExpanded;
        }

        if snap_to_nearest {
            let snapped = self.nearest(y);
            log::trace!("snapping y={y} to {snapped}");
            self.classify(snapped, false)
        } else {
            DrawerState::Transitioning(TransitionPosition::new(y))
        }
    }

    /// Y of `state`; the inverse of [`classify`](Self::classify) for the
    /// resting states.
    pub fn position_of(&self, state: DrawerState) -> f32 {
        match state {
            DrawerState::Collapsed => self.container_height(),
            DrawerState::PartiallyExpanded => self.partial_y(),
            DrawerState::FullyExpanded => self.full_y(),
            DrawerState::Transitioning(position) => position.y(),
        }
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;
