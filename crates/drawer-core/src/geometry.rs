//! Canonical vertical positions of a drawer inside its container.
//!
//! Y grows downward: the fully-expanded position is the smallest Y, the
//! collapsed position equals the container height. For non-negative mark gaps
//! the derived coordinates always satisfy
//! `0 <= full_y <= upper_mark_y <= partial_y <= lower_mark_y <= container_height`.
//!
//! The free functions mirror the raw formulas; [`DrawerGeometry`] evaluates
//! them once per layout pass and is what the classifier, predictor and
//! interpolators operate on. A geometry frame must be rebuilt whenever the
//! container size or the requested partial height changes; holding on to one
//! across layout passes yields silently wrong classification.

use crate::config::{DrawerConfiguration, FullExpansionBehaviour};
use crate::tolerance::approx_eq;

/// Status bar height used when the platform does not report one.
pub const DEFAULT_STATUS_BAR_HEIGHT: f32 = 20.0;

/// Platform-supplied measurements of the container hosting the drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerLayout {
    pub height: f32,
    pub status_bar_height: f32,
}

impl ContainerLayout {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            status_bar_height: DEFAULT_STATUS_BAR_HEIGHT,
        }
    }

    pub fn with_status_bar_height(mut self, status_bar_height: f32) -> Self {
        self.status_bar_height = status_bar_height;
        self
    }
}

/// Y of the fully-expanded drawer.
pub fn full_y(config: &DrawerConfiguration, status_bar_height: f32) -> f32 {
    match config.full_expansion {
        FullExpansionBehaviour::CoversFullScreen => 0.0,
        FullExpansionBehaviour::DoesNotCoverStatusBar => status_bar_height,
        FullExpansionBehaviour::LeavesCustomGap(gap) => gap,
    }
}

/// Requested partial height clamped to `[0, container_height]`.
pub fn partial_height(requested: f32, container_height: f32) -> f32 {
    requested.max(0.0).min(container_height)
}

/// Y of the partially-expanded drawer.
pub fn partial_y(requested: f32, container_height: f32) -> f32 {
    container_height - partial_height(requested, container_height)
}

/// Upper decision mark, never above the fully-expanded position.
pub fn upper_mark_y(
    requested: f32,
    container_height: f32,
    config: &DrawerConfiguration,
    status_bar_height: f32,
) -> f32 {
    let full = full_y(config, status_bar_height);
    (partial_y(requested, container_height) - config.upper_mark_gap).max(full)
}

/// Lower decision mark, never below the collapsed position.
pub fn lower_mark_y(requested: f32, container_height: f32, config: &DrawerConfiguration) -> f32 {
    (partial_y(requested, container_height) + config.lower_mark_gap).min(container_height)
}

/// Canonical positions evaluated for a single layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerGeometry {
    config: DrawerConfiguration,
    container_height: f32,
    status_bar_height: f32,
    partial_height: f32,
    full_y: f32,
    partial_y: f32,
    upper_mark_y: f32,
    lower_mark_y: f32,
}

impl DrawerGeometry {
    /// Evaluates the canonical positions for `layout`.
    ///
    /// A non-finite or negative container height collapses every position to
    /// `0`. The fully-expanded position is kept within the container, and the
    /// partial height is limited so the partial position never rises above
    /// the fully-expanded one.
    pub fn new(
        config: &DrawerConfiguration,
        layout: ContainerLayout,
        requested_partial_height: f32,
    ) -> Self {
        let container_height = if layout.height.is_finite() && layout.height >= 0.0 {
            layout.height
        } else {
            log::warn!(
                "container height {} is not a usable distance, treating it as 0",
                layout.height
            );
            0.0
        };
        let status_bar_height = layout.status_bar_height.max(0.0);

        let full_y = full_y(config, status_bar_height).clamp(0.0, container_height);
        let mut partial_height = partial_height(requested_partial_height, container_height);
        if container_height - partial_height < full_y {
            log::debug!(
                "partial height {partial_height} reaches above the fully expanded position, limiting to {}",
                container_height - full_y
            );
            partial_height = container_height - full_y;
        }
        let partial_y = container_height - partial_height;
        let upper_mark_y = (partial_y - config.upper_mark_gap).max(full_y);
        let lower_mark_y = (partial_y + config.lower_mark_gap).min(container_height);

        Self {
            config: *config,
            container_height,
            status_bar_height,
            partial_height,
            full_y,
            partial_y,
            upper_mark_y,
            lower_mark_y,
        }
    }

    pub fn config(&self) -> &DrawerConfiguration {
        &self.config
    }

    pub fn container_height(&self) -> f32 {
        self.container_height
    }

    pub fn status_bar_height(&self) -> f32 {
        self.status_bar_height
    }

    pub fn partial_height(&self) -> f32 {
        self.partial_height
    }

    pub fn full_y(&self) -> f32 {
        self.full_y
    }

    pub fn partial_y(&self) -> f32 {
        self.partial_y
    }

    pub fn upper_mark_y(&self) -> f32 {
        self.upper_mark_y
    }

    pub fn lower_mark_y(&self) -> f32 {
        self.lower_mark_y
    }

    /// Height of the drawer's frame: it spans from the fully-expanded
    /// position to the bottom of the container.
    pub fn drawer_height(&self) -> f32 {
        self.container_height - self.full_y
    }

    /// Clamps `y` to the travel range `[full_y, container_height]`.
    pub fn clamp_position(&self, y: f32) -> f32 {
        y.max(self.full_y).min(self.container_height)
    }

    /// True when any two of the fully-expanded, partial and collapsed
    /// positions coincide.
    pub fn is_degenerate(&self) -> bool {
        approx_eq(self.partial_y, self.full_y)
            || approx_eq(self.partial_y, self.container_height)
            || approx_eq(self.full_y, self.container_height)
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
