//! Discrete drawer states.

/// Live Y of a drawer between its canonical resting positions.
///
/// Only the classifier creates these, so a transitioning state never sits on
/// top of a canonical position: such positions resolve to the matching
/// resting state instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPosition(f32);

impl TransitionPosition {
    pub(crate) fn new(y: f32) -> Self {
        Self(y)
    }

    pub fn y(self) -> f32 {
        self.0
    }
}

/// Where the drawer is, as the rest of the presentation sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerState {
    /// Off screen, top edge at the container's bottom.
    Collapsed,
    /// Resting at the height requested by the presented content.
    PartiallyExpanded,
    /// Resting at the fully-expanded position.
    FullyExpanded,
    /// Moving, or held by a drag, between the resting positions.
    Transitioning(TransitionPosition),
}

impl DrawerState {
    pub fn is_resting(&self) -> bool {
        !matches!(self, DrawerState::Transitioning(_))
    }

    pub fn transition_y(&self) -> Option<f32> {
        match self {
            DrawerState::Transitioning(position) => Some(position.y()),
            _ => None,
        }
    }
}
