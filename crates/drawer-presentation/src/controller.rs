//! The hosting controller of a drawer presentation.
//!
//! [`DrawerController`] owns the drawer's single mutable value, its current
//! Y, along with the state it is heading for. Everything else is derived on
//! demand from a [`DrawerGeometry`] the host rebuilds on every layout pass
//! (see [`DrawerController::geometry`]); the controller never caches one.
//!
//! Only one drag or one animation may drive the position at a time. Stop any
//! running animator before starting a drag, and report its outcome through
//! [`DrawerController::transition_did_end`].

use drawer_animation::AnimationPosition;
use drawer_core::tolerance::approx_eq;
use drawer_core::{ConfigError, ContainerLayout, DrawerGeometry, DrawerState, VisualProperties};
use smallvec::SmallVec;
use web_time::Instant;

use crate::drag::DragSession;
use crate::plan::TransitionPlan;
use crate::preset::PresentationConfiguration;

/// Notifications for the host, drained with [`DrawerController::take_events`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerEvent {
    /// The drawer left the screen; the host should tear the presentation down.
    DismissRequested,
    /// A transition finished and the drawer is aiming for this state.
    Settled(DrawerState),
}

/// Which gestures the host should currently deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureAvailability {
    /// Tapping the drawer expands it fully.
    pub full_expansion_tap: bool,
    /// Tapping outside the drawer dismisses it.
    pub dismissal_tap: bool,
    pub drag: bool,
}

/// Frame of the presented content inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentedFrame {
    pub origin_y: f32,
    pub height: f32,
}

pub struct DrawerController {
    configuration: PresentationConfiguration,
    /// Raw position; always read through `DrawerGeometry::clamp_position`.
    current_y: f32,
    target_state: DrawerState,
    drag: Option<DragSession>,
    interactive: bool,
    events: SmallVec<[DrawerEvent; 4]>,
}

impl DrawerController {
    pub fn new(configuration: PresentationConfiguration) -> Result<Self, ConfigError> {
        configuration.validate()?;
        let target_state = if configuration.drawer.supports_partial_expansion {
            DrawerState::PartiallyExpanded
        } else {
            DrawerState::FullyExpanded
        };
        Ok(Self {
            configuration,
            // Below any container, so the drawer starts collapsed.
            current_y: f32::INFINITY,
            target_state,
            drag: None,
            interactive: false,
            events: SmallVec::new(),
        })
    }

    pub fn configuration(&self) -> &PresentationConfiguration {
        &self.configuration
    }

    /// Geometry frame for the current layout pass.
    pub fn geometry(&self, layout: ContainerLayout, requested_partial_height: f32) -> DrawerGeometry {
        DrawerGeometry::new(&self.configuration.drawer, layout, requested_partial_height)
    }

    /// State the drawer is resting in or heading for.
    pub fn target_state(&self) -> DrawerState {
        self.target_state
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn current_y(&self, geometry: &DrawerGeometry) -> f32 {
        geometry.clamp_position(self.current_y)
    }

    /// Moves the drawer, keeping it within its travel range.
    pub fn set_current_y(&mut self, y: f32, geometry: &DrawerGeometry) {
        self.current_y = geometry.clamp_position(y);
    }

    pub fn current_state(&self, geometry: &DrawerGeometry) -> DrawerState {
        geometry.classify(self.current_y(geometry), false)
    }

    pub fn set_current_state(&mut self, state: DrawerState, geometry: &DrawerGeometry) {
        self.set_current_y(geometry.position_of(state), geometry);
    }

    /// Visual properties for the drawer's live position.
    pub fn visual_properties(&self, geometry: &DrawerGeometry) -> VisualProperties {
        geometry.visual_properties(self.current_state(geometry))
    }

    /// Where the presented content should be laid out: at the target
    /// position, tall enough to reach the fully-expanded position.
    pub fn presented_frame(&self, geometry: &DrawerGeometry) -> PresentedFrame {
        PresentedFrame {
            origin_y: geometry.position_of(self.target_state),
            height: geometry.drawer_height(),
        }
    }

    pub fn gesture_availability(&self) -> GestureAvailability {
        GestureAvailability {
            full_expansion_tap: self.interactive
                && self.target_state == DrawerState::PartiallyExpanded,
            dismissal_tap: self.interactive,
            drag: self.interactive,
        }
    }

    /// Plans the drawer's entrance toward its initial target. Gestures stay
    /// disabled until [`presentation_did_end`](Self::presentation_did_end).
    pub fn presentation_will_begin(&mut self, geometry: &DrawerGeometry) -> TransitionPlan {
        self.interactive = false;
        log::info!("presenting drawer toward {:?}", self.target_state);
        self.plan_transition(self.target_state, geometry)
    }

    pub fn presentation_did_end(&mut self, completed: bool) {
        self.interactive = completed;
        log::debug!("presentation ended (completed: {completed})");
    }

    /// Plans the drawer's exit. Gestures are disabled for the rest of the
    /// presentation unless the dismissal is cancelled.
    pub fn dismissal_will_begin(&mut self, geometry: &DrawerGeometry) -> TransitionPlan {
        self.interactive = false;
        self.drag = None;
        log::info!("dismissing drawer");
        self.plan_transition(DrawerState::Collapsed, geometry)
    }

    pub fn dismissal_did_end(&mut self, completed: bool) {
        self.interactive = !completed;
        log::debug!("dismissal ended (completed: {completed})");
    }

    /// Starts a drag from the drawer's current position. Returns `false`
    /// when drags are unavailable or one is already in progress.
    pub fn begin_drag(&mut self, now: Instant, geometry: &DrawerGeometry) -> bool {
        if !self.interactive || self.drag.is_some() {
            return false;
        }
        let origin_y = self.current_y(geometry);
        let starting_state = geometry.classify(origin_y, false);
        log::debug!("drag began at y={origin_y} ({starting_state:?})");
        self.drag = Some(DragSession::begin(starting_state, origin_y, now));
        true
    }

    /// Follows the pointer's total translation since the drag began and
    /// returns the drawer's new state.
    pub fn drag_moved(
        &mut self,
        translation_y: f32,
        now: Instant,
        geometry: &DrawerGeometry,
    ) -> Option<DrawerState> {
        let session = self.drag.as_mut()?;
        let y = geometry.clamp_position(session.position_for(translation_y));
        session.record(y, now);
        self.current_y = y;
        let state = self.current_state(geometry);
        self.target_state = state;
        Some(state)
    }

    /// Releases the drag and plans the transition to the state the release
    /// velocity and position commit to.
    pub fn end_drag(&mut self, now: Instant, geometry: &DrawerGeometry) -> Option<TransitionPlan> {
        let mut session = self.drag.take()?;
        let y = self.current_y(geometry);
        session.record(y, now);

        let speed_y = session.release_speed();
        let current = geometry.classify(y, false);
        let next = geometry.predict_next(current, speed_y);
        log::debug!("drag released at y={y} with speed {speed_y}, heading to {next:?}");
        Some(self.plan_transition(next, geometry))
    }

    /// Abandons the drag and plans a return to where it started.
    pub fn cancel_drag(&mut self, geometry: &DrawerGeometry) -> Option<TransitionPlan> {
        let session = self.drag.take()?;
        log::debug!("drag cancelled, returning to {:?}", session.starting_state());
        Some(self.plan_transition(session.starting_state(), geometry))
    }

    pub fn full_expansion_tap(&mut self, geometry: &DrawerGeometry) -> Option<TransitionPlan> {
        if !self.gesture_availability().full_expansion_tap {
            return None;
        }
        Some(self.plan_transition(DrawerState::FullyExpanded, geometry))
    }

    pub fn dismissal_tap(&mut self, geometry: &DrawerGeometry) -> Option<TransitionPlan> {
        if !self.gesture_availability().dismissal_tap {
            return None;
        }
        Some(self.plan_transition(DrawerState::Collapsed, geometry))
    }

    /// Plans a transition from the current position to `ending_state` and
    /// makes that state the target.
    pub fn plan_transition(
        &mut self,
        ending_state: DrawerState,
        geometry: &DrawerGeometry,
    ) -> TransitionPlan {
        let starting_state = self.current_state(geometry);
        let starting_y = geometry.position_of(starting_state);
        let ending_y = geometry.position_of(ending_state);
        let drawer = &self.configuration.drawer;

        let animates_dimming = drawer.background_dimming_alpha != 0.0
            && !approx_eq(geometry.partial_y(), geometry.full_y())
            && ending_state != starting_state;

        let plan = TransitionPlan {
            starting_state,
            ending_state,
            starting_y,
            ending_y,
            duration: self.configuration.timing.duration_for(
                starting_y,
                ending_y,
                geometry.container_height(),
            ),
            easing: self.configuration.timing.easing,
            starting_properties: geometry.visual_properties(starting_state),
            ending_properties: geometry.visual_properties(ending_state),
            animates_dimming,
            animates_handle: drawer.handle_auto_animates(),
        };

        self.target_state = ending_state;
        log::debug!(
            "planned {starting_state:?} (y={starting_y}) -> {ending_state:?} (y={ending_y}) over {:?}",
            plan.duration
        );
        plan
    }

    /// Resolves where the drawer ended up after the animation driver stopped.
    ///
    /// When the animator did not reach its end, the target is re-derived from
    /// the live position, which may leave the drawer transitioning.
    pub fn transition_did_end(
        &mut self,
        plan: &TransitionPlan,
        position: AnimationPosition,
        geometry: &DrawerGeometry,
    ) {
        match position {
            AnimationPosition::End => self.set_current_y(plan.ending_y, geometry),
            AnimationPosition::Start => self.set_current_y(plan.starting_y, geometry),
            AnimationPosition::Current => {}
        }

        let dismissed = (plan.starting_state == DrawerState::Collapsed
            && position == AnimationPosition::Start)
            || (plan.ending_state == DrawerState::Collapsed && position == AnimationPosition::End);
        if dismissed {
            log::info!("drawer collapsed, requesting dismissal");
            self.events.push(DrawerEvent::DismissRequested);
        }

        if position != AnimationPosition::End {
            self.target_state = self.current_state(geometry);
        }
        log::debug!("transition ended at {position:?}, target {:?}", self.target_state);
        self.events.push(DrawerEvent::Settled(self.target_state));
    }

    pub fn take_events(&mut self) -> SmallVec<[DrawerEvent; 4]> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
