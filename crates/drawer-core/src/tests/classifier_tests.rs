use super::*;

use crate::config::DrawerConfiguration;
use crate::geometry::ContainerLayout;

fn geometry_with(config: DrawerConfiguration, requested_partial: f32) -> DrawerGeometry {
    DrawerGeometry::new(&config, ContainerLayout::new(800.0), requested_partial)
}

fn geometry() -> DrawerGeometry {
    geometry_with(DrawerConfiguration::default(), 300.0)
}

fn sample_positions() -> impl Iterator<Item = f32> {
    (-40..=840).map(|step| step as f32 * 1.0 + 0.25)
}

#[test]
fn partial_position_classifies_as_partially_expanded() {
    assert_eq!(geometry().classify(500.0, false), DrawerState::PartiallyExpanded);
}

#[test]
fn extremes_classify_as_resting_states() {
    let geometry = geometry();
    assert_eq!(geometry.classify(0.0, false), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(-12.0, false), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(800.0, false), DrawerState::Collapsed);
    assert_eq!(geometry.classify(950.0, false), DrawerState::Collapsed);
}

#[test]
fn jitter_around_canonical_positions_is_absorbed() {
    let geometry = geometry();
    assert_eq!(geometry.classify(500.0004, false), DrawerState::PartiallyExpanded);
    assert_eq!(geometry.classify(499.9996, false), DrawerState::PartiallyExpanded);
    assert_eq!(geometry.classify(0.0008, false), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(799.9995, false), DrawerState::Collapsed);
}

#[test]
fn in_between_positions_are_transitioning() {
    let state = geometry().classify(470.0, false);
    assert!(!state.is_resting());
    assert_eq!(state.transition_y(), Some(470.0));
}

#[test]
fn snapping_resolves_to_a_canonical_position() {
    let geometry = geometry();
    let canonical = [geometry.full_y(), geometry.partial_y(), geometry.container_height()];

    for y in sample_positions() {
        let state = geometry.classify(y, true);
        assert!(state.is_resting(), "{y} snapped to {state:?}");
        assert!(canonical.contains(&geometry.position_of(state)));
    }
}

#[test]
fn snapping_uses_the_marks() {
    let geometry = geometry();
    assert_eq!(geometry.classify(450.0, true), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(470.0, true), DrawerState::PartiallyExpanded);
    assert_eq!(geometry.classify(530.0, true), DrawerState::PartiallyExpanded);
    assert_eq!(geometry.classify(560.0, true), DrawerState::Collapsed);
}

#[test]
fn snapping_without_partial_expansion_picks_a_side() {
    let geometry = geometry_with(
        DrawerConfiguration {
            supports_partial_expansion: false,
            ..Default::default()
        },
        300.0,
    );
    assert_eq!(geometry.nearest(470.0), 0.0);
    assert_eq!(geometry.nearest(530.0), 800.0);
    assert_eq!(geometry.classify(470.0, true), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(530.0, true), DrawerState::Collapsed);
}

#[test]
fn nearest_is_idempotent() {
    let configs = [
        DrawerConfiguration::default(),
        DrawerConfiguration {
            supports_partial_expansion: false,
            ..Default::default()
        },
        DrawerConfiguration {
            upper_mark_gap: 0.0,
            lower_mark_gap: 0.0,
            ..Default::default()
        },
    ];

    for config in configs {
        for requested in [0.0, 300.0, 800.0] {
            let geometry = geometry_with(config, requested);
            for y in sample_positions() {
                let once = geometry.nearest(y);
                assert_eq!(
                    geometry.nearest(once),
                    once,
                    "nearest not idempotent at y={y} for {config:?} partial={requested}"
                );
            }
        }
    }
}

#[test]
fn position_round_trips_for_resting_states() {
    let geometry = geometry();
    for state in [
        DrawerState::Collapsed,
        DrawerState::PartiallyExpanded,
        DrawerState::FullyExpanded,
    ] {
        let y = geometry.position_of(state);
        assert_eq!(geometry.classify(y, false), state);
    }
}

#[test]
fn transitioning_position_is_its_own_y() {
    let geometry = geometry();
    let state = geometry.classify(612.5, false);
    assert_eq!(geometry.position_of(state), 612.5);
}

#[test]
fn degenerate_partial_still_resolves_unambiguously() {
    let geometry = geometry_with(DrawerConfiguration::default(), 0.0);
    assert_eq!(geometry.classify(800.0, false), DrawerState::Collapsed);
    assert_eq!(geometry.classify(0.0, false), DrawerState::FullyExpanded);
    assert_eq!(geometry.classify(400.0, true), DrawerState::FullyExpanded);
}
