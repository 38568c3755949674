//! Reference scenarios on an 800 pt container with a 300 pt partial drawer.

use drawer_core::{ContainerLayout, DrawerConfiguration, DrawerGeometry, DrawerState};

fn geometry(config: DrawerConfiguration, requested_partial_height: f32) -> DrawerGeometry {
    DrawerGeometry::new(&config, ContainerLayout::new(800.0), requested_partial_height)
}

fn config(flick_speed_threshold: f32) -> DrawerConfiguration {
    DrawerConfiguration {
        flick_speed_threshold,
        ..Default::default()
    }
}

fn release(geometry: &DrawerGeometry, y: f32, speed_y: f32) -> DrawerState {
    geometry.predict_next(geometry.classify(y, false), speed_y)
}

#[test]
fn reference_coordinates() {
    let geometry = geometry(config(1_000.0), 300.0);
    assert_eq!(geometry.full_y(), 0.0);
    assert_eq!(geometry.upper_mark_y(), 460.0);
    assert_eq!(geometry.partial_y(), 500.0);
    assert_eq!(geometry.lower_mark_y(), 540.0);
    assert_eq!(geometry.container_height(), 800.0);
}

#[test]
fn stationary_release_above_upper_mark() {
    let geometry = geometry(config(1_000.0), 300.0);
    assert_eq!(release(&geometry, 450.0, 0.0), DrawerState::FullyExpanded);
}

#[test]
fn slow_release_below_lower_mark() {
    let geometry = geometry(config(1_000.0), 300.0);
    assert_eq!(release(&geometry, 700.0, 50.0), DrawerState::Collapsed);
}

#[test]
fn exact_partial_position() {
    let geometry = geometry(config(1_000.0), 300.0);
    assert_eq!(geometry.classify(500.0, false), DrawerState::PartiallyExpanded);
    assert_eq!(geometry.classify(500.0, true), DrawerState::PartiallyExpanded);
}

#[test]
fn flick_ignores_the_marks() {
    let geometry = geometry(config(500.0), 300.0);
    assert_eq!(release(&geometry, 500.0, -600.0), DrawerState::FullyExpanded);
    assert_eq!(release(&geometry, 100.0, 600.0), DrawerState::Collapsed);
}

#[test]
fn no_partial_support_between_marks_stays_open() {
    let geometry = geometry(
        DrawerConfiguration {
            supports_partial_expansion: false,
            ..config(1_000.0)
        },
        300.0,
    );
    assert_eq!(release(&geometry, 470.0, 0.0), DrawerState::FullyExpanded);
}

#[test]
fn zero_partial_height_is_degenerate() {
    let geometry = geometry(config(1_000.0), 0.0);
    assert_eq!(geometry.partial_y(), 800.0);
    assert!(geometry.is_degenerate());
    for state in [
        DrawerState::Collapsed,
        DrawerState::PartiallyExpanded,
        DrawerState::FullyExpanded,
        geometry.classify(250.0, false),
    ] {
        assert_eq!(geometry.triangular_value(state), 0.0, "{state:?}");
    }
}

#[test]
fn snapped_positions_are_always_canonical() {
    for partial in [0.0, 120.0, 300.0, 760.0, 800.0] {
        let geometry = geometry(config(1_000.0), partial);
        let canonical = [
            geometry.full_y(),
            geometry.partial_y(),
            geometry.container_height(),
        ];
        let mut y = -50.0;
        while y <= 850.0 {
            let snapped = geometry.position_of(geometry.classify(y, true));
            assert!(
                canonical.contains(&snapped),
                "partial {partial}: y={y} snapped to {snapped}"
            );
            let nearest = geometry.nearest(y);
            assert_eq!(geometry.nearest(nearest), nearest, "partial {partial}: y={y}");
            y += 2.5;
        }
    }
}
