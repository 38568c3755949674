use super::*;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn run_to_completion(animator: &mut PositionAnimator) -> (Vec<f32>, AnimatorStep) {
    let mut samples = Vec::new();
    let mut frame_time = 1_000_000_000u64;
    for _ in 0..240 {
        let step = animator.on_frame(frame_time);
        samples.push(step.y());
        if let AnimatorStep::Finished { .. } = step {
            return (samples, step);
        }
        frame_time += FRAME_NANOS;
    }
    panic!("animation did not finish within 240 frames");
}

#[test]
fn first_frame_starts_at_the_start() {
    let mut animator =
        PositionAnimator::new(800.0, 500.0, Duration::from_millis(300), Easing::Linear);
    assert_eq!(animator.on_frame(5_000), AnimatorStep::Running(800.0));
}

#[test]
fn runs_to_the_end() {
    let mut animator = PositionAnimator::new(
        800.0,
        500.0,
        Duration::from_millis(300),
        Easing::EaseInOut,
    );
    let (samples, last) = run_to_completion(&mut animator);

    assert_eq!(
        last,
        AnimatorStep::Finished {
            y: 500.0,
            position: AnimationPosition::End
        }
    );
    assert!(samples.iter().any(|&y| y < 800.0 && y > 500.0));
    assert!(
        samples.windows(2).all(|pair| pair[1] <= pair[0]),
        "upward travel never moves back down: {samples:?}"
    );
    assert_eq!(animator.outcome(), Some(AnimationPosition::End));
    assert_eq!(animator.current_y(), 500.0);
}

#[test]
fn linear_progress_tracks_elapsed_time() {
    let mut animator =
        PositionAnimator::new(0.0, 100.0, Duration::from_millis(100), Easing::Linear);
    animator.on_frame(0);
    let step = animator.on_frame(25_000_000);
    assert!((step.y() - 25.0).abs() < 1e-3, "{step:?}");
    let step = animator.on_frame(75_000_000);
    assert!((step.y() - 75.0).abs() < 1e-3, "{step:?}");
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut animator = PositionAnimator::new(500.0, 0.0, Duration::ZERO, Easing::EaseInOut);
    assert_eq!(
        animator.on_frame(42),
        AnimatorStep::Finished {
            y: 0.0,
            position: AnimationPosition::End
        }
    );
}

#[test]
fn reversing_returns_to_start() {
    let mut animator =
        PositionAnimator::new(0.0, 100.0, Duration::from_millis(100), Easing::Linear);
    animator.on_frame(0);
    animator.on_frame(50_000_000);
    animator.reverse();
    assert!(animator.is_reversed());

    let step = animator.on_frame(75_000_000);
    assert!((step.y() - 25.0).abs() < 1e-3, "{step:?}");

    let step = animator.on_frame(110_000_000);
    assert_eq!(
        step,
        AnimatorStep::Finished {
            y: 0.0,
            position: AnimationPosition::Start
        }
    );
}

#[test]
fn stopping_reports_current_position() {
    let mut animator =
        PositionAnimator::new(0.0, 100.0, Duration::from_millis(100), Easing::Linear);
    animator.on_frame(0);
    animator.on_frame(40_000_000);

    let step = animator.stop().expect("animation still running");
    match step {
        AnimatorStep::Finished { y, position } => {
            assert!((y - 40.0).abs() < 1e-3);
            assert_eq!(position, AnimationPosition::Current);
        }
        other => panic!("unexpected step {other:?}"),
    }
    assert!(animator.stop().is_none());
}

#[test]
fn frames_after_finishing_repeat_the_outcome() {
    let mut animator =
        PositionAnimator::new(0.0, 100.0, Duration::from_millis(10), Easing::Linear);
    run_to_completion(&mut animator);
    animator.reverse();
    assert!(!animator.is_reversed());
    assert_eq!(
        animator.on_frame(u64::MAX),
        AnimatorStep::Finished {
            y: 100.0,
            position: AnimationPosition::End
        }
    );
}
