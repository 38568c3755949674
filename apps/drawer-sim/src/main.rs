//! Drawer simulator: drives the position engine from the command line.

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use drawer_animation::{AnimationPosition, AnimatorStep};
use drawer_core::{ContainerLayout, DrawerGeometry, DrawerState, VisualProperties};
use drawer_presentation::{DrawerController, PresentationConfiguration, TransitionPlan};
use web_time::Instant;

mod cli;

use crate::cli::{Cli, Command};

/// Simulated frame interval (60 Hz).
const FRAME: Duration = Duration::from_nanos(16_666_667);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let configuration = match &cli.preset {
        Some(path) => PresentationConfiguration::load(path)
            .with_context(|| format!("loading preset {}", path.display()))?,
        None => PresentationConfiguration::default(),
    };
    let layout = ContainerLayout::new(cli.height).with_status_bar_height(cli.status_bar);
    let controller = DrawerController::new(configuration).context("invalid configuration")?;
    let geometry = controller.geometry(layout, cli.partial);
    log::info!(
        "container {}: full y={}, partial y={}, marks {}..{}",
        geometry.container_height(),
        geometry.full_y(),
        geometry.partial_y(),
        geometry.upper_mark_y(),
        geometry.lower_mark_y()
    );

    match cli.command {
        Command::Classify { y, snap } => {
            let state = geometry.classify(y, snap);
            println!("{}", describe(state));
            print_properties(&geometry.visual_properties(state));
        }
        Command::Predict { y, speed } => {
            let current = geometry.classify(geometry.clamp_position(y), false);
            let next = geometry.predict_next(current, speed);
            let flick = if geometry.is_flick(speed) { " (flick)" } else { "" };
            println!("{} -> {}{flick}", describe(current), describe(next));
        }
        Command::Simulate { from, to, millis } => {
            simulate(controller, &geometry, from, to, millis)?;
        }
        Command::Preset { output } => {
            configuration
                .save(&output)
                .with_context(|| format!("writing preset {}", output.display()))?;
            println!("wrote {}", output.display());
        }
    }
    Ok(())
}

fn simulate(
    mut controller: DrawerController,
    geometry: &DrawerGeometry,
    from: f32,
    to: f32,
    millis: u64,
) -> anyhow::Result<()> {
    let presentation = controller.presentation_will_begin(geometry);
    controller.set_current_y(presentation.ending_y, geometry);
    controller.transition_did_end(&presentation, AnimationPosition::End, geometry);
    controller.presentation_did_end(true);
    controller.take_events();
    controller.set_current_y(from, geometry);

    let start = Instant::now();
    anyhow::ensure!(controller.begin_drag(start, geometry), "drawer refused the drag");
    let origin_y = controller.current_y(geometry);
    let drag = Duration::from_millis(millis);
    let frames = (drag.as_nanos() / FRAME.as_nanos()).max(1) as u32;
    for frame in 1..=frames {
        let fraction = frame as f32 / frames as f32;
        let translation = (to - origin_y) * fraction;
        let state = controller
            .drag_moved(translation, start + drag.mul_f32(fraction), geometry)
            .context("drag ended unexpectedly")?;
        println!(
            "drag  {:>4} ms  {}",
            (drag.as_millis() as f32 * fraction).round(),
            describe(state)
        );
    }

    let plan = controller
        .end_drag(start + drag, geometry)
        .context("drag ended unexpectedly")?;
    println!(
        "release -> {} over {:?}{}",
        describe(plan.ending_state),
        plan.duration,
        if plan.animates_dimming { ", dimming" } else { "" }
    );
    animate(&mut controller, &plan, geometry);

    for event in controller.take_events() {
        println!("event {event:?}");
    }
    Ok(())
}

fn animate(controller: &mut DrawerController, plan: &TransitionPlan, geometry: &DrawerGeometry) {
    let mut animator = plan.animator();
    let mut frame_time = 0u64;
    loop {
        let step = animator.on_frame(frame_time);
        controller.set_current_y(step.y(), geometry);
        print!(
            "frame {:>4} ms  {:<28}",
            frame_time / 1_000_000,
            describe(controller.current_state(geometry))
        );
        print_properties(&controller.visual_properties(geometry));
        if let AnimatorStep::Finished { position, .. } = step {
            controller.transition_did_end(plan, position, geometry);
            return;
        }
        frame_time += FRAME.as_nanos() as u64;
    }
}

fn describe(state: DrawerState) -> String {
    match state {
        DrawerState::Transitioning(position) => format!("transitioning at {:.1}", position.y()),
        other => format!("{other:?}"),
    }
}

fn print_properties(properties: &VisualProperties) {
    println!(
        "dim {:.3}  handle {:.3}  radius {:.2}  chrome {:.3}",
        properties.dimming_alpha,
        properties.handle_alpha,
        properties.corner_radius,
        properties.secondary_chrome_alpha
    );
}
