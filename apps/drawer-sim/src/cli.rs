//! Command-line arguments for the drawer simulator.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use drawer_core::DEFAULT_STATUS_BAR_HEIGHT;

#[derive(Parser)]
#[command(
    name = "drawer-sim",
    version,
    about = "Explore how a drawer classifies positions, predicts releases and animates"
)]
pub struct Cli {
    /// TOML preset to load instead of the default configuration.
    #[arg(long, value_name = "PATH", global = true)]
    pub preset: Option<PathBuf>,

    /// Container height in logical pixels.
    #[arg(long, default_value_t = 800.0, global = true)]
    pub height: f32,

    /// Status bar height in logical pixels.
    #[arg(long = "status-bar", default_value_t = DEFAULT_STATUS_BAR_HEIGHT, global = true)]
    pub status_bar: f32,

    /// Requested height of the partially expanded drawer.
    #[arg(long, default_value_t = 300.0, global = true)]
    pub partial: f32,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a vertical position.
    Classify {
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Snap in-between positions to the nearest resting state.
        #[arg(long)]
        snap: bool,
    },
    /// Predict where a drag released at a position settles.
    Predict {
        #[arg(allow_negative_numbers = true)]
        y: f32,
        /// Vertical release speed in pixels per second; negative is upward.
        #[arg(allow_negative_numbers = true)]
        speed: f32,
    },
    /// Drag between two positions, release, and animate to the settled state.
    Simulate {
        #[arg(long, allow_negative_numbers = true)]
        from: f32,
        #[arg(long, allow_negative_numbers = true)]
        to: f32,
        /// Duration of the drag.
        #[arg(long, default_value_t = 200)]
        millis: u64,
    },
    /// Write the effective configuration as a TOML preset.
    Preset {
        #[arg(long, value_name = "PATH")]
        output: PathBuf,
    },
}
