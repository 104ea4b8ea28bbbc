//! Walking Around Professor Smooth Rotation: the interactive demo binary.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowPlugin;
use clap::Parser;
use log::error;
use professor_walk::{init_logging, ControllerSettings, PatrolRng, ScenePlugin};

const WINDOW_TITLE: &str = "Walking Around Professor Smooth Rotation";

/// Walk the professor around with the arrow keys while a ninja patrols
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding controller settings
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for the ninja's patrol loop choice
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) => ControllerSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => ControllerSettings::default(),
    };
    let rng = args
        .seed
        .map_or_else(PatrolRng::from_entropy, PatrolRng::seeded);

    let exit = App::new()
        .add_plugins(
            DefaultPlugins
                .build()
                .disable::<LogPlugin>()
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.to_owned(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::srgb(0.0, 0.0, 0.5)))
        .insert_resource(settings)
        .insert_resource(rng)
        .add_plugins(ScenePlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("app exited with code {code}"),
    }
}
