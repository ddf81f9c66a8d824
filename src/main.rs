//! Sprite animations command line tool.
//!
//! Indexes a directory of frame textures named `<animation>-<frame>.<ext>`
//! into an animation library and prints it. With `--play` it also runs a
//! headless playback simulation and logs every frame change.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --atlas assets/hero.atlas --json
//! RUST_LOG=debug cargo run -- --atlas assets/hero.atlas --play walking-up --seconds 2
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};

use spriteanimations::atlas::animationtype::{AnimationType, NamedAnimation};
use spriteanimations::atlas::library::AnimationLibrary;
use spriteanimations::components::animationcontroller::{AnimationController, AnimationState};
use spriteanimations::components::controllerbuilder::AnimationControllerBuilder;
use spriteanimations::events::animation::{
    SetAnimationEvent, SetAnimationStateEvent, observe_set_animation,
    observe_set_animation_state,
};
use spriteanimations::resources::animationconfig::AnimationConfig;
use spriteanimations::resources::worldtime::WorldTime;
use spriteanimations::systems::animation::sprite_playback;
use spriteanimations::systems::time::update_world_time;

/// Upper bound on simulated ticks for `--play`.
const MAX_TICKS: u64 = 1_000_000;

/// Index a sprite texture atlas into animations.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./animation.ini")]
    config: PathBuf,

    /// Directory of frame textures (overrides the config file).
    #[arg(long, value_name = "DIR")]
    atlas: Option<PathBuf>,

    /// Extension of the frame textures (overrides the config file).
    #[arg(long, value_name = "EXT")]
    extension: Option<String>,

    /// Playback speed (overrides the config file).
    #[arg(long, value_name = "FPS")]
    fps: Option<f32>,

    /// Print the library as JSON.
    #[arg(long)]
    json: bool,

    /// Simulate playback of this animation.
    #[arg(long, value_name = "ANIMATION")]
    play: Option<String>,

    /// Simulated duration in seconds.
    #[arg(long, default_value_t = 2.0)]
    seconds: f32,

    /// Simulated frame delta in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    step: f32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = AnimationConfig::with_path(&cli.config);
    if cli.config.exists() {
        if let Err(e) = config.load_from_file() {
            warn!("{e}; using defaults");
        }
    }
    if let Some(atlas) = cli.atlas {
        config.texture_atlas = Some(atlas);
    }
    if let Some(ext) = cli.extension {
        config.file_extension = ext;
    }
    if let Some(fps) = cli.fps {
        config.frames_per_second = fps;
    }

    let mut builder = AnimationControllerBuilder::new();
    builder.configure(&config);

    let library = match builder.build_library::<NamedAnimation>() {
        Ok(library) => library,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&library.summary()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing library: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_library(&library);
    }

    if let Some(name) = cli.play {
        let Some(animation) = NamedAnimation::from_filename_component(&name) else {
            eprintln!("Error: '{name}' is not a valid animation name");
            std::process::exit(1);
        };
        if let Err(e) = simulate(&builder, library, animation, cli.seconds, cli.step) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn print_library(library: &AnimationLibrary<NamedAnimation>) {
    println!("{library}");
    for (animation, frames) in library.iter() {
        println!("{} ({} frames)", animation, frames.count());
        for (index, texture) in frames.iter().enumerate() {
            println!("  {index:>3}: {texture}");
        }
    }
    match library.default_texture() {
        Some(texture) => println!("default texture: {texture}"),
        None => println!(
            "default texture: none ('{}' has no frames)",
            NamedAnimation::default_value()
        ),
    }
}

/// Run a headless world with one animated entity and log frame changes.
fn simulate(
    builder: &AnimationControllerBuilder,
    library: AnimationLibrary<NamedAnimation>,
    animation: NamedAnimation,
    seconds: f32,
    step: f32,
) -> Result<(), String> {
    let ticks = tick_count(seconds, step)?;
    let controller = builder
        .build_with_library(Arc::new(library))
        .map_err(|e| e.to_string())?;

    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.add_observer(observe_set_animation::<NamedAnimation>);
    world.add_observer(observe_set_animation_state::<NamedAnimation>);
    let entity = world.spawn(controller).id();

    world.trigger(SetAnimationEvent { entity, animation });
    world.trigger(SetAnimationStateEvent {
        entity,
        state: AnimationState::Animating,
    });

    let mut schedule = Schedule::default();
    schedule.add_systems(sprite_playback::<NamedAnimation>);

    let mut last_texture = None;
    for tick in 1..=ticks {
        update_world_time(&mut world, step);
        schedule.run(&mut world);
        let elapsed = tick as f64 * f64::from(step);

        let Some(controller) = world.get::<AnimationController<NamedAnimation>>(entity) else {
            return Err("animated entity disappeared".to_string());
        };
        let texture = controller.target().texture.clone();
        if texture != last_texture {
            info!(
                "t={:.3}s {} -> {}",
                elapsed,
                controller.current_animation(),
                texture.as_ref().map_or("<none>", |t| t.as_str())
            );
            last_texture = texture;
        }
    }
    Ok(())
}

/// Number of `step`-second ticks needed to cover `seconds`.
fn tick_count(seconds: f32, step: f32) -> Result<u64, String> {
    if !step.is_finite() || step <= 0.0 {
        return Err(format!("step must be a positive number, got {step}"));
    }
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(format!("seconds must be a non-negative number, got {seconds}"));
    }
    let ticks = (f64::from(seconds) / f64::from(step)).ceil();
    if ticks > MAX_TICKS as f64 {
        return Err(format!(
            "{seconds}s at {step}s per tick needs more than {MAX_TICKS} ticks"
        ));
    }
    Ok(ticks as u64)
}
