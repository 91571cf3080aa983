use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use plate_core::{load_scene, preset, validate_dimensions, SceneDescription};
use plate_renderer::{render, RenderConfig};

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_image;

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.log_level.into());

    if args.list_presets {
        for name in preset::NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    // Fail fast on bad input before any rendering work
    validate_dimensions(args.width, args.height)?;

    let description = scene_description(args)?;
    let config = render_config(args)?;
    let scene = description.to_scene();

    info!(
        "Rendering {}x{}: {} spheres, ground {}, max depth {}",
        args.width,
        args.height,
        scene.len(),
        if scene.ground.is_some() { "on" } else { "off" },
        config.max_depth
    );

    let start = Instant::now();
    let image = render(args.width, args.height, &scene, &description.camera, &config);
    info!("Rendered in {:.2}s", start.elapsed().as_secs_f32());

    save_image(&image, &args.output)?;
    info!("Saved {}", args.output.display());

    Ok(())
}

/// Resolve the scene from --scene or --preset, then apply overrides.
fn scene_description(args: &Args) -> Result<SceneDescription> {
    let description = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => preset::lookup(&args.preset)?,
    };

    let mut description = description.with_camera(args.camera, args.look_at);
    if let Some(scale) = args.checker_scale {
        description.checker_scale = scale;
    }
    if args.no_ground {
        description.ground = false;
    }

    description.validate()?;
    Ok(description)
}

fn render_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.render_config {
        Some(path) => load_render_config(path)?,
        None => RenderConfig::default(),
    };
    if let Some(depth) = args.max_depth {
        config.max_depth = depth;
    }
    Ok(config)
}

fn load_render_config(path: &Path) -> Result<RenderConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read render config {}", path.display()))?;
    let config = serde_json::from_str(&json)
        .with_context(|| format!("Invalid render config {}", path.display()))?;
    log::debug!("Loaded render config from {}", path.display());
    Ok(config)
}
