use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use plate_math::DVec3;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "plate")]
#[command(about = "Render placeholder images: spheres over a checkerboard under a sunny sky")]
pub struct Args {
    /// Named scene preset (see --list-presets)
    #[arg(short, long, default_value = "default")]
    pub preset: String,

    /// JSON scene description, used instead of --preset
    #[arg(short, long)]
    pub scene: Option<PathBuf>,

    /// JSON render configuration (sky, shading, tone overrides)
    #[arg(long)]
    pub render_config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Output file (.png or .ppm)
    #[arg(short, long, default_value = "placeholder.png")]
    pub output: PathBuf,

    /// Camera position as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub camera: Option<DVec3>,

    /// Camera target as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    pub look_at: Option<DVec3>,

    /// Checker cells per world unit
    #[arg(long)]
    pub checker_scale: Option<f64>,

    /// Render without the ground plane
    #[arg(long)]
    pub no_ground: bool,

    /// Maximum reflection depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Print the available presets and exit
    #[arg(long)]
    pub list_presets: bool,
}

/// Parse "x,y,z" into a vector.
pub fn parse_vec3(value: &str) -> Result<DVec3, String> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", value, e))?;

    match parts.as_slice() {
        [x, y, z] => Ok(DVec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{}'", value)),
    }
}
