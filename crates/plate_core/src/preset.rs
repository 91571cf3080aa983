//! Named scene presets.
//!
//! Each preset maps a short name to a complete [`SceneDescription`], so a
//! placeholder image can be produced without writing a scene file.

use plate_math::{Camera, DVec3};
use thiserror::Error;

use crate::description::SceneDescription;
use crate::scene::{Color, Sphere};

/// Errors from preset lookup.
#[derive(Error, Debug, PartialEq)]
pub enum PresetError {
    #[error("Unknown preset '{name}' (available: {available})", available = NAMES.join(", "))]
    Unknown { name: String },
}

/// All preset names, in the order they are listed to users.
pub const NAMES: &[&str] = &["default", "single", "mirrors", "grid", "empty"];

/// Look up a preset by name (case-insensitive).
pub fn lookup(name: &str) -> Result<SceneDescription, PresetError> {
    let description = match name.to_ascii_lowercase().as_str() {
        "default" => default_scene(),
        "single" => single(),
        "mirrors" => mirrors(),
        "grid" => grid(),
        "empty" => empty(),
        _ => {
            return Err(PresetError::Unknown {
                name: name.to_string(),
            })
        }
    };
    Ok(description)
}

/// Three spheres on the checkerboard: matte red, chrome, and glossy blue.
fn default_scene() -> SceneDescription {
    SceneDescription {
        spheres: vec![
            Sphere::matte(DVec3::new(0.0, 1.0, 0.0), 1.0, Color::new(0.9, 0.15, 0.1)),
            Sphere::new(
                DVec3::new(-2.2, 0.7, -0.6),
                0.7,
                Color::new(0.9, 0.9, 0.9),
                0.8,
            ),
            Sphere::new(
                DVec3::new(2.0, 0.6, 0.4),
                0.6,
                Color::new(0.15, 0.3, 0.9),
                0.2,
            ),
        ],
        camera: Camera::new(DVec3::new(0.0, 1.8, 6.0), DVec3::new(0.0, 0.7, 0.0)),
        ..Default::default()
    }
}

/// One unit red sphere resting on the ground.
fn single() -> SceneDescription {
    SceneDescription {
        spheres: vec![Sphere::matte(
            DVec3::new(0.0, 1.0, 0.0),
            1.0,
            Color::new(0.9, 0.1, 0.1),
        )],
        camera: Camera::new(DVec3::new(0.0, 1.5, 4.5), DVec3::new(0.0, 0.8, 0.0)),
        ..Default::default()
    }
}

/// A row of mirrored spheres with increasing reflectivity.
fn mirrors() -> SceneDescription {
    let spheres = (0..4)
        .map(|i| {
            let x = -2.4 + 1.6 * i as f64;
            let reflectivity = 0.25 + 0.25 * i as f64;
            Sphere::new(
                DVec3::new(x, 0.7, 0.0),
                0.7,
                Color::new(0.85, 0.85, 0.9),
                reflectivity,
            )
        })
        .collect();

    SceneDescription {
        spheres,
        camera: Camera::new(DVec3::new(0.0, 2.0, 6.5), DVec3::new(0.0, 0.6, 0.0)),
        checker_scale: 2.0,
        ..Default::default()
    }
}

/// A 3x3 grid of small matte spheres in different hues.
fn grid() -> SceneDescription {
    let palette = [
        Color::new(0.9, 0.2, 0.2),
        Color::new(0.2, 0.8, 0.3),
        Color::new(0.2, 0.4, 0.9),
        Color::new(0.9, 0.8, 0.2),
        Color::new(0.8, 0.3, 0.8),
        Color::new(0.2, 0.8, 0.8),
        Color::new(0.95, 0.55, 0.1),
        Color::new(0.6, 0.6, 0.6),
        Color::new(0.4, 0.25, 0.1),
    ];

    let mut spheres = Vec::with_capacity(palette.len());
    for row in 0..3 {
        for col in 0..3 {
            let center = DVec3::new(-1.5 + 1.5 * col as f64, 0.45, -1.5 + 1.5 * row as f64);
            spheres.push(Sphere::matte(center, 0.45, palette[row * 3 + col]));
        }
    }

    SceneDescription {
        spheres,
        camera: Camera::new(DVec3::new(0.0, 3.5, 5.5), DVec3::new(0.0, 0.2, -0.5)),
        ..Default::default()
    }
}

/// Sky and checkerboard only.
fn empty() -> SceneDescription {
    SceneDescription::default()
}
