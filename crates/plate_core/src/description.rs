//! JSON scene descriptions.
//!
//! A `SceneDescription` is the caller-facing form of a scene: plain data
//! that can be loaded from disk, validated, and turned into a [`Scene`]
//! plus [`Camera`] for the renderer. All validation happens here so the
//! render core never has to check its inputs.
//!
//! ```json
//! {
//!   "spheres": [
//!     { "radius": 1.0, "color": [0.9, 0.1, 0.1], "center": [0.0, 1.0, 0.0] }
//!   ],
//!   "camera": { "position": [0.0, 1.5, 5.0], "look_at": [0.0, 0.5, 0.0] },
//!   "checker_scale": 1.0
//! }
//! ```

use std::path::Path;

use plate_math::{Camera, DVec3, Interval};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scene::{GroundPlane, Scene, Sphere};

/// Errors found while validating a scene description or render request.
#[derive(Error, Debug, PartialEq)]
pub enum DescriptionError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Sphere {index}: radius must be > 0, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Sphere {index}: color components must be in [0, 1]")]
    InvalidColor { index: usize },

    #[error("Sphere {index}: reflectivity must be in [0, 1], got {reflectivity}")]
    InvalidReflectivity { index: usize, reflectivity: f64 },

    #[error("Non-finite value in {0}")]
    NonFinite(String),

    #[error("Checker scale must be > 0, got {0}")]
    InvalidCheckerScale(f64),

    #[error("Camera vfov must be in (0, 180) degrees, got {0}")]
    InvalidFieldOfView(f64),
}

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] DescriptionError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Reject zero-sized images before any rendering work is done.
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), DescriptionError> {
    if width == 0 || height == 0 {
        return Err(DescriptionError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Plain-data scene: spheres, camera, and ground settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub spheres: Vec<Sphere>,
    pub camera: Camera,
    /// Whether the checkerboard ground plane is present
    pub ground: bool,
    /// Checker cells per world unit
    pub checker_scale: f64,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            spheres: Vec::new(),
            camera: Camera::default(),
            ground: true,
            checker_scale: 1.0,
        }
    }
}

impl SceneDescription {
    /// Parse a description from a JSON string and validate it.
    pub fn from_json(json: &str) -> LoadResult<Self> {
        let description: SceneDescription = serde_json::from_str(json)?;
        description.validate()?;
        Ok(description)
    }

    /// Check every sphere and the ground settings.
    pub fn validate(&self) -> Result<(), DescriptionError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() || !sphere.radius.is_finite() {
                return Err(DescriptionError::NonFinite(format!("sphere {}", index)));
            }
            if sphere.radius <= 0.0 {
                return Err(DescriptionError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !sphere.color.to_array().iter().all(|&c| Interval::UNIT.contains(c)) {
                return Err(DescriptionError::InvalidColor { index });
            }
            if !Interval::UNIT.contains(sphere.reflectivity) {
                return Err(DescriptionError::InvalidReflectivity {
                    index,
                    reflectivity: sphere.reflectivity,
                });
            }
        }

        let camera = &self.camera;
        if !camera.position.is_finite() || !camera.look_at.is_finite() || !camera.vfov.is_finite() {
            return Err(DescriptionError::NonFinite("camera".to_string()));
        }
        if camera.vfov <= 0.0 || camera.vfov >= 180.0 {
            return Err(DescriptionError::InvalidFieldOfView(camera.vfov));
        }

        if !self.checker_scale.is_finite() || self.checker_scale <= 0.0 {
            return Err(DescriptionError::InvalidCheckerScale(self.checker_scale));
        }

        Ok(())
    }

    /// Build the renderer's scene.
    pub fn to_scene(&self) -> Scene {
        let scene = Scene::new(self.spheres.clone());
        if self.ground {
            scene.with_ground(GroundPlane::checker(self.checker_scale))
        } else {
            scene.without_ground()
        }
    }

    /// Override the camera position and/or target.
    pub fn with_camera(mut self, position: Option<DVec3>, look_at: Option<DVec3>) -> Self {
        if let Some(position) = position {
            self.camera.position = position;
        }
        if let Some(look_at) = look_at {
            self.camera.look_at = look_at;
        }
        self
    }
}

/// Load and validate a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<SceneDescription> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let description = SceneDescription::from_json(&json)?;

    log::debug!(
        "Loaded scene {}: {} spheres, ground {}",
        path.display(),
        description.spheres.len(),
        if description.ground { "on" } else { "off" }
    );

    Ok(description)
}
