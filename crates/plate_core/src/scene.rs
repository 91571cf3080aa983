//! Scene types for Plate.
//!
//! A scene is an ordered list of spheres plus an optional ground plane
//! at y = 0. Nothing in a scene is mutated once rendering starts.

use std::fmt;

use plate_math::DVec3;
use serde::{Deserialize, Serialize};

use crate::texture::{Checker, PlaneTexture};

/// Color type alias (linear RGB, components in [0, 1])
pub type Color = DVec3;

/// A sphere with a flat color and optional mirror reflectivity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Radius, must be > 0
    pub radius: f64,
    /// Surface color (RGB, 0-1)
    pub color: Color,
    /// Mirror reflectivity (0 = matte, 1 = perfect mirror)
    #[serde(default)]
    pub reflectivity: f64,
    /// Center in world space
    pub center: DVec3,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: DVec3, radius: f64, color: Color, reflectivity: f64) -> Self {
        Self {
            radius,
            color,
            reflectivity,
            center,
        }
    }

    /// Create a matte (non-reflective) sphere.
    pub fn matte(center: DVec3, radius: f64, color: Color) -> Self {
        Self::new(center, radius, color, 0.0)
    }
}

/// The infinite ground plane at y = 0.
pub struct GroundPlane {
    texture: Box<dyn PlaneTexture>,
}

impl GroundPlane {
    /// Create a ground plane with a custom texture predicate.
    pub fn new(texture: impl PlaneTexture + 'static) -> Self {
        Self {
            texture: Box::new(texture),
        }
    }

    /// Create a ground plane with a checkerboard of the given scale.
    pub fn checker(scale: f64) -> Self {
        Self::new(Checker::new(scale))
    }

    /// Get the plane's texture predicate.
    pub fn texture(&self) -> &dyn PlaneTexture {
        self.texture.as_ref()
    }
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self::new(Checker::default())
    }
}

impl fmt::Debug for GroundPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroundPlane").finish_non_exhaustive()
    }
}

/// Spheres plus an optional ground plane.
#[derive(Debug, Default)]
pub struct Scene {
    /// Spheres in intersection order
    pub spheres: Vec<Sphere>,
    /// Ground plane at y = 0, if enabled
    pub ground: Option<GroundPlane>,
}

impl Scene {
    /// Create a scene with the default checkerboard ground.
    pub fn new(spheres: Vec<Sphere>) -> Self {
        Self {
            spheres,
            ground: Some(GroundPlane::default()),
        }
    }

    /// Replace the ground plane.
    pub fn with_ground(mut self, ground: GroundPlane) -> Self {
        self.ground = Some(ground);
        self
    }

    /// Remove the ground plane.
    pub fn without_ground(mut self) -> Self {
        self.ground = None;
        self
    }

    /// Add a sphere to the end of the list.
    pub fn add(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Get the number of spheres.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Check if the scene has no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
