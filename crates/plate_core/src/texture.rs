//! Ground plane textures.
//!
//! The ground plane has no per-object color. A texture predicate decides,
//! for each hit point, which of the two plane grays to use.

use plate_math::DVec3;
use serde::{Deserialize, Serialize};

/// Binary texture for the ground plane.
///
/// Implemented for any `Fn(DVec3) -> bool` closure, so callers can pass
/// their own pattern without defining a type.
pub trait PlaneTexture: Send + Sync {
    /// Returns true where the plane should use its light gray.
    fn is_light(&self, point: DVec3) -> bool;
}

impl<F> PlaneTexture for F
where
    F: Fn(DVec3) -> bool + Send + Sync,
{
    fn is_light(&self, point: DVec3) -> bool {
        self(point)
    }
}

/// Checkerboard on the XZ plane with squares of size `1 / scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Checker {
    pub scale: f64,
}

impl Checker {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl PlaneTexture for Checker {
    fn is_light(&self, point: DVec3) -> bool {
        let cell_x = (point.x * self.scale).floor() as i64;
        let cell_z = (point.z * self.scale).floor() as i64;
        (cell_x + cell_z).rem_euclid(2) == 0
    }
}
