use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::vector::{cross, normalize};

/// World-space up reference used to build the camera frame.
pub const WORLD_UP: DVec3 = DVec3::Y;

/// Up reference used instead of [`WORLD_UP`] when the camera looks
/// straight up or down.
const FALLBACK_UP: DVec3 = DVec3::NEG_Z;

/// Squared length below which `forward x WORLD_UP` counts as degenerate.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Pinhole camera for the placeholder renderer.
///
/// Only the position and target are stored; the orthonormal frame is
/// derived per render call with [`Camera::basis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    pub position: DVec3,
    pub look_at: DVec3,
    /// Vertical field of view in degrees
    pub vfov: f64,
}

impl Camera {
    /// Create a new camera with the default field of view.
    pub fn new(position: DVec3, look_at: DVec3) -> Self {
        Self {
            position,
            look_at,
            ..Default::default()
        }
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Derive the forward/right/up frame.
    pub fn basis(&self) -> CameraBasis {
        CameraBasis::look_at(self.position, self.look_at)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 1.5, 5.0),
            look_at: DVec3::new(0.0, 0.5, 0.0),
            vfov: 50.0,
        }
    }
}

/// Orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: DVec3,
    pub right: DVec3,
    pub up: DVec3,
}

impl CameraBasis {
    /// Build the frame looking from `position` toward `target`.
    ///
    /// When `forward` is parallel to [`WORLD_UP`] the cross product
    /// vanishes, so the frame is built against `-Z` instead. If
    /// `position == target` every axis collapses to zero; that input is the
    /// caller's responsibility and is tolerated without panicking.
    pub fn look_at(position: DVec3, target: DVec3) -> Self {
        let forward = normalize(target - position);

        let mut side = cross(forward, WORLD_UP);
        if side.length_squared() < PARALLEL_EPSILON {
            side = cross(forward, FALLBACK_UP);
        }
        let right = normalize(side);
        let up = normalize(cross(right, forward));

        Self { forward, right, up }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::dot;

    fn assert_orthonormal(basis: &CameraBasis) {
        for axis in [basis.forward, basis.right, basis.up] {
            assert!(
                (axis.length() - 1.0).abs() < 1e-6,
                "axis {:?} is not unit length",
                axis
            );
        }
        assert!(dot(basis.forward, basis.right).abs() < 1e-6);
        assert!(dot(basis.forward, basis.up).abs() < 1e-6);
        assert!(dot(basis.right, basis.up).abs() < 1e-6);
    }

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(DVec3::new(0.0, 1.0, 4.0), DVec3::ZERO);

        assert_eq!(camera.position, DVec3::new(0.0, 1.0, 4.0));
        assert_eq!(camera.look_at, DVec3::ZERO);
        assert_eq!(camera.vfov, Camera::default().vfov);
    }

    #[test]
    fn test_basis_orthonormal() {
        let positions = [
            DVec3::new(0.0, 1.0, 4.0),
            DVec3::new(13.0, 2.0, 3.0),
            DVec3::new(-3.5, 0.2, -7.0),
            DVec3::new(0.1, 40.0, 0.0),
        ];
        let targets = [DVec3::ZERO, DVec3::new(1.0, 0.5, -2.0)];

        for position in positions {
            for target in targets {
                assert_orthonormal(&CameraBasis::look_at(position, target));
            }
        }
    }

    #[test]
    fn test_basis_orientation() {
        let basis = CameraBasis::look_at(DVec3::new(0.0, 0.0, 5.0), DVec3::ZERO);

        assert!((basis.forward - DVec3::NEG_Z).length() < 1e-12);
        assert!((basis.right - DVec3::X).length() < 1e-12);
        assert!((basis.up - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_basis_straight_down_uses_fallback() {
        let basis = CameraBasis::look_at(DVec3::new(0.0, 10.0, 0.0), DVec3::ZERO);
        assert_orthonormal(&basis);
        assert_eq!(basis.right, DVec3::X);

        let basis = CameraBasis::look_at(DVec3::ZERO, DVec3::new(0.0, 3.0, 0.0));
        assert_orthonormal(&basis);
    }

    #[test]
    fn test_basis_coincident_points() {
        // Degenerate, but must not produce NaN
        let basis = CameraBasis::look_at(DVec3::ONE, DVec3::ONE);
        assert_eq!(basis.forward, DVec3::ZERO);
        assert!(!basis.right.is_nan());
        assert!(!basis.up.is_nan());
    }
}
