//! Vector operations used by the renderer.
//!
//! Thin named wrappers over `glam::DVec3` so the shading code reads as
//! explicit operations. `normalize` and `reflect` carry the renderer's
//! own semantics (zero-guarded normalization, mirror about a unit normal).

use glam::DVec3;

/// Lengths at or below this are treated as the zero vector by [`normalize`].
pub const NORMALIZE_EPSILON: f64 = 1e-12;

#[inline]
pub fn add(a: DVec3, b: DVec3) -> DVec3 {
    a + b
}

#[inline]
pub fn sub(a: DVec3, b: DVec3) -> DVec3 {
    a - b
}

/// Componentwise product.
#[inline]
pub fn mul(a: DVec3, b: DVec3) -> DVec3 {
    a * b
}

#[inline]
pub fn scale(v: DVec3, s: f64) -> DVec3 {
    v * s
}

#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Cross product via the three-term determinant.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    DVec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Divide `v` by its length.
///
/// A (near) zero-length input yields `DVec3::ZERO` instead of NaN.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let length = dot(v, v).sqrt();
    if length <= NORMALIZE_EPSILON || !length.is_finite() {
        return DVec3::ZERO;
    }
    v / length
}

/// Mirror `v` about the unit normal `n`: `v - 2 (v . n) n`.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - n * (2.0 * dot(v, n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_is_componentwise() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(0.5, 0.0, -1.0);
        assert_eq!(mul(a, b), DVec3::new(0.5, 0.0, -3.0));
        assert_eq!(scale(a, 2.0), DVec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_cross_right_handed() {
        assert_eq!(cross(DVec3::X, DVec3::Y), DVec3::Z);
        assert_eq!(cross(DVec3::Y, DVec3::Z), DVec3::X);
        assert_eq!(cross(DVec3::Z, DVec3::X), DVec3::Y);

        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(-2.0, 0.5, 4.0);
        assert_eq!(cross(a, b), a.cross(b));
    }

    #[test]
    fn test_normalize() {
        let n = normalize(DVec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector() {
        // Degenerate input must not produce NaN
        assert_eq!(normalize(DVec3::ZERO), DVec3::ZERO);
        assert_eq!(normalize(DVec3::splat(1e-14)), DVec3::ZERO);
    }

    #[test]
    fn test_reflect() {
        let incoming = DVec3::new(1.0, -1.0, 0.0);
        let reflected = reflect(incoming, DVec3::Y);
        assert_eq!(reflected, DVec3::new(1.0, 1.0, 0.0));

        // Reflecting twice returns the original vector
        assert_eq!(reflect(reflected, DVec3::Y), incoming);
    }
}
