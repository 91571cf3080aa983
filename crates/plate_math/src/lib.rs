// Re-export glam for convenience
pub use glam::*;

// Plate math types
mod camera;
mod interval;
mod ray;
pub mod vector;

pub use camera::{Camera, CameraBasis, WORLD_UP};
pub use interval::Interval;
pub use ray::Ray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dvec3_creation() {
        let v = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_dvec3_operations() {
        let a = DVec3::new(1.0, 2.0, 3.0);
        let b = DVec3::new(4.0, 5.0, 6.0);
        assert_eq!(vector::add(a, b), DVec3::new(5.0, 7.0, 9.0));
        assert_eq!(vector::sub(b, a), DVec3::splat(3.0));
    }
}
