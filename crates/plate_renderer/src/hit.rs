//! Ray-scene intersection.
//!
//! Rays are tested against the ground plane first and then every sphere
//! in scene order. The search interval shrinks to each new hit, so only a
//! strictly closer surface can replace the current one.

use plate_core::{Color, Scene, Sphere};
use plate_math::vector::{dot, scale, sub};
use plate_math::{DVec3, Interval, Ray};

/// Rays with `|direction.y|` at or below this never hit the ground plane.
pub const PLANE_MIN_DIRECTION: f64 = 1e-9;

/// What was hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// A sphere's material
    Sphere { color: Color, reflectivity: f64 },
    /// The ground plane; its color comes from the scene's texture
    Plane,
}

/// Record of a ray-surface intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection
    pub point: DVec3,
    /// Unit surface normal, always facing the incoming ray
    pub normal: DVec3,
    pub surface: Surface,
}

/// Intersect a ray with a single sphere.
///
/// Prefers the nearer root; falls back to the farther one when the nearer
/// root lies outside `ray_t` (e.g. a reflected ray leaving the surface).
pub fn hit_sphere(sphere: &Sphere, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let oc = sub(sphere.center, ray.origin());
    let h = dot(ray.direction(), oc);
    let c = dot(oc, oc) - sphere.radius * sphere.radius;

    let discriminant = h * h - c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    let mut root = h - sqrtd;
    if !ray_t.surrounds(root) {
        root = h + sqrtd;
        if !ray_t.surrounds(root) {
            return None;
        }
    }

    let point = ray.at(root);
    let outward_normal = scale(sub(point, sphere.center), 1.0 / sphere.radius);
    // Flip when the ray starts inside the sphere
    let normal = if dot(ray.direction(), outward_normal) > 0.0 {
        scale(outward_normal, -1.0)
    } else {
        outward_normal
    };

    Some(HitRecord {
        t: root,
        point,
        normal,
        surface: Surface::Sphere {
            color: sphere.color,
            reflectivity: sphere.reflectivity,
        },
    })
}

/// Intersect a ray with the ground plane y = 0.
pub fn hit_plane(ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
    let dy = ray.direction().y;
    if dy.abs() <= PLANE_MIN_DIRECTION {
        return None;
    }

    let t = -ray.origin().y / dy;
    if !ray_t.surrounds(t) {
        return None;
    }

    let mut point = ray.at(t);
    point.y = 0.0;
    let normal = if dy < 0.0 { DVec3::Y } else { DVec3::NEG_Y };

    Some(HitRecord {
        t,
        point,
        normal,
        surface: Surface::Plane,
    })
}

/// Find the nearest surface along `ray` beyond `epsilon`.
pub fn intersect(scene: &Scene, ray: &Ray, epsilon: f64) -> Option<HitRecord> {
    let mut ray_t = Interval::beyond(epsilon);
    let mut closest = None;

    if scene.ground.is_some() {
        if let Some(hit) = hit_plane(ray, ray_t) {
            ray_t = ray_t.with_max(hit.t);
            closest = Some(hit);
        }
    }

    for sphere in &scene.spheres {
        if let Some(hit) = hit_sphere(sphere, ray, ray_t) {
            ray_t = ray_t.with_max(hit.t);
            closest = Some(hit);
        }
    }

    closest
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-4;

    fn unit_sphere(center: DVec3, color: Color) -> Sphere {
        Sphere::matte(center, 1.0, color)
    }

    #[test]
    fn test_sphere_hit_distance() {
        let sphere = unit_sphere(DVec3::ZERO, Color::X);
        let origins = [
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(3.0, -2.0, 1.0),
            DVec3::new(-10.0, 4.0, 7.5),
        ];

        for origin in origins {
            let ray = Ray::new(origin, sphere.center - origin);
            let hit = hit_sphere(&sphere, &ray, Interval::beyond(EPS)).unwrap();
            let expected = (origin - sphere.center).length() - sphere.radius;

            assert!((hit.t - expected).abs() < 1e-4, "t={} expected={}", hit.t, expected);
            assert!((hit.normal.length() - 1.0).abs() < 1e-9);
            assert!(dot(hit.normal, ray.direction()) < 0.0);
        }
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere(DVec3::new(0.0, 0.0, -3.0), Color::X);

        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::ZERO, DVec3::Y);
        assert!(hit_sphere(&sphere, &ray, Interval::beyond(EPS)).is_none());

        // Grazing ray: zero discriminant counts as a miss
        let ray = Ray::new(DVec3::new(1.0, 0.0, 0.0), DVec3::NEG_Z);
        assert!(hit_sphere(&sphere, &ray, Interval::beyond(EPS)).is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::matte(DVec3::ZERO, 2.0, Color::ONE);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let hit = hit_sphere(&sphere, &ray, Interval::beyond(EPS)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
        // Normal faces back toward the ray origin
        assert!((hit.normal - DVec3::NEG_X).length() < 1e-9);
    }

    #[test]
    fn test_sphere_ignores_origin_on_surface() {
        // A bounce ray leaving the surface must not re-hit at t ~ 0
        let sphere = unit_sphere(DVec3::ZERO, Color::ONE);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::Z);
        assert!(hit_sphere(&sphere, &ray, Interval::beyond(EPS)).is_none());
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::new(1.0, -1.0, 0.0));
        let hit = hit_plane(&ray, Interval::beyond(EPS)).unwrap();

        assert!((hit.t - 2.0 * 2f64.sqrt()).abs() < 1e-9);
        assert!((hit.point - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-9);
        assert_eq!(hit.normal, DVec3::Y);
        assert_eq!(hit.surface, Surface::Plane);
    }

    #[test]
    fn test_plane_miss() {
        // Parallel to the plane
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::X);
        assert!(hit_plane(&ray, Interval::beyond(EPS)).is_none());

        // Pointing away from the plane
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Y);
        assert!(hit_plane(&ray, Interval::beyond(EPS)).is_none());

        // Starting on the plane (inside the epsilon band)
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, -1.0, 1.0));
        assert!(hit_plane(&ray, Interval::beyond(EPS)).is_none());
    }

    #[test]
    fn test_plane_hit_from_below() {
        let ray = Ray::new(DVec3::new(0.0, -1.0, 0.0), DVec3::Y);
        let hit = hit_plane(&ray, Interval::beyond(EPS)).unwrap();
        assert_eq!(hit.normal, DVec3::NEG_Y);
    }

    #[test]
    fn test_intersect_nearest_wins() {
        let near = unit_sphere(DVec3::new(0.0, 1.5, -3.0), Color::X);
        let far = unit_sphere(DVec3::new(0.0, 1.5, -8.0), Color::Y);

        // Far sphere listed first; order must not matter
        let scene = Scene::new(vec![far, near]);
        let ray = Ray::new(DVec3::new(0.0, 1.5, 0.0), DVec3::NEG_Z);

        let hit = intersect(&scene, &ray, EPS).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
        assert_eq!(
            hit.surface,
            Surface::Sphere {
                color: Color::X,
                reflectivity: 0.0
            }
        );
    }

    #[test]
    fn test_intersect_tie_keeps_first() {
        let first = unit_sphere(DVec3::new(0.0, 0.0, -3.0), Color::X);
        let second = unit_sphere(DVec3::new(0.0, 0.0, -3.0), Color::Z);
        let scene = Scene::new(vec![first, second]).without_ground();

        let ray = Ray::new(DVec3::ZERO, DVec3::NEG_Z);
        let hit = intersect(&scene, &ray, EPS).unwrap();
        assert!(matches!(hit.surface, Surface::Sphere { color, .. } if color == Color::X));
    }

    #[test]
    fn test_intersect_plane_and_spheres() {
        let sphere = unit_sphere(DVec3::new(0.0, 1.0, -10.0), Color::X);
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::new(0.0, -1.0, -1.0));

        // The plane is closer than the sphere along this ray
        let scene = Scene::new(vec![sphere]);
        let hit = intersect(&scene, &ray, EPS).unwrap();
        assert_eq!(hit.surface, Surface::Plane);

        // Without ground the ray escapes
        let scene = Scene::new(vec![sphere]).without_ground();
        assert!(intersect(&scene, &ray, EPS).is_none());
    }
}
