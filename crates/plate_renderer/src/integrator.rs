//! Radiance estimation along a camera ray.
//!
//! Iterative Whitted-style loop: shade the nearest surface, then follow
//! the mirror reflection with reduced throughput until the ray escapes to
//! the sky, hits a non-reflective surface, or the depth cap is reached.
//!
//! The lighting model is deliberately simple and not physically based:
//! - Ambient fill scaled by how much the normal faces up
//! - Lambert diffuse from a single directional sun, weighted by elevation
//! - A distance-thresholded occlusion test toward the sun
//! - Phong-style specular on the reflected view direction
//! - Rim darkening on the ground plane at grazing angles

use plate_core::{Color, Scene};
use plate_math::vector::{add, dot, normalize, reflect, scale};
use plate_math::{DVec3, Ray};
use serde::{Deserialize, Serialize};

use crate::hit::{intersect, HitRecord, Surface};
use crate::RenderConfig;

/// Sky gradient and sun glow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Color straight up
    pub zenith: Color,
    /// Color at (and below) the horizon
    pub horizon: Color,
    /// Tint added around the sun
    pub sun_color: Color,
    /// Weight of the wide `s^2` glow, where `s = dot(dir, sun)`
    pub glow_strength: f64,
    /// Weight of the tight sun disc term
    pub disc_strength: f64,
    /// Exponent of the sun disc term
    pub disc_exponent: i32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            zenith: Color::new(0.22, 0.42, 0.82),
            horizon: Color::new(0.78, 0.86, 0.95),
            sun_color: Color::new(1.0, 0.9, 0.7),
            glow_strength: 0.25,
            disc_strength: 0.8,
            disc_exponent: 64,
        }
    }
}

/// Surface lighting constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Sky fill for an upward-facing surface
    pub ambient: f64,
    /// Scale of the Lambert sun term
    pub sun_strength: f64,
    pub specular_strength: f64,
    pub sphere_specular_exponent: f64,
    pub plane_specular_exponent: f64,
    /// Occluders closer than this along the sun ray cast a shadow
    pub shadow_range: f64,
    /// Light factor inside a shadow
    pub shadow_floor: f64,
    /// Plane darkening at grazing angles, 0 disables it
    pub rim_strength: f64,
    pub rim_power: f64,
    /// Gray level where the plane texture is light
    pub plane_light: f64,
    /// Gray level where the plane texture is dark
    pub plane_dark: f64,
    pub plane_reflectivity: f64,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.25,
            sun_strength: 0.85,
            specular_strength: 0.6,
            sphere_specular_exponent: 48.0,
            plane_specular_exponent: 12.0,
            shadow_range: 50.0,
            shadow_floor: 0.35,
            rim_strength: 0.5,
            rim_power: 3.0,
            plane_light: 0.8,
            plane_dark: 0.3,
            plane_reflectivity: 0.1,
        }
    }
}

/// Clamp every channel to [0, 1].
#[inline]
fn clamp_color(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Sky radiance seen along a unit `direction`.
pub fn sky_color(direction: DVec3, sun: DVec3, sky: &SkyConfig) -> Color {
    // Rises quickly above the horizon, flattens toward the zenith
    let height = direction.y.clamp(0.0, 1.0);
    let blend = 1.0 - (1.0 - height).powi(3);
    let gradient = add(scale(sky.horizon, 1.0 - blend), scale(sky.zenith, blend));

    let s = dot(direction, sun).max(0.0);
    let glow = sky.glow_strength * s * s + sky.disc_strength * s.powi(sky.disc_exponent);

    clamp_color(add(gradient, scale(sky.sun_color, glow)))
}

/// Light reaching `origin` from the sun: 1 when unobstructed, otherwise
/// `shadow_floor` if the blocker is within `shadow_range`.
pub(crate) fn sun_visibility(
    scene: &Scene,
    origin: DVec3,
    sun: DVec3,
    config: &RenderConfig,
) -> f64 {
    let shadow_ray = Ray::new(origin, sun);
    match intersect(scene, &shadow_ray, config.epsilon) {
        Some(blocker) if blocker.t < config.shading.shadow_range => config.shading.shadow_floor,
        _ => 1.0,
    }
}

/// Local color, reflectivity, and specular exponent at a hit.
fn surface_response(
    scene: &Scene,
    hit: &HitRecord,
    direction: DVec3,
    shading: &ShadingConfig,
) -> (Color, f64, f64) {
    match hit.surface {
        Surface::Sphere {
            color,
            reflectivity,
        } => (color, reflectivity, shading.sphere_specular_exponent),
        Surface::Plane => {
            let light = scene
                .ground
                .as_ref()
                .is_some_and(|ground| ground.texture().is_light(hit.point));
            let gray = if light {
                shading.plane_light
            } else {
                shading.plane_dark
            };

            let grazing = 1.0 - dot(direction, hit.normal).abs();
            let rim = (1.0 - shading.rim_strength * grazing.powf(shading.rim_power))
                .clamp(0.0, 1.0);

            (
                Color::splat(gray * rim),
                shading.plane_reflectivity,
                shading.plane_specular_exponent,
            )
        }
    }
}

/// Shade a single hit, returning (radiance, reflectivity).
fn shade(
    scene: &Scene,
    ray: &Ray,
    hit: &HitRecord,
    sun: DVec3,
    config: &RenderConfig,
) -> (Color, f64) {
    let shading = &config.shading;
    let (color, reflectivity, exponent) = surface_response(scene, hit, ray.direction(), shading);

    let offset_point = add(hit.point, scale(hit.normal, config.epsilon));
    let visibility = sun_visibility(scene, offset_point, sun, config);

    // Upward-facing surfaces catch more of both sun and sky
    let elevation = 0.5 + 0.5 * hit.normal.y;
    let diffuse = dot(hit.normal, sun).max(0.0) * elevation * visibility * shading.sun_strength;
    let lighting = shading.ambient * elevation + diffuse;

    let mirrored = reflect(ray.direction(), hit.normal);
    let specular =
        dot(mirrored, sun).max(0.0).powf(exponent) * visibility * shading.specular_strength;

    let radiance = clamp_color(add(scale(clamp_color(color), lighting), Color::splat(specular)));
    (radiance, reflectivity.clamp(0.0, 1.0))
}

/// Compute the linear color seen by a camera ray.
///
/// Each bounce adds `throughput * radiance`; reflective surfaces scale the
/// throughput and continue along the mirrored ray. The result is not
/// clamped, since reflections may add up past 1.
pub fn ray_color(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    let sun = normalize(config.sun_direction);

    let mut ray = *ray;
    let mut throughput: f64 = 1.0;
    let mut result = Color::ZERO;

    for _ in 0..config.max_depth {
        let Some(hit) = intersect(scene, &ray, config.epsilon) else {
            let sky = sky_color(ray.direction(), sun, &config.sky);
            result = add(result, scale(sky, throughput));
            break;
        };

        let (radiance, reflectivity) = shade(scene, &ray, &hit, sun, config);
        result = add(result, scale(radiance, throughput));

        if reflectivity < config.min_reflectivity {
            break;
        }

        throughput *= reflectivity;
        ray = Ray::new(
            add(hit.point, scale(hit.normal, config.epsilon)),
            reflect(ray.direction(), hit.normal),
        );
    }

    result
}
