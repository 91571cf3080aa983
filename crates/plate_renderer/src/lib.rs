//! Plate Renderer - placeholder image synthesis
//!
//! A small Whitted-style ray tracer: spheres with optional mirror
//! reflectivity over a checkerboard ground plane, lit by a fixed sky and
//! sun. Rendering is a pure function of its inputs and runs in parallel
//! buckets with rayon.

mod bucket;
mod camera;
mod hit;
mod integrator;
mod renderer;
mod tone;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Viewport;
pub use hit::{hit_plane, hit_sphere, intersect, HitRecord, Surface, PLANE_MIN_DIRECTION};
pub use integrator::{ray_color, sky_color, ShadingConfig, SkyConfig};
pub use renderer::{render, render_pixel, Image, RenderConfig};
pub use tone::{luminance, to_rgba8, tone_map, vignette, ToneConfig};

/// Re-export scene and math types used in the public API
pub use plate_core::{Color, GroundPlane, PlaneTexture, Scene, Sphere};
pub use plate_math::{Camera, DVec3, Ray};
