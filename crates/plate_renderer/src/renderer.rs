//! Render entry point.
//!
//! `render` is a pure function of (dimensions, scene, camera, config):
//! every pixel reads only immutable inputs and writes its own slot, so
//! buckets run in parallel with no coordination beyond the final join.

use plate_core::Scene;
use plate_math::{Camera, DVec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::camera::Viewport;
use crate::integrator::{ray_color, ShadingConfig, SkyConfig};
use crate::tone::{to_rgba8, tone_map, vignette, ToneConfig};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of surfaces a camera ray may visit
    pub max_depth: u32,
    /// Minimum hit distance, also the offset for secondary rays
    pub epsilon: f64,
    /// Reflectivity below this ends the bounce loop
    pub min_reflectivity: f64,
    /// Direction toward the sun (normalized on use)
    pub sun_direction: DVec3,
    /// Tile size for parallel rendering
    pub bucket_size: u32,
    pub sky: SkyConfig,
    pub shading: ShadingConfig,
    pub tone: ToneConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            epsilon: 1e-4,
            min_reflectivity: 1e-3,
            sun_direction: DVec3::new(0.5, 0.8, 0.3),
            bucket_size: DEFAULT_BUCKET_SIZE,
            sky: SkyConfig::default(),
            shading: ShadingConfig::default(),
            tone: ToneConfig::default(),
        }
    }
}

/// Row-major RGBA8 image, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create a new transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = self.offset(x, y);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[offset..offset + 4]);
        rgba
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the image, returning the RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Copy a rendered bucket into place.
    fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        let row_len = bucket.width as usize;

        for (row, src) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.offset(bucket.x, bucket.y + row as u32);
            let bytes: &[u8] = bytemuck::cast_slice(src);
            self.pixels[start..start + bytes.len()].copy_from_slice(bytes);
        }
    }
}

/// Trace, tone map, and vignette a single pixel.
pub fn render_pixel(
    viewport: &Viewport,
    scene: &Scene,
    config: &RenderConfig,
    x: u32,
    y: u32,
) -> [u8; 4] {
    let ray = viewport.ray(x, y);
    let linear = ray_color(&ray, scene, config);
    let mapped = tone_map(linear, &config.tone);
    let falloff = vignette(
        x,
        y,
        viewport.width,
        viewport.height,
        config.tone.vignette_strength,
    );
    to_rgba8(mapped * falloff)
}

/// Render the scene to an RGBA8 image.
///
/// Buckets are rendered in parallel and assembled after all of them
/// finish, so the returned image is always complete.
pub fn render(
    width: u32,
    height: u32,
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
) -> Image {
    let viewport = Viewport::new(camera, width, height);
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::debug!(
        "Rendering {}x{}: {} spheres, ground {}, {} buckets",
        width,
        height,
        scene.len(),
        if scene.ground.is_some() { "on" } else { "off" },
        buckets.len()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, &viewport, scene, config)))
        .collect();

    let mut image = Image::new(width, height);
    for result in &results {
        image.write_bucket(result);
    }

    image
}
