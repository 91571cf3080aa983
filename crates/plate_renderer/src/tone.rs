//! Display transform: linear radiance to 8-bit RGBA.

use plate_core::Color;
use plate_math::Interval;
use serde::{Deserialize, Serialize};

/// ITU-R BT.709 luma weights.
const LUMA_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Tone mapping and vignette settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub gamma: f64,
    /// Factor pushing channels away from luminance (1 = unchanged)
    pub contrast: f64,
    /// `k` in `1 - k * d^2`, with d = 1 at the image corners
    pub vignette_strength: f64,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            gamma: 2.2,
            contrast: 1.15,
            vignette_strength: 0.35,
        }
    }
}

/// Relative luminance of a display-space color.
#[inline]
pub fn luminance(color: Color) -> f64 {
    LUMA_WEIGHTS[0] * color.x + LUMA_WEIGHTS[1] * color.y + LUMA_WEIGHTS[2] * color.z
}

/// Reinhard `c / (1 + c)`, gamma, then a luminance-preserving contrast
/// boost. Non-finite or negative channels are treated as 0.
pub fn tone_map(color: Color, tone: &ToneConfig) -> Color {
    let compress = |c: f64| {
        let c = if c.is_finite() { c.max(0.0) } else { 0.0 };
        (c / (1.0 + c)).powf(1.0 / tone.gamma)
    };
    let mapped = Color::new(compress(color.x), compress(color.y), compress(color.z));

    let luma = luminance(mapped);
    let contrasted = Color::splat(luma) + (mapped - Color::splat(luma)) * tone.contrast;
    contrasted.clamp(Color::ZERO, Color::ONE)
}

/// Radial falloff for pixel (x, y): `clamp(1 - k d^2, 0, 1)`.
pub fn vignette(x: u32, y: u32, width: u32, height: u32, strength: f64) -> f64 {
    let dx = (x as f64 + 0.5) / width as f64 - 0.5;
    let dy = (y as f64 + 0.5) / height as f64 - 0.5;
    // Normalized so the image corners sit at d = 1
    let d2 = (dx * dx + dy * dy) / 0.5;
    (1.0 - strength * d2).clamp(0.0, 1.0)
}

/// Quantize a [0, 1] color to opaque RGBA8.
pub fn to_rgba8(color: Color) -> [u8; 4] {
    let quantize = |c: f64| {
        let c = if c.is_finite() { Interval::UNIT.clamp(c) } else { 0.0 };
        (c * 255.0).round() as u8
    };
    [quantize(color.x), quantize(color.y), quantize(color.z), 255]
}
