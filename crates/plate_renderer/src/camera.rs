//! Primary ray generation.

use plate_math::{Camera, DVec3, Ray};

/// Per-render pinhole projection derived from a [`Camera`].
///
/// Built once per render call from the camera's basis; nothing here is
/// cached on the camera itself.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    origin: DVec3,
    /// Direction through the center of pixel (0, 0)
    pixel00_dir: DVec3,
    pixel_delta_u: DVec3,
    pixel_delta_v: DVec3,
}

impl Viewport {
    /// Set up the image plane one unit in front of the camera.
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        let basis = camera.basis();

        let theta = camera.vfov.to_radians();
        let viewport_height = 2.0 * (theta / 2.0).tan();
        let viewport_width = viewport_height * (width as f64 / height as f64);

        // Rows run top to bottom, so v points down the image
        let viewport_u = viewport_width * basis.right;
        let viewport_v = -viewport_height * basis.up;

        let pixel_delta_u = viewport_u / width as f64;
        let pixel_delta_v = viewport_v / height as f64;

        let viewport_upper_left = basis.forward - viewport_u / 2.0 - viewport_v / 2.0;
        let pixel00_dir = viewport_upper_left + 0.5 * (pixel_delta_u + pixel_delta_v);

        Self {
            width,
            height,
            origin: camera.position,
            pixel00_dir,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Ray through the center of pixel (x, y), row 0 at the top.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let direction =
            self.pixel00_dir + (x as f64) * self.pixel_delta_u + (y as f64) * self.pixel_delta_v;
        Ray::new(self.origin, direction)
    }
}
