//! Plate Core - Scene model and caller-side configuration.
//!
//! This crate provides:
//!
//! - **Scene types**: `Sphere`, `GroundPlane`, `Scene`
//! - **Plane textures**: the `PlaneTexture` predicate and the default `Checker`
//! - **Scene files**: JSON `SceneDescription` loading and validation
//! - **Presets**: named scene/camera sets for quick placeholder images
//!
//! # Example
//!
//! ```ignore
//! use plate_core::preset;
//!
//! let description = preset::lookup("default")?;
//! let scene = description.to_scene();
//! println!("{} spheres", scene.spheres.len());
//! ```

pub mod description;
pub mod preset;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use description::{
    load_scene, validate_dimensions, DescriptionError, LoadError, LoadResult, SceneDescription,
};
pub use preset::PresetError;
pub use scene::{Color, GroundPlane, Scene, Sphere};
pub use texture::{Checker, PlaneTexture};
