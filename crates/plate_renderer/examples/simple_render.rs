//! Simple placeholder render example.
//!
//! Renders the default preset and saves it to PPM format.
//!
//! Run with: cargo run --example simple_render -p plate_renderer

use plate_core::preset;
use plate_renderer::{render, Image, RenderConfig};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Plate - Simple Example");
    println!("======================");

    let description = preset::lookup("default").expect("default preset exists");
    let scene = description.to_scene();
    println!("Scene has {} spheres", scene.len());

    let (width, height) = (640, 360);
    let config = RenderConfig::default();

    println!("Rendering {}x{} (max depth {})...", width, height, config.max_depth);

    let start = std::time::Instant::now();
    let image = render(width, height, &scene, &description.camera, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &Image, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b, _] = image.get(x, y);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    Ok(())
}
