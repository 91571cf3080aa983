use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use plate_renderer::Image;

/// Save an image, choosing the format from the file extension.
pub fn save_image(image: &Image, path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => save_image_as_png(image, path),
        Some("ppm") => save_image_as_ppm(image, path),
        _ => bail!(
            "Unsupported file extension for '{}'. Only .png and .ppm are supported.",
            path.display()
        ),
    }
}

/// Save as 8-bit RGBA PNG.
pub fn save_image_as_png(image: &Image, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        image.as_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("Failed to write PNG {}", path.display()))
}

/// Save as binary PPM (P6), dropping alpha.
pub fn save_image_as_ppm(image: &Image, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    for rgba in image.as_bytes().chunks_exact(4) {
        writer.write_all(&rgba[..3])?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker_image() -> Image {
        let mut image = Image::new(2, 1);
        image.pixels = vec![255, 0, 0, 255, 0, 0, 255, 255];
        image
    }

    #[test]
    fn test_save_ppm() {
        let path = std::env::temp_dir().join("plate_cli_output_test.ppm");
        save_image(&checker_image(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n2 1\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[255, 0, 0, 0, 0, 255]);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_png_round_trip() {
        let path = std::env::temp_dir().join("plate_cli_output_test.png");
        save_image(&checker_image(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.into_raw(), checker_image().into_raw());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = save_image(&checker_image(), Path::new("out.bmp")).unwrap_err();
        assert!(err.to_string().contains("Unsupported"));
    }
}
