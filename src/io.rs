//! File adapters around the codec: images in and out as [`PixelGrid`],
//! secrets in and out as text.
use crate::error::Result;
use crate::pixel::PixelGrid;
use image::{ImageFormat, Rgb, RgbImage};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Decode any supported image file into an RGB grid
pub fn read_image(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)?.into_rgb8();
    let cols = img.width() as usize;
    let rows = img.height() as usize;
    let pixels = img.pixels().map(|p| p.0).collect();
    debug!("read {} ({}x{})", path.display(), rows, cols);
    Ok(PixelGrid::new(rows, cols, pixels))
}

/// Encode a grid as PNG.
/// The file is written next to its destination first and renamed into place,
/// so a failed write never leaves a partial image behind.
pub fn write_image(path: &Path, grid: &PixelGrid) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let cols = grid.cols();
    let img = RgbImage::from_fn(cols as u32, grid.rows() as u32, |x, y| {
        Rgb(grid.pixel(y as usize * cols + x as usize))
    });

    let mut staging = path.as_os_str().to_os_string();
    staging.push(".partial");
    let staging = PathBuf::from(staging);

    if let Err(e) = img.save_with_format(&staging, ImageFormat::Png) {
        let _ = fs::remove_file(&staging);
        return Err(e.into());
    }
    fs::rename(&staging, path)?;
    debug!("wrote {}", path.display());
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

/// `<output_dir>/output-<stem of image_path>.png`
pub fn output_image_path(output_dir: &Path, image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    output_dir.join(format!("output-{}.png", stem))
}
