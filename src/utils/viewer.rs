//! Image preview plumbing
//!
//! There is no GUI in this tool; a preview is a PNG written to the OS
//! temp directory and handed to whatever opener the platform provides.
//! Viewer trouble is reported to the caller, who decides how fatal a
//! missing display should be.

use std::path::{Path, PathBuf};
use std::process::Command;
use log::{debug, info};
use image::GrayImage;
use image::imageops;

use crate::raster::errors::{RasterError, RasterResult};

/// Writes a buffer to a preview PNG in the OS temp directory
///
/// The label becomes part of the file name together with the process id,
/// so concurrent runs do not clobber each other's previews.
///
/// # Arguments
/// * `buffer` - The buffer to render
/// * `label` - Human-readable tag for the preview file name
///
/// # Returns
/// Path of the written preview file
pub fn write_preview(buffer: &GrayImage, label: &str) -> RasterResult<PathBuf> {
    let file_name = format!("rasterprep-{}-{}.png",
                            sanitize_label(label), std::process::id());
    let path = std::env::temp_dir().join(file_name);

    buffer.save(&path).map_err(|e| RasterError::DisplayError(
        format!("could not write preview {}: {}", path.display(), e)))?;
    debug!("Preview written to {}", path.display());

    Ok(path)
}

/// Hands a file to the platform image viewer without waiting for it
pub fn open_viewer(path: &Path) -> RasterResult<()> {
    let (program, args) = viewer_command();
    info!("Opening {} with {}", path.display(), program);

    Command::new(program)
        .args(args)
        .arg(path)
        .spawn()
        .map_err(|e| RasterError::DisplayError(
            format!("could not launch viewer '{}': {}", program, e)))?;

    Ok(())
}

/// Composites two buffers side by side on a black canvas
///
/// The canvas height is the taller of the two inputs; the right buffer
/// starts after the left one plus the gap.
pub fn side_by_side(left: &GrayImage, right: &GrayImage, gap: u32) -> GrayImage {
    let width = left.width() + gap + right.width();
    let height = left.height().max(right.height());

    let mut canvas = GrayImage::new(width, height);
    imageops::replace(&mut canvas, left, 0, 0);
    imageops::replace(&mut canvas, right, (left.width() + gap) as i64, 0);
    canvas
}

/// Platform opener used to display a preview
fn viewer_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Keeps preview file names to plain ASCII
fn sanitize_label(label: &str) -> String {
    label.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_side_by_side_layout() {
        let left = GrayImage::from_pixel(4, 3, Luma([200]));
        let right = GrayImage::from_pixel(2, 5, Luma([90]));

        let canvas = side_by_side(&left, &right, 2);

        assert_eq!(canvas.dimensions(), (8, 5));
        // left content, gap column, right content
        assert_eq!(canvas.get_pixel(0, 0)[0], 200);
        assert_eq!(canvas.get_pixel(4, 0)[0], 0);
        assert_eq!(canvas.get_pixel(6, 0)[0], 90);
        // area below the shorter image stays black
        assert_eq!(canvas.get_pixel(0, 4)[0], 0);
    }

    #[test]
    fn test_sanitize_label_strips_path_characters() {
        assert_eq!(sanitize_label("scene one/two"), "scene-one-two");
        assert_eq!(sanitize_label("plain42"), "plain42");
    }
}
