//! Buffer cropping

use log::debug;
use image::GrayImage;
use image::imageops;

use crate::transform::region::Region;

/// Crops a buffer to the given region
///
/// The region is clamped to the buffer first, so a request reaching past
/// the edge returns the available overlap and a request entirely outside
/// the buffer returns an empty image. The input buffer is left untouched.
///
/// # Arguments
/// * `buffer` - The buffer to crop
/// * `region` - Requested crop rectangle
///
/// # Returns
/// A new buffer holding the cropped pixels
pub fn crop_to_region(buffer: &GrayImage, region: Region) -> GrayImage {
    let clamped = region.clamped(buffer.width(), buffer.height());
    if clamped != region {
        debug!("Crop region truncated to x={}, y={}, width={}, height={}",
               clamped.x, clamped.y, clamped.width, clamped.height);
    }

    imageops::crop_imm(buffer, clamped.x, clamped.y, clamped.width, clamped.height)
        .to_image()
}
