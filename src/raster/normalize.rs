//! Min-max normalization of raster bands
//!
//! Brings a band of arbitrary sample type down to the full 8-bit range:
//! the smallest sample maps to 0, the largest to 255, everything in
//! between scales linearly and is cast with truncation. This mirrors the
//! min-max normalization step the preprocessing pipeline applies before
//! any enhancement work.

use log::debug;
use image::GrayImage;

use crate::raster::band::{BandBuffer, Samples};
use crate::raster::errors::{RasterError, RasterResult};

/// Rescales a band to `uint8` over the full `[0, 255]` range
///
/// A constant-valued band has no range to stretch; its scale factor
/// degenerates to zero and every pixel comes out 0. NaN samples in float
/// bands are excluded from the range scan and also map to 0.
///
/// # Arguments
/// * `band` - The band to rescale
///
/// # Returns
/// An 8-bit grayscale buffer of the same dimensions
pub fn rescale_to_u8(band: &BandBuffer) -> RasterResult<GrayImage> {
    let pixel_count = band.width as usize * band.height as usize;

    let data = match band.value_range() {
        Some((lo, hi)) if hi > lo => {
            let scale = 255.0 / (hi - lo);
            debug!("Rescaling band from [{}, {}] to [0, 255]", lo, hi);
            map_samples(&band.samples, |v| {
                if v.is_nan() {
                    0
                } else {
                    ((v - lo) * scale).clamp(0.0, 255.0) as u8
                }
            })
        }
        // Constant or all-NaN band: nothing to stretch
        _ => {
            debug!("Band has no value range, producing a zero buffer");
            vec![0u8; pixel_count]
        }
    };

    GrayImage::from_raw(band.width, band.height, data)
        .ok_or_else(|| RasterError::GenericError(
            "Band dimensions do not match sample count".to_string()))
}

/// Applies a conversion to every sample regardless of storage type
fn map_samples(samples: &Samples, convert: impl Fn(f64) -> u8) -> Vec<u8> {
    match samples {
        Samples::U8(v) => v.iter().map(|s| convert(*s as f64)).collect(),
        Samples::U16(v) => v.iter().map(|s| convert(*s as f64)).collect(),
        Samples::F32(v) => v.iter().map(|s| convert(*s as f64)).collect(),
    }
}
