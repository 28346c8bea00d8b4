//! Buffer rotation
//!
//! Arbitrary-angle rotation happens about the buffer center on a canvas
//! of the original size: content swinging past the edge is clipped and
//! pixels left uncovered fill with black. Quarter turns for preview work
//! have a separate lossless path that swaps dimensions instead.

use log::debug;
use image::{GrayImage, Luma};
use image::imageops;
use imageproc::geometric_transformations::{rotate_about_center, Interpolation as WarpInterpolation};

/// Rotates a buffer about its center, positive angles counter-clockwise
///
/// The output has the same dimensions as the input. Resampling is
/// bilinear; uncovered corners fill with 0. Multiples of a full turn
/// return an identical copy without resampling.
///
/// # Arguments
/// * `buffer` - The buffer to rotate
/// * `angle_degrees` - Rotation angle in degrees, counter-clockwise when positive
///
/// # Returns
/// The rotated buffer
pub fn rotate_degrees(buffer: &GrayImage, angle_degrees: f32) -> GrayImage {
    if angle_degrees.rem_euclid(360.0) == 0.0 {
        debug!("Rotation by {} degrees is a full turn, copying buffer", angle_degrees);
        return buffer.clone();
    }

    // imageproc treats positive theta as clockwise on a y-down canvas;
    // the public convention here is counter-clockwise, so negate.
    let theta = -angle_degrees.to_radians();
    rotate_about_center(buffer, theta, WarpInterpolation::Bilinear, Luma([0u8]))
}

/// Lossless 90 degree counter-clockwise turn
///
/// Used for preview composites; unlike `rotate_degrees` this swaps the
/// buffer dimensions, so it never feeds back into a processing pipeline
/// that promises a stable canvas.
pub fn rotate90_ccw(buffer: &GrayImage) -> GrayImage {
    imageops::rotate270(buffer)
}
