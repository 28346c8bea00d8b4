//! Raster loading and normalization
//!
//! This module covers the file-facing half of the pipeline: decoding a
//! raster, pulling out a single band, and bringing its samples down to
//! the 8-bit range the rest of the crate works in.

pub mod errors;
pub mod band;
pub mod normalize;
#[cfg(test)]
mod tests;

pub use errors::{RasterError, RasterResult};
pub use band::{BandBuffer, SampleType, Samples, read_band};
pub use normalize::rescale_to_u8;
