//! Raster band access
//!
//! Decodes a raster file and pulls a single band out of it as a typed
//! sample vector. Band numbering is 1-based, following the convention of
//! the geospatial tools this crate sits behind, and the preprocessing
//! pipeline always works on band 1.

use std::fmt;
use std::path::Path;
use log::{debug, info};
use image::DynamicImage;

use crate::raster::errors::{RasterError, RasterResult};

/// Sample type of a raster band before any conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    /// 8-bit unsigned samples
    U8,
    /// 16-bit unsigned samples
    U16,
    /// 32-bit floating point samples
    F32,
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleType::U8 => write!(f, "uint8"),
            SampleType::U16 => write!(f, "uint16"),
            SampleType::F32 => write!(f, "float32"),
        }
    }
}

/// Raw sample storage for a single band
#[derive(Debug, Clone)]
pub enum Samples {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
}

impl Samples {
    /// Number of samples in the band
    pub fn len(&self) -> usize {
        match self {
            Samples::U8(v) => v.len(),
            Samples::U16(v) => v.len(),
            Samples::F32(v) => v.len(),
        }
    }

    /// True when the band holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single band read from a raster file
#[derive(Debug, Clone)]
pub struct BandBuffer {
    /// Band width in pixels
    pub width: u32,
    /// Band height in pixels
    pub height: u32,
    /// Sample type as stored in the file
    pub dtype: SampleType,
    /// The band's samples in row-major order
    pub samples: Samples,
}

impl BandBuffer {
    /// Converts an 8-bit band into a grayscale image without copying
    ///
    /// Only valid for bands whose samples are already `uint8`; wider
    /// formats go through the normalizer instead.
    pub fn into_gray8(self) -> RasterResult<image::GrayImage> {
        let dtype = self.dtype;
        match self.samples {
            Samples::U8(data) => {
                image::GrayImage::from_raw(self.width, self.height, data)
                    .ok_or_else(|| RasterError::GenericError(
                        "Band dimensions do not match sample count".to_string()))
            }
            _ => Err(RasterError::UnsupportedSampleType(
                format!("expected uint8 samples, found {}", dtype))),
        }
    }

    /// Smallest and largest sample value in the band
    ///
    /// NaN samples in float bands are skipped. Returns None for an empty
    /// band or one that holds nothing but NaN.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        let mut visit = |v: f64| {
            if v.is_nan() {
                return;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        };
        match &self.samples {
            Samples::U8(v) => v.iter().for_each(|s| visit(*s as f64)),
            Samples::U16(v) => v.iter().for_each(|s| visit(*s as f64)),
            Samples::F32(v) => v.iter().for_each(|s| visit(*s as f64)),
        }
        range
    }
}

/// Reads one band from a raster file
///
/// The file is decoded in full and the requested band is extracted as a
/// typed sample vector. Multi-channel rasters contribute only the selected
/// channel; 16-bit and float formats keep their sample type here so the
/// caller can decide how to bring them down to 8 bits.
///
/// # Arguments
/// * `path` - Path to the raster file
/// * `band` - 1-based band index
///
/// # Returns
/// The decoded band, or an error if the file cannot be read or the band
/// does not exist
pub fn read_band(path: &Path, band: u32) -> RasterResult<BandBuffer> {
    info!("Reading band {} from {}", band, path.display());

    let img = image::open(path).map_err(|e| RasterError::LoadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let (width, height) = (img.width(), img.height());
    let channels = img.color().channel_count() as u32;
    debug!("Decoded {}x{} raster with {} channel(s), color type {:?}",
           width, height, channels, img.color());

    if band == 0 || band > channels {
        return Err(RasterError::MissingBand {
            path: path.display().to_string(),
            band,
        });
    }

    let channel = (band - 1) as usize;
    let stride = channels as usize;

    let (dtype, samples) = match img {
        DynamicImage::ImageLuma8(b) =>
            (SampleType::U8, Samples::U8(b.into_raw())),
        DynamicImage::ImageLumaA8(b) =>
            (SampleType::U8, Samples::U8(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgb8(b) =>
            (SampleType::U8, Samples::U8(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgba8(b) =>
            (SampleType::U8, Samples::U8(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageLuma16(b) =>
            (SampleType::U16, Samples::U16(b.into_raw())),
        DynamicImage::ImageLumaA16(b) =>
            (SampleType::U16, Samples::U16(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgb16(b) =>
            (SampleType::U16, Samples::U16(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgba16(b) =>
            (SampleType::U16, Samples::U16(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgb32F(b) =>
            (SampleType::F32, Samples::F32(select_channel(b.as_raw(), stride, channel))),
        DynamicImage::ImageRgba32F(b) =>
            (SampleType::F32, Samples::F32(select_channel(b.as_raw(), stride, channel))),
        other => return Err(RasterError::UnsupportedSampleType(
            format!("{:?}", other.color()))),
    };

    debug!("Band {} extracted: {} samples, dtype {}", band, samples.len(), dtype);

    Ok(BandBuffer { width, height, dtype, samples })
}

/// Copies every `stride`-th sample starting at `channel` offset
fn select_channel<T: Copy>(raw: &[T], stride: usize, channel: usize) -> Vec<T> {
    raw.iter().skip(channel).step_by(stride).copied().collect()
}
