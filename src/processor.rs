//! Image preprocessing component
//!
//! The processor owns a single 8-bit grayscale buffer loaded from band 1
//! of a raster file, plus the logging sink that records everything done
//! to it. The source file is read once at construction; afterwards every
//! operation acts on the in-memory buffer and the file is only touched
//! again by an explicit save.

use std::path::{Path, PathBuf};
use image::GrayImage;
use image::imageops;
use imageproc::contrast::equalize_histogram;

use crate::config::DEFAULTS;
use crate::raster::band::{self, SampleType};
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::normalize;
use crate::transform::crop::crop_to_region;
use crate::transform::interp::Interpolation;
use crate::transform::noise;
use crate::transform::region::Region;
use crate::transform::rotate::rotate_degrees;
use crate::utils::logger::Logger;
use crate::utils::path_utils::path_with_suffix;
use crate::utils::viewer;

/// Band the processor always works on
pub const PROCESSED_BAND: u32 = 1;

/// Where to persist the buffer after a transform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SaveMode {
    /// Keep the result in memory only
    #[default]
    None,
    /// Write back to the source path
    Source,
    /// Write to the given path
    Path(PathBuf),
}

/// Grayscale preprocessing over a single raster band
///
/// Construction loads band 1, brings wider sample types down to uint8
/// by min-max normalization and optionally equalizes the histogram once.
/// The buffer stays 8-bit grayscale from then on, and its dimensions
/// change only through explicit resize or crop calls.
pub struct ImageProcessor {
    /// The working buffer, 8-bit grayscale
    buffer: GrayImage,
    /// Path the raster was loaded from
    source_path: PathBuf,
    /// Sample type of the band before normalization
    source_dtype: SampleType,
    /// Whether histogram equalization ran at construction
    equalized: bool,
    /// Logging sink owned by this processor
    logger: Logger,
}

impl ImageProcessor {
    /// Opens a raster with default settings
    ///
    /// Histogram equalization is on and log lines go to the configured
    /// default log file.
    ///
    /// # Arguments
    /// * `path` - Path to the raster file
    ///
    /// # Returns
    /// The constructed processor, or the error that stopped construction
    pub fn open<P: AsRef<Path>>(path: P) -> RasterResult<Self> {
        Self::with_options(path, true, None)
    }

    /// Opens a raster with explicit settings
    ///
    /// A raster that cannot be read is fatal to construction: the failure
    /// is written to the log as an ERROR line and returned as a
    /// `LoadError` for the caller to turn into an exit code.
    ///
    /// # Arguments
    /// * `path` - Path to the raster file
    /// * `equalize` - Whether to apply one-time histogram equalization
    /// * `log_file` - Optional log file path, defaults to the configured one
    ///
    /// # Returns
    /// The constructed processor, or the error that stopped construction
    pub fn with_options<P: AsRef<Path>>(path: P, equalize: bool,
                                        log_file: Option<&str>) -> RasterResult<Self> {
        let log_path = log_file.unwrap_or(&DEFAULTS.log_file);
        let logger = Logger::new(log_path)?;
        let source_path = path.as_ref().to_path_buf();

        let (buffer, source_dtype, equalized) =
            match Self::load_buffer(&source_path, equalize, &logger) {
                Ok(loaded) => loaded,
                Err(e) => {
                    logger.error(&e.to_string());
                    return Err(e);
                }
            };

        logger.info(&format!("Loaded band {} of {} ({}x{}, source dtype {})",
                             PROCESSED_BAND, source_path.display(),
                             buffer.width(), buffer.height(), source_dtype));

        Ok(ImageProcessor { buffer, source_path, source_dtype, equalized, logger })
    }

    /// Runs the construction pipeline: read, normalize, equalize
    fn load_buffer(path: &Path, equalize: bool,
                   logger: &Logger) -> RasterResult<(GrayImage, SampleType, bool)> {
        let band = band::read_band(path, PROCESSED_BAND)?;
        let source_dtype = band.dtype;

        let buffer = if source_dtype == SampleType::U8 {
            band.into_gray8()?
        } else {
            let rescaled = normalize::rescale_to_u8(&band)?;
            logger.info(&format!("Normalized {} band to uint8 over the full range",
                                 source_dtype));
            rescaled
        };

        if equalize {
            let enhanced = equalize_histogram(&buffer);
            logger.info("Histogram equalization applied");
            Ok((enhanced, source_dtype, true))
        } else {
            Ok((buffer, source_dtype, false))
        }
    }

    /// The current buffer
    pub fn buffer(&self) -> &GrayImage {
        &self.buffer
    }

    /// Current buffer dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    /// Path the raster was loaded from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Element type of the working buffer
    ///
    /// Always uint8 once construction succeeds; the pre-normalization
    /// type is available from `source_dtype`.
    pub fn dtype(&self) -> SampleType {
        SampleType::U8
    }

    /// Sample type of the band as stored in the file
    pub fn source_dtype(&self) -> SampleType {
        self.source_dtype
    }

    /// Whether histogram equalization ran at construction
    pub fn is_equalized(&self) -> bool {
        self.equalized
    }

    /// Saves the buffer, inferring the format from the file extension
    ///
    /// With no path the source file is overwritten in place.
    ///
    /// # Arguments
    /// * `path` - Target path, or None to write back to the source
    ///
    /// # Returns
    /// The path actually written
    pub fn save(&self, path: Option<&Path>) -> RasterResult<PathBuf> {
        let target = path.map(Path::to_path_buf)
            .unwrap_or_else(|| self.source_path.clone());

        match self.buffer.save(&target) {
            Ok(()) => {
                self.logger.info(&format!("Saved image to {}", target.display()));
                Ok(target)
            }
            Err(e) => {
                let err = RasterError::SaveError {
                    path: target.display().to_string(),
                    reason: e.to_string(),
                };
                self.logger.error(&err.to_string());
                Err(err)
            }
        }
    }

    /// Saves the buffer next to the source with a suffix in the name
    ///
    /// `scene.tif` becomes `scene_processed.tif` with the stock suffix;
    /// None picks the configured default.
    ///
    /// # Arguments
    /// * `suffix` - Suffix to insert before the extension
    ///
    /// # Returns
    /// The path actually written
    pub fn save_with_suffix(&self, suffix: Option<&str>) -> RasterResult<PathBuf> {
        let suffix = suffix.unwrap_or(&DEFAULTS.save_suffix);
        let target = path_with_suffix(&self.source_path, suffix);
        self.save(Some(&target))
    }

    /// Rotates the buffer about its center
    ///
    /// Positive angles turn counter-clockwise. The canvas keeps its size:
    /// content swinging past the edge is clipped and uncovered pixels
    /// fill with black.
    ///
    /// # Arguments
    /// * `angle_degrees` - Rotation angle, counter-clockwise when positive
    /// * `save` - Whether and where to persist the result
    pub fn rotate(&mut self, angle_degrees: f32, save: SaveMode) -> RasterResult<()> {
        self.buffer = rotate_degrees(&self.buffer, angle_degrees);
        self.logger.info(&format!("Rotated image by {} degrees", angle_degrees));
        self.apply_save_mode(&save)
    }

    /// Resizes the buffer to exactly the given dimensions
    ///
    /// No aspect preservation; callers wanting it compute the target
    /// dimensions themselves.
    ///
    /// # Arguments
    /// * `width` - Target width in pixels
    /// * `height` - Target height in pixels
    /// * `interpolation` - Resampling filter to use
    pub fn resize(&mut self, width: u32, height: u32,
                  interpolation: Interpolation) -> RasterResult<()> {
        if width == 0 || height == 0 {
            let err = RasterError::InvalidParameter(
                format!("Resize target {}x{} has a zero dimension", width, height));
            self.logger.error(&err.to_string());
            return Err(err);
        }

        self.buffer = imageops::resize(&self.buffer, width, height,
                                       interpolation.filter_type());
        self.logger.info(&format!("Resized image to {}x{} ({})",
                                  width, height, interpolation));
        Ok(())
    }

    /// Resizes the buffer to the given resolution
    ///
    /// Named alias for `resize`, kept for pipeline vocabulary.
    pub fn adjust_resolution(&mut self, width: u32, height: u32,
                             interpolation: Interpolation) -> RasterResult<()> {
        self.resize(width, height, interpolation)
    }

    /// Crops the buffer to the given rectangle
    ///
    /// The rectangle is truncated to the buffer bounds; a rectangle fully
    /// outside leaves an empty buffer rather than an error.
    ///
    /// # Arguments
    /// * `x` - Left edge of the rectangle
    /// * `y` - Top edge of the rectangle
    /// * `width` - Requested width
    /// * `height` - Requested height
    /// * `save` - Whether and where to persist the result
    pub fn crop(&mut self, x: u32, y: u32, width: u32, height: u32,
                save: SaveMode) -> RasterResult<()> {
        self.buffer = crop_to_region(&self.buffer, Region::new(x, y, width, height));
        self.logger.info(&format!("Cropped image at x={}, y={} to {}x{}",
                                  x, y, self.buffer.width(), self.buffer.height()));
        self.apply_save_mode(&save)
    }

    /// Adds Gaussian noise to the buffer
    ///
    /// The noise standard deviation is the square root of `variance`;
    /// noisy values clamp to [0, 255]. A variance of 0 leaves the buffer
    /// untouched for the default mean of 0. Negative variance is
    /// rejected.
    ///
    /// # Arguments
    /// * `mean` - Mean of the noise distribution
    /// * `variance` - Variance of the noise distribution
    /// * `save` - Whether and where to persist the result
    pub fn add_gaussian_noise(&mut self, mean: f64, variance: f64,
                              save: SaveMode) -> RasterResult<()> {
        if variance < 0.0 {
            let err = RasterError::InvalidParameter(
                format!("Noise variance must be non-negative, got {}", variance));
            self.logger.error(&err.to_string());
            return Err(err);
        }

        noise::add_gaussian_noise(&mut self.buffer, mean, variance,
                                  &mut rand::thread_rng());
        self.logger.info(&format!("Added Gaussian noise (mean {}, variance {})",
                                  mean, variance));
        self.apply_save_mode(&save)
    }

    /// Renders the buffer to a temp PNG and opens the platform viewer
    ///
    /// Returns the preview path. A failure is logged and comes back as a
    /// `DisplayError`; the buffer is unaffected either way, so callers
    /// can treat a missing viewer as non-fatal.
    pub fn show(&self) -> RasterResult<PathBuf> {
        let label = self.source_path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "preview".to_string());

        let result = viewer::write_preview(&self.buffer, &label)
            .and_then(|path| {
                viewer::open_viewer(&path)?;
                Ok(path)
            });

        match result {
            Ok(path) => {
                self.logger.info(&format!("Preview opened from {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                self.logger.error(&e.to_string());
                Err(e)
            }
        }
    }

    /// Persists the buffer according to the given mode
    fn apply_save_mode(&self, save: &SaveMode) -> RasterResult<()> {
        match save {
            SaveMode::None => Ok(()),
            SaveMode::Source => self.save(None).map(|_| ()),
            SaveMode::Path(path) => self.save(Some(path)).map(|_| ()),
        }
    }
}
