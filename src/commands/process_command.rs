//! Raster processing command
//!
//! This module implements the command that runs the preprocessing
//! pipeline: load a band, apply the requested transforms in a fixed
//! order, save the result and optionally hand it to a preview viewer.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::config::PrepConfig;
use crate::processor::{ImageProcessor, SaveMode};
use crate::raster::errors::{RasterError, RasterResult};
use crate::transform::interp::Interpolation;
use crate::transform::region::Region;
use crate::utils::logger::Logger;

/// Command for running the preprocessing pipeline over one raster
pub struct ProcessCommand<'a> {
    /// Path to the input raster
    input_file: String,
    /// Whether to equalize the histogram at load time
    equalize: bool,
    /// Rotation angle in degrees, counter-clockwise when positive
    rotate: Option<f32>,
    /// Resize target dimensions
    resize: Option<(u32, u32)>,
    /// Resampling filter for resize
    interpolation: Interpolation,
    /// Crop rectangle
    crop: Option<Region>,
    /// Gaussian noise mean and variance
    noise: Option<(f64, f64)>,
    /// Explicit output path
    output_file: Option<String>,
    /// Explicit save suffix
    suffix: Option<String>,
    /// Suffix used when neither an output path nor a suffix was given
    default_suffix: String,
    /// Whether to open a preview after processing
    show: bool,
    /// Log file the processor should write to
    log_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ProcessCommand<'a> {
    /// Create a new process command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Resolved tool configuration
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ProcessCommand instance or an error
    pub fn new(args: &ArgMatches, config: &PrepConfig,
               logger: &'a Logger) -> RasterResult<Self> {
        info!("Creating new process command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let equalize = !args.get_flag("no-equalize");
        info!("Histogram equalization: {}", equalize);

        let rotate = match args.get_one::<String>("rotate") {
            Some(angle_str) => Some(angle_str.parse::<f32>().map_err(|_| {
                RasterError::InvalidParameter(
                    format!("Invalid rotation angle: {}", angle_str))
            })?),
            None => None,
        };
        info!("Rotation: {:?}", rotate);

        let resize = match args.get_one::<String>("resize") {
            Some(spec) => Some(parse_dimensions(spec)?),
            None => None,
        };
        info!("Resize: {:?}", resize);

        let interpolation = match args.get_one::<String>("interpolation") {
            Some(name) => Interpolation::from_name(name).ok_or_else(|| {
                RasterError::InvalidParameter(
                    format!("Unknown interpolation: {}", name))
            })?,
            None => config.interpolation,
        };
        info!("Interpolation: {}", interpolation);

        let crop = match args.get_one::<String>("crop") {
            Some(spec) => Some(Region::from_string(spec)?),
            None => None,
        };
        info!("Crop: {:?}", crop);

        let noise = match args.get_one::<String>("noise") {
            Some(spec) => Some(parse_noise_spec(spec)?),
            None => None,
        };
        info!("Noise: {:?}", noise);

        let output_file = args.get_one::<String>("output").cloned();
        info!("Output file: {:?}", output_file);

        let suffix = args.get_one::<String>("suffix").cloned();
        info!("Suffix: {:?}", suffix);

        let show = args.get_flag("show");
        info!("Show preview: {}", show);

        let log_file = args.get_one::<String>("log-file")
            .cloned()
            .unwrap_or_else(|| config.log_file.clone());
        info!("Log file: {}", log_file);

        Ok(ProcessCommand {
            input_file,
            equalize,
            rotate,
            resize,
            interpolation,
            crop,
            noise,
            output_file,
            suffix,
            default_suffix: config.save_suffix.clone(),
            show,
            log_file,
            logger,
        })
    }

    /// Apply the requested transforms in pipeline order
    ///
    /// Transforms run in a fixed order regardless of flag order on the
    /// command line: rotate, resize, crop, noise.
    fn apply_transforms(&self, processor: &mut ImageProcessor) -> RasterResult<()> {
        if let Some(angle) = self.rotate {
            info!("Rotating by {} degrees", angle);
            processor.rotate(angle, SaveMode::None)?;
        }

        if let Some((width, height)) = self.resize {
            info!("Resizing to {}x{} with {} interpolation",
                  width, height, self.interpolation);
            processor.resize(width, height, self.interpolation)?;
        }

        if let Some(region) = self.crop {
            info!("Cropping to x={}, y={}, width={}, height={}",
                  region.x, region.y, region.width, region.height);
            processor.crop(region.x, region.y, region.width, region.height,
                           SaveMode::None)?;
        }

        if let Some((mean, variance)) = self.noise {
            info!("Adding Gaussian noise with mean {} and variance {}", mean, variance);
            processor.add_gaussian_noise(mean, variance, SaveMode::None)?;
        }

        Ok(())
    }

    /// Persist the processed buffer
    ///
    /// An explicit output path wins over a suffix. Without either, the
    /// result is saved with the configured default suffix whenever at
    /// least one transform ran; a show-only invocation saves nothing.
    fn save_result(&self, processor: &ImageProcessor) -> RasterResult<()> {
        let transformed = self.rotate.is_some() || self.resize.is_some()
            || self.crop.is_some() || self.noise.is_some();

        if let Some(output) = &self.output_file {
            let written = processor.save(Some(Path::new(output)))?;
            info!("Result written to {}", written.display());
        } else if let Some(suffix) = &self.suffix {
            let written = processor.save_with_suffix(Some(suffix))?;
            info!("Result written to {}", written.display());
        } else if transformed {
            let written = processor.save_with_suffix(Some(&self.default_suffix))?;
            info!("Result written to {}", written.display());
        } else {
            info!("Nothing to save");
        }

        Ok(())
    }
}

impl<'a> Command for ProcessCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Executing process command for {}", self.input_file);

        let mut processor = ImageProcessor::with_options(
            &self.input_file, self.equalize, Some(&self.log_file))?;
        info!("Raster loaded: {}x{}, source dtype {}",
              processor.dimensions().0, processor.dimensions().1,
              processor.source_dtype());

        self.apply_transforms(&mut processor)?;
        self.save_result(&processor)?;

        if self.show {
            // a broken viewer should not fail a batch that already saved
            match processor.show() {
                Ok(preview) => info!("Preview opened from {}", preview.display()),
                Err(e) => self.logger.warn(&format!("Preview failed: {}", e)),
            }
        }

        self.logger.info("Processing complete");
        Ok(())
    }
}

/// Parses a "WIDTHxHEIGHT" dimension specification
fn parse_dimensions(spec: &str) -> RasterResult<(u32, u32)> {
    let parts: Vec<&str> = spec.split(['x', 'X']).collect();
    if parts.len() != 2 {
        return Err(RasterError::InvalidParameter(
            format!("Expected dimensions as WIDTHxHEIGHT, got '{}'", spec)));
    }

    let width = parts[0].trim().parse::<u32>().map_err(|_| {
        RasterError::InvalidParameter(format!("Invalid width: {}", parts[0]))
    })?;
    let height = parts[1].trim().parse::<u32>().map_err(|_| {
        RasterError::InvalidParameter(format!("Invalid height: {}", parts[1]))
    })?;

    Ok((width, height))
}

/// Parses a "MEAN,VARIANCE" noise specification
fn parse_noise_spec(spec: &str) -> RasterResult<(f64, f64)> {
    let parts: Vec<&str> = spec.split(',').collect();
    if parts.len() != 2 {
        return Err(RasterError::InvalidParameter(
            format!("Expected noise as MEAN,VARIANCE, got '{}'", spec)));
    }

    let mean = parts[0].trim().parse::<f64>().map_err(|_| {
        RasterError::InvalidParameter(format!("Invalid noise mean: {}", parts[0]))
    })?;
    let variance = parts[1].trim().parse::<f64>().map_err(|_| {
        RasterError::InvalidParameter(format!("Invalid noise variance: {}", parts[1]))
    })?;

    Ok((mean, variance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        assert_eq!(parse_dimensions("640x480").unwrap(), (640, 480));
        assert_eq!(parse_dimensions("50X50").unwrap(), (50, 50));
        assert!(parse_dimensions("640").is_err());
        assert!(parse_dimensions("640x480x3").is_err());
        assert!(parse_dimensions("wide x tall").is_err());
    }

    #[test]
    fn test_parse_noise_spec() {
        assert_eq!(parse_noise_spec("0,0.01").unwrap(), (0.0, 0.01));
        assert_eq!(parse_noise_spec("-2.5, 4").unwrap(), (-2.5, 4.0));
        assert!(parse_noise_spec("0.01").is_err());
        assert!(parse_noise_spec("a,b").is_err());
    }
}
