//! Raster band summary command
//!
//! This module implements the default command that reports what a
//! raster band contains without modifying it: dimensions, sample type
//! and value range.

use clap::ArgMatches;
use log::info;
use std::path::Path;

use crate::commands::command_traits::Command;
use crate::processor::PROCESSED_BAND;
use crate::raster::band::{read_band, BandBuffer};
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;

/// Command for summarizing a raster band
pub struct InfoCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InfoCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(InfoCommand {
            input_file,
            logger,
        })
    }

    /// Display basic band information
    ///
    /// Shows the band dimensions, sample type and pixel count.
    ///
    /// # Arguments
    /// * `band` - The band buffer to summarize
    fn display_band_summary(&self, band: &BandBuffer) {
        info!("Band Summary:");
        info!("  File: {}", self.input_file);
        info!("  Band: {}", PROCESSED_BAND);
        info!("  Dimensions: {}x{}", band.width, band.height);
        info!("  Sample type: {}", band.dtype);
        info!("  Pixels: {}", band.width as u64 * band.height as u64);
    }

    /// Display the value range of the band
    ///
    /// Shows the minimum and maximum sample values, or notes when the
    /// band holds no finite values.
    ///
    /// # Arguments
    /// * `band` - The band buffer to scan
    fn display_value_range(&self, band: &BandBuffer) {
        match band.value_range() {
            Some((lo, hi)) => {
                info!("  Value range: [{}, {}]", lo, hi);
                if hi == lo {
                    info!("    (Constant band, normalization would yield all zeros)");
                }
            }
            None => info!("  Value range: no finite samples"),
        }
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Inspecting file: {}", self.input_file);

        let band = read_band(Path::new(&self.input_file), PROCESSED_BAND)?;

        self.display_band_summary(&band);
        self.display_value_range(&band);

        self.logger.info("Inspection completed successfully");
        Ok(())
    }
}
