//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod process_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use process_command::ProcessCommand;
pub use info_command::InfoCommand;

use clap::ArgMatches;
use crate::config::PrepConfig;
use crate::raster::errors::RasterResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RasterprepCommandFactory {
    /// Resolved tool configuration shared by the commands
    config: PrepConfig,
}

impl RasterprepCommandFactory {
    /// Create a new factory instance
    pub fn new(config: PrepConfig) -> Self {
        RasterprepCommandFactory { config }
    }
}

/// Checks whether any processing or output argument was given
///
/// The presence of any of these turns the invocation into a processing
/// run; without them the tool just summarizes the band.
fn has_processing_args(args: &ArgMatches) -> bool {
    args.contains_id("rotate")
        || args.contains_id("resize")
        || args.contains_id("crop")
        || args.contains_id("noise")
        || args.contains_id("output")
        || args.contains_id("suffix")
        || args.get_flag("show")
        || args.get_flag("no-equalize")
}

impl<'a> CommandFactory<'a> for RasterprepCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RasterResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if has_processing_args(args) {
            Ok(Box::new(ProcessCommand::new(args, &self.config, logger)?))
        } else {
            // Default to the band summary
            Ok(Box::new(InfoCommand::new(args, logger)?))
        }
    }
}
