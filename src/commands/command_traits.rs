//! Command pattern interfaces
//!
//! The CLI decides what to do from the flags it was given; each choice
//! becomes a command object that parses its own arguments up front and
//! runs the work in one `execute` call.

use crate::utils::logger::Logger;
use crate::raster::errors::RasterResult;

/// One executable CLI operation
///
/// A command validates its arguments at construction time, so by the
/// time `execute` runs the only failures left are I/O and processing
/// ones.
pub trait Command {
    /// Run the operation
    ///
    /// # Returns
    /// Ok on success, or the error that stopped the run
    fn execute(&self) -> RasterResult<()>;
}

/// Builds the right command for a set of CLI arguments
pub trait CommandFactory<'a> {
    /// Pick and construct a command from parsed arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger the command records its operations through
    ///
    /// # Returns
    /// A boxed command ready to execute, or an argument error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> RasterResult<Box<dyn Command + 'a>>;
}
