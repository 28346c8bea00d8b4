pub mod raster;
pub mod transform;
pub mod utils;
pub mod commands;
pub mod config;
pub mod processor;

pub use crate::processor::{ImageProcessor, SaveMode};

pub use raster::{RasterError, RasterResult, SampleType};
pub use transform::{Interpolation, Region};
