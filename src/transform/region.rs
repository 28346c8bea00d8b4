//! Region structure for defining a crop area
//!
//! This module defines the Region structure that specifies a rectangular
//! area of a buffer for cropping. The coordinates are in pixels and
//! follow the typical image coordinate system where (0,0) is the top-left
//! corner of the image.

use crate::raster::errors::{RasterError, RasterResult};

/// Crop region (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. This is used to specify which portion of a buffer should
/// survive a crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    ///
    /// # Returns
    /// A new Region instance with the specified coordinates and dimensions
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> u32 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u32 {
        self.y + self.height
    }

    /// True when the region covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Parse a region from an "x,y,width,height" string
    ///
    /// # Arguments
    /// * `s` - Comma-separated coordinates as passed on the command line
    ///
    /// # Returns
    /// The parsed region, or an error describing the malformed input
    pub fn from_string(s: &str) -> RasterResult<Region> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 4 {
            return Err(RasterError::InvalidParameter(
                format!("Expected region as x,y,width,height, got '{}'", s)));
        }

        let values: Result<Vec<u32>, _> = parts.iter()
            .map(|p| p.trim().parse::<u32>())
            .collect();

        match values {
            Ok(v) => Ok(Region::new(v[0], v[1], v[2], v[3])),
            Err(_) => Err(RasterError::InvalidParameter(
                format!("Region '{}' contains a non-numeric value", s))),
        }
    }

    /// Clamp the region to a buffer of the given dimensions
    ///
    /// A region reaching past the edge shrinks to the overlapping part; a
    /// region starting outside the buffer comes back empty. An oversized
    /// crop request is therefore never an error, matching array slicing
    /// behavior.
    ///
    /// # Arguments
    /// * `image_width` - Width of the buffer being cropped
    /// * `image_height` - Height of the buffer being cropped
    ///
    /// # Returns
    /// The truncated region, possibly empty
    pub fn clamped(&self, image_width: u32, image_height: u32) -> Region {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);
        Region {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }
}
