//! Buffer transforms
//!
//! Geometric and noise operations over the in-memory grayscale buffer.
//! Each transform is a thin wrapper over the imaging crates plus the
//! argument mapping and clamping rules this tool guarantees.

pub mod interp;
pub mod region;
pub mod crop;
pub mod rotate;
pub mod noise;

pub use interp::Interpolation;
pub use region::Region;
