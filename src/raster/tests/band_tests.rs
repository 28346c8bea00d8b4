//! Tests for raster band reading

use std::path::Path;
use tempfile::tempdir;

use crate::raster::band::{read_band, SampleType, Samples};
use crate::raster::errors::RasterError;
use super::test_utils;

#[test]
fn test_read_gray8_band() {
    let dir = tempdir().unwrap();
    let path = test_utils::write_gray8(dir.path(), "gradient.png", 8, 4,
                                       |x, y| (x * 10 + y) as u8);

    let band = read_band(&path, 1).unwrap();

    assert_eq!(band.width, 8);
    assert_eq!(band.height, 4);
    assert_eq!(band.dtype, SampleType::U8);
    match &band.samples {
        Samples::U8(v) => {
            assert_eq!(v.len(), 32);
            // row-major: sample at (x=2, y=1) sits at index y * width + x
            assert_eq!(v[1 * 8 + 2], 21);
        }
        _ => panic!("expected uint8 samples"),
    }
}

#[test]
fn test_read_band_selects_channel() {
    let dir = tempdir().unwrap();
    let path = test_utils::write_rgb8(dir.path(), "bands.png", 4, 4,
                                      |x, _| [x as u8, 100, 200]);

    let band2 = read_band(&path, 2).unwrap();
    match &band2.samples {
        Samples::U8(v) => assert!(v.iter().all(|&s| s == 100)),
        _ => panic!("expected uint8 samples"),
    }

    let band3 = read_band(&path, 3).unwrap();
    match &band3.samples {
        Samples::U8(v) => assert!(v.iter().all(|&s| s == 200)),
        _ => panic!("expected uint8 samples"),
    }
}

#[test]
fn test_band_out_of_range() {
    let dir = tempdir().unwrap();
    let path = test_utils::write_gray8(dir.path(), "single.png", 2, 2, |_, _| 7);

    match read_band(&path, 2) {
        Err(RasterError::MissingBand { band, .. }) => assert_eq!(band, 2),
        other => panic!("expected MissingBand, got {:?}", other),
    }

    // band numbering is 1-based, so 0 is never valid
    assert!(matches!(read_band(&path, 0),
                     Err(RasterError::MissingBand { .. })));
}

#[test]
fn test_missing_file_is_load_error() {
    let result = read_band(Path::new("/nonexistent/raster.tif"), 1);
    match result {
        Err(RasterError::LoadError { path, .. }) =>
            assert!(path.contains("raster.tif")),
        other => panic!("expected LoadError, got {:?}", other),
    }
}

#[test]
fn test_read_gray16_band_keeps_dtype() {
    let dir = tempdir().unwrap();
    let path = test_utils::write_gray16(dir.path(), "deep.png", 4, 2,
                                        |x, y| (x * 1000 + y * 100) as u16);

    let band = read_band(&path, 1).unwrap();

    assert_eq!(band.dtype, SampleType::U16);
    match &band.samples {
        Samples::U16(v) => {
            assert_eq!(v.len(), 8);
            assert_eq!(v[1 * 4 + 3], 3100);
        }
        _ => panic!("expected uint16 samples"),
    }
    assert_eq!(band.value_range(), Some((0.0, 3100.0)));
}
