//! Integration tests for the preprocessing pipeline
//!
//! Each test writes its own fixture raster into a temp directory, runs
//! the processor against it and checks the buffer or the files left on
//! disk. Log output goes into the same temp directory so test runs do
//! not litter the workspace.

use std::fs;
use std::path::{Path, PathBuf};

use image::{GrayImage, ImageBuffer, Luma};
use tempfile::tempdir;

use rasterprep::processor::{ImageProcessor, SaveMode};
use rasterprep::raster::errors::RasterError;
use rasterprep::raster::SampleType;
use rasterprep::transform::Interpolation;

/// Writes an 8-bit grayscale PNG filled by the given pixel function
fn write_gray8(dir: &Path, name: &str, width: u32, height: u32,
               pixel: impl Fn(u32, u32) -> u8) -> PathBuf {
    let img = GrayImage::from_fn(width, height, |x, y| Luma([pixel(x, y)]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Writes a 16-bit grayscale PNG filled by the given pixel function
fn write_gray16(dir: &Path, name: &str, width: u32, height: u32,
                pixel: impl Fn(u32, u32) -> u16) -> PathBuf {
    let img: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_fn(width, height, |x, y| Luma([pixel(x, y)]));
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Log file path inside the test's temp directory
fn test_log(dir: &Path) -> String {
    dir.join("test.log").to_string_lossy().into_owned()
}

#[test]
fn test_u8_band_loads_without_modification() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 6, 4, |x, y| (x * 9 + y) as u8);
    let log = test_log(dir.path());

    let processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();

    assert_eq!(processor.dimensions(), (6, 4));
    assert_eq!(processor.source_path(), path.as_path());
    assert_eq!(processor.source_dtype(), SampleType::U8);
    assert_eq!(processor.dtype(), SampleType::U8);
    assert!(!processor.is_equalized());
    for (x, y, pixel) in processor.buffer().enumerate_pixels() {
        assert_eq!(pixel[0], (x * 9 + y) as u8);
    }
}

#[test]
fn test_wide_band_is_normalized_to_full_range() {
    let dir = tempdir().unwrap();
    let path = write_gray16(dir.path(), "band.png", 4, 4,
                            |x, y| (x * 1000 + y * 250) as u16);
    let log = test_log(dir.path());

    let processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();

    assert_eq!(processor.source_dtype(), SampleType::U16);
    assert_eq!(processor.dtype(), SampleType::U8);

    let values: Vec<u8> = processor.buffer().pixels().map(|p| p[0]).collect();
    assert_eq!(*values.iter().min().unwrap(), 0);
    assert_eq!(*values.iter().max().unwrap(), 255);
}

#[test]
fn test_equalization_stretches_contrast() {
    let dir = tempdir().unwrap();
    // everything clustered in a narrow dark range
    let path = write_gray8(dir.path(), "flat.png", 8, 8,
                           |x, _| if x < 4 { 10 } else { 20 });
    let log = test_log(dir.path());

    let plain = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let equalized = ImageProcessor::with_options(&path, true, Some(&log)).unwrap();

    assert!(equalized.is_equalized());
    let max = equalized.buffer().pixels().map(|p| p[0]).max().unwrap();
    assert_eq!(max, 255);
    assert_ne!(equalized.buffer(), plain.buffer());
}

#[test]
fn test_rotation_keeps_the_canvas() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 9, 5, |x, y| (x + y * 11) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let before = processor.buffer().clone();

    processor.rotate(0.0, SaveMode::None).unwrap();
    assert_eq!(processor.buffer(), &before);

    processor.rotate(33.0, SaveMode::None).unwrap();
    assert_eq!(processor.dimensions(), (9, 5));
}

#[test]
fn test_crop_truncates_at_the_edges() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 8, 6, |x, y| (x * 10 + y) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();

    // a full-size crop changes nothing
    let before = processor.buffer().clone();
    processor.crop(0, 0, 8, 6, SaveMode::None).unwrap();
    assert_eq!(processor.buffer(), &before);

    // an oversized rectangle clips to the available area
    processor.crop(2, 1, 100, 100, SaveMode::None).unwrap();
    assert_eq!(processor.dimensions(), (6, 5));
    assert_eq!(processor.buffer().get_pixel(0, 0)[0], 21);
}

#[test]
fn test_zero_variance_noise_changes_nothing() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 5, 5, |x, y| (x * 17 + y * 3) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let before = processor.buffer().clone();

    processor.add_gaussian_noise(0.0, 0.0, SaveMode::None).unwrap();
    assert_eq!(processor.buffer(), &before);

    let result = processor.add_gaussian_noise(0.0, -1.0, SaveMode::None);
    assert!(matches!(result, Err(RasterError::InvalidParameter(_))));
    assert_eq!(processor.buffer(), &before);
}

#[test]
fn test_resize_then_suffixed_save() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "scene.png", 100, 100,
                           |x, y| ((x + y) % 256) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, true, Some(&log)).unwrap();
    processor.resize(50, 50, Interpolation::Linear).unwrap();
    assert_eq!(processor.dimensions(), (50, 50));

    let written = processor.save_with_suffix(None).unwrap();
    assert_eq!(written, dir.path().join("scene_processed.png"));
    assert!(written.exists());

    let saved = image::open(&written).unwrap();
    assert_eq!(saved.width(), 50);
    assert_eq!(saved.height(), 50);
}

#[test]
fn test_zero_dimension_resize_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 4, 4, |_, _| 50);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let result = processor.resize(0, 10, Interpolation::Nearest);

    assert!(matches!(result, Err(RasterError::InvalidParameter(_))));
    assert_eq!(processor.dimensions(), (4, 4));
}

#[test]
fn test_save_needs_a_recognizable_extension() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 4, 4, |_, _| 50);
    let log = test_log(dir.path());

    let processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let result = processor.save(Some(&dir.path().join("noext")));

    assert!(matches!(result, Err(RasterError::SaveError { .. })));
}

#[test]
fn test_transform_can_save_to_an_explicit_path() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 10, 10, |x, _| x as u8);
    let out = dir.path().join("turned.png");
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    processor.rotate(45.0, SaveMode::Path(out.clone())).unwrap();

    assert!(out.exists());
    let saved = image::open(&out).unwrap();
    assert_eq!((saved.width(), saved.height()), (10, 10));
}

#[test]
fn test_adjust_resolution_matches_resize() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 12, 8, |x, y| (x * 3 + y) as u8);
    let log = test_log(dir.path());

    let mut first = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    let mut second = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();

    first.resize(6, 4, Interpolation::Cubic).unwrap();
    second.adjust_resolution(6, 4, Interpolation::Cubic).unwrap();

    assert_eq!(second.dimensions(), (6, 4));
    assert_eq!(first.buffer(), second.buffer());
}

#[test]
fn test_save_mode_source_writes_back_after_transform() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 8, 8, |x, _| (x * 30) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    processor.rotate(180.0, SaveMode::Source).unwrap();

    let reopened = image::open(&path).unwrap().to_luma8();
    assert_eq!(reopened.dimensions(), (8, 8));
    assert_eq!(reopened, *processor.buffer());
    // interior pixels show the column gradient running the other way
    assert!(reopened.get_pixel(1, 1)[0] >= 200);
    assert!(reopened.get_pixel(7, 1)[0] <= 40);
}

#[test]
fn test_save_without_path_overwrites_the_source() {
    let dir = tempdir().unwrap();
    let path = write_gray8(dir.path(), "band.png", 6, 6, |x, y| (x * 4 + y) as u8);
    let log = test_log(dir.path());

    let mut processor = ImageProcessor::with_options(&path, false, Some(&log)).unwrap();
    processor.crop(0, 0, 3, 3, SaveMode::None).unwrap();

    let written = processor.save(None).unwrap();
    assert_eq!(written, path);

    let reopened = image::open(&path).unwrap();
    assert_eq!((reopened.width(), reopened.height()), (3, 3));
}

#[test]
fn test_missing_file_is_fatal_and_logged() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("absent.tif");
    let log = test_log(dir.path());

    let result = ImageProcessor::with_options(&absent, true, Some(&log));

    match result {
        Err(RasterError::LoadError { path, .. }) => {
            assert!(path.contains("absent.tif"));
        }
        other => panic!("expected LoadError, got {:?}", other.map(|_| ())),
    }

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains(":ERROR:"));
    assert!(logged.contains("absent.tif"));
}
