//! Path utility functions
//!
//! Utilities for deriving output paths from source paths.

use std::path::{Path, PathBuf};

/// Inserts a suffix between a file's stem and its extension
///
/// `scene.tif` with suffix `_processed` becomes `scene_processed.tif`.
/// A path without an extension just gets the suffix appended.
pub fn path_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    };

    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_inserted_before_extension() {
        let derived = path_with_suffix(Path::new("/data/scene.tif"), "_processed");
        assert_eq!(derived, PathBuf::from("/data/scene_processed.tif"));
    }

    #[test]
    fn test_suffix_on_extensionless_path() {
        let derived = path_with_suffix(Path::new("/data/scene"), "_processed");
        assert_eq!(derived, PathBuf::from("/data/scene_processed"));
    }

    #[test]
    fn test_suffix_keeps_relative_paths_relative() {
        let derived = path_with_suffix(Path::new("scene.png"), "_eq");
        assert_eq!(derived, PathBuf::from("scene_eq.png"));
    }
}
