//! Decoding of dropped image files.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::error::AppError;

/// Decode one image file.
pub fn decode(path: &Path) -> Result<DynamicImage, AppError> {
    image::open(path).map_err(|source| AppError::ImageDecode { path: path.to_path_buf(), source })
}

/// Decode every path in order. A file that fails is logged and left as `None`
/// so the remaining files keep their drop slot.
pub fn decode_all(paths: &[PathBuf]) -> Vec<Option<DynamicImage>> {
    paths
        .iter()
        .map(|path| match decode(path) {
            Ok(image) => {
                let (width, height) = (image.width(), image.height());
                tracing::debug!(path = %path.display(), width, height, "image decoded");
                Some(image)
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping dropped file");
                None
            }
        })
        .collect()
}
