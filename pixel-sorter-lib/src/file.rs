// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::path::Path;

use image::ImageFormat;
use log::{debug, info};
use thiserror::Error;

use crate::raster::Raster;

/// Name of the file written into the output directory.
pub const DEFAULT_OUTPUT_NAME: &str = "sorted-image.png";

/// Extensions accepted when loading, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Decode input image error: {0}")]
    DecodeError(String),

    #[error("Encode output image error: {0}")]
    EncodeError(String),
}

/// Check the extension of the path against `SUPPORTED_EXTENSIONS`.
pub fn is_supported_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}

/// Load a PNG, JPEG or BMP file into a raster.
pub fn load_raster(path: impl AsRef<Path>) -> Result<Raster, FileError> {
    let path = path.as_ref();
    if !is_supported_path(path) {
        return Err(FileError::UnsupportedFormat(path.display().to_string()));
    }

    match image::open(path) {
        Ok(image) => {
            let raster = Raster::from_image(image);
            info!(
                "Loaded {} ({}x{}).",
                path.display(),
                raster.get_width(),
                raster.get_height()
            );
            Ok(raster)
        }
        Err(e) => Err(FileError::DecodeError(format!("{}: {}", path.display(), e))),
    }
}

/// Save the raster as PNG, whatever the extension of the path is.
pub fn save_raster(raster: &Raster, path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    debug!(
        "Encoding {}x{} raster into {}.",
        raster.get_width(),
        raster.get_height(),
        path.display()
    );

    raster
        .to_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| FileError::EncodeError(format!("{}: {}", path.display(), e)))
}
