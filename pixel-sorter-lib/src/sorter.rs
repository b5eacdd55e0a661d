// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use std::cmp::Ordering;

use log::{debug, trace};
use thiserror::Error;

use crate::{
    pixel::{Argb, WHITE},
    raster::Raster,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SortError {
    #[error("Invalid input raster: {0}")]
    InvalidInput(String),
}

///
/// Sort the pixels of a raster by color intensity and HSV value.
///
/// Steps:
///
/// 1. Take every pixel whose alpha is not 0, in row-major order.
/// 2. Sort them with `compare_pixels`.
/// 3. Lay them out again row by row, in a raster of the same width, padding
///    the last row with opaque white.
///
/// A raster without any opaque pixel gives a blank white raster of the same
/// size. The input is left untouched.
///
pub fn process(raster: &Raster) -> Result<Raster, SortError> {
    let (width, height) = (raster.get_width(), raster.get_height());
    if width == 0 || height == 0 {
        return Err(SortError::InvalidInput(format!(
            "raster must have non-zero dimensions, got {}x{}",
            width, height
        )));
    }

    let mut pixels = extract_opaque_pixels(raster);
    debug!(
        "Extracted {} opaque pixels out of {}x{}.",
        pixels.len(),
        width,
        height
    );

    if pixels.is_empty() {
        return Ok(blank_raster(width, height));
    }

    pixels.sort_by(compare_pixels);
    trace!("Sorted pixels, brightest is {:?}.", pixels[0]);

    Ok(repack(&pixels, width))
}

/// Get all non-transparent pixels, keeping their original alpha.
pub fn extract_opaque_pixels(raster: &Raster) -> Vec<Argb> {
    raster
        .pixels()
        .iter()
        .filter(|p| !p.is_transparent())
        .copied()
        .collect()
}

///
/// The sorting order, descending on each level:
///
/// |Level|Key|
/// |---|-----------------|
/// | 1 | Red             |
/// | 2 | Green           |
/// | 3 | Blue            |
/// | 4 | HSV value       |
///
/// Level 4 only runs when R, G and B are all equal.
///
pub fn compare_pixels(p1: &Argb, p2: &Argb) -> Ordering {
    let (rgb1, rgb2) = (p1.rgb(), p2.rgb());
    for i in 0..3 {
        if rgb1[i] != rgb2[i] {
            return rgb2[i].cmp(&rgb1[i]);
        }
    }

    p2.hsv().value.total_cmp(&p1.hsv().value)
}

/// Write the sorted pixels row by row into a new raster of `width` columns,
/// forcing them opaque. The remaining cells of the last row stay white.
///
/// `width` must not be 0, `process` rejects that before getting here.
pub(crate) fn repack(pixels: &[Argb], width: usize) -> Raster {
    let height = pixels.len().div_ceil(width).max(1);

    let mut result = vec![WHITE; width * height];
    for (cell, pixel) in result.iter_mut().zip(pixels) {
        *cell = pixel.opaque();
    }

    Raster::from_parts(width, height, result)
}

/// A blank white raster.
pub(crate) fn blank_raster(width: usize, height: usize) -> Raster {
    Raster::filled(width, height, WHITE)
}
