//! # pixel-sorter-lib
//!
//! pixel-sorter-lib is a library to reorder the pixels of an image by color intensity and HSV value.
//!
//! Transparent pixels are dropped, the rest are sorted brightest-red first and laid out again
//! row by row, with the last row padded in white. The result is always fully opaque.
//!
//! Loading and saving image files needs the `image` feature, which is enabled by default.
//!
//! For more detail, see process, load_raster and save_raster.

#[cfg(feature = "image")]
pub mod file;
pub mod hsv;
pub mod pixel;
pub mod raster;
pub mod sorter;

#[cfg(feature = "image")]
pub use file::{DEFAULT_OUTPUT_NAME, FileError, load_raster, save_raster};
pub use hsv::{Hsv, rgb_to_hsv};
pub use pixel::Argb;
pub use raster::{Raster, RasterError};
pub use sorter::{SortError, process};
