// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use thiserror::Error;

use crate::pixel::Argb;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    #[error("Invalid pixel buffer size {0}. Should be {1}")]
    VectorSize(usize, usize),

    #[error("Raster size {0}x{1} does not fit in memory")]
    SizeOverflow(usize, usize),
}

/// The raster structure is just a one-demension vector of packed ARGB values,
/// stored row by row. With width and height info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl Raster {
    /// Generate a new Raster.
    ///
    /// Will return an error if the size of the buffer is not match with your input.
    pub fn new(width: usize, height: usize, pixels: Vec<Argb>) -> Result<Self, RasterError> {
        let expected = width
            .checked_mul(height)
            .ok_or(RasterError::SizeOverflow(width, height))?;
        if pixels.len() != expected {
            return Err(RasterError::VectorSize(pixels.len(), expected));
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// The caller guarantees `pixels.len() == width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<Argb>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Generate a raster with every pixel set to `fill`. Only called with the
    /// size of a raster that already exists.
    pub(crate) fn filled(width: usize, height: usize, fill: Argb) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Generate a new Raster from DynamicImage, image feature should be enabled first.
    #[cfg(feature = "image")]
    pub fn from_image(image: image::DynamicImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let pixels = image
            .to_rgba8()
            .pixels()
            .map(|p| Argb::from_channels(p[3], p[0], p[1], p[2]))
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert back into an RGBA image buffer, image feature should be enabled first.
    #[cfg(feature = "image")]
    pub fn to_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width as u32, self.height as u32);
        for (i, pixel) in self.pixels.iter().enumerate() {
            let [a, r, g, b] = pixel.channels();
            img.put_pixel(
                (i % self.width) as u32,
                (i / self.width) as u32,
                image::Rgba([r, g, b, a]),
            );
        }
        img
    }

    /// Get the height of the raster.
    pub fn get_height(&self) -> usize {
        self.height
    }

    /// Get the width of the raster.
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Get the pixel at the (x,y) position.
    pub fn get_pixel(&self, x: usize, y: usize) -> Argb {
        self.pixels[y * self.width + x]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_size_mismatch() {
        let result = Raster::new(2, 2, vec![Argb(0); 3]);
        assert_eq!(result, Err(RasterError::VectorSize(3, 4)));
    }

    #[test]
    fn test_size_overflow() {
        let half = usize::MAX / 2 + 1;
        let result = Raster::new(half, 2, vec![]);
        assert_eq!(result, Err(RasterError::SizeOverflow(half, 2)));

        let result = Raster::new(usize::MAX, usize::MAX, vec![Argb(0)]);
        assert!(matches!(result, Err(RasterError::SizeOverflow(_, _))));
    }

    #[test]
    fn test_zero_sized_is_allowed() {
        let raster = Raster::new(0, 5, vec![]).unwrap();
        assert_eq!(raster.get_width(), 0);
        assert!(raster.pixels().is_empty());
    }

    #[test]
    fn test_row_major_access() {
        let pixels = (0..6).map(Argb).collect();
        let raster = Raster::new(3, 2, pixels).unwrap();
        assert_eq!(raster.get_pixel(0, 1), Argb(3));
        assert_eq!(raster.get_pixel(2, 1), Argb(5));
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_image_conversion() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 0, image::Rgba([40, 50, 60, 255]));

        let raster = Raster::from_image(image::DynamicImage::ImageRgba8(img.clone()));
        assert_eq!(raster.get_pixel(0, 0), Argb::from_channels(0, 10, 20, 30));
        assert_eq!(raster.get_pixel(1, 0), Argb::from_channels(255, 40, 50, 60));
        assert_eq!(raster.to_image(), img);
    }
}
