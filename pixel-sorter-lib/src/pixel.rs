// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

use crate::hsv::{Hsv, rgb_to_hsv};

/// Opaque white, used to pad the sorted raster.
pub const WHITE: Argb = Argb(0xFFFF_FFFF);

///
/// A packed 32-bit pixel.
///
/// From the most significant byte down: alpha, red, green, blue.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    /// Pack four channels into a pixel.
    pub fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Get the [R, G, B] values of the pixel.
    pub fn rgb(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// Get the [A, R, G, B] values of the pixel.
    pub fn channels(&self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    /// Fully transparent pixels are dropped before sorting.
    pub fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }

    /// The same color with alpha forced to 255.
    pub fn opaque(self) -> Self {
        Self(self.0 | 0xFF00_0000)
    }

    pub fn hsv(&self) -> Hsv {
        rgb_to_hsv(self.red(), self.green(), self.blue())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_channel_layout() {
        let pixel = Argb(0x80_11_22_33);
        assert_eq!(pixel.channels(), [0x80, 0x11, 0x22, 0x33]);
        assert_eq!(Argb::from_channels(0x80, 0x11, 0x22, 0x33), pixel);
    }

    #[test]
    fn test_opaque_keeps_color() {
        let pixel = Argb::from_channels(1, 10, 20, 30).opaque();
        assert_eq!(pixel.channels(), [255, 10, 20, 30]);
        assert!(!pixel.is_transparent());
        assert!(Argb::from_channels(0, 99, 99, 99).is_transparent());
    }
}
