// Copyright 2025 BenderBlog Rodriguez and Contributors.
// SPDX-License-Identifier: 0BSD

///
/// A color in the hue, saturation, value model.
///
/// | Field      | Range     |
/// |------------|-----------|
/// | hue        | [0, 360)  |
/// | saturation | [0, 100]  |
/// | value      | [0, 100]  |
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

///
/// Convert 8 bit RGB values into HSV.
///
/// The channels are normalized into [0.0, 1.0] first, then:
///
/// > $$ S = 100 * (max - min) / max $$ (0 if max is 0)
/// >
/// > $$ V = 100 * max $$
///
/// See `calculate_hue` for the hue part.
///
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;

    let hue = calculate_hue(rf, gf, bf, max, delta);
    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        hue,
        saturation: saturation * 100.0,
        value: max * 100.0,
    }
}

///
/// Get the hue angle in degrees from normalized RGB values.
///
/// The dominant channel decides the sector:
///
/// |Dominant|Hue|
/// |-----|------------------------------|
/// | R   | 60 * (g - b) / delta         |
/// | G   | 120 + 60 * (b - r) / delta   |
/// | B   | 240 + 60 * (r - g) / delta   |
///
/// Gray colors (delta is 0) have hue 0. Negative results wrap by 360.
///
pub fn calculate_hue(rf: f32, gf: f32, bf: f32, max: f32, delta: f32) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }

    let hue = if rf == max {
        60.0 * ((gf - bf) / delta)
    } else if gf == max {
        120.0 + 60.0 * ((bf - rf) / delta)
    } else {
        240.0 + 60.0 * ((rf - gf) / delta)
    };

    if hue < 0.0 { hue + 360.0 } else { hue }
}
