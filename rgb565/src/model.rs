//! Color models: conversions from any [`Color`] into one concrete color representation.
//!
//! Models carry no state, so they are zero-sized tokens that can be copied around freely.

use crate::{color::Color, Rgb565};

/// Converts arbitrary colors into a single color representation.
pub trait ColorModel {
    type Output: Color;

    fn convert<C: Color + ?Sized>(&self, color: &C) -> Self::Output;
}

/// Converts colors to [`Rgb565`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565Model;

pub const RGB565_MODEL: Rgb565Model = Rgb565Model;

impl ColorModel for Rgb565Model {
    type Output = Rgb565;

    /// Values that already are [`Rgb565`] are returned as is. Everything else is narrowed to 8-bit
    /// RGBA and packed with [`Rgb565::from_rgba`], dropping alpha.
    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> Rgb565 {
        if let Some(packed) = color.as_rgb565() {
            return packed;
        }

        let [r, g, b, a] = color.to_rgba8();
        Rgb565::from_rgba(r, g, b, a)
    }
}

/// Converts colors to plain 8-bit `[r, g, b, a]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba8Model;

pub const RGBA8_MODEL: Rgba8Model = Rgba8Model;

impl ColorModel for Rgba8Model {
    type Output = [u8; 4];

    #[inline]
    fn convert<C: Color + ?Sized>(&self, color: &C) -> [u8; 4] {
        color.to_rgba8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_colors_pass_through() {
        for value in [0x0000, 0x0001, 0x8170, 0xfffe, 0xffff] {
            let c = Rgb565::new(value);
            assert_eq!(RGB565_MODEL.convert(&c), c);
            assert_eq!(RGB565_MODEL.convert(&RGB565_MODEL.convert(&c)), c);
        }
    }

    #[test]
    fn other_colors_are_requantized() {
        assert_eq!(RGB565_MODEL.convert(&[0x84u8, 0x82, 0xff, 0x00]), Rgb565::new(0x841f));
        assert_eq!(RGB565_MODEL.convert(&[0x84u8, 0x82, 0x84]), Rgb565::new(0x8410));
        assert_eq!(
            RGB565_MODEL.convert(&[0x8484u16, 0x2d2d, 0x8484, 0xffff]),
            Rgb565::new(0x8170)
        );
    }

    #[test]
    fn dyn_colors() {
        let colors: [&dyn Color; 2] = [&Rgb565::new(0x0400), &[0x00u8, 0x82, 0x00, 0xff]];
        for c in colors {
            assert_eq!(RGB565_MODEL.convert(c), Rgb565::new(0x0400));
        }
    }

    #[test]
    fn rgba8_model_expands_packed_colors() {
        assert_eq!(RGBA8_MODEL.convert(&Rgb565::new(0x8170)), [0x84, 0x2d, 0x84, 0xff]);
        assert_eq!(RGBA8_MODEL.convert(&[1u8, 2, 3, 4]), [1, 2, 3, 4]);
    }
}
