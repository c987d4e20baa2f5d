use crate::consts::*;

/// Splits a RGB565 pixel into its 5-bit R, 6-bit G, and 5-bit B fields.
#[inline]
pub const fn decode_565(pixel: u16) -> [u8; 3] {
    let r = (pixel & RED_MASK) >> RED_SHIFT;
    let g = (pixel & GREEN_MASK) >> GREEN_SHIFT;
    let b = pixel & BLUE_MASK;

    [r as u8, g as u8, b as u8]
}

/// Compose the 5-bit R, 6-bit G, and 5-bit B values into a RGB565 u16 pixel. Does not mask off
/// higher bits if they are set.
#[inline]
pub const fn encode_rgb565_unchecked([r, g, b]: [u8; 3]) -> u16 {
    ((r as u16) << RED_SHIFT) | ((g as u16) << GREEN_SHIFT) | (b as u16)
}

/// Compose the 5-bit R, 6-bit G, and 5-bit B values into a RGB565 u16 pixel, discarding any bits
/// that don't fit into their field.
#[inline]
pub const fn encode_rgb565([r, g, b]: [u8; 3]) -> u16 {
    encode_rgb565_unchecked([r & RED_MAX, g & GREEN_MAX, b & BLUE_MAX])
}

/// Scales an 8-bit channel down to `0..=MAX`, rounding to the nearest value.
///
/// Computes `round(value * MAX / 255)`. `2 * value * MAX` is even while `255 * (2k + 1)` is odd,
/// so the exact quotient never lands on a half and the rounding direction is never ambiguous.
#[inline]
pub const fn quantize<const MAX: u8>(value: u8) -> u8 {
    let max = MAX as u32;
    ((2 * value as u32 * max + 255) / 510) as u8
}

/// Scales a channel in `0..=MAX` up to the full 8-bit range, rounding to the nearest value.
///
/// Computes `round(value * 255 / MAX)`. `MAX` is an all-ones field mask (`0b1_1111`,
/// `0b11_1111`); bits of `value` outside of it are dropped first.
#[inline]
pub const fn expand<const MAX: u8>(value: u8) -> u8 {
    let max = MAX as u32;
    let value = (value & MAX) as u32;
    ((2 * value * 255 + max) / (2 * max)) as u8
}

/// Converts an RGB888 pixel into 5/6/5-bit RGB565 components.
#[inline]
pub const fn rgb888_to_rgb565([r, g, b]: [u8; 3]) -> [u8; 3] {
    [
        quantize::<{ RED_MAX }>(r),
        quantize::<{ GREEN_MAX }>(g),
        quantize::<{ BLUE_MAX }>(b),
    ]
}

/// Converts 5/6/5-bit RGB565 components into an RGB888 pixel.
#[inline]
pub const fn rgb565_to_rgb888([r, g, b]: [u8; 3]) -> [u8; 3] {
    [
        expand::<{ RED_MAX }>(r),
        expand::<{ GREEN_MAX }>(g),
        expand::<{ BLUE_MAX }>(b),
    ]
}

/// Widens an 8-bit channel to 16 bits by replicating it into both bytes.
#[inline]
pub const fn widen(value: u8) -> u16 {
    u16::from_be_bytes([value, value])
}

/// Inverse of [`widen`]: keeps the high byte of a 16-bit channel.
#[inline]
pub const fn narrow(value: u16) -> u8 {
    (value >> 8) as u8
}
