//! In-memory RGB565 images and bit-exact RGB565 <-> RGBA conversion.
//!
//! RGB565 packs one pixel into 16 bits: 5 bits red, 6 bits green, 5 bits blue. It carries no
//! alpha channel.
//!
//! ```plain
//! .- Rgb565 ----------------------------------------------.
//! |  15 14 13 12 11 | 10  9  8  7  6  5 |  4  3  2  1  0  |
//! |-----------------+-------------------+-----------------|
//! |       red       |       green       |      blue       |
//! `-------------------------------------------------------`
//! ```
//!
//! # Conversion
//!
//! Channels are scaled by `max / 255` when packing and by `255 / max` when unpacking, rounding to
//! the nearest value in both directions. Unlike a plain bit shift, this maps `0` and `255` exactly
//! onto the ends of each field, and unpacking then repacking any RGB565 value returns the same
//! value.
//!
//! Expanded colors are reported in a widened form where every 8-bit channel `v` becomes the
//! 16-bit value `v << 8 | v` (see [`Color`]).
//!
//! # Image layout
//!
//! [`Rgb565Image`] stores 2 bytes per pixel, row-major, top-to-bottom, left-to-right. Every pixel
//! is stored **little-endian** (low byte first). Reads and writes outside the image bounds are
//! not errors: reads return black, writes are ignored.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod buffer;
pub mod color;
pub mod model;
pub mod raster;
pub mod utils;

pub use color::{Color, Rgb565};
#[cfg(feature = "alloc")]
pub use buffer::{FromRawError, PixelByteOrder, Rgb565Image};
pub use model::{ColorModel, Rgb565Model, Rgba8Model, RGB565_MODEL, RGBA8_MODEL};
pub use raster::{Image, ImageMut, Point, Rect};

pub mod consts {
    /// Bits 15..11 of a RGB565 pixel.
    pub const RED_MASK: u16 = 0b1111_1000_0000_0000;
    /// Bits 10..5 of a RGB565 pixel.
    pub const GREEN_MASK: u16 = 0b0000_0111_1110_0000;
    /// Bits 4..0 of a RGB565 pixel.
    pub const BLUE_MASK: u16 = 0b0000_0000_0001_1111;

    pub const RED_SHIFT: u32 = 11;
    pub const GREEN_SHIFT: u32 = 5;

    /// Largest value of the 5-bit red field.
    pub const RED_MAX: u8 = 0b1_1111;
    /// Largest value of the 6-bit green field.
    pub const GREEN_MAX: u8 = 0b11_1111;
    /// Largest value of the 5-bit blue field.
    pub const BLUE_MAX: u8 = 0b1_1111;

    /// Number of bytes a single pixel occupies in an image buffer.
    pub const BYTES_PER_PIXEL: usize = 2;
}
