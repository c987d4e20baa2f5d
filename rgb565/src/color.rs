use crate::utils::{
    decode_565, encode_rgb565, encode_rgb565_unchecked, narrow, rgb565_to_rgb888,
    rgb888_to_rgb565, widen,
};
use core::fmt;

/// A color that can report itself as widened RGBA.
///
/// Channels are 16 bits wide. An 8-bit channel `v` is represented as `v << 8 | v`, so an opaque
/// alpha is `0xFFFF`.
pub trait Color {
    /// Returns the widened `[r, g, b, a]` channels of this color.
    fn to_rgba(&self) -> [u16; 4];

    /// Returns the color if it is already stored as RGB565.
    ///
    /// Color models use this to skip requantizing values that are already packed.
    #[inline]
    fn as_rgb565(&self) -> Option<Rgb565> {
        None
    }

    /// Returns the `[r, g, b, a]` channels of this color narrowed to 8 bits.
    #[inline]
    fn to_rgba8(&self) -> [u8; 4] {
        let [r, g, b, a] = self.to_rgba();
        [narrow(r), narrow(g), narrow(b), narrow(a)]
    }
}

impl<C: Color + ?Sized> Color for &C {
    #[inline]
    fn to_rgba(&self) -> [u16; 4] {
        (**self).to_rgba()
    }

    #[inline]
    fn as_rgb565(&self) -> Option<Rgb565> {
        (**self).as_rgb565()
    }
}

/// 8-bit RGBA.
impl Color for [u8; 4] {
    #[inline]
    fn to_rgba(&self) -> [u16; 4] {
        let [r, g, b, a] = *self;
        [widen(r), widen(g), widen(b), widen(a)]
    }
}

/// 8-bit RGB, fully opaque.
impl Color for [u8; 3] {
    #[inline]
    fn to_rgba(&self) -> [u16; 4] {
        let [r, g, b] = *self;
        [widen(r), widen(g), widen(b), u16::MAX]
    }
}

/// Already widened RGBA.
impl Color for [u16; 4] {
    #[inline]
    fn to_rgba(&self) -> [u16; 4] {
        *self
    }
}

/// A single RGB565 pixel.
///
/// Bits 15..11 hold red, 10..5 green and 4..0 blue. There is no alpha: every RGB565 color expands
/// to a fully opaque RGBA color.
#[repr(transparent)]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Wraps a raw RGB565 value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn into_inner(self) -> u16 {
        self.0
    }

    /// Packs an 8-bit RGBA color.
    ///
    /// Each channel is scaled to its field with `round(c * max / 255)`. The alpha channel has no
    /// place in RGB565 and is ignored.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, _a: u8) -> Self {
        Self::from_rgb(r, g, b)
    }

    /// Packs an 8-bit RGB color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(encode_rgb565_unchecked(rgb888_to_rgb565([r, g, b])))
    }

    /// Composes a pixel from raw 5-bit red, 6-bit green, and 5-bit blue fields. Bits that don't
    /// fit into their field are dropped.
    #[inline]
    pub const fn from_components(components: [u8; 3]) -> Self {
        Self(encode_rgb565(components))
    }

    /// Returns the raw `[r5, g6, b5]` fields.
    #[inline]
    pub const fn components(self) -> [u8; 3] {
        decode_565(self.0)
    }

    /// Raw 5-bit red field.
    #[inline]
    pub const fn red(self) -> u8 {
        self.components()[0]
    }

    /// Raw 6-bit green field.
    #[inline]
    pub const fn green(self) -> u8 {
        self.components()[1]
    }

    /// Raw 5-bit blue field.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.components()[2]
    }

    /// Expands the pixel to 8-bit RGB, using `round(v * 255 / max)` per channel.
    #[inline]
    pub const fn to_rgb8(self) -> [u8; 3] {
        rgb565_to_rgb888(self.components())
    }

    /// Expands the pixel to 8-bit RGBA. Alpha is always `0xFF`.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.to_rgb8();
        [r, g, b, u8::MAX]
    }

    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    #[inline]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }
}

impl Color for Rgb565 {
    #[inline]
    fn to_rgba(&self) -> [u16; 4] {
        let [r, g, b] = self.to_rgb8();
        [widen(r), widen(g), widen(b), u16::MAX]
    }

    #[inline]
    fn as_rgb565(&self) -> Option<Rgb565> {
        Some(*self)
    }

    #[inline]
    fn to_rgba8(&self) -> [u8; 4] {
        Rgb565::to_rgba8(*self)
    }
}

impl From<u16> for Rgb565 {
    #[inline]
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<Rgb565> for u16 {
    #[inline]
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

impl fmt::Debug for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rgb565")
            .field(&format_args!("{:#06x}", self.0))
            .finish()
    }
}

/// Formats the expanded color as `#rrggbb`.
impl fmt::Display for Rgb565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[cfg(feature = "image")]
mod image_interop {
    use super::{Color, Rgb565};
    use image::{Rgb, Rgba};

    impl Color for Rgb<u8> {
        #[inline]
        fn to_rgba(&self) -> [u16; 4] {
            self.0.to_rgba()
        }
    }

    impl Color for Rgba<u8> {
        #[inline]
        fn to_rgba(&self) -> [u16; 4] {
            self.0.to_rgba()
        }
    }

    impl From<Rgb565> for Rgb<u8> {
        #[inline]
        fn from(color: Rgb565) -> Self {
            Rgb(color.to_rgb8())
        }
    }

    impl From<Rgb565> for Rgba<u8> {
        #[inline]
        fn from(color: Rgb565) -> Self {
            Rgba(color.to_rgba8())
        }
    }
}
