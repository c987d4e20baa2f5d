use crate::{
    color::{Color, Rgb565},
    consts::BYTES_PER_PIXEL,
    model::{ColorModel, Rgb565Model, RGB565_MODEL},
    raster::{Image, ImageMut, Point, Rect},
};
use alloc::{vec, vec::Vec};
use byteorder::{ByteOrder, LittleEndian};
use core::fmt;
use snafu::Snafu;

/// Byte order of every pixel stored in an [`Rgb565Image`].
pub type PixelByteOrder = LittleEndian;

#[derive(Debug, Snafu)]
pub enum FromRawError {
    #[snafu(display(
        "A {width}x{height} RGB565 image needs {expected} bytes, but {actual} bytes were given"
    ))]
    InvalidLength {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    #[snafu(display("A {width}x{height} RGB565 image does not fit into memory"))]
    TooLarge { width: usize, height: usize },
}

/// `(stride, len)` in bytes of an image with the given size, `None` on overflow.
fn byte_size(width: usize, height: usize) -> Option<(usize, usize)> {
    let stride = width.checked_mul(BYTES_PER_PIXEL)?;
    Some((stride, stride.checked_mul(height)?))
}

/// An in-memory image of [`Rgb565`] pixels.
///
/// The pixel at `(x, y)` occupies the two bytes starting at
/// `(y - rect.min.y) * stride + (x - rect.min.x) * 2`, stored little-endian (see
/// [`PixelByteOrder`]).
///
/// Coordinates outside of the bounds are not an error: [`get`](Self::get) returns black and
/// [`set`](Self::set) does nothing.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rgb565Image {
    pixels: Vec<u8>,
    stride: usize,
    rect: Rect,
}

impl Rgb565Image {
    /// Allocates a black image covering `rect`.
    ///
    /// Empty rectangles produce an image without any pixels.
    ///
    /// # Panics
    ///
    /// Panics if the size of the pixel data in bytes overflows `usize`.
    pub fn new(rect: Rect) -> Self {
        let (width, height) = (rect.dx(), rect.dy());
        let Some((stride, len)) = byte_size(width, height) else {
            panic!("{width}x{height} RGB565 image is too large");
        };
        log::trace!("allocating {width}x{height} RGB565 image at {rect:?}");

        Self {
            pixels: vec![0; len],
            stride,
            rect,
        }
    }

    /// Wraps existing little-endian RGB565 pixel data covering `rect`.
    pub fn from_raw(rect: Rect, pixels: Vec<u8>) -> Result<Self, FromRawError> {
        let (width, height) = (rect.dx(), rect.dy());
        let Some((stride, expected)) = byte_size(width, height) else {
            log::debug!("rejecting pixel data for a {width}x{height} image: size overflows");
            return TooLargeSnafu { width, height }.fail();
        };

        if pixels.len() != expected {
            log::debug!(
                "rejecting {} bytes of pixel data for a {width}x{height} image",
                pixels.len()
            );
            return InvalidLengthSnafu {
                width,
                height,
                expected,
                actual: pixels.len(),
            }
            .fail();
        }

        Ok(Self {
            pixels,
            stride,
            rect,
        })
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Bytes between the start of one row and the next.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rect.dx()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rect.dy()
    }

    /// The raw pixel data.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// RGB565 has no alpha channel, so every pixel is opaque.
    #[inline]
    pub fn opaque(&self) -> bool {
        true
    }

    #[inline]
    pub fn color_model(&self) -> Rgb565Model {
        RGB565_MODEL
    }

    /// Byte offset of the pixel at `(x, y)`.
    ///
    /// Does not check bounds: the result is meaningless for coordinates outside of the image.
    #[inline]
    pub fn pixel_offset(&self, x: i32, y: i32) -> usize {
        let row = (i64::from(y) - i64::from(self.rect.min.y)) as usize;
        let col = (i64::from(x) - i64::from(self.rect.min.x)) as usize;
        row * self.stride + col * BYTES_PER_PIXEL
    }

    /// Returns the pixel at `(x, y)`, or black if the point lies outside of the image.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Rgb565 {
        if !self.rect.contains(Point::new(x, y)) {
            return Rgb565::BLACK;
        }

        let i = self.pixel_offset(x, y);
        Rgb565::new(PixelByteOrder::read_u16(&self.pixels[i..i + BYTES_PER_PIXEL]))
    }

    /// Converts `color` to RGB565 and stores it at `(x, y)`. Does nothing if the point lies
    /// outside of the image.
    #[inline]
    pub fn set<C: Color + ?Sized>(&mut self, x: i32, y: i32, color: &C) {
        if !self.rect.contains(Point::new(x, y)) {
            return;
        }

        let i = self.pixel_offset(x, y);
        let packed = RGB565_MODEL.convert(color);
        PixelByteOrder::write_u16(&mut self.pixels[i..i + BYTES_PER_PIXEL], packed.into_inner());
    }

    /// Sets every pixel to `color`.
    pub fn fill<C: Color + ?Sized>(&mut self, color: &C) {
        let bytes = RGB565_MODEL.convert(color).into_inner();
        for pixel in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            PixelByteOrder::write_u16(pixel, bytes);
        }
    }

    /// Iterates over `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32, Rgb565)> + '_ {
        self.rect
            .points()
            .zip(self.pixels.chunks_exact(BYTES_PER_PIXEL))
            .map(|(Point { x, y }, bytes)| (x, y, Rgb565::new(PixelByteOrder::read_u16(bytes))))
    }
}

impl fmt::Debug for Rgb565Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rgb565Image")
            .field("rect", &self.rect)
            .field("stride", &self.stride)
            .field("len", &self.pixels.len())
            .finish_non_exhaustive()
    }
}

impl Image for Rgb565Image {
    type Pixel = Rgb565;
    type Model = Rgb565Model;

    #[inline]
    fn bounds(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Rgb565 {
        Rgb565Image::get(self, x, y)
    }

    #[inline]
    fn color_model(&self) -> Rgb565Model {
        RGB565_MODEL
    }
}

impl ImageMut for Rgb565Image {
    #[inline]
    fn set<C: Color + ?Sized>(&mut self, x: i32, y: i32, color: &C) {
        Rgb565Image::set(self, x, y, color)
    }
}

#[cfg(feature = "image")]
mod image_interop {
    use super::{PixelByteOrder, Rgb565Image};
    use crate::{
        color::Color,
        consts::BYTES_PER_PIXEL,
        model::{ColorModel, RGB565_MODEL},
        raster::Rect,
    };
    use byteorder::ByteOrder;
    use image::{Rgba, RgbaImage, RgbImage};

    impl Rgb565Image {
        /// Packs an RGB image into a new image with its origin at `(0, 0)`.
        pub fn from_rgb_image(source: &RgbImage) -> Self {
            Self::pack(source.width(), source.height(), source.pixels())
        }

        /// Packs an RGBA image into a new image with its origin at `(0, 0)`. Alpha is dropped.
        pub fn from_rgba_image(source: &RgbaImage) -> Self {
            Self::pack(source.width(), source.height(), source.pixels())
        }

        fn pack<'a, P: Color + 'a>(
            width: u32,
            height: u32,
            source: impl Iterator<Item = &'a P>,
        ) -> Self {
            let mut image = Self::new(Rect::from_size(width, height));
            for (dst, pixel) in image.pixels.chunks_exact_mut(BYTES_PER_PIXEL).zip(source) {
                PixelByteOrder::write_u16(dst, RGB565_MODEL.convert(pixel).into_inner());
            }
            image
        }

        /// Expands the image to opaque RGBA. The result's `(0, 0)` is the image's `rect.min`.
        pub fn to_rgba_image(&self) -> RgbaImage {
            let min = self.rect.min;
            RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
                Rgba::from(self.get(min.x + x as i32, min.y + y as i32))
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_image_is_zeroed() {
        let image = Rgb565Image::new(Rect::new(0, 0, 3, 2));
        assert_eq!(image.stride(), 6);
        assert_eq!(image.as_bytes(), &[0; 12]);
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert!(image.opaque());
    }

    #[test]
    fn empty_rect() {
        let image = Rgb565Image::new(Rect::new(4, 4, 4, 9));
        assert!(image.as_bytes().is_empty());
        assert_eq!(image.get(4, 4), Rgb565::BLACK);
        assert_eq!(image.pixels().count(), 0);

        let inverted = Rgb565Image::new(Rect::new(3, 3, 1, 1));
        assert!(inverted.as_bytes().is_empty());
        assert_eq!(inverted.bounds(), Rect::new(3, 3, 1, 1));
    }

    #[test]
    fn offsets() {
        let image = Rgb565Image::new(Rect::new(-2, 10, 3, 14));
        assert_eq!(image.pixel_offset(-2, 10), 0);
        assert_eq!(image.pixel_offset(-1, 10), 2);
        assert_eq!(image.pixel_offset(-2, 11), 10);
        assert_eq!(image.pixel_offset(2, 13), 3 * 10 + 4 * 2);
    }

    #[test]
    fn stores_little_endian() {
        let mut image = Rgb565Image::new(Rect::new(0, 0, 2, 1));
        image.set(1, 0, &Rgb565::new(0x841f));
        assert_eq!(image.as_bytes(), &[0x00, 0x00, 0x1f, 0x84]);
        assert_eq!(image.get(1, 0), Rgb565::new(0x841f));
    }

    #[test]
    fn set_requantizes() {
        let mut image = Rgb565Image::new(Rect::new(0, 0, 1, 1));
        image.set(0, 0, &[0x84u8, 0x2d, 0x84, 0x00]);
        assert_eq!(image.get(0, 0), Rgb565::new(0x8170));
        assert_eq!(image.get(0, 0).to_rgba8(), [0x84, 0x2d, 0x84, 0xff]);
    }

    #[test]
    fn from_raw_checks_length() {
        let rect = Rect::new(0, 0, 2, 2);
        let image = Rgb565Image::from_raw(rect, vec![0x1f, 0x84, 0, 0, 0, 0, 0xff, 0xff]).unwrap();
        assert_eq!(image.get(0, 0), Rgb565::new(0x841f));
        assert_eq!(image.get(1, 1), Rgb565::WHITE);

        let err = Rgb565Image::from_raw(rect, vec![0; 7]).unwrap_err();
        assert!(matches!(
            err,
            FromRawError::InvalidLength {
                width: 2,
                height: 2,
                expected: 8,
                actual: 7
            }
        ));
        assert_eq!(
            err.to_string(),
            "A 2x2 RGB565 image needs 8 bytes, but 7 bytes were given"
        );
    }

    #[test]
    fn from_raw_rejects_overflowing_sizes() {
        for rect in [
            Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX),
            Rect::new(i32::MIN, i32::MIN, i32::MAX, 1),
        ] {
            let err = Rgb565Image::from_raw(rect, Vec::new()).unwrap_err();
            assert!(
                matches!(err, FromRawError::TooLarge { width, height }
                    if width == rect.dx() && height == rect.dy()),
                "{rect:?}: {err:?}"
            );
        }

        let rect = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        let err = Rgb565Image::from_raw(rect, vec![0; 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "A 4294967295x4294967295 RGB565 image does not fit into memory"
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "RGB565 image is too large")]
    fn new_panics_on_overflowing_size() {
        Rgb565Image::new(Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX));
    }

    #[test]
    fn fill_and_iterate() {
        let mut image = Rgb565Image::new(Rect::new(1, 1, 3, 2));
        image.fill(&[0xffu8, 0xff, 0xff]);
        let pixels: Vec<_> = image.pixels().collect();
        assert_eq!(pixels, [(1, 1, Rgb565::WHITE), (2, 1, Rgb565::WHITE)]);
    }

    #[test]
    fn debug_omits_pixel_data() {
        let image = Rgb565Image::new(Rect::new(0, 0, 1, 1));
        assert_eq!(
            format!("{image:?}"),
            "Rgb565Image { rect: Rect { min: Point { x: 0, y: 0 }, max: Point { x: 1, y: 1 } }, stride: 2, len: 2, .. }"
        );
    }
}
