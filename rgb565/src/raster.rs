//! Generic raster image interface: integer geometry plus the [`Image`] and [`ImageMut`] traits.

use crate::{color::Color, model::ColorModel};
use itertools::iproduct;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A rectangle covering all points with `min.x <= x < max.x` and `min.y <= y < max.y`.
///
/// A rectangle whose `max` is not past its `min` on both axes is empty.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// A rectangle of the given size with its origin at `(0, 0)`. Sizes beyond `i32::MAX` are
    /// clamped.
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        Self::new(0, 0, clamp(width), clamp(height))
    }

    /// Width of the rectangle, `0` if empty.
    #[inline]
    pub const fn dx(&self) -> usize {
        span(self.min.x, self.max.x)
    }

    /// Height of the rectangle, `0` if empty.
    #[inline]
    pub const fn dy(&self) -> usize {
        span(self.min.y, self.max.y)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.dx() == 0 || self.dy() == 0
    }

    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// The largest rectangle contained in both `self` and `other`.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
        )
    }

    /// All points of the rectangle in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(self.min.y..self.max.y, self.min.x..self.max.x).map(|(y, x)| Point { x, y })
    }
}

#[inline]
const fn span(min: i32, max: i32) -> usize {
    if max > min {
        (max as i64 - min as i64) as usize
    } else {
        0
    }
}

/// A rectangular grid of colors.
pub trait Image {
    type Pixel: Color;
    type Model: ColorModel<Output = Self::Pixel>;

    /// The domain of valid coordinates.
    fn bounds(&self) -> Rect;

    /// Returns the pixel at `(x, y)`.
    ///
    /// Implementations decide what coordinates outside of [`bounds`](Image::bounds) return, but
    /// must not panic.
    fn get(&self, x: i32, y: i32) -> Self::Pixel;

    /// The model that [`ImageMut::set`] routes colors through before storing them.
    fn color_model(&self) -> Self::Model;

    #[inline]
    fn get_rgba(&self, x: i32, y: i32) -> [u16; 4] {
        self.get(x, y).to_rgba()
    }
}

pub trait ImageMut: Image {
    /// Stores `color` at `(x, y)` after converting it with the image's color model.
    fn set<C: Color + ?Sized>(&mut self, x: i32, y: i32, color: &C);

    /// Copies every pixel of `src` that lies within the bounds of both images.
    fn copy_from<I: Image + ?Sized>(&mut self, src: &I) {
        let area = self.bounds().intersect(&src.bounds());
        for Point { x, y } in area.points() {
            self.set(x, y, &src.get(x, y));
        }
    }
}
