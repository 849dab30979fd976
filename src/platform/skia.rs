//! tiny-skia geometry adapters
//!
//! `IntRect` is an origin+size rectangle with the same edge semantics as
//! ours. `Point` and `Rect` carry `f32` coordinates; they are rounded to the
//! nearest pixel (ties to even) on the way in, and finite values beyond the
//! `i32` range saturate. NaN and infinite point coordinates are rejected;
//! tiny-skia already refuses to build a non-finite `Rect`.
//!
//! `IntSize` dimensions are `u32` and are rejected when they exceed
//! `i32::MAX`.

use log::debug;
use tiny_skia::{IntRect, IntSize};

use crate::domain::bounds::{Geometry, GeometryError};
use crate::domain::point::Point;
use crate::domain::rect::{RectLike, RectLtrb, RectLtwh};

fn round_coord(value: f32) -> i32 {
    value.round_ties_even() as i32
}

fn round_finite(value: f32) -> Result<i32, GeometryError> {
    if !value.is_finite() {
        debug!("rejecting non-finite coordinate {value}");
        return Err(GeometryError::NonFinite);
    }
    Ok(round_coord(value))
}

fn size_dimension(value: u32) -> Result<i32, GeometryError> {
    i32::try_from(value).map_err(|_| {
        debug!("size {value} does not fit in a 32-bit coordinate");
        GeometryError::Overflow
    })
}

impl RectLike for IntRect {
    fn left(&self) -> i32 {
        IntRect::left(self)
    }

    fn top(&self) -> i32 {
        IntRect::top(self)
    }

    fn right(&self) -> i32 {
        IntRect::right(self)
    }

    fn bottom(&self) -> i32 {
        IntRect::bottom(self)
    }
}

impl PartialEq<RectLtrb> for IntRect {
    fn eq(&self, other: &RectLtrb) -> bool {
        other == self
    }
}

impl PartialEq<RectLtwh> for IntRect {
    fn eq(&self, other: &RectLtwh) -> bool {
        other == self
    }
}

/// Converts any rectangle to a tiny-skia `IntRect`
///
/// # Returns
/// `None` for zero-area or inverted rectangles, which tiny-skia refuses
pub fn rect_to_int_rect(rect: &impl RectLike) -> Option<IntRect> {
    IntRect::from_ltrb(rect.left(), rect.top(), rect.right(), rect.bottom())
}

/// Converts a tiny-skia `IntRect` to a domain rectangle
pub fn int_rect_to_rect(rect: &IntRect) -> RectLtwh {
    RectLike::to_ltwh(rect)
}

/// Reads a float point, rounded to the nearest pixel
///
/// # Returns
/// `GeometryError::NonFinite` if either coordinate is NaN or infinite
pub fn point_from_skia(point: tiny_skia::Point) -> Result<Point, GeometryError> {
    Ok(Point::new(round_finite(point.x)?, round_finite(point.y)?))
}

/// Reads a float rectangle, each edge rounded to the nearest pixel
pub fn rect_from_skia(rect: &tiny_skia::Rect) -> RectLtrb {
    RectLtrb::new(
        round_coord(rect.left()),
        round_coord(rect.top()),
        round_coord(rect.right()),
        round_coord(rect.bottom()),
    )
}

impl From<IntRect> for RectLtwh {
    fn from(rect: IntRect) -> Self {
        int_rect_to_rect(&rect)
    }
}

impl From<IntRect> for RectLtrb {
    fn from(rect: IntRect) -> Self {
        RectLike::to_ltrb(&rect)
    }
}

impl From<IntRect> for Geometry {
    fn from(rect: IntRect) -> Self {
        Geometry::rect(&rect)
    }
}

/// A bare size is a rectangle anchored at the origin
impl TryFrom<IntSize> for Geometry {
    type Error = GeometryError;

    fn try_from(size: IntSize) -> Result<Self, Self::Error> {
        let width = size_dimension(size.width())?;
        let height = size_dimension(size.height())?;
        Ok(Geometry::Rect(RectLtrb::new(0, 0, width, height)))
    }
}

impl TryFrom<tiny_skia::Point> for Geometry {
    type Error = GeometryError;

    fn try_from(point: tiny_skia::Point) -> Result<Self, Self::Error> {
        point_from_skia(point).map(Geometry::Point)
    }
}

impl From<tiny_skia::Rect> for Geometry {
    fn from(rect: tiny_skia::Rect) -> Self {
        Geometry::Rect(rect_from_skia(&rect))
    }
}
