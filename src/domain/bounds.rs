//! Bounding rectangles over mixed geometry
//!
//! Callers adapt whatever they have (native points and rectangles, Win32
//! structs, tiny-skia values, raw coordinates) into [`Geometry`] and hand
//! the sequence to [`bounding_rect_ltrb`] or [`bounding_rect_ltwh`]. Both
//! compute the same smallest enclosing rectangle and differ only in the view
//! they return.

use log::{debug, trace};
use thiserror::Error;

use crate::domain::point::{Point, PointLike};
use crate::domain::rect::{RectLike, RectLtrb, RectLtwh};

/// Errors that can occur while building a bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// No items were supplied, so there is nothing to bound
    #[error("cannot compute a bounding rectangle of an empty set")]
    InvalidArgument,
    /// Raw coordinates that describe neither a point nor a rectangle
    #[error("{len} coordinates describe neither a point (2) nor a rectangle (4)")]
    UnsupportedType { len: usize },
    /// A width or height does not fit in `i32`
    #[error("rectangle size does not fit in a 32-bit coordinate")]
    Overflow,
    /// A floating-point coordinate was NaN or infinite
    #[error("coordinate is not a finite number")]
    NonFinite,
}

/// A single input to the bounding constructors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Point(Point),
    Rect(RectLtrb),
}

impl Geometry {
    /// Wraps any point-like value
    pub fn point(point: &impl PointLike) -> Self {
        Geometry::Point(point.to_point())
    }

    /// Wraps any rectangle-like value
    pub fn rect(rect: &impl RectLike) -> Self {
        Geometry::Rect(rect.to_ltrb())
    }

    /// Points that a bounding rectangle must cover for this item
    ///
    /// A point repeats itself; a rectangle yields its four corners.
    fn extremal_points(&self) -> [Point; 4] {
        match self {
            Geometry::Point(point) => [*point; 4],
            Geometry::Rect(rect) => [
                rect.top_left(),
                rect.top_right(),
                rect.bottom_left(),
                rect.bottom_right(),
            ],
        }
    }
}

impl From<Point> for Geometry {
    fn from(point: Point) -> Self {
        Geometry::Point(point)
    }
}

impl From<(i32, i32)> for Geometry {
    fn from(point: (i32, i32)) -> Self {
        Geometry::Point(point.into())
    }
}

impl From<RectLtrb> for Geometry {
    fn from(rect: RectLtrb) -> Self {
        Geometry::Rect(rect)
    }
}

impl From<RectLtwh> for Geometry {
    fn from(rect: RectLtwh) -> Self {
        Geometry::Rect(rect.into())
    }
}

impl TryFrom<&[i32]> for Geometry {
    type Error = GeometryError;

    /// Reads `[x, y]` as a point and `[left, top, right, bottom]` as a rectangle
    fn try_from(coords: &[i32]) -> Result<Self, Self::Error> {
        match *coords {
            [x, y] => Ok(Geometry::Point(Point::new(x, y))),
            [left, top, right, bottom] => Ok(Geometry::Rect(RectLtrb::new(left, top, right, bottom))),
            _ => Err(GeometryError::UnsupportedType { len: coords.len() }),
        }
    }
}

/// Running min/max over every folded point
#[derive(Debug, Clone, Copy)]
struct Extent {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Extent {
    fn at(point: Point) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    fn include(self, point: Point) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            min_y: self.min_y.min(point.y),
            max_x: self.max_x.max(point.x),
            max_y: self.max_y.max(point.y),
        }
    }

    fn to_rect(self) -> RectLtrb {
        RectLtrb::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

fn bounding_extent<I>(items: I) -> Result<RectLtrb, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Geometry>,
{
    let mut extent: Option<Extent> = None;
    let mut count = 0usize;

    for item in items {
        count += 1;
        let item: Geometry = item.into();
        for point in item.extremal_points() {
            extent = Some(match extent {
                Some(extent) => extent.include(point),
                None => Extent::at(point),
            });
        }
    }

    match extent {
        Some(extent) => {
            let rect = extent.to_rect();
            trace!("bounding rectangle of {count} items: {rect:?}");
            Ok(rect)
        }
        None => {
            debug!("refusing to bound an empty set of geometry");
            Err(GeometryError::InvalidArgument)
        }
    }
}

/// Returns the smallest corner-pair rectangle containing every item
///
/// Points contribute themselves, rectangles their four corners. The result
/// does not depend on the order of `items`.
///
/// # Example
/// ```rust
/// use tactile_geometry::{bounding_rect_ltrb, Geometry, Point, RectLtrb};
///
/// let rect = bounding_rect_ltrb([
///     Geometry::from(Point::new(10, 15)),
///     Geometry::from(RectLtrb::new(450, 450, 500, 1000)),
/// ])?;
/// assert_eq!(rect, RectLtrb::new(10, 15, 500, 1000));
/// # Ok::<(), tactile_geometry::GeometryError>(())
/// ```
pub fn bounding_rect_ltrb<I>(items: I) -> Result<RectLtrb, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Geometry>,
{
    bounding_extent(items)
}

/// Same as [`bounding_rect_ltrb`], returned as an origin+size rectangle
///
/// Fails with [`GeometryError::Overflow`] when the bounds are wider or
/// taller than `i32::MAX`, which the origin+size view cannot hold.
pub fn bounding_rect_ltwh<I>(items: I) -> Result<RectLtwh, GeometryError>
where
    I: IntoIterator,
    I::Item: Into<Geometry>,
{
    let rect = bounding_extent(items)?;
    rect.checked_to_ltwh().ok_or_else(|| {
        debug!("bounding rectangle {rect:?} is too large for origin+size");
        GeometryError::Overflow
    })
}

/// Builds a corner-pair rectangle from four bare scalars
/// `[left, top, right, bottom]`
pub fn bounding_rect_ltrb_from_coords(coords: &[i32]) -> Result<RectLtrb, GeometryError> {
    let [left, top, right, bottom] = *coords_quad(coords)?;
    Ok(RectLtrb::new(left, top, right, bottom))
}

/// Builds an origin+size rectangle from four bare scalars
/// `[left, top, width, height]`
pub fn bounding_rect_ltwh_from_coords(coords: &[i32]) -> Result<RectLtwh, GeometryError> {
    let [left, top, width, height] = *coords_quad(coords)?;
    Ok(RectLtwh::new(left, top, width, height))
}

fn coords_quad(coords: &[i32]) -> Result<&[i32; 4], GeometryError> {
    if coords.is_empty() {
        debug!("refusing to build a rectangle from no coordinates");
        return Err(GeometryError::InvalidArgument);
    }
    coords.try_into().map_err(|_| {
        debug!("expected 4 coordinates, got {}", coords.len());
        GeometryError::UnsupportedType { len: coords.len() }
    })
}
