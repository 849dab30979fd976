//! Points in real pixel coordinates
//!
//! A [`Point`] is an immutable (x, y) pair. Anything that can report an x and
//! a y implements [`PointLike`], which is all the rest of the crate needs to
//! compare against or fold a foreign point.

use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};

/// Anything exposing an integer x/y coordinate pair
pub trait PointLike {
    fn x(&self) -> i32;
    fn y(&self) -> i32;

    /// Reads this value into a native [`Point`]
    fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

impl<T: PointLike + ?Sized> PointLike for &T {
    fn x(&self) -> i32 {
        (**self).x()
    }

    fn y(&self) -> i32 {
        (**self).y()
    }
}

impl PointLike for (i32, i32) {
    fn x(&self) -> i32 {
        self.0
    }

    fn y(&self) -> i32 {
        self.1
    }
}

/// Point in real pixel coordinates
///
/// Coordinates may be negative (secondary monitors left of or above the
/// primary one). Equality is by value against any [`PointLike`].
///
/// The `+` and `-` operators follow plain `i32` arithmetic and therefore
/// overflow like it; use [`Point::checked_add`] / [`Point::checked_sub`] when
/// the inputs are not known to be screen-sized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The additive identity, `(0, 0)`
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum, or `None` on overflow
    pub fn checked_add(self, other: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?,
        ))
    }

    /// Component-wise difference, or `None` on overflow
    pub fn checked_sub(self, other: Point) -> Option<Point> {
        Some(Point::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?,
        ))
    }

    /// True if this point lies strictly right of `other`; y is ignored
    pub fn x_wise_greater_than(&self, other: &impl PointLike) -> bool {
        self.x > other.x()
    }

    /// True if this point lies strictly left of `other`; y is ignored
    pub fn x_wise_less_than(&self, other: &impl PointLike) -> bool {
        self.x < other.x()
    }

    /// True if this point is not left of `other`; y is ignored
    pub fn x_wise_greater_or_eq(&self, other: &impl PointLike) -> bool {
        self.x >= other.x()
    }

    /// True if this point is not right of `other`; y is ignored
    pub fn x_wise_less_or_eq(&self, other: &impl PointLike) -> bool {
        self.x <= other.x()
    }

    /// True if this point lies strictly below `other`; x is ignored
    pub fn y_wise_greater_than(&self, other: &impl PointLike) -> bool {
        self.y > other.y()
    }

    /// True if this point lies strictly above `other`; x is ignored
    pub fn y_wise_less_than(&self, other: &impl PointLike) -> bool {
        self.y < other.y()
    }

    /// True if this point is not above `other`; x is ignored
    pub fn y_wise_greater_or_eq(&self, other: &impl PointLike) -> bool {
        self.y >= other.y()
    }

    /// True if this point is not below `other`; x is ignored
    pub fn y_wise_less_or_eq(&self, other: &impl PointLike) -> bool {
        self.y <= other.y()
    }
}

impl PointLike for Point {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }

    fn to_point(&self) -> Point {
        *self
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl<P: PointLike + ?Sized> PartialEq<P> for Point {
    fn eq(&self, other: &P) -> bool {
        self.x == other.x() && self.y == other.y()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.x, self.y).hash(state);
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Point {
        iter.fold(Point::ORIGIN, Add::add)
    }
}

impl<'a> Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Point {
        iter.copied().sum()
    }
}
