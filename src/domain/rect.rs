//! Axis-aligned rectangles in real pixel coordinates
//!
//! The same geometry is available through two views:
//! - [`RectLtrb`]: corner pair (left, top, right, bottom)
//! - [`RectLtwh`]: origin plus size (left, top, width, height)
//!
//! Both, and any foreign rectangle, implement [`RectLike`]. Equality is
//! structural on the resolved (left, top, right, bottom) tuple, so a
//! rectangle built through one view equals the same rectangle built through
//! the other.
//!
//! Callers must uphold `left <= right` and `top <= bottom`. Zero-area
//! rectangles are fine; inverted ones are not checked and give
//! unspecified (but memory-safe) results.

use std::hash::{Hash, Hasher};

use crate::domain::bounds::Geometry;
use crate::domain::point::{Point, PointLike};

/// Anything exposing integer left/top/right/bottom edges
///
/// Implementors that store a size rather than a far corner should override
/// [`RectLike::width`] and [`RectLike::height`].
pub trait RectLike {
    fn left(&self) -> i32;
    fn top(&self) -> i32;
    fn right(&self) -> i32;
    fn bottom(&self) -> i32;

    /// Horizontal extent; `right - left` must fit in `i32`
    fn width(&self) -> i32 {
        self.right() - self.left()
    }

    /// Vertical extent; `bottom - top` must fit in `i32`
    fn height(&self) -> i32 {
        self.bottom() - self.top()
    }

    fn to_ltrb(&self) -> RectLtrb {
        RectLtrb::new(self.left(), self.top(), self.right(), self.bottom())
    }

    fn to_ltwh(&self) -> RectLtwh {
        RectLtwh::new(self.left(), self.top(), self.width(), self.height())
    }

    fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Midpoint of the rectangle, rounded toward negative infinity
    ///
    /// `(-3, -3, 0, 0)` has its center at `(-2, -2)`, `(0, 0, 3, 3)` at `(1, 1)`.
    fn center(&self) -> Point {
        Point::new(
            floor_midpoint(self.left(), self.right()),
            floor_midpoint(self.top(), self.bottom()),
        )
    }

    /// Area in square pixels
    ///
    /// Edges are widened before subtracting, so any corner pair works. The
    /// product saturates at `i64::MAX` for spans wider than 2^31 on both axes.
    fn area(&self) -> i64 {
        let width = i64::from(self.right()) - i64::from(self.left());
        let height = i64::from(self.bottom()) - i64::from(self.top());
        width.saturating_mul(height)
    }

    /// True when every edge sits at zero, which is also what a failed
    /// [`RectLtrb::intersection`] returns
    fn is_zero(&self) -> bool {
        self.left() == 0 && self.top() == 0 && self.right() == 0 && self.bottom() == 0
    }

    /// True if `other` lies within or on the edges of this rectangle
    fn is_superset(&self, other: &(impl RectLike + ?Sized)) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// True if this rectangle lies within or on the edges of `other`
    fn is_subset(&self, other: &(impl RectLike + ?Sized)) -> bool {
        other.is_superset(self)
    }

    /// Half-open point test: left/top edges inclusive, right/bottom exclusive
    fn contains_point(&self, point: &impl PointLike) -> bool {
        point.x() >= self.left()
            && point.x() < self.right()
            && point.y() >= self.top()
            && point.y() < self.bottom()
    }

    /// True if `other` is a subset of this rectangle and not the same rectangle
    fn contains_rect(&self, other: &(impl RectLike + ?Sized)) -> bool {
        other.is_subset(self) && !same_edges(self, other)
    }

    /// Membership test for either kind of geometry
    ///
    /// Points use [`RectLike::contains_point`], rectangles use
    /// [`RectLike::contains_rect`].
    fn contains(&self, item: impl Into<Geometry>) -> bool
    where
        Self: Sized,
    {
        match item.into() {
            Geometry::Point(point) => self.contains_point(&point),
            Geometry::Rect(rect) => self.contains_rect(&rect),
        }
    }
}

impl<T: RectLike + ?Sized> RectLike for &T {
    fn left(&self) -> i32 {
        (**self).left()
    }

    fn top(&self) -> i32 {
        (**self).top()
    }

    fn right(&self) -> i32 {
        (**self).right()
    }

    fn bottom(&self) -> i32 {
        (**self).bottom()
    }

    fn width(&self) -> i32 {
        (**self).width()
    }

    fn height(&self) -> i32 {
        (**self).height()
    }

    fn area(&self) -> i64 {
        (**self).area()
    }
}

fn floor_midpoint(a: i32, b: i32) -> i32 {
    // Always within i32 range since the midpoint lies between a and b
    (i64::from(a) + i64::from(b)).div_euclid(2) as i32
}

fn same_edges(a: &(impl RectLike + ?Sized), b: &(impl RectLike + ?Sized)) -> bool {
    a.left() == b.left() && a.top() == b.top() && a.right() == b.right() && a.bottom() == b.bottom()
}

/// Rectangle stored as a corner pair
#[derive(Debug, Clone, Copy, Default)]
pub struct RectLtrb {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectLtrb {
    /// The all-zero rectangle, returned by [`RectLtrb::intersection`] for
    /// disjoint inputs
    pub const ZERO: RectLtrb = RectLtrb::new(0, 0, 0, 0);

    /// Creates a new rectangle from its edges
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Zero-size rectangle anchored at `point`
    pub fn from_point(point: &impl PointLike) -> Self {
        Self::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Returns the overlapping area of two rectangles
    ///
    /// Disjoint rectangles yield [`RectLtrb::ZERO`]. Rectangles that only
    /// share an edge yield a zero-area rectangle on that edge. Use
    /// [`RectLtrb::checked_intersection`] to tell "no overlap" apart from a
    /// zero-area rectangle at the origin.
    pub fn intersection(&self, other: &impl RectLike) -> RectLtrb {
        self.checked_intersection(other).unwrap_or(Self::ZERO)
    }

    /// Returns the overlapping area of two rectangles, or None if they don't
    /// touch at all
    pub fn checked_intersection(&self, other: &impl RectLike) -> Option<RectLtrb> {
        let left = self.left.max(other.left());
        let top = self.top.max(other.top());
        let right = self.right.min(other.right());
        let bottom = self.bottom.min(other.bottom());

        if left > right || top > bottom {
            None
        } else {
            Some(RectLtrb::new(left, top, right, bottom))
        }
    }

    /// Origin+size view, or None when the width or height exceeds `i32::MAX`
    pub fn checked_to_ltwh(&self) -> Option<RectLtwh> {
        Some(RectLtwh::new(
            self.left,
            self.top,
            self.right.checked_sub(self.left)?,
            self.bottom.checked_sub(self.top)?,
        ))
    }

    /// Moves the rectangle by `offset`, keeping its size
    pub fn translate(&self, offset: Point) -> RectLtrb {
        RectLtrb::new(
            self.left + offset.x,
            self.top + offset.y,
            self.right + offset.x,
            self.bottom + offset.y,
        )
    }

    /// Pushes every edge outward by `margin` (inward when negative)
    ///
    /// Shrinking past the center produces an inverted rectangle, which is
    /// the caller's responsibility to avoid.
    pub fn expand_or_shrink(&self, margin: i32) -> RectLtrb {
        RectLtrb::new(
            self.left - margin,
            self.top - margin,
            self.right + margin,
            self.bottom + margin,
        )
    }
}

impl RectLike for RectLtrb {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.right
    }

    fn bottom(&self) -> i32 {
        self.bottom
    }

    fn to_ltrb(&self) -> RectLtrb {
        *self
    }
}

/// Rectangle stored as an origin and a size
///
/// `left + width` and `top + height` must fit in `i32`; every edge accessor
/// relies on it. [`RectLtwh::checked_to_ltrb`] checks it explicitly.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectLtwh {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl RectLtwh {
    /// Creates a new rectangle from its origin and size
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Zero-size rectangle anchored at `point`
    pub fn from_point(point: &impl PointLike) -> Self {
        Self::new(point.x(), point.y(), 0, 0)
    }

    /// Corner-pair view, or None when the far edges overflow `i32`
    pub fn checked_to_ltrb(&self) -> Option<RectLtrb> {
        Some(RectLtrb::new(
            self.left,
            self.top,
            self.left.checked_add(self.width)?,
            self.top.checked_add(self.height)?,
        ))
    }

    /// See [`RectLtrb::intersection`]
    pub fn intersection(&self, other: &impl RectLike) -> RectLtwh {
        self.to_ltrb().intersection(other).into()
    }

    /// See [`RectLtrb::checked_intersection`]
    pub fn checked_intersection(&self, other: &impl RectLike) -> Option<RectLtwh> {
        self.to_ltrb().checked_intersection(other).map(Into::into)
    }

    pub fn translate(&self, offset: Point) -> RectLtwh {
        RectLtwh::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }

    pub fn expand_or_shrink(&self, margin: i32) -> RectLtwh {
        self.to_ltrb().expand_or_shrink(margin).into()
    }
}

impl RectLike for RectLtwh {
    fn left(&self) -> i32 {
        self.left
    }

    fn top(&self) -> i32 {
        self.top
    }

    fn right(&self) -> i32 {
        self.left + self.width
    }

    fn bottom(&self) -> i32 {
        self.top + self.height
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    fn to_ltwh(&self) -> RectLtwh {
        *self
    }
}

impl From<RectLtwh> for RectLtrb {
    fn from(rect: RectLtwh) -> Self {
        rect.to_ltrb()
    }
}

impl From<RectLtrb> for RectLtwh {
    fn from(rect: RectLtrb) -> Self {
        rect.to_ltwh()
    }
}

impl<R: RectLike + ?Sized> PartialEq<R> for RectLtrb {
    fn eq(&self, other: &R) -> bool {
        same_edges(self, other)
    }
}

impl Eq for RectLtrb {}

impl Hash for RectLtrb {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.left, self.top, self.right, self.bottom).hash(state);
    }
}

impl<R: RectLike + ?Sized> PartialEq<R> for RectLtwh {
    fn eq(&self, other: &R) -> bool {
        same_edges(self, other)
    }
}

impl Eq for RectLtwh {}

impl Hash for RectLtwh {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.left(), self.top(), self.right(), self.bottom()).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn views_describe_the_same_rect() {
        assert_eq!(
            RectLtrb::new(10, 15, 500, 1000),
            RectLtwh::new(10, 15, 490, 985)
        );
        assert_eq!(RectLtrb::new(2, 2, 4, 4), RectLtwh::new(2, 2, 2, 2));
        assert_ne!(RectLtrb::new(2, 2, 4, 4), RectLtwh::new(2, 2, 4, 4));
        assert_ne!(RectLtrb::new(2, 2, 4, 4), RectLtrb::new(2, 2, 6, 6));

        let ltwh = RectLtwh::new(-20, 5, 40, 10);
        assert_eq!(ltwh.right(), 20);
        assert_eq!(ltwh.bottom(), 15);
        assert_eq!(RectLtrb::from(ltwh), RectLtrb::new(-20, 5, 20, 15));
        assert_eq!(RectLtwh::from(RectLtrb::from(ltwh)), ltwh);
    }

    #[test]
    fn rect_intersection() {
        assert_eq!(
            RectLtrb::new(2, 2, 4, 4).intersection(&RectLtrb::new(3, 3, 5, 5)),
            RectLtrb::new(3, 3, 4, 4)
        );
        assert_eq!(
            RectLtwh::new(0, 0, 20, 20).intersection(&RectLtwh::new(10, 10, 20, 20)),
            RectLtwh::new(10, 10, 10, 10)
        );
    }

    #[test]
    fn disjoint_intersection_is_zero_sentinel() {
        let a = RectLtrb::new(2, 2, 4, 4);
        let b = RectLtrb::new(5, 5, 7, 7);
        assert_eq!(a.intersection(&b), RectLtrb::new(0, 0, 0, 0));
        assert!(a.intersection(&b).is_zero());
        assert_eq!(a.checked_intersection(&b), None);
    }

    #[test]
    fn touching_rects_intersect_on_the_shared_edge() {
        let a = RectLtrb::new(0, 0, 10, 10);
        let b = RectLtrb::new(10, 2, 20, 8);
        assert_eq!(a.checked_intersection(&b), Some(RectLtrb::new(10, 2, 10, 8)));
        assert_eq!(a.intersection(&b).area(), 0);
        assert!(!a.intersection(&b).is_zero());
    }

    #[test]
    fn rect_superset_and_subset() {
        let big = RectLtrb::new(2, 2, 6, 6);
        let small = RectLtrb::new(2, 2, 4, 4);
        assert!(big.is_superset(&small));
        assert!(big.is_superset(&big));
        assert!(small.is_subset(&big));
        assert!(big.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(RectLtwh::new(2, 2, 2, 2).is_subset(&big));
    }

    #[test]
    fn point_containment_is_half_open() {
        let rect = RectLtrb::new(2, 2, 6, 6);
        assert!(rect.contains_point(&Point::new(2, 2)));
        assert!(rect.contains_point(&Point::new(4, 4)));
        assert!(!rect.contains_point(&Point::new(6, 6)));
        assert!(!rect.contains_point(&Point::new(2, 6)));
        assert!(!rect.contains_point(&Point::new(6, 2)));
        assert!(!rect.contains_point(&Point::new(1, 3)));
    }

    #[test]
    fn rect_containment_excludes_itself() {
        let rect = RectLtrb::new(2, 2, 6, 6);
        assert!(rect.contains_rect(&RectLtrb::new(2, 2, 4, 4)));
        assert!(rect.contains_rect(&RectLtrb::new(2, 2, 6, 5)));
        assert!(!RectLtrb::new(2, 2, 4, 4).contains_rect(&RectLtrb::new(2, 2, 4, 4)));
        assert!(!rect.contains_rect(&RectLtrb::new(1, 2, 4, 4)));
    }

    #[test]
    fn contains_dispatches_on_geometry() {
        let rect = RectLtrb::new(2, 2, 6, 6);
        assert!(rect.contains(Point::new(2, 2)));
        assert!(!rect.contains(Point::new(6, 6)));
        assert!(rect.contains(RectLtrb::new(2, 2, 4, 4)));
        assert!(rect.contains(RectLtwh::new(3, 3, 1, 1)));
        assert!(!rect.contains(RectLtwh::new(2, 2, 4, 4)));
    }

    #[test]
    fn rect_points() {
        let rect = RectLtrb::new(-5, -5, 5, 5);
        assert_eq!(rect.center(), Point::new(0, 0));
        assert_eq!(rect.top_left(), Point::new(-5, -5));
        assert_eq!(rect.top_right(), Point::new(5, -5));
        assert_eq!(rect.bottom_left(), Point::new(-5, 5));
        assert_eq!(rect.bottom_right(), Point::new(5, 5));
    }

    #[test]
    fn center_rounds_toward_negative_infinity() {
        assert_eq!(RectLtrb::new(0, 0, 3, 3).center(), Point::new(1, 1));
        assert_eq!(RectLtrb::new(-3, -3, 0, 0).center(), Point::new(-2, -2));
        assert_eq!(RectLtwh::new(-3, 1, 3, 2).center(), Point::new(-2, 2));
        assert_eq!(
            RectLtrb::new(i32::MAX - 2, i32::MAX - 2, i32::MAX, i32::MAX).center(),
            Point::new(i32::MAX - 1, i32::MAX - 1)
        );
    }

    #[test]
    fn zero_area_rect_is_valid() {
        let line = RectLtrb::new(4, 4, 4, 10);
        assert_eq!(line.width(), 0);
        assert_eq!(line.area(), 0);
        assert!(!line.contains_point(&Point::new(4, 5)));
        assert_eq!(RectLtrb::from_point(&Point::new(3, 7)), RectLtwh::new(3, 7, 0, 0));
        assert_eq!(RectLtwh::from_point(&(3_i32, 7_i32)), RectLtrb::new(3, 7, 3, 7));
    }

    #[test]
    fn translate_and_expand() {
        let rect = RectLtrb::new(10, 10, 20, 30);
        assert_eq!(rect.translate(Point::new(-10, 5)), RectLtrb::new(0, 15, 10, 35));
        assert_eq!(rect.expand_or_shrink(2), RectLtrb::new(8, 8, 22, 32));
        assert_eq!(rect.expand_or_shrink(-5), RectLtrb::new(15, 15, 15, 25));

        let ltwh = RectLtwh::new(10, 10, 10, 20);
        assert_eq!(ltwh.translate(Point::new(1, 1)), RectLtwh::new(11, 11, 10, 20));
        assert_eq!(ltwh.expand_or_shrink(1), RectLtwh::new(9, 9, 12, 22));
    }

    #[test]
    fn area_does_not_overflow() {
        let rect = RectLtwh::new(0, 0, 100_000, 100_000);
        assert_eq!(rect.area(), 10_000_000_000);

        let full_width = RectLtrb::new(i32::MIN, 0, i32::MAX, 1);
        assert_eq!(full_width.area(), i64::from(u32::MAX));
        assert_eq!(RectLtrb::new(i32::MIN, 5, i32::MAX, 5).area(), 0);
        assert_eq!(
            RectLtrb::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).area(),
            i64::MAX
        );
        assert_eq!(
            RectLtwh::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).area(),
            i64::from(i32::MAX) * i64::from(i32::MAX)
        );
    }

    #[test]
    fn checked_view_conversions() {
        let rect = RectLtrb::new(-10, 0, 10, 5);
        assert_eq!(rect.checked_to_ltwh(), Some(RectLtwh::new(-10, 0, 20, 5)));
        assert_eq!(RectLtrb::new(i32::MIN, 0, 0, 1).checked_to_ltwh(), None);
        assert_eq!(RectLtrb::new(0, -1, 1, i32::MAX).checked_to_ltwh(), None);

        assert_eq!(
            RectLtwh::new(-10, 0, 20, 5).checked_to_ltrb(),
            Some(RectLtrb::new(-10, 0, 10, 5))
        );
        assert_eq!(RectLtwh::new(1, 0, i32::MAX, 1).checked_to_ltrb(), None);
    }

    fn arb_rect() -> impl Strategy<Value = RectLtrb> {
        (-2000i32..2000, -2000i32..2000, 0i32..2000, 0i32..2000)
            .prop_map(|(left, top, w, h)| RectLtrb::new(left, top, left + w, top + h))
    }

    proptest! {
        #[test]
        fn prop_superset_is_reversed_subset(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.is_superset(&b), b.is_subset(&a));
        }

        #[test]
        fn prop_subset_is_reflexive(a in arb_rect()) {
            prop_assert!(a.is_superset(&a));
            prop_assert!(a.is_subset(&a));
        }

        #[test]
        fn prop_intersection_commutes(a in arb_rect(), b in arb_rect()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn prop_intersection_is_within_both(a in arb_rect(), b in arb_rect()) {
            if let Some(overlap) = a.checked_intersection(&b) {
                prop_assert!(overlap.is_subset(&a));
                prop_assert!(overlap.is_subset(&b));
            }
        }

        #[test]
        fn prop_views_round_trip(a in arb_rect()) {
            let ltwh = a.to_ltwh();
            prop_assert_eq!(ltwh, a);
            prop_assert_eq!(ltwh.to_ltrb(), a);
        }
    }
}
