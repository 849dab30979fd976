//! Win32 geometry adapters
//!
//! `POINT` and `RECT` already use our pixel semantics, so reading them is a
//! field copy. Values obtained from the windowing system must already be in
//! the caller's coordinate space; no DPI conversion happens here.

use windows::Win32::Foundation::{POINT, RECT};

use crate::domain::bounds::Geometry;
use crate::domain::point::{Point, PointLike};
use crate::domain::rect::{RectLike, RectLtrb, RectLtwh};

impl PointLike for POINT {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}

impl RectLike for RECT {
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
}

/// Converts a domain point to a Windows POINT structure
pub fn point_to_win32_point(point: &impl PointLike) -> POINT {
    POINT {
        x: point.x(),
        y: point.y(),
    }
}

/// Converts any domain rectangle to a Windows RECT structure
///
/// # Arguments
/// * `rect` - Rectangle in either view
///
/// # Returns
/// Windows RECT structure
pub fn rect_to_win32_rect(rect: &impl RectLike) -> RECT {
    RECT {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Converts a Windows RECT to an origin+size domain rectangle
///
/// # Arguments
/// * `rect` - Windows RECT structure
///
/// # Returns
/// Domain rectangle
pub fn win32_rect_to_rect(rect: &RECT) -> RectLtwh {
    rect.to_ltwh()
}

impl PartialEq<Point> for POINT {
    fn eq(&self, other: &Point) -> bool {
        other == self
    }
}

impl PartialEq<RectLtrb> for RECT {
    fn eq(&self, other: &RectLtrb) -> bool {
        other == self
    }
}

impl PartialEq<RectLtwh> for RECT {
    fn eq(&self, other: &RectLtwh) -> bool {
        other == self
    }
}

impl From<POINT> for Point {
    fn from(point: POINT) -> Self {
        point.to_point()
    }
}

impl From<Point> for POINT {
    fn from(point: Point) -> Self {
        point_to_win32_point(&point)
    }
}

impl From<RECT> for RectLtrb {
    fn from(rect: RECT) -> Self {
        rect.to_ltrb()
    }
}

impl From<RECT> for RectLtwh {
    fn from(rect: RECT) -> Self {
        win32_rect_to_rect(&rect)
    }
}

impl From<RectLtrb> for RECT {
    fn from(rect: RectLtrb) -> Self {
        rect_to_win32_rect(&rect)
    }
}

impl From<RectLtwh> for RECT {
    fn from(rect: RectLtwh) -> Self {
        rect_to_win32_rect(&rect)
    }
}

impl From<POINT> for Geometry {
    fn from(point: POINT) -> Self {
        Geometry::point(&point)
    }
}

impl From<RECT> for Geometry {
    fn from(rect: RECT) -> Self {
        Geometry::rect(&rect)
    }
}
