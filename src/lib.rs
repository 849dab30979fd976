//! Tactile-Geometry: screen points, rectangles and bounding boxes
//!
//! Pure value types for describing regions and coordinates on a display
//! surface, plus constructors that fold any mix of points and rectangles
//! (native or platform-provided) into the smallest enclosing rectangle.

pub mod domain;
pub mod platform;

pub use domain::bounds::{
    Geometry, GeometryError, bounding_rect_ltrb, bounding_rect_ltrb_from_coords,
    bounding_rect_ltwh, bounding_rect_ltwh_from_coords,
};
pub use domain::point::{Point, PointLike};
pub use domain::rect::{RectLike, RectLtrb, RectLtwh};
