//! Geometric primitives shared between design authors and the renderer.
//!
//! The design model itself computes no geometry. These types exist because a
//! rendering stage writes layout results back into the model (part frames,
//! backbone baselines, interaction arrow coordinates), and the model is the
//! contract both sides agree on.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Frame`] - A layout frame (width, height, origin) assigned to parts and modules
//!
//! # Coordinate System
//!
//! Operon uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward

use serde::{Deserialize, Serialize};

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. Backbone baseline positions and interaction
/// arrow waypoints are expressed as points.
///
/// # Examples
///
/// ```
/// # use operon_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Checks if both x and y coordinates are zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates.
///
/// The default bounds is the degenerate box spanning `(0,0)` to `(0,0)` — the
/// initial extent a part list carries before any rendering pass has measured
/// it.
///
/// # Examples
///
/// ```
/// # use operon_core::geometry::{Bounds, Point, Size};
/// let extent = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
/// assert_eq!(extent.width(), 50.0);
/// assert_eq!(extent.max_y(), 50.0);
///
/// assert!(Bounds::default().to_size().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the lower-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// A layout frame assigned to a part or module by a rendering stage.
///
/// Frames are absent (`None` on the owning type) until a renderer computes
/// them; nothing in this crate populates one.
///
/// # Examples
///
/// ```
/// # use operon_core::geometry::{Frame, Point};
/// let frame = Frame::new(30.0, 15.0, Point::new(100.0, 40.0));
/// assert_eq!(frame.width(), 30.0);
/// assert_eq!(frame.origin().y(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    width: f32,
    height: f32,
    origin: Point,
}

impl Frame {
    /// Creates a new frame with the specified dimensions and origin
    pub fn new(width: f32, height: f32, origin: Point) -> Self {
        Self {
            width,
            height,
            origin,
        }
    }

    /// Returns the width of the frame
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the frame
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the origin of the frame
    pub fn origin(self) -> Point {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_approx_eq!(f32, point.x(), 3.5);
        assert_approx_eq!(f32, point.y(), 4.2);
    }

    #[test]
    fn test_point_default_is_zero() {
        let point = Point::default();
        assert!(point.is_zero());
    }

    #[test]
    fn test_point_add() {
        let p1 = Point::new(1.0, 2.0);
        let p2 = Point::new(3.0, 4.0);
        let result = p1.add_point(p2);
        assert_approx_eq!(f32, result.x(), 4.0);
        assert_approx_eq!(f32, result.y(), 6.0);
    }

    #[test]
    fn test_point_midpoint() {
        let mid = Point::new(0.0, 0.0).midpoint(Point::new(10.0, 20.0));
        assert_approx_eq!(f32, mid.x(), 5.0);
        assert_approx_eq!(f32, mid.y(), 10.0);
    }

    #[test]
    fn test_bounds_default_is_degenerate() {
        let bounds = Bounds::default();
        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.max_x(), 0.0);
        assert!(bounds.to_size().is_zero());
    }

    #[test]
    fn test_bounds_from_top_left() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
        assert_approx_eq!(f32, bounds.min_x(), 10.0);
        assert_approx_eq!(f32, bounds.max_x(), 60.0);
        assert_approx_eq!(f32, bounds.width(), 50.0);
        assert_approx_eq!(f32, bounds.height(), 30.0);
    }

    #[test]
    fn test_bounds_merge() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
        let b = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));

        let combined = a.merge(&b);
        assert_approx_eq!(f32, combined.min_x(), 0.0);
        assert_approx_eq!(f32, combined.width(), 130.0);
        assert_approx_eq!(f32, combined.height(), 120.0);
    }

    #[test]
    fn test_frame_accessors() {
        let frame = Frame::new(30.0, 15.0, Point::new(100.0, 40.0));
        assert_approx_eq!(f32, frame.width(), 30.0);
        assert_approx_eq!(f32, frame.height(), 15.0);
        assert_approx_eq!(f32, frame.origin().x(), 100.0);
    }
}
