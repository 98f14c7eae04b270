/*!
 * Geometric primitives.
 *
 * Paths, points and transforms are publicly imported from tiny-skia-path.
 *
 * Y low coordinates are at the top.
 */

use strict_num::FiniteF32;
pub use tiny_skia_path::{Path, PathBuilder, Point, Transform};

/// A rectangle in 2D space represented by x, y, width and height
///
/// All components are finite. Width and height may be zero or negative:
/// a bar whose value lies below the baseline carries a negative height,
/// and such rectangles are still drawable once normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: FiniteF32,
    y: FiniteF32,
    w: FiniteF32,
    h: FiniteF32,
}

impl Rect {
    /// Build a rectangle from x, y, width and height
    ///
    /// Panics if any component is NaN or infinite.
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect {
            x: FiniteF32::new(x).unwrap(),
            y: FiniteF32::new(y).unwrap(),
            w: FiniteF32::new(w).unwrap(),
            h: FiniteF32::new(h).unwrap(),
        }
    }

    /// The X coordinate of the origin corner
    pub const fn x(&self) -> f32 {
        self.x.get()
    }

    /// The Y coordinate of the origin corner
    pub const fn y(&self) -> f32 {
        self.y.get()
    }

    /// The width of the rectangle, possibly negative
    pub const fn width(&self) -> f32 {
        self.w.get()
    }

    /// The height of the rectangle, possibly negative
    pub const fn height(&self) -> f32 {
        self.h.get()
    }

    /// The left X coordinate of the normalized rectangle
    pub fn left(&self) -> f32 {
        self.x().min(self.x() + self.width())
    }

    /// The top Y coordinate of the normalized rectangle
    pub fn top(&self) -> f32 {
        self.y().min(self.y() + self.height())
    }

    /// The right X coordinate of the normalized rectangle
    pub fn right(&self) -> f32 {
        self.x().max(self.x() + self.width())
    }

    /// The bottom Y coordinate of the normalized rectangle
    pub fn bottom(&self) -> f32 {
        self.y().max(self.y() + self.height())
    }

    /// A copy with non-negative width and height and the same extent
    pub fn normalized(&self) -> Rect {
        Rect::from_xywh(
            self.left(),
            self.top(),
            self.right() - self.left(),
            self.bottom() - self.top(),
        )
    }

    /// Test if the rectangle contains a point
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Build a path from the rectangle
    ///
    /// Returns None for rectangles with zero width or height,
    /// which have no drawable area.
    pub fn to_path(&self) -> Option<Path> {
        let norm = self.normalized();
        if norm.width() == 0.0 || norm.height() == 0.0 {
            return None;
        }
        tiny_skia_path::Rect::from_xywh(norm.x(), norm.y(), norm.width(), norm.height())
            .map(PathBuilder::from_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_normalized_flips_negative_extent() {
        let r = Rect::from_xywh(10.0, 50.0, 20.0, -30.0);
        let n = r.normalized();
        assert_eq!(n.x(), 10.0);
        assert_eq!(n.y(), 20.0);
        assert_eq!(n.width(), 20.0);
        assert_eq!(n.height(), 30.0);
    }

    #[test]
    fn rect_contains_point_with_negative_height() {
        let r = Rect::from_xywh(0.0, 100.0, 10.0, -40.0);
        assert!(r.contains_point(&Point { x: 5.0, y: 80.0 }));
        assert!(!r.contains_point(&Point { x: 5.0, y: 110.0 }));
    }

    #[test]
    fn rect_to_path_empty_area() {
        let r = Rect::from_xywh(0.0, 0.0, 0.0, 10.0);
        assert!(r.to_path().is_none());

        let r = Rect::from_xywh(0.0, 0.0, 10.0, 10.0);
        assert!(r.to_path().is_some());
    }
}
