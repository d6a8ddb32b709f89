//! Axis-aligned rectangles in screen space
//!
//! Screen coordinates: x grows to the right, y grows downward, so `top` is
//! the smaller y value and `bottom` the larger one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub topleft: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            topleft: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_topleft(topleft: Vec2, size: Vec2) -> Self {
        Self { topleft, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.topleft.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.topleft.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.topleft.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.topleft.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.topleft + self.size * 0.5
    }

    /// Check if a point lies inside the rectangle
    ///
    /// Left and top edges are inclusive, right and bottom edges exclusive, so
    /// an empty rectangle contains nothing.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Shrink by `margin` on every side (clamped to an empty rect)
    pub fn inset(&self, margin: f32) -> Self {
        let size = (self.size - Vec2::splat(2.0 * margin)).max(Vec2::ZERO);
        Self {
            topleft: self.topleft + Vec2::splat(margin),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(100.0, 100.0, 600.0, 400.0);
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.right(), 700.0);
        assert_eq!(rect.bottom(), 500.0);
        assert_eq!(rect.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_rect_contains_point_half_open() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(rect.contains_point(Vec2::new(10.0, 20.0)));
        assert!(rect.contains_point(Vec2::new(39.9, 59.9)));
        assert!(!rect.contains_point(Vec2::new(40.0, 30.0)));
        assert!(!rect.contains_point(Vec2::new(20.0, 60.0)));
        assert!(!rect.contains_point(Vec2::new(9.9, 30.0)));
    }

    #[test]
    fn test_empty_rect_contains_nothing() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!rect.contains_point(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn test_inset() {
        let screen = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(screen.inset(100.0), Rect::new(100.0, 100.0, 600.0, 400.0));
        // Over-large margins collapse instead of going negative
        assert_eq!(screen.inset(500.0).size, Vec2::ZERO);
    }
}
