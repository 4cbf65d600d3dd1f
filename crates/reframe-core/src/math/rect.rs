//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Size, Vec2};

/// Axis-aligned rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Get the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }

    /// Shrink the rectangle by the given amount on all sides
    #[inline]
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }

    /// Move the rectangle to a new position, keeping its size
    #[inline]
    pub fn at(&self, pos: Vec2) -> Rect {
        Rect::new(pos.x, pos.y, self.width, self.height)
    }

    /// Center this rectangle within an outer rectangle, keeping its size
    #[inline]
    pub fn centered_in(&self, outer: Rect) -> Rect {
        let c = outer.center();
        Rect::new(
            c.x - self.width * 0.5,
            c.y - self.height * 0.5,
            self.width,
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert!(rect.contains(Vec2::new(50.0, 40.0)));
        assert!(!rect.contains(Vec2::new(5.0, 40.0)));
        assert!(!rect.contains(Vec2::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_inset() {
        let r = Rect::new(0.0, 0.0, 200.0, 100.0).inset(14.0);
        assert!((r.x - 14.0).abs() < 0.001);
        assert!((r.y - 14.0).abs() < 0.001);
        assert!((r.width - 172.0).abs() < 0.001);
        assert!((r.height - 72.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_centered_in() {
        let outer = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let r = Rect::new(500.0, 500.0, 800.0, 600.0).centered_in(outer);
        assert!((r.x - 560.0).abs() < 0.001);
        assert!((r.y - 240.0).abs() < 0.001);
        assert!((r.center().x - 960.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!((r.right() - 110.0).abs() < 0.001);
        assert!((r.bottom() - 70.0).abs() < 0.001);
    }
}
