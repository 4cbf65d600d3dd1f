//! Painted window frame surface
//!
//! Pure presentation: produces the shapes the host renderer fills for the
//! window body and the title-bar band, and detects double-clicks on the
//! band. What a double-click means is the orchestrator's decision.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use crate::theme::Color;

/// A filled rounded rectangle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
    pub color: Color,
}

/// Shapes to paint for one frame, in back-to-front order
///
/// The squared rect re-covers the lower half of the title band so only its
/// top corners stay rounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FramePaint {
    pub body: RoundedRect,
    pub title_band: RoundedRect,
    pub title_band_squared: RoundedRect,
}

/// Background surface of a decorated window
#[derive(Clone, Debug)]
pub struct WindowFrame {
    size: Size,
    titlebar_height: f32,
    titlebar_color: Color,
    background_color: Color,
    corner_radius: f32,
}

impl WindowFrame {
    /// Create a frame surface
    pub fn new(
        titlebar_height: f32,
        titlebar_color: Color,
        background_color: Color,
        corner_radius: f32,
    ) -> Self {
        Self {
            size: Size::ZERO,
            titlebar_height,
            titlebar_color,
            background_color,
            corner_radius,
        }
    }

    /// Track the decorated window's client size
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Current title-bar color (focus dependent)
    #[inline]
    pub fn titlebar_color(&self) -> Color {
        self.titlebar_color
    }

    /// Recolor the title bar (focus retheme)
    pub fn set_titlebar_color(&mut self, color: Color) {
        self.titlebar_color = color;
    }

    /// Shapes for the current size and colors
    pub fn paint(&self) -> FramePaint {
        let w = self.size.width;
        let h = self.titlebar_height;
        let r = self.corner_radius;
        FramePaint {
            body: RoundedRect {
                rect: Rect::new(0.0, 0.0, w, self.size.height),
                radius: r,
                color: self.background_color,
            },
            title_band: RoundedRect {
                rect: Rect::new(0.0, 0.0, w, h),
                radius: r,
                color: self.titlebar_color,
            },
            title_band_squared: RoundedRect {
                rect: Rect::new(0.0, r, w, h - r),
                radius: 0.0,
                color: self.titlebar_color,
            },
        }
    }

    /// Whether a double-click at this frame-local position hits the title band
    pub fn is_title_bar_double_click(&self, pos: Vec2) -> bool {
        pos.y <= self.titlebar_height + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> WindowFrame {
        let mut f = WindowFrame::new(
            28.0,
            Color::rgb(0x36, 0x36, 0x36),
            Color::rgb(0x39, 0x39, 0x39),
            5.0,
        );
        f.set_size(Size::new(640.0, 480.0));
        f
    }

    #[test]
    fn test_paint_shapes() {
        let p = frame().paint();
        assert!((p.body.rect.width - 640.0).abs() < 0.001);
        assert!((p.body.rect.height - 480.0).abs() < 0.001);
        assert!((p.title_band.rect.height - 28.0).abs() < 0.001);
        // Squared overlay starts below the corner radius and has no rounding.
        assert!((p.title_band_squared.rect.y - 5.0).abs() < 0.001);
        assert!((p.title_band_squared.rect.height - 23.0).abs() < 0.001);
        assert!((p.title_band_squared.radius - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_double_click_band() {
        let f = frame();
        assert!(f.is_title_bar_double_click(Vec2::new(100.0, 10.0)));
        assert!(f.is_title_bar_double_click(Vec2::new(100.0, 29.0)));
        assert!(!f.is_title_bar_double_click(Vec2::new(100.0, 30.0)));
    }

    #[test]
    fn test_recolor() {
        let mut f = frame();
        let unfocused = Color::rgb(0x28, 0x28, 0x28);
        f.set_titlebar_color(unfocused);
        assert_eq!(f.paint().title_band.color, unfocused);
        assert_eq!(f.paint().title_band_squared.color, unfocused);
    }
}
