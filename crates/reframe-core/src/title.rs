//! Elided, centered title text layout
//!
//! The label knows how much horizontal space the window buttons reserve and
//! keeps the title centered in what remains, falling back to edge alignment
//! when centering would run under the buttons.

use crate::host::TextMetrics;
use crate::math::Vec2;
use crate::platform::ButtonPosition;
use crate::theme::Color;

/// Padding added to the measured text width
const WIDTH_PADDING_PX: f32 = 3.0;

const ELLIPSIS: &str = "…";

/// Computed placement of the title text
#[derive(Clone, Debug, PartialEq)]
pub struct TitleLayout {
    /// Possibly elided text to draw
    pub text: String,
    /// Top-left corner of the text rect
    pub origin: Vec2,
    /// Width of the text rect (including padding)
    pub width: f32,
    /// Height of the text rect
    pub height: f32,
}

/// Title text renderer state
#[derive(Clone, Debug)]
pub struct TitleLabel {
    text: String,
    height: f32,
    color: Color,
    button_position: ButtonPosition,
    margin: f32,
    button_bar_width: f32,
    min_width: f32,
}

impl TitleLabel {
    /// Create a title label
    ///
    /// `button_bar_width` is the combined button width plus the button
    /// margin; `margin` is the gap kept between text and window edge.
    pub fn new(
        text: &str,
        height: f32,
        color: Color,
        button_position: ButtonPosition,
        button_bar_width: f32,
        min_width: f32,
        margin: f32,
    ) -> Self {
        Self {
            text: text.to_string(),
            height,
            color,
            button_position,
            margin,
            button_bar_width: button_bar_width + margin,
            min_width,
        }
    }

    /// Title text color
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Smallest width the label insists on
    #[inline]
    pub fn min_width(&self) -> f32 {
        self.min_width
    }

    /// Replace the title text
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Current (unelided) title text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lay the title out within the given label width
    pub fn layout(&self, width: f32, metrics: &dyn TextMetrics) -> TitleLayout {
        let avail = width - self.button_bar_width - self.margin;
        let text = elide_right(&self.text, avail, metrics);
        let elided = text != self.text;

        let line_height = metrics.line_height();
        let y = self.height / 2.0 - line_height / 2.0;

        let text_width = metrics.advance(&text);
        let mut x = (width - text_width - WIDTH_PADDING_PX) / 2.0;
        if x < self.button_bar_width {
            x = match self.button_position {
                ButtonPosition::Right if elided => self.margin,
                // Not elided: shift left by however far the centered rect
                // would reach into the button bar.
                ButtonPosition::Right => x - (self.button_bar_width - x),
                ButtonPosition::Left => self.button_bar_width,
            };
        }

        TitleLayout {
            text,
            origin: Vec2::new(x, y),
            width: text_width + WIDTH_PADDING_PX,
            height: line_height,
        }
    }
}

/// Truncate text with a trailing ellipsis so it fits the available width
fn elide_right(text: &str, available: f32, metrics: &dyn TextMetrics) -> String {
    if metrics.advance(text) <= available {
        return text.to_string();
    }
    let mut out: String = text.to_string();
    while !out.is_empty() {
        out.pop();
        let candidate = format!("{}{}", out, ELLIPSIS);
        if metrics.advance(&candidate) <= available {
            return candidate;
        }
    }
    ELLIPSIS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance metrics: every char 10 px wide, 16 px lines
    struct FixedMetrics;

    impl TextMetrics for FixedMetrics {
        fn advance(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }
        fn line_height(&self) -> f32 {
            16.0
        }
    }

    fn label(position: ButtonPosition) -> TitleLabel {
        TitleLabel::new(
            "Document",
            28.0,
            Color::rgb(0xea, 0xea, 0xea),
            position,
            60.0,
            64.0,
            20.0,
        )
    }

    #[test]
    fn test_short_title_centered() {
        let l = label(ButtonPosition::Right);
        let out = l.layout(600.0, &FixedMetrics);
        assert_eq!(out.text, "Document");
        // (600 - 80 - 3) / 2
        assert!((out.origin.x - 258.5).abs() < 0.001);
        // Vertically centered in the 28px band.
        assert!((out.origin.y - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_long_title_elided_with_ellipsis() {
        let l = TitleLabel::new(
            "A very long window title that cannot fit",
            28.0,
            Color::rgb(0xea, 0xea, 0xea),
            ButtonPosition::Right,
            60.0,
            64.0,
            20.0,
        );
        let out = l.layout(300.0, &FixedMetrics);
        assert!(out.text.ends_with(ELLIPSIS));
        // avail = 300 - 80 - 20 = 200 -> at most 20 chars
        assert!(out.text.chars().count() <= 20);
        // Elided text under right-side buttons falls back to the left margin.
        assert!((out.origin.x - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_unelided_collision_shifts_left() {
        // Wide enough to fit, narrow enough that centering collides.
        let l = label(ButtonPosition::Right);
        let out = l.layout(230.0, &FixedMetrics);
        assert_eq!(out.text, "Document");
        let centered = (230.0 - 80.0 - 3.0) / 2.0;
        let expected = centered - (80.0 - centered);
        assert!((out.origin.x - expected).abs() < 0.001);
    }

    #[test]
    fn test_left_buttons_collision_aligns_after_buttons() {
        let l = label(ButtonPosition::Left);
        let out = l.layout(230.0, &FixedMetrics);
        assert!((out.origin.x - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_elide_degenerate_width() {
        let out = elide_right("Title", -10.0, &FixedMetrics);
        assert_eq!(out, ELLIPSIS);
    }
}
