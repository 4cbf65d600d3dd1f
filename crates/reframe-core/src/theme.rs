//! Theme provider contract
//!
//! The engine never hardcodes colors or metrics. A [`Theme`] is injected at
//! wrap time and supplies the numeric constants, the substituted stylesheet
//! text, and the application-wide palette.

use serde::{Deserialize, Serialize};

use crate::host::AppHandle;

/// RGB color value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from components
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a `#rrggbb` string
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Palette roles the theme can assign colors to
///
/// Mirrors the role set of a typical widget toolkit palette, including the
/// disabled color group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteRole {
    Window,
    WindowText,
    Base,
    AlternateBase,
    Text,
    BrightText,
    Button,
    ButtonText,
    Highlight,
    HighlightedText,
    Link,
    LinkVisited,
    Light,
    Midlight,
    Dark,
    Shadow,
    ToolTipBase,
    ToolTipText,
    DisabledWindowText,
    DisabledText,
    DisabledButtonText,
    DisabledHighlight,
    DisabledHighlightedText,
}

/// Numeric and color constants the decoration engine draws from
///
/// One instance per theme; all values are in device-independent pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WindowMetrics {
    // Title bar
    pub titlebar_height: f32,
    pub titlebar_color: Color,
    pub titlebar_nofocus_color: Color,
    pub titlebar_text_color: Color,
    pub titlebar_top_margin: f32,
    pub title_text_right_margin: f32,
    pub title_label_min_width: f32,
    // Window buttons
    pub button_diameter: f32,
    /// Distance from one button's left edge to the next button's left edge
    pub button_spacing: f32,
    /// Minimum distance of the button group from the window border
    pub button_min_x_margin: f32,
    // Title-bar tab strip
    pub tab_css_top_border: f32,
    pub tab_css_bottom_border: f32,
    // Drop shadow
    pub shadow_radius: f32,
    pub shadow_color: Color,
    pub shadow_opacity: u8,
    // Window body
    pub corner_radius: f32,
    pub background_color: Color,
    // Button color triples: default / hover / pressed
    pub btn_close_colors: [Color; 3],
    pub btn_minimize_colors: [Color; 3],
    pub btn_maximize_colors: [Color; 3],
}

/// Contract every theme provider fulfills
///
/// The engine consumes the metrics for geometry, the stylesheet accessors
/// for host-side styling, and `apply` for application-wide theming.
pub trait Theme {
    /// Metric and color constants
    fn metrics(&self) -> &WindowMetrics;

    /// Fully substituted stylesheet for the window frame and its buttons
    fn window_stylesheet(&self) -> String;

    /// Stylesheet for a tab strip embedded in the title bar
    ///
    /// Contains the late-bound placeholder tokens `{TITLEBAR_HEIGHT}`,
    /// `{WINDOW_BUTTON_MARGIN_LEFT}`, `{WINDOW_BUTTON_MARGIN_RIGHT}` and
    /// `{BACKGROUND_COLOR}`; the engine substitutes them per window.
    fn title_tabstrip_stylesheet(&self) -> String;

    /// Apply the full theme (palette and global stylesheet) to an application
    fn apply(&self, app: &mut dyn AppHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex("#363636").unwrap();
        assert_eq!(c, Color::rgb(0x36, 0x36, 0x36));
        assert_eq!(c.hex(), "#363636");
    }

    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("363636").is_none());
        assert!(Color::from_hex("#36363").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
    }
}
