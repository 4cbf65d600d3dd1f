//! Metric and color constants of the built-in dark theme

use reframe_core::{Color, WindowMetrics};

/// Text color
pub const GREY_180: Color = Color::rgb(0xe7, 0xe7, 0xe7);
/// Disabled text
pub const GREY_127: Color = Color::rgb(0x7f, 0x7f, 0x7f);
/// Midlight
pub const GREY_90: Color = Color::rgb(0x5a, 0x5a, 0x5a);
/// Button
pub const GREY_5C: Color = Color::rgb(0x5c, 0x5c, 0x5c);
/// Visited link
pub const GREY_80: Color = Color::rgb(0x50, 0x50, 0x50);
/// Alternate base
pub const GREY_66: Color = Color::rgb(0x42, 0x42, 0x42);
/// Window
pub const GREY_53: Color = Color::rgb(0x35, 0x35, 0x35);
/// Base
pub const GREY_42: Color = Color::rgb(0x2a, 0x2a, 0x2a);
/// Dark
pub const GREY_35: Color = Color::rgb(0x23, 0x23, 0x23);
/// Shadow
pub const GREY_20: Color = Color::rgb(0x14, 0x14, 0x14);
/// Selection highlight and hyperlinks
pub const HIGHLIGHT: Color = Color::rgb(0x2a, 0x82, 0xda);

/// Window-decoration metrics of the built-in theme
pub const METRICS: WindowMetrics = WindowMetrics {
    titlebar_height: 28.0,
    titlebar_color: Color::rgb(0x36, 0x36, 0x36),
    titlebar_nofocus_color: Color::rgb(0x28, 0x28, 0x28),
    titlebar_text_color: Color::rgb(0xea, 0xea, 0xea),
    titlebar_top_margin: 6.0,
    title_text_right_margin: 20.0,
    title_label_min_width: 64.0,
    button_diameter: 12.0,
    // Distance from one button's left edge to the next button's left edge.
    button_spacing: 20.0,
    button_min_x_margin: 8.0,
    tab_css_top_border: 8.0,
    tab_css_bottom_border: 8.0,
    shadow_radius: 14.0,
    shadow_color: Color::rgb(0x00, 0x00, 0x00),
    shadow_opacity: 200,
    corner_radius: 5.0,
    background_color: Color::rgb(0x39, 0x39, 0x39),
    btn_close_colors: [
        Color::rgb(0xeb, 0x6a, 0x5e),
        Color::rgb(0xff, 0x6d, 0x60),
        Color::rgb(0xda, 0x42, 0x34),
    ],
    btn_minimize_colors: [
        Color::rgb(0xf3, 0xbe, 0x4f),
        Color::rgb(0xff, 0xd8, 0x3c),
        Color::rgb(0xc2, 0x99, 0x3f),
    ],
    btn_maximize_colors: [
        Color::rgb(0x64, 0xc4, 0x55),
        Color::rgb(0x83, 0xd0, 0x77),
        Color::rgb(0x46, 0x89, 0x3b),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_sane() {
        assert!(METRICS.titlebar_height > METRICS.button_diameter);
        assert!(METRICS.button_spacing > METRICS.button_diameter);
        assert!(METRICS.shadow_radius > METRICS.corner_radius);
    }

    #[test]
    fn test_background_matches_frame() {
        assert_eq!(METRICS.background_color.hex(), "#393939");
    }
}
