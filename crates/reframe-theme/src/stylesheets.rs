//! Stylesheet templates and token substitution
//!
//! Templates carry `{TOKEN}` placeholders. Window and button tokens are
//! substituted here from the theme metrics; the tab-strip template keeps
//! four late-bound tokens that the engine fills per window (height, button
//! margins, focus-dependent background).

use reframe_core::WindowMetrics;

/// Window frame and title styling
const FRAME_TEMPLATE: &str = "
/* ***** Window Frame ***** */
#windowFrame {
    background-color: transparent;
    border-radius: {WINDOW_CORNER_RADIUS_PX}px;
}

#windowFrame QLabel {
    color: {TITLE_BAR_FONT_COLOR_RGB};
    background-color: transparent;
}
";

/// Title-bar button sizing and the three-state color set per button
const BUTTONS_TEMPLATE: &str = "
/* ***** Restore and Maximize Button Sizes ***** */
#btnClose, #btnRestore, #btnMaximize, #btnMinimize {
    min-width: {TITLE_BAR_BUTTON_DIAMETER_PX}px;
    min-height: {TITLE_BAR_BUTTON_DIAMETER_PX}px;
    max-width: {TITLE_BAR_BUTTON_DIAMETER_PX}px;
    max-height: {TITLE_BAR_BUTTON_DIAMETER_PX}px;
    border-radius: {BUTTON_DIAMETER_HALF_PX}px;
}

/* ***** Restore and Maximize Button Colors ***** */
#btnRestore, #btnMaximize {
  background-color: {BTN_MAXIMIZE_COLOR_DEFAULT_RGB};
}
#btnRestore::hover, #btnMaximize::hover {
  background-color: {BTN_MAXIMIZE_COLOR_HOVER_RGB};
}
#btnRestore::pressed, #btnMaximize::pressed {
  background-color: {BTN_MAXIMIZE_COLOR_PRESSED_RGB};
}

/* ***** Minimize Button Colors ***** */
#btnMinimize {
  background-color: {BTN_MINIMIZE_COLOR_DEFAULT_RGB};
}
#btnMinimize::hover {
  background-color: {BTN_MINIMIZE_COLOR_HOVER_RGB};
}
#btnMinimize::pressed {
  background-color: {BTN_MINIMIZE_COLOR_PRESSED_RGB};
}

/* ***** Close Button Colors ***** */
#btnClose {
  background-color: {BTN_CLOSE_COLOR_DEFAULT_RGB};
}
#btnClose::hover {
  background-color: {BTN_CLOSE_COLOR_HOVER_RGB};
}
#btnClose::pressed {
  background-color: {BTN_CLOSE_COLOR_PRESSED_RGB};
}
";

/// Tab strip embedded in the title bar
///
/// The `{TITLEBAR_HEIGHT}`, `{WINDOW_BUTTON_MARGIN_LEFT}`,
/// `{WINDOW_BUTTON_MARGIN_RIGHT}` and `{BACKGROUND_COLOR}` tokens are
/// substituted by the engine per window and per focus change.
pub const TITLE_TABSTRIP_TEMPLATE: &str = "
.TitleTabWidget {
    background-color: transparent;
    border: 0px;
}

.TitleTabWidget::pane {
    border: 0px;
}

.TitleTabWidget::tab-bar {
    alignment: left;
    left: {WINDOW_BUTTON_MARGIN_LEFT}px;
    right: {WINDOW_BUTTON_MARGIN_RIGHT}px;
}

.TitleTabBar QToolButton {
    background-color: {BACKGROUND_COLOR};
    border: none;
}

.TitleTabBar::tab, .TitleTabBar::tab:disabled, .TitleTabBar::tab:selected:disabled {
    margin-top: 0px;
    height: {TITLEBAR_HEIGHT};
    border-width: 8px 16px 8px 16px;
    border-image: url(:/icons/tab-inactive.svg) 16 32 stretch;
    padding: 0px 0px;
}

.TitleTabBar::tab:selected {
    padding-left: 10px;
    padding-right: 10px;
    border-width: 8px 16px 8px 16px;
    border-image: url(:/icons/tab-active.svg) 16 32 stretch;
}

.TitleTabBar::tab:!first {
    margin-left: -9px;
    padding-left: 19px;
}

.TitleTabBar::tab:!last {
    margin-right: -9px;
    padding-right: 19px;
}
";

/// Fully substituted stylesheet for the window frame and its buttons
pub fn window_stylesheet(m: &WindowMetrics) -> String {
    let mut qss = format!("{}{}", FRAME_TEMPLATE, BUTTONS_TEMPLATE);
    let px = |v: f32| (v.round() as i64).to_string();
    let substitutions = [
        ("{WINDOW_CORNER_RADIUS_PX}", px(m.corner_radius)),
        ("{TITLE_BAR_FONT_COLOR_RGB}", m.titlebar_text_color.hex()),
        ("{TITLE_BAR_BUTTON_DIAMETER_PX}", px(m.button_diameter)),
        ("{BUTTON_DIAMETER_HALF_PX}", px(m.button_diameter / 2.0)),
        ("{BTN_MAXIMIZE_COLOR_DEFAULT_RGB}", m.btn_maximize_colors[0].hex()),
        ("{BTN_MAXIMIZE_COLOR_HOVER_RGB}", m.btn_maximize_colors[1].hex()),
        ("{BTN_MAXIMIZE_COLOR_PRESSED_RGB}", m.btn_maximize_colors[2].hex()),
        ("{BTN_MINIMIZE_COLOR_DEFAULT_RGB}", m.btn_minimize_colors[0].hex()),
        ("{BTN_MINIMIZE_COLOR_HOVER_RGB}", m.btn_minimize_colors[1].hex()),
        ("{BTN_MINIMIZE_COLOR_PRESSED_RGB}", m.btn_minimize_colors[2].hex()),
        ("{BTN_CLOSE_COLOR_DEFAULT_RGB}", m.btn_close_colors[0].hex()),
        ("{BTN_CLOSE_COLOR_HOVER_RGB}", m.btn_close_colors[1].hex()),
        ("{BTN_CLOSE_COLOR_PRESSED_RGB}", m.btn_close_colors[2].hex()),
    ];
    for (token, value) in substitutions {
        qss = qss.replace(token, &value);
    }
    qss
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::METRICS;

    #[test]
    fn test_window_stylesheet_fully_substituted() {
        let qss = window_stylesheet(&METRICS);
        for token in ["{TITLE_BAR", "{BTN_", "{WINDOW_", "{BUTTON_"] {
            assert!(!qss.contains(token), "unsubstituted {} token", token);
        }
        assert!(qss.contains("border-radius: 5px"));
        assert!(qss.contains("#eb6a5e"));
    }

    #[test]
    fn test_tabstrip_template_keeps_late_tokens() {
        assert!(TITLE_TABSTRIP_TEMPLATE.contains("{TITLEBAR_HEIGHT}"));
        assert!(TITLE_TABSTRIP_TEMPLATE.contains("{WINDOW_BUTTON_MARGIN_LEFT}"));
        assert!(TITLE_TABSTRIP_TEMPLATE.contains("{WINDOW_BUTTON_MARGIN_RIGHT}"));
        assert!(TITLE_TABSTRIP_TEMPLATE.contains("{BACKGROUND_COLOR}"));
    }

    #[test]
    fn test_button_half_diameter_rounding() {
        let qss = window_stylesheet(&METRICS);
        assert!(qss.contains("border-radius: 6px"));
    }
}
