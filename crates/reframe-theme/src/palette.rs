//! Application-wide palette of the built-in theme

use reframe_core::{AppHandle, Color, PaletteRole};

use crate::constants;

/// Role/color pairs of the dark palette, disabled group included
pub fn roles() -> Vec<(PaletteRole, Color)> {
    use PaletteRole::*;
    vec![
        (Highlight, constants::HIGHLIGHT),
        (WindowText, constants::GREY_180),
        (BrightText, constants::GREY_180),
        (ButtonText, constants::GREY_180),
        (HighlightedText, constants::GREY_180),
        (ToolTipText, constants::GREY_180),
        (LinkVisited, constants::GREY_80),
        (Link, constants::HIGHLIGHT),
        (Button, constants::GREY_5C),
        (Light, constants::GREY_180),
        (Midlight, constants::GREY_90),
        (Dark, constants::GREY_35),
        (Text, constants::GREY_180),
        (Base, constants::GREY_42),
        (Window, constants::GREY_53),
        (Shadow, constants::GREY_20),
        (AlternateBase, constants::GREY_66),
        (ToolTipBase, constants::GREY_90),
        (DisabledWindowText, constants::GREY_127),
        (DisabledText, constants::GREY_127),
        (DisabledButtonText, constants::GREY_127),
        (DisabledHighlightedText, constants::GREY_127),
        (DisabledHighlight, constants::GREY_80),
    ]
}

/// Push the full palette into the application handle
pub fn apply(app: &mut dyn AppHandle) {
    for (role, color) in roles() {
        app.set_palette_color(role, color);
    }
}
