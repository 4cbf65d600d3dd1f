//! Wrap configuration

use crate::math::Rect;
use crate::platform::ButtonPosition;
use crate::theme::Color;
use super::WindowId;

/// Bounds to center a child window against
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParentBounds {
    /// The parent is itself decorated; center on its wrapper geometry
    Wrapped(WindowId),
    /// Plain toolkit window; center on its raw geometry
    Plain(Rect),
}

/// Configuration for wrapping a content window
#[derive(Clone, Debug)]
pub struct WrapConfig {
    /// Parent to center against (None = top-level, centered on its screen)
    pub parent: Option<ParentBounds>,
    /// Show the traditional title bar
    pub title_bar: bool,
    /// Use a translucent top-level window; turning this off disables the
    /// engine shadow and switches to a clip-mask for the rounded corners
    pub transparent: bool,
    /// Title-bar height override (None = theme default)
    pub titlebar_height: Option<f32>,
    /// Focused title-bar color override
    pub titlebar_color: Option<Color>,
    /// Unfocused title-bar color override
    pub titlebar_nofocus_color: Option<Color>,
    /// Title text color override
    pub titlebar_text_color: Option<Color>,
    /// Side of the title bar for the window buttons (None = platform default)
    pub button_position: Option<ButtonPosition>,
    /// A host-owned tab strip is embedded in the title bar
    pub tab_strip_in_titlebar: bool,
    /// Dialog wrap mode: close button only, forced title bar, fixed size
    pub dialog: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            parent: None,
            title_bar: true,
            transparent: true,
            titlebar_height: None,
            titlebar_color: None,
            titlebar_nofocus_color: None,
            titlebar_text_color: None,
            button_position: None,
            tab_strip_in_titlebar: false,
            dialog: false,
        }
    }
}
