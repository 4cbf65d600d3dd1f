//! Seams between the decoration engine and the host toolkit
//!
//! The engine holds no toolkit types. The host implements [`ContentWindow`]
//! for the widget being wrapped and [`AppHandle`] for the application object,
//! and executes the [`HostOp`] sequences returned by state transitions.

use serde::Serialize;

use crate::math::{Rect, Size};
use crate::theme::{Color, PaletteRole};
use crate::window::WindowId;

/// Reply of a content window to a close request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseResponse {
    /// The content window accepted and will hide/destroy itself
    Accepted,
    /// The content window declined (e.g. the user cancelled a confirmation)
    Rejected,
}

/// The widget being wrapped by a decorated window
///
/// Ownership is exclusive: the wrapper owns the content and the two are torn
/// down together. `attach_wrapper` stores an explicit back-reference so other
/// windows can discover that this widget is decorated.
pub trait ContentWindow {
    /// Window title text
    fn title(&self) -> &str;

    /// Minimum size of the content area
    fn min_size(&self) -> Size;

    /// Current geometry of the content window
    fn geometry(&self) -> Rect;

    /// Ask the content to close; it may refuse
    fn request_close(&mut self) -> CloseResponse;

    /// True once the content window is hidden or destroyed
    fn is_hidden(&self) -> bool;

    /// Record the wrapper this content belongs to
    fn attach_wrapper(&mut self, id: WindowId);

    /// The wrapper recorded by `attach_wrapper`, if any
    fn wrapper(&self) -> Option<WindowId>;
}

/// Application-level handle used when applying a theme
pub trait AppHandle {
    /// Assign a color to a palette role
    fn set_palette_color(&mut self, role: PaletteRole, color: Color);

    /// Install the application-wide stylesheet
    fn set_stylesheet(&mut self, stylesheet: &str);
}

/// OS-level window state requested from the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsWindowState {
    Normal,
    Maximized,
    Minimized,
}

/// Top-level window attributes the host applies once at wrap time
///
/// Translucency is skipped where the compositor shadows windows natively;
/// opaque paint is forced only where resizing flickers without it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WindowAttributes {
    /// Suppress the native title bar and border
    pub frameless: bool,
    /// Use a translucent top-level surface (for the soft shadow margin)
    pub translucent_background: bool,
    /// Force opaque paint during resize
    pub opaque_paint_on_resize: bool,
    /// Skip the system background fill
    pub no_system_background: bool,
}

/// An imperative operation the host toolkit must perform
///
/// State transitions return these in execution order. Keeping them as data
/// lets the platform workaround sequences be asserted in tests.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostOp {
    /// Request an OS-level window state change
    SetOsState(OsWindowState),
    /// Toggle the native frame (false reinstates the OS title bar)
    SetFrameless(bool),
    /// Re-show the window after a flag change
    Show,
    /// Resize the top-level window
    Resize(Size),
    /// Flush pending events so a preceding resize takes effect
    FlushEvents,
    /// Register an explicit application identity with the taskbar
    SetTaskbarIdentity(String),
}

/// Text measurement provided by the host's font system
pub trait TextMetrics {
    /// Horizontal advance of the given text
    fn advance(&self, text: &str) -> f32;

    /// Line height of the title font
    fn line_height(&self) -> f32;
}

/// Pixel size for rasterizing a vector icon on a high-DPI screen
///
/// The backing pixmap is scaled by the device pixel ratio so the icon stays
/// sharp; the host divides by the same ratio when presenting.
#[inline]
pub fn scaled_icon_size(base: Size, device_pixel_ratio: f32) -> Size {
    Size::new(base.width * device_pixel_ratio, base.height * device_pixel_ratio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_icon_size() {
        let s = scaled_icon_size(Size::new(16.0, 16.0), 2.0);
        assert!((s.width - 32.0).abs() < 0.001);
        assert!((s.height - 32.0).abs() < 0.001);
    }
}
