//! Window buttons: hints, identity, and per-button state

use bitflags::bitflags;

use crate::math::{Rect, Vec2};

bitflags! {
    /// OS button-hint flags mapped through the wrapper
    ///
    /// Hosts toggle these instead of applying native window flags directly;
    /// the wrapper translates them into button enable/visibility state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ButtonHints: u8 {
        const CLOSE = 1 << 0;
        const MINIMIZE = 1 << 1;
        const MAXIMIZE = 1 << 2;
    }
}

/// One of the window buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowButton {
    Minimize,
    Maximize,
    Restore,
    Close,
}

/// Placement and interaction state of a single button
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonControl {
    /// Top-left corner in window-local coordinates
    pub origin: Vec2,
    /// Responds to clicks
    pub enabled: bool,
    /// Drawn at all; independent of `enabled`
    pub visible: bool,
}

impl ButtonControl {
    fn shown() -> Self {
        Self {
            origin: Vec2::ZERO,
            enabled: true,
            visible: true,
        }
    }

    fn hidden() -> Self {
        Self {
            origin: Vec2::ZERO,
            enabled: true,
            visible: false,
        }
    }

    /// Hit rect for the given diameter
    #[inline]
    pub fn rect(&self, diameter: f32) -> Rect {
        Rect::new(self.origin.x, self.origin.y, diameter, diameter)
    }

    /// Whether a window-local point hits this button
    #[inline]
    pub fn hit(&self, pos: Vec2, diameter: f32) -> bool {
        self.visible && self.enabled && self.rect(diameter).contains(pos)
    }
}

/// The window's button group
///
/// Dialog windows carry only the close button; the maximize/restore pair is
/// mutually exclusive, switched by the current window state.
#[derive(Clone, Copy, Debug)]
pub struct ButtonSet {
    pub close: ButtonControl,
    pub minimize: Option<ButtonControl>,
    pub maximize: Option<ButtonControl>,
    pub restore: Option<ButtonControl>,
}

impl ButtonSet {
    /// Buttons for a freshly wrapped window
    pub fn new(dialog: bool) -> Self {
        if dialog {
            Self {
                close: ButtonControl::shown(),
                minimize: None,
                maximize: None,
                restore: None,
            }
        } else {
            Self {
                close: ButtonControl::shown(),
                minimize: Some(ButtonControl::shown()),
                maximize: Some(ButtonControl::shown()),
                restore: Some(ButtonControl::hidden()),
            }
        }
    }

    /// True if any button is enabled
    pub fn any_enabled(&self) -> bool {
        self.close.enabled
            || self.minimize.is_some_and(|b| b.enabled)
            || self.maximize.is_some_and(|b| b.enabled)
            || self.restore.is_some_and(|b| b.enabled)
    }

    /// Set visibility of every button at once
    pub fn set_all_visible(&mut self, visible: bool) {
        self.close.visible = visible;
        if let Some(b) = self.minimize.as_mut() {
            b.visible = visible;
        }
        if let Some(b) = self.maximize.as_mut() {
            b.visible = visible;
        }
        if let Some(b) = self.restore.as_mut() {
            b.visible = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_buttons_close_only() {
        let set = ButtonSet::new(true);
        assert!(set.close.visible);
        assert!(set.minimize.is_none());
        assert!(set.maximize.is_none());
        assert!(set.restore.is_none());
    }

    #[test]
    fn test_initial_restore_hidden() {
        let set = ButtonSet::new(false);
        assert!(set.maximize.unwrap().visible);
        assert!(!set.restore.unwrap().visible);
    }

    #[test]
    fn test_button_hit_requires_visible_and_enabled() {
        let mut b = ButtonControl::shown();
        b.origin = Vec2::new(10.0, 10.0);
        assert!(b.hit(Vec2::new(15.0, 15.0), 12.0));
        assert!(!b.hit(Vec2::new(30.0, 15.0), 12.0));

        b.visible = false;
        assert!(!b.hit(Vec2::new(15.0, 15.0), 12.0));

        b.visible = true;
        b.enabled = false;
        assert!(!b.hit(Vec2::new(15.0, 15.0), 12.0));
    }

    #[test]
    fn test_hints_flags() {
        let hints = ButtonHints::CLOSE | ButtonHints::MAXIMIZE;
        assert!(hints.contains(ButtonHints::CLOSE));
        assert!(!hints.contains(ButtonHints::MINIMIZE));
    }
}
