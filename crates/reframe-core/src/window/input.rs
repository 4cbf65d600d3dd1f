//! Pointer and key handling for the decoration layer
//!
//! Buttons take precedence over resize handles, handles over the drag band.
//! Anything below the title band belongs to the content window.

use crate::input::{DragState, InputOutcome};
use crate::math::Vec2;
use crate::resizer::ResizeDrag;
use super::{DecoratedWindow, WindowButton, WindowState};

/// Keys the decoration layer cares about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Escape is swallowed so it cannot bypass the close protocol
    Escape,
    Other(u32),
}

impl DecoratedWindow {
    /// Find the visible, enabled button under a window-local point
    pub fn button_at(&self, pos: Vec2) -> Option<WindowButton> {
        let d = self.theme.metrics().button_diameter;
        if self.buttons.close.hit(pos, d) {
            return Some(WindowButton::Close);
        }
        if self.buttons.minimize.is_some_and(|b| b.hit(pos, d)) {
            return Some(WindowButton::Minimize);
        }
        if self.buttons.maximize.is_some_and(|b| b.hit(pos, d)) {
            return Some(WindowButton::Maximize);
        }
        if self.buttons.restore.is_some_and(|b| b.hit(pos, d)) {
            return Some(WindowButton::Restore);
        }
        None
    }

    /// Whether a window-local point lies in the draggable title band
    ///
    /// The band sits between the shadow inset and the title-bar's lower
    /// edge, excluding one inset on either side.
    pub fn in_drag_band(&self, pos: Vec2) -> bool {
        let inset = self.shadow_inset();
        pos.y >= inset
            && pos.y <= self.titlebar_height + inset + 1.0
            && pos.x > inset
            && pos.x < self.geometry.width - inset
    }

    /// Pointer press
    ///
    /// `local` is window-relative, `global` is in screen coordinates (drag
    /// deltas are tracked globally so they survive the window moving under
    /// the pointer).
    pub fn handle_pointer_down(&mut self, local: Vec2, global: Vec2) -> InputOutcome {
        if let Some(button) = self.button_at(local) {
            self.pressed_button = Some(button);
            return InputOutcome::Handled;
        }

        if self.state != WindowState::Maximized {
            if let Some(edge) = self
                .resizers
                .iter()
                .find(|r| r.contains(local))
                .map(|r| r.edge())
            {
                self.drag = Some(DragState::ResizeWindow(ResizeDrag::begin(
                    edge,
                    global,
                    self.geometry,
                )));
                return InputOutcome::Handled;
            }
        }

        if self.drag_move_enabled && self.in_drag_band(local) {
            self.drag = Some(DragState::MoveWindow {
                start_mouse: global,
                start_window: self.geometry.position(),
            });
            return InputOutcome::Handled;
        }

        InputOutcome::Ignored
    }

    /// Pointer move while a gesture may be active
    pub fn handle_pointer_move(&mut self, global: Vec2) -> InputOutcome {
        match self.drag {
            Some(DragState::MoveWindow {
                start_mouse,
                start_window,
            }) => {
                if self.drag_move_enabled {
                    let delta = global - start_mouse;
                    self.move_to(start_window + delta);
                }
                InputOutcome::Handled
            }
            Some(DragState::ResizeWindow(drag)) => {
                let geometry = drag.geometry_for(global, self.min_size);
                self.set_geometry(geometry);
                InputOutcome::Handled
            }
            None => InputOutcome::Ignored,
        }
    }

    /// Pointer release: ends gestures, resolves button clicks
    ///
    /// Returns the button that was both pressed and released on, if any;
    /// the owning shell decides what the click does.
    pub fn handle_pointer_up(&mut self, local: Vec2) -> Option<WindowButton> {
        self.drag = None;
        let pressed = self.pressed_button.take()?;
        (self.button_at(local) == Some(pressed)).then_some(pressed)
    }

    /// Whether a drag gesture is currently active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a double-click at this point lands in the title band
    ///
    /// Dialogs do not react to title-bar double-clicks.
    pub fn is_title_bar_double_click(&self, local: Vec2) -> bool {
        if self.dialog {
            return false;
        }
        let inset = self.shadow_inset();
        self.frame
            .is_title_bar_double_click(local - Vec2::new(inset, inset))
    }

    /// Key press filter
    pub fn handle_key(&mut self, key: Key) -> InputOutcome {
        match key {
            Key::Escape => InputOutcome::Handled,
            Key::Other(_) => InputOutcome::Ignored,
        }
    }
}
