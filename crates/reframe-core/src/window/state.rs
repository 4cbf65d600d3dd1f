//! Window-state transitions, close protocol, and button policy
//!
//! Transitions return the [`HostOp`] sequence the host toolkit must execute;
//! the platform workaround sequences live here and nowhere else.

use crate::host::{CloseResponse, HostOp, OsWindowState, WindowAttributes};
use crate::math::Rect;
use crate::platform::ButtonPosition;
use super::{ButtonHints, DecoratedWindow, WindowState};

/// Result of a close attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Content accepted; the wrapper is gone
    Closed,
    /// Content refused (e.g. unsaved-changes prompt); the wrapper stays open
    Refused,
}

impl DecoratedWindow {
    /// Maximize, filling `bounds` (usually the screen's work area)
    pub fn maximize(&mut self, bounds: Option<Rect>) -> Vec<HostOp> {
        if self.state == WindowState::Maximized {
            return Vec::new();
        }
        self.swap_maximize_restore(true);
        self.restore_geometry = Some(self.geometry);
        self.state = WindowState::Maximized;

        // No shadow margin, no resize handles, no dragging while maximized.
        self.show_resizers(false);
        self.drag_move_enabled = false;
        if let Some(bounds) = bounds {
            self.geometry = bounds;
        }
        self.sync_layout();
        log::debug!("window {} maximized", self.id);
        vec![HostOp::SetOsState(OsWindowState::Maximized)]
    }

    /// Restore from Maximized back to the remembered geometry
    pub fn restore(&mut self) -> Vec<HostOp> {
        if self.state != WindowState::Maximized {
            return Vec::new();
        }
        self.swap_maximize_restore(false);
        self.state = WindowState::Normal;
        if let Some(geometry) = self.restore_geometry.take() {
            self.geometry = geometry;
        }

        let mut ops = vec![HostOp::SetOsState(OsWindowState::Normal)];
        self.show_resizers(true);
        self.drag_move_enabled = !self.dialog;
        if self.use_shadow && self.platform.needs_shadow_redraw_fix {
            // The shadow effect can come back corrupted; nudging the height
            // by one pixel forces a full recomposite.
            let size = self.geometry.size();
            ops.push(HostOp::Resize(size.grown(0.0, -1.0)));
            ops.push(HostOp::FlushEvents);
            ops.push(HostOp::Resize(size));
        }
        self.sync_layout();
        log::debug!("window {} restored", self.id);
        ops
    }

    /// Maximize or restore, whichever applies (title-bar double-click)
    pub fn toggle_maximized(&mut self, bounds: Option<Rect>) -> Vec<HostOp> {
        if self.state == WindowState::Maximized {
            self.restore()
        } else {
            self.maximize(bounds)
        }
    }

    /// Minimize
    ///
    /// Where the window manager cannot minimize frameless windows, the
    /// native frame is reinstated for the duration of the request.
    pub fn minimize(&mut self) -> Vec<HostOp> {
        if self.state == WindowState::Minimized {
            return Vec::new();
        }
        self.prev_state = Some(self.state);
        self.state = WindowState::Minimized;
        log::debug!("window {} minimized", self.id);
        if self.platform.needs_minimize_frame_toggle {
            vec![
                HostOp::SetFrameless(false),
                HostOp::Show,
                HostOp::SetOsState(OsWindowState::Minimized),
                HostOp::SetFrameless(true),
                HostOp::Show,
            ]
        } else {
            vec![HostOp::SetOsState(OsWindowState::Minimized)]
        }
    }

    /// Leave Minimized, returning to the state before it
    pub fn restore_from_minimize(&mut self) {
        if self.state == WindowState::Minimized {
            self.state = self.prev_state.take().unwrap_or(WindowState::Normal);
        }
    }

    /// Forward a close request to the content window
    ///
    /// The wrapper only accepts its own close once the content is hidden; a
    /// refusing content window (confirmation dialogs) keeps the wrapper open
    /// and the next attempt starts over.
    pub fn request_close(&mut self) -> CloseOutcome {
        let Some(content) = self.content.as_mut() else {
            return CloseOutcome::Closed;
        };
        let response = content.request_close();
        if response == CloseResponse::Accepted && content.is_hidden() {
            log::debug!("window {} closed", self.id);
            self.content = None;
            CloseOutcome::Closed
        } else {
            log::debug!("window {} close refused by content", self.id);
            CloseOutcome::Refused
        }
    }

    /// One-shot notification that the content destroyed itself
    ///
    /// The wrapper must not outlive its content in a visible state.
    pub fn content_destroyed(&mut self) -> CloseOutcome {
        self.content = None;
        CloseOutcome::Closed
    }

    /// Apply OS button-hint flags to the button group
    ///
    /// Enabled state is independent of visibility; the maximize/restore pair
    /// stays mutually exclusive; all buttons disappear together only when
    /// every one of them is disabled.
    pub fn set_button_hints(&mut self, hints: ButtonHints) {
        let maximized = self.state == WindowState::Maximized;

        self.buttons.close.enabled = hints.contains(ButtonHints::CLOSE);
        if let Some(b) = self.buttons.minimize.as_mut() {
            b.enabled = hints.contains(ButtonHints::MINIMIZE);
        }
        let allow_maximize = hints.contains(ButtonHints::MAXIMIZE);
        if let Some(b) = self.buttons.maximize.as_mut() {
            b.enabled = allow_maximize;
            b.visible = !maximized && allow_maximize;
        }
        if let Some(b) = self.buttons.restore.as_mut() {
            b.enabled = allow_maximize;
            b.visible = maximized && allow_maximize;
        }

        if self.buttons.any_enabled() {
            self.buttons.set_all_visible(true);
            if !self.dialog {
                if maximized {
                    if let Some(b) = self.buttons.maximize.as_mut() {
                        b.visible = false;
                    }
                } else if let Some(b) = self.buttons.restore.as_mut() {
                    b.visible = false;
                }
            }
        } else {
            self.buttons.set_all_visible(false);
        }

        self.hints = hints;
    }

    /// Focus retheme: focused color when active, unfocused otherwise
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.frame.set_titlebar_color(if active {
            self.titlebar_color
        } else {
            self.titlebar_nofocus_color
        });
        log::trace!("window {} active: {}", self.id, active);
    }

    /// Tab-strip stylesheet with this window's margins and focus color
    ///
    /// Substitutes the theme template's late-bound tokens; regenerated on
    /// every focus change so the strip background follows the title bar.
    pub fn title_tabstrip_stylesheet(&self) -> Option<String> {
        self.tab_filter.as_ref()?;
        let m = self.theme.metrics();
        let height = self.titlebar_height
            - m.titlebar_top_margin
            - m.tab_css_top_border
            - m.tab_css_bottom_border;
        let button_margin =
            self.window_buttons_margin() + self.window_buttons_width() + m.button_min_x_margin;
        let (left, right) = match self.button_position {
            ButtonPosition::Right => (0.0, button_margin),
            ButtonPosition::Left => (button_margin, 0.0),
        };
        let stylesheet = self
            .theme
            .title_tabstrip_stylesheet()
            .replace("{TITLEBAR_HEIGHT}", &(height.round() as i64).to_string())
            .replace(
                "{WINDOW_BUTTON_MARGIN_LEFT}",
                &(left.round() as i64).to_string(),
            )
            .replace(
                "{WINDOW_BUTTON_MARGIN_RIGHT}",
                &(right.round() as i64).to_string(),
            )
            .replace("{BACKGROUND_COLOR}", &self.frame.titlebar_color().hex());
        Some(stylesheet)
    }

    /// Top-level window attributes for this window
    ///
    /// Applied by the host once, right after wrapping.
    pub fn window_attributes(&self) -> WindowAttributes {
        WindowAttributes {
            frameless: true,
            translucent_background: self.use_shadow,
            opaque_paint_on_resize: self.platform.needs_opaque_paint_on_resize,
            no_system_background: true,
        }
    }

    /// Host operations for assigning the window icon
    ///
    /// On the platform that needs it, the taskbar only shows the icon after
    /// an explicit application-identity registration.
    pub fn assign_icon(&self, app_identity: &str) -> Vec<HostOp> {
        if self.platform.needs_taskbar_identity {
            vec![HostOp::SetTaskbarIdentity(app_identity.to_string())]
        } else {
            Vec::new()
        }
    }

    fn swap_maximize_restore(&mut self, maximizing: bool) {
        let switchable = self.buttons.maximize.is_some_and(|b| b.enabled)
            || self.buttons.restore.is_some_and(|b| b.enabled);
        if !switchable {
            return;
        }
        if let Some(b) = self.buttons.restore.as_mut() {
            b.visible = maximizing;
            b.enabled = maximizing;
        }
        if let Some(b) = self.buttons.maximize.as_mut() {
            b.visible = !maximizing;
            b.enabled = !maximizing;
        }
    }

    fn show_resizers(&mut self, show: bool) {
        if self.dialog {
            return;
        }
        for r in self.resizers.iter_mut() {
            r.set_visible(show);
        }
    }
}
