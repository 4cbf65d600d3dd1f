//! Application shell: window registry, focus broadcast, wrap factory
//!
//! One `Shell` per application. It is the context every decorated window is
//! created against, the explicit observer list for application-wide focus
//! changes, and the screen registry used for multi-monitor centering.

use std::collections::HashMap;
use std::sync::Arc;

use crate::host::{ContentWindow, HostOp};
use crate::input::InputOutcome;
use crate::math::{Rect, Vec2};
use crate::platform::PlatformTraits;
use crate::theme::Theme;
use crate::window::{
    CloseOutcome, DecoratedWindow, ParentBounds, WindowButton, WindowId, WrapConfig,
};

/// Process-wide decoration context
pub struct Shell {
    theme: Arc<dyn Theme>,
    platform: PlatformTraits,
    windows: HashMap<WindowId, DecoratedWindow>,
    /// Windows subscribed to the global focus broadcast, in wrap order.
    /// Every entry is deregistered on teardown; a stale id here would mean
    /// retheming a dead window.
    focus_observers: Vec<WindowId>,
    screens: Vec<Rect>,
    next_id: WindowId,
    active: Option<WindowId>,
}

impl Shell {
    /// Create the decoration context with an injected theme
    pub fn new(theme: Arc<dyn Theme>, platform: PlatformTraits) -> Self {
        Self {
            theme,
            platform,
            windows: HashMap::new(),
            focus_observers: Vec::new(),
            screens: Vec::new(),
            next_id: 1,
            active: None,
        }
    }

    /// The injected theme
    #[inline]
    pub fn theme(&self) -> &Arc<dyn Theme> {
        &self.theme
    }

    /// Register a screen's bounds for centering decisions
    pub fn add_screen(&mut self, bounds: Rect) {
        self.screens.push(bounds);
    }

    /// The screen containing a point, defaulting to the primary screen
    pub fn screen_containing(&self, pos: Vec2) -> Option<Rect> {
        self.screens
            .iter()
            .find(|s| s.contains(pos))
            .or_else(|| self.screens.first())
            .copied()
    }

    /// Wrap a content window in decoration
    ///
    /// The screen registry must be populated first; wrapping without an
    /// initialized context is a programming error, not a runtime condition.
    pub fn wrap(&mut self, content: Box<dyn ContentWindow>, config: WrapConfig) -> WindowId {
        assert!(
            !self.screens.is_empty(),
            "shell not initialized: register at least one screen before wrapping windows"
        );
        let id = self.next_id;
        self.next_id += 1;

        let window = DecoratedWindow::new(
            id,
            content,
            config,
            self.platform,
            Arc::clone(&self.theme),
        );
        self.windows.insert(id, window);
        self.focus_observers.push(id);
        self.focus_changed(Some(id));
        id
    }

    /// Get a window by id
    pub fn get(&self, id: WindowId) -> Option<&DecoratedWindow> {
        self.windows.get(&id)
    }

    /// Get a mutable window by id
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut DecoratedWindow> {
        self.windows.get_mut(&id)
    }

    /// Number of live decorated windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// The window currently holding focus
    #[inline]
    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    /// Application-level focus change
    ///
    /// Every registered window rethemes, not just the two windows involved:
    /// losing focus to a sibling must repaint the loser's title bar too.
    pub fn focus_changed(&mut self, active: Option<WindowId>) {
        self.active = active;
        for id in &self.focus_observers {
            if let Some(window) = self.windows.get_mut(id) {
                window.set_active(Some(*id) == active);
            }
        }
    }

    /// Show notification for a window
    ///
    /// Resolves the centering target: the containing screen for top-level
    /// windows, the parent's decorated or raw bounds for child windows.
    pub fn handle_show(&mut self, id: WindowId) {
        let Some(window) = self.windows.get(&id) else {
            return;
        };
        let parent_bounds = window.parent().map(|parent| match parent {
            ParentBounds::Wrapped(parent_id) => self
                .windows
                .get(&parent_id)
                .map(|w| w.geometry())
                .unwrap_or_else(|| window.geometry()),
            ParentBounds::Plain(bounds) => bounds,
        });
        let screen = self.screen_containing(window.geometry().center());
        if let Some(window) = self.windows.get_mut(&id) {
            window.handle_show(screen, parent_bounds);
        }
    }

    /// Bounds to center a child against, probing the wrapper back-reference
    ///
    /// If the parent content was wrapped, its decorated bounds win; a plain
    /// parent contributes its raw geometry.
    pub fn parent_bounds(&self, parent: &dyn ContentWindow) -> ParentBounds {
        match parent.wrapper().filter(|id| self.windows.contains_key(id)) {
            Some(id) => ParentBounds::Wrapped(id),
            None => ParentBounds::Plain(parent.geometry()),
        }
    }

    /// Close a window through the content-close protocol
    pub fn close_window(&mut self, id: WindowId) -> CloseOutcome {
        let Some(window) = self.windows.get_mut(&id) else {
            return CloseOutcome::Closed;
        };
        let outcome = window.request_close();
        if outcome == CloseOutcome::Closed {
            self.remove_window(id);
        }
        outcome
    }

    /// The content window destroyed itself; tear the wrapper down
    pub fn content_destroyed(&mut self, id: WindowId) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.content_destroyed();
            self.remove_window(id);
        }
    }

    /// Maximize a window onto the screen that contains it
    pub fn maximize_window(&mut self, id: WindowId) -> Vec<HostOp> {
        let bounds = self
            .windows
            .get(&id)
            .and_then(|w| self.screen_containing(w.geometry().center()));
        match self.windows.get_mut(&id) {
            Some(window) => window.maximize(bounds),
            None => Vec::new(),
        }
    }

    /// Restore a window from Maximized
    pub fn restore_window(&mut self, id: WindowId) -> Vec<HostOp> {
        match self.windows.get_mut(&id) {
            Some(window) => window.restore(),
            None => Vec::new(),
        }
    }

    /// Minimize a window
    pub fn minimize_window(&mut self, id: WindowId) -> Vec<HostOp> {
        match self.windows.get_mut(&id) {
            Some(window) => window.minimize(),
            None => Vec::new(),
        }
    }

    /// Perform a clicked window button's action
    pub fn activate_button(&mut self, id: WindowId, button: WindowButton) -> Vec<HostOp> {
        match button {
            WindowButton::Close => {
                self.close_window(id);
                Vec::new()
            }
            WindowButton::Minimize => self.minimize_window(id),
            WindowButton::Maximize => self.maximize_window(id),
            WindowButton::Restore => self.restore_window(id),
        }
    }

    /// Route a pointer press to a window
    pub fn handle_pointer_down(&mut self, id: WindowId, local: Vec2, global: Vec2) -> InputOutcome {
        match self.windows.get_mut(&id) {
            Some(window) => window.handle_pointer_down(local, global),
            None => InputOutcome::Ignored,
        }
    }

    /// Route a pointer move to a window
    pub fn handle_pointer_move(&mut self, id: WindowId, global: Vec2) -> InputOutcome {
        match self.windows.get_mut(&id) {
            Some(window) => window.handle_pointer_move(global),
            None => InputOutcome::Ignored,
        }
    }

    /// Route a pointer release; a completed button click runs its action
    pub fn handle_pointer_up(&mut self, id: WindowId, local: Vec2) -> Vec<HostOp> {
        let clicked = match self.windows.get_mut(&id) {
            Some(window) => window.handle_pointer_up(local),
            None => None,
        };
        match clicked {
            Some(button) => self.activate_button(id, button),
            None => Vec::new(),
        }
    }

    /// Title-bar double-click: toggle maximize/restore
    pub fn handle_double_click(&mut self, id: WindowId, local: Vec2) -> Vec<HostOp> {
        let toggles = self
            .windows
            .get(&id)
            .is_some_and(|w| w.is_title_bar_double_click(local));
        if !toggles {
            return Vec::new();
        }
        let bounds = self
            .windows
            .get(&id)
            .and_then(|w| self.screen_containing(w.geometry().center()));
        match self.windows.get_mut(&id) {
            Some(window) => window.toggle_maximized(bounds),
            None => Vec::new(),
        }
    }

    fn remove_window(&mut self, id: WindowId) {
        self.windows.remove(&id);
        self.focus_observers.retain(|&wid| wid != id);
        if self.active == Some(id) {
            self.active = None;
        }
    }
}
