//! Decorated window orchestrator
//!
//! Composes the frame surface, title label, resize handles, window buttons
//! and optional title-bar tab strip around a wrapped content window, and
//! owns the window-state machine.
//!
//! The implementation is split into focused submodules:
//! - `layout`: geometry recomputation (mask, resizers, buttons, tab mask)
//! - `input`: pointer, key, and double-click handling
//! - `state`: state transitions, close protocol, button policy

mod buttons;
mod config;
mod input;
mod layout;
mod state;

pub use buttons::{ButtonControl, ButtonHints, ButtonSet, WindowButton};
pub use config::{ParentBounds, WrapConfig};
pub use input::Key;
pub use layout::ClipMask;
pub use state::CloseOutcome;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::frame::WindowFrame;
use crate::host::ContentWindow;
use crate::input::DragState;
use crate::math::{Rect, Size, Vec2};
use crate::platform::{ButtonPosition, PlatformTraits};
use crate::resizer::{Edge, Resizer};
use crate::tabstrip::TabFilter;
use crate::theme::{Color, Theme};
use crate::title::TitleLabel;

/// Unique identifier of a decorated window
pub type WindowId = u64;

/// Window state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

/// A content window wrapped in custom decoration
pub struct DecoratedWindow {
    id: WindowId,
    /// Exclusive ownership; None once the content destroyed itself
    content: Option<Box<dyn ContentWindow>>,
    state: WindowState,
    prev_state: Option<WindowState>,
    geometry: Rect,
    /// Decorated minimum: content minimum plus decoration overhead
    min_size: Size,
    /// Geometry to return to when leaving Maximized
    restore_geometry: Option<Rect>,
    titlebar_height: f32,
    transparent: bool,
    use_shadow: bool,
    dialog: bool,
    titlebar_color: Color,
    titlebar_nofocus_color: Color,
    frame: WindowFrame,
    title_label: Option<TitleLabel>,
    resizers: [Resizer; 8],
    drag: Option<DragState>,
    drag_move_enabled: bool,
    pressed_button: Option<WindowButton>,
    button_position: ButtonPosition,
    buttons: ButtonSet,
    hints: ButtonHints,
    tab_filter: Option<TabFilter>,
    tab_mask: Option<Rect>,
    mask: Option<ClipMask>,
    parent: Option<ParentBounds>,
    /// One-shot guard for screen centering on the first show
    center_pending: bool,
    active: bool,
    platform: PlatformTraits,
    theme: Arc<dyn Theme>,
}

impl DecoratedWindow {
    /// Compose the decoration around a content window
    pub fn new(
        id: WindowId,
        mut content: Box<dyn ContentWindow>,
        config: WrapConfig,
        platform: PlatformTraits,
        theme: Arc<dyn Theme>,
    ) -> Self {
        let m = theme.metrics().clone();
        let titlebar_height = config.titlebar_height.unwrap_or(m.titlebar_height);
        let button_position = config.button_position.unwrap_or(platform.button_position);
        let title_bar = config.dialog || config.title_bar;
        let use_shadow = !platform.compositor_shadow && config.transparent;
        let titlebar_color = config.titlebar_color.unwrap_or(m.titlebar_color);
        let titlebar_nofocus_color = config
            .titlebar_nofocus_color
            .unwrap_or(m.titlebar_nofocus_color);
        let text_color = config.titlebar_text_color.unwrap_or(m.titlebar_text_color);

        let geometry = content.geometry();
        let mut decoration_height = titlebar_height;
        if use_shadow {
            decoration_height += m.shadow_radius * 2.0;
        }
        let min_size = content.min_size().grown(0.0, decoration_height);
        content.attach_wrapper(id);

        let mut frame = WindowFrame::new(
            titlebar_height,
            titlebar_color,
            m.background_color,
            m.corner_radius,
        );
        frame.set_size(geometry.size());

        let diameter = m.button_diameter;
        let spacing = m.button_spacing - diameter;
        let buttons_width = if config.dialog {
            diameter
        } else {
            spacing * 2.0 + diameter * 3.0
        };
        let buttons_margin = ((titlebar_height - diameter) / 2.0).max(m.button_min_x_margin);
        let title_label = title_bar.then(|| {
            TitleLabel::new(
                content.title(),
                titlebar_height,
                text_color,
                button_position,
                buttons_width + buttons_margin,
                m.title_label_min_width,
                m.title_text_right_margin,
            )
        });

        let mut resizers = Edge::ALL.map(Resizer::new);
        if config.dialog {
            // Dialogs are fixed-size; the handles exist but never hit.
            for r in resizers.iter_mut() {
                r.set_visible(false);
            }
        }

        let mut window = Self {
            id,
            content: Some(content),
            state: WindowState::Normal,
            prev_state: None,
            geometry,
            min_size,
            restore_geometry: None,
            titlebar_height,
            transparent: config.transparent,
            use_shadow,
            dialog: config.dialog,
            titlebar_color,
            titlebar_nofocus_color,
            frame,
            title_label,
            resizers,
            drag: None,
            drag_move_enabled: !config.dialog,
            pressed_button: None,
            button_position,
            buttons: ButtonSet::new(config.dialog),
            hints: ButtonHints::all(),
            tab_filter: config.tab_strip_in_titlebar.then(TabFilter::new),
            tab_mask: None,
            mask: None,
            parent: config.parent,
            center_pending: true,
            active: true,
            platform,
            theme,
        };
        window.sync_layout();
        log::debug!(
            "wrapped window {} ({}x{}, shadow: {})",
            id,
            geometry.width,
            geometry.height,
            use_shadow
        );
        window
    }

    // ############################################################
    // Properties
    // ############################################################

    /// Window identifier
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Current window state
    #[inline]
    pub fn state(&self) -> WindowState {
        self.state
    }

    /// Decorated geometry (including the shadow margin)
    #[inline]
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Decorated minimum size
    #[inline]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// True if the engine draws its own drop shadow
    #[inline]
    pub fn use_shadow(&self) -> bool {
        self.use_shadow
    }

    /// Title-bar height in pixels
    #[inline]
    pub fn titlebar_height(&self) -> f32 {
        self.titlebar_height
    }

    /// True for dialog-style wrappers (close button only, fixed size)
    #[inline]
    pub fn is_dialog(&self) -> bool {
        self.dialog
    }

    /// Side of the title bar the window buttons are on
    #[inline]
    pub fn button_position(&self) -> ButtonPosition {
        self.button_position
    }

    /// Currently applied button hints
    #[inline]
    pub fn button_hints(&self) -> ButtonHints {
        self.hints
    }

    /// Whether this window currently has focus
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether title-bar dragging is currently possible
    #[inline]
    pub fn drag_move_enabled(&self) -> bool {
        self.drag_move_enabled
    }

    /// Parent bounds configuration, if any
    #[inline]
    pub fn parent(&self) -> Option<ParentBounds> {
        self.parent
    }

    /// Frame surface (paint shapes, title-bar color)
    #[inline]
    pub fn frame(&self) -> &WindowFrame {
        &self.frame
    }

    /// Title label, present when the title bar is shown
    #[inline]
    pub fn title_label(&self) -> Option<&TitleLabel> {
        self.title_label.as_ref()
    }

    /// The eight resize handles
    #[inline]
    pub fn resizers(&self) -> &[Resizer; 8] {
        &self.resizers
    }

    /// The window button group
    #[inline]
    pub fn buttons(&self) -> &ButtonSet {
        &self.buttons
    }

    /// Rounded-corner clip mask, present when transparency is off
    #[inline]
    pub fn mask(&self) -> Option<ClipMask> {
        self.mask
    }

    /// Tab-strip clip mask, present once a strip has been measured
    #[inline]
    pub fn tab_mask(&self) -> Option<Rect> {
        self.tab_mask
    }

    /// Input filter for the embedded tab strip
    #[inline]
    pub fn tab_filter(&self) -> Option<&TabFilter> {
        self.tab_filter.as_ref()
    }

    /// Mutable access for routing strip press/release events
    #[inline]
    pub fn tab_filter_mut(&mut self) -> Option<&mut TabFilter> {
        self.tab_filter.as_mut()
    }

    /// Platform capability set this window was built with
    #[inline]
    pub fn platform(&self) -> PlatformTraits {
        self.platform
    }

    /// Combined width of the window buttons
    pub fn window_buttons_width(&self) -> f32 {
        let m = self.theme.metrics();
        let diameter = m.button_diameter;
        let spacing = m.button_spacing - diameter;
        if self.dialog {
            diameter
        } else {
            spacing * 2.0 + diameter * 3.0
        }
    }

    /// Distance of the button group from the window edge
    ///
    /// Grows with the title bar so the buttons stay vertically centered, but
    /// never drops below the theme's minimum margin.
    pub fn window_buttons_margin(&self) -> f32 {
        let m = self.theme.metrics();
        ((self.titlebar_height - m.button_diameter) / 2.0).max(m.button_min_x_margin)
    }

    /// Update the title text shown in the title bar
    pub fn set_title(&mut self, title: &str) {
        if let Some(label) = self.title_label.as_mut() {
            label.set_text(title);
        }
    }

    /// Move the window, keeping its size
    pub fn move_to(&mut self, pos: Vec2) {
        self.geometry = self.geometry.at(pos);
    }

    /// Apply new geometry, clamped to the decorated minimum size
    pub fn set_geometry(&mut self, geometry: Rect) {
        self.geometry = geometry;
        self.geometry.width = self.geometry.width.max(self.min_size.width);
        self.geometry.height = self.geometry.height.max(self.min_size.height);
        self.sync_layout();
    }

    /// Host resize notification
    pub fn handle_resize(&mut self, size: Size) {
        self.set_geometry(Rect::from_pos_size(self.geometry.position(), size));
    }
}
