//! Geometry recomputation
//!
//! Runs after every resize, show, and state change, before the next paint:
//! rounded-corner mask, resizer placement, button placement, and the
//! tab-strip mask all derive from the current geometry and state.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};
use crate::platform::ButtonPosition;
use crate::resizer::layout_resizers;
use crate::tabstrip::{strip_mask, TabStrip};
use super::{DecoratedWindow, WindowState};

/// Extra radius on the clip mask; hides the aliasing seam at the corner
pub const MASK_RADIUS_FUDGE_PX: f32 = 1.0;

/// Rounded-rect clip applied to the whole window when transparency is off
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClipMask {
    pub rect: Rect,
    pub radius: f32,
}

impl DecoratedWindow {
    /// Shadow margin currently in effect
    ///
    /// Zero while maximized and on setups without an engine shadow.
    pub fn shadow_inset(&self) -> f32 {
        if self.use_shadow && self.state != WindowState::Maximized {
            self.theme.metrics().shadow_radius
        } else {
            0.0
        }
    }

    /// Recompute every geometry-derived artifact
    pub(crate) fn sync_layout(&mut self) {
        let size = self.geometry.size();
        self.frame.set_size(size);

        // Transparency off: manual corner rounding via a clip mask.
        let corner_radius = self.theme.metrics().corner_radius;
        self.mask = (!self.transparent && corner_radius > 0.0).then(|| ClipMask {
            rect: Rect::new(0.0, 0.0, size.width, size.height),
            radius: corner_radius + MASK_RADIUS_FUDGE_PX,
        });

        if !self.dialog {
            let inset = self.shadow_inset();
            layout_resizers(&mut self.resizers, size, inset);
        }
        self.layout_buttons();
    }

    /// Place the window buttons inside the title bar
    ///
    /// Buttons-left order is close, minimize, maximize; buttons-right order
    /// is minimize, maximize, close.
    fn layout_buttons(&mut self) {
        let inset = self.shadow_inset();
        let diameter = self.theme.metrics().button_diameter;
        let spacing = self.theme.metrics().button_spacing - diameter;
        let step = diameter + spacing;
        let buttons_width = self.window_buttons_width();
        let min_margin = self.window_buttons_margin();
        let margin_y = (self.titlebar_height - diameter) / 2.0;

        let (margin_x, ofs_close, ofs_min, ofs_max) = match self.button_position {
            ButtonPosition::Right => {
                let ofs_close = if self.dialog { 0.0 } else { step * 2.0 };
                let margin_x = self.geometry.width - buttons_width - min_margin - inset;
                (margin_x, ofs_close, 0.0, step)
            }
            ButtonPosition::Left => (min_margin + inset, 0.0, step, step * 2.0),
        };

        let y = margin_y + inset;
        self.buttons.close.origin = Vec2::new(margin_x + ofs_close, y);
        if let Some(b) = self.buttons.minimize.as_mut() {
            b.origin = Vec2::new(margin_x + ofs_min, y);
        }
        if let Some(b) = self.buttons.maximize.as_mut() {
            b.origin = Vec2::new(margin_x + ofs_max, y);
        }
        if let Some(b) = self.buttons.restore.as_mut() {
            b.origin = Vec2::new(margin_x + ofs_max, y);
        }
    }

    /// Re-measure the embedded tab strip and update its clip mask
    ///
    /// The strip is host-owned, so the host calls this after resize and
    /// whenever tabs change. The area right of the mask is the drag region.
    pub fn refresh_tab_mask(&mut self, strip: &dyn TabStrip) {
        if self.tab_filter.is_some() {
            self.tab_mask = Some(strip_mask(strip, self.titlebar_height));
        }
    }

    /// Show notification: relayout and (possibly) center
    ///
    /// Top-level windows center on their screen exactly once; child windows
    /// re-center against their parent bounds on every show.
    pub(crate) fn handle_show(&mut self, screen: Option<Rect>, parent_bounds: Option<Rect>) {
        self.sync_layout();
        match parent_bounds {
            Some(parent) => {
                let centered = self.geometry.centered_in(parent);
                self.move_to(centered.position());
            }
            None => {
                if self.center_pending {
                    if let Some(screen) = screen {
                        let centered = self.geometry.centered_in(screen);
                        self.move_to(centered.position());
                    }
                    self.center_pending = false;
                }
            }
        }
    }

    /// Fixed decorated size for a dialog's content size
    ///
    /// Dialogs track their content instead of being user-resizable. Off the
    /// compositor-shadow platform the title bar adds to the height as well.
    pub fn dialog_frame_size(&self, content_size: Size) -> Size {
        let pad = self.theme.metrics().shadow_radius * 2.0;
        if self.platform.compositor_shadow {
            content_size.grown(pad, pad)
        } else {
            content_size.grown(pad, pad + self.titlebar_height)
        }
    }
}
