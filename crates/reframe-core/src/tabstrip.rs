//! Tab strip embedded in the title bar
//!
//! The strip itself is owned by the host; the engine only overlays two
//! behaviors on it: an input filter that pins the trailing placeholder tab,
//! and a clip mask that hides the placeholder's filler area so the empty
//! remainder of the bar doubles as a window-drag region.

use crate::math::{Rect, Vec2};

/// Extra mask width covering the rounded lead-in of the first hidden tab
pub const TAB_MASK_ROUND_PX: f32 = 8.0;

/// Non-owning view of a host-owned tab strip
pub trait TabStrip {
    /// Number of tabs, including the trailing placeholder
    fn count(&self) -> usize;

    /// Rect of a tab in strip-local coordinates
    fn tab_rect(&self, index: usize) -> Rect;

    /// Index of the tab under a strip-local point
    fn tab_at(&self, pos: Vec2) -> Option<usize>;

    /// Whether a tab is currently visible
    fn is_tab_visible(&self, index: usize) -> bool;
}

/// Input filter pinning the trailing placeholder tab
///
/// The placeholder (last) tab exists only to terminate the strip with a
/// rounded corner. It must never move, and no other tab may be dragged past
/// its left edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabFilter {
    /// Click offset from the grabbed tab's left edge
    grab_offset: Option<f32>,
    /// Grabbed tab width minus the grab offset; predicts the moving tab's
    /// right edge from the pointer position
    reach_offset: f32,
}

impl TabFilter {
    /// Create an idle filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Record grab offsets on pointer-down over the strip
    pub fn on_press(&mut self, pos: Vec2, strip: &dyn TabStrip) {
        let Some(index) = strip.tab_at(pos) else {
            self.grab_offset = None;
            return;
        };
        let tab = strip.tab_rect(index);
        let grab = pos.x - tab.x;
        self.grab_offset = Some(grab);
        self.reach_offset = tab.width - grab;
    }

    /// Forget the grab on pointer-up
    pub fn on_release(&mut self) {
        self.grab_offset = None;
    }

    /// Whether a pointer-move while dragging `moving_index` must be consumed
    ///
    /// True when the placeholder itself is being dragged, or when the moving
    /// tab's predicted right edge would cross the placeholder's left edge.
    pub fn blocks_move(&self, pos: Vec2, moving_index: usize, strip: &dyn TabStrip) -> bool {
        if self.grab_offset.is_none() || strip.count() == 0 {
            return false;
        }
        let last = strip.count() - 1;
        if moving_index == last {
            return true;
        }
        let moving_right_edge = pos.x + self.reach_offset;
        let fixed_left_edge = strip.tab_rect(last).x;
        moving_right_edge > fixed_left_edge
    }
}

/// Clip mask sized to exactly the visible tabs
///
/// Sums the widths of all visible tabs except the trailing placeholder and
/// adds the rounded lead-in allowance. Everything right of the mask is bare
/// title bar.
pub fn strip_mask(strip: &dyn TabStrip, titlebar_height: f32) -> Rect {
    let mut width = 0.0;
    let count = strip.count();
    for i in 0..count.saturating_sub(1) {
        if strip.is_tab_visible(i) {
            width += strip.tab_rect(i).width;
        }
    }
    Rect::new(0.0, 0.0, width + TAB_MASK_ROUND_PX, titlebar_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-width strip: `visible` flags per tab, 100 px per tab
    struct FakeStrip {
        visible: Vec<bool>,
    }

    impl FakeStrip {
        fn with_tabs(n: usize) -> Self {
            Self {
                visible: vec![true; n],
            }
        }
    }

    impl TabStrip for FakeStrip {
        fn count(&self) -> usize {
            self.visible.len()
        }
        fn tab_rect(&self, index: usize) -> Rect {
            Rect::new(index as f32 * 100.0, 0.0, 100.0, 28.0)
        }
        fn tab_at(&self, pos: Vec2) -> Option<usize> {
            let i = (pos.x / 100.0).floor() as usize;
            (i < self.visible.len()).then_some(i)
        }
        fn is_tab_visible(&self, index: usize) -> bool {
            self.visible[index]
        }
    }

    #[test]
    fn test_placeholder_tab_never_moves() {
        let strip = FakeStrip::with_tabs(4);
        let mut filter = TabFilter::new();
        filter.on_press(Vec2::new(350.0, 10.0), &strip);

        assert!(filter.blocks_move(Vec2::new(340.0, 10.0), 3, &strip));
        assert!(filter.blocks_move(Vec2::new(10.0, 10.0), 3, &strip));
    }

    #[test]
    fn test_tab_cannot_cross_placeholder() {
        let strip = FakeStrip::with_tabs(4);
        let mut filter = TabFilter::new();
        // Grab tab 1 in its middle: grab 50, reach 50.
        filter.on_press(Vec2::new(150.0, 10.0), &strip);

        // Placeholder left edge is 300: pointer 251 predicts right edge 301.
        assert!(filter.blocks_move(Vec2::new(251.0, 10.0), 1, &strip));
        // Pointer 249 predicts right edge 299, still fine.
        assert!(!filter.blocks_move(Vec2::new(249.0, 10.0), 1, &strip));
    }

    #[test]
    fn test_no_grab_no_blocking() {
        let strip = FakeStrip::with_tabs(4);
        let filter = TabFilter::new();
        assert!(!filter.blocks_move(Vec2::new(340.0, 10.0), 3, &strip));
    }

    #[test]
    fn test_release_clears_grab() {
        let strip = FakeStrip::with_tabs(4);
        let mut filter = TabFilter::new();
        filter.on_press(Vec2::new(150.0, 10.0), &strip);
        filter.on_release();
        assert!(!filter.blocks_move(Vec2::new(340.0, 10.0), 1, &strip));
    }

    #[test]
    fn test_strip_mask_excludes_placeholder() {
        let strip = FakeStrip::with_tabs(4);
        let mask = strip_mask(&strip, 28.0);
        // Three visible tabs plus the rounding allowance.
        assert!((mask.width - 308.0).abs() < 0.001);
        assert!((mask.height - 28.0).abs() < 0.001);
    }

    #[test]
    fn test_strip_mask_skips_hidden_tabs() {
        let mut strip = FakeStrip::with_tabs(4);
        strip.visible[1] = false;
        let mask = strip_mask(&strip, 28.0);
        assert!((mask.width - 208.0).abs() < 0.001);
    }
}
