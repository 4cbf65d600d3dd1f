//! Resize handles along the window border
//!
//! Eight invisible hit regions, one per cardinal and diagonal edge, translate
//! pointer drags into new window geometry. Moving any one of them re-lays-out
//! all eight.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size, Vec2};

/// Thickness of the side hit regions
pub const EDGE_THICKNESS_PX: f32 = 4.0;
/// Side length of the corner hit regions
pub const CORNER_SIZE_PX: f32 = 8.0;

/// Edge or corner a resize handle is bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Edge {
    /// All eight edges, sides first
    pub const ALL: [Edge; 8] = [
        Edge::Top,
        Edge::Bottom,
        Edge::Left,
        Edge::Right,
        Edge::TopLeft,
        Edge::TopRight,
        Edge::BottomLeft,
        Edge::BottomRight,
    ];

    /// Check if this is a corner edge
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            Edge::TopLeft | Edge::TopRight | Edge::BottomLeft | Edge::BottomRight
        )
    }

    /// Whether dragging this edge moves the top border
    #[inline]
    fn moves_top(&self) -> bool {
        matches!(self, Edge::Top | Edge::TopLeft | Edge::TopRight)
    }

    /// Whether dragging this edge moves the left border
    #[inline]
    fn moves_left(&self) -> bool {
        matches!(self, Edge::Left | Edge::TopLeft | Edge::BottomLeft)
    }

    /// Whether dragging this edge moves the bottom border
    #[inline]
    fn moves_bottom(&self) -> bool {
        matches!(self, Edge::Bottom | Edge::BottomLeft | Edge::BottomRight)
    }

    /// Whether dragging this edge moves the right border
    #[inline]
    fn moves_right(&self) -> bool {
        matches!(self, Edge::Right | Edge::TopRight | Edge::BottomRight)
    }

    /// Cursor shape for this handle
    pub fn cursor(&self) -> &'static str {
        match self {
            Edge::Top | Edge::Bottom => "ns-resize",
            Edge::Left | Edge::Right => "ew-resize",
            Edge::TopRight | Edge::BottomLeft => "nesw-resize",
            Edge::TopLeft | Edge::BottomRight => "nwse-resize",
        }
    }
}

/// One invisible resize handle
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Resizer {
    edge: Edge,
    rect: Rect,
    visible: bool,
}

impl Resizer {
    /// Create a handle for an edge; its rect is set by [`layout_resizers`]
    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            rect: Rect::default(),
            visible: true,
        }
    }

    /// The edge this handle is bound to
    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Current hit region in window-local coordinates
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the handle accepts input (hidden while maximized)
    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the handle
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Hit test against a window-local point
    #[inline]
    pub fn contains(&self, pos: Vec2) -> bool {
        self.visible && self.rect.contains(pos)
    }
}

/// Reposition all eight handles around the shadow-inset rectangle
///
/// Side handles span the side minus both corner squares; corner handles are
/// fixed-size squares at the inset corners. The bottom and right handles sit
/// just inside the inset border so they stay reachable.
pub fn layout_resizers(resizers: &mut [Resizer; 8], window: Size, inset: f32) {
    let cr = Rect::new(
        inset,
        inset,
        window.width - inset * 2.0,
        window.height - inset * 2.0,
    );
    let t = EDGE_THICKNESS_PX;
    let c = CORNER_SIZE_PX;
    let far_x = window.width - inset - t;
    let far_y = window.height - inset - t;
    let corner_x = window.width - inset - c;
    let corner_y = window.height - inset - c;
    for resizer in resizers.iter_mut() {
        resizer.rect = match resizer.edge {
            Edge::Top => Rect::new(cr.x + c, cr.y, cr.width - c * 2.0, t),
            Edge::Bottom => Rect::new(cr.x + c, far_y, cr.width - c * 2.0, t),
            Edge::Left => Rect::new(cr.x, cr.y + c, t, cr.height - c * 2.0),
            Edge::Right => Rect::new(far_x, cr.y + c, t, cr.height - c * 2.0),
            Edge::TopLeft => Rect::new(cr.x, cr.y, c, c),
            Edge::TopRight => Rect::new(corner_x, cr.y, c, c),
            Edge::BottomLeft => Rect::new(cr.x, corner_y, c, c),
            Edge::BottomRight => Rect::new(corner_x, corner_y, c, c),
        };
    }
}

/// Snapshot taken when a resize drag starts
///
/// Holds the window geometry at press time; every later pointer position is
/// resolved against this snapshot, never against intermediate geometry.
#[derive(Clone, Copy, Debug)]
pub struct ResizeDrag {
    edge: Edge,
    start_mouse: Vec2,
    start: Rect,
}

impl ResizeDrag {
    /// Begin a drag on the given edge
    pub fn begin(edge: Edge, mouse: Vec2, geometry: Rect) -> Self {
        Self {
            edge,
            start_mouse: mouse,
            start: geometry,
        }
    }

    /// The edge being dragged
    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// Geometry for the current pointer position, clamped to the minimum size
    ///
    /// For top/left drags the clamp adjusts origin and size together so the
    /// opposite border is the one that stops at the floor; the anchored
    /// border never moves.
    pub fn geometry_for(&self, mouse: Vec2, min: Size) -> Rect {
        let delta = mouse - self.start_mouse;
        let mut g = self.start;

        if self.edge.moves_top() {
            if self.start.height - delta.y < min.height {
                g.height = min.height;
                g.y = self.start.y + self.start.height - min.height;
            } else {
                g.height = self.start.height - delta.y;
                g.y = self.start.y + delta.y;
            }
        }
        if self.edge.moves_left() {
            if self.start.width - delta.x < min.width {
                g.width = min.width;
                g.x = self.start.x + self.start.width - min.width;
            } else {
                g.width = self.start.width - delta.x;
                g.x = self.start.x + delta.x;
            }
        }
        if self.edge.moves_bottom() {
            g.height = self.start.height + delta.y;
        }
        if self.edge.moves_right() {
            g.width = self.start.width + delta.x;
        }

        g.width = g.width.max(min.width);
        g.height = g.height.max(min.height);
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Size = Size::new(200.0, 150.0);

    fn start() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 300.0)
    }

    fn drag(edge: Edge, dx: f32, dy: f32) -> Rect {
        let d = ResizeDrag::begin(edge, Vec2::new(0.0, 0.0), start());
        d.geometry_for(Vec2::new(dx, dy), MIN)
    }

    #[test]
    fn test_resize_bottom_grows_height() {
        let g = drag(Edge::Bottom, 0.0, 50.0);
        assert!((g.y - 100.0).abs() < 0.001);
        assert!((g.height - 350.0).abs() < 0.001);
        assert!((g.width - 400.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_right_grows_width() {
        let g = drag(Edge::Right, 80.0, 0.0);
        assert!((g.x - 100.0).abs() < 0.001);
        assert!((g.width - 480.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_top_moves_origin() {
        let g = drag(Edge::Top, 0.0, -50.0);
        assert!((g.y - 50.0).abs() < 0.001);
        assert!((g.height - 350.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_top_clamps_at_anchored_bottom() {
        // Dragging far past the minimum: the bottom border must stay put.
        let g = drag(Edge::Top, 0.0, 500.0);
        assert!((g.height - MIN.height).abs() < 0.001);
        assert!((g.bottom() - start().bottom()).abs() < 0.001);
    }

    #[test]
    fn test_resize_left_clamps_at_anchored_right() {
        let g = drag(Edge::Left, 500.0, 0.0);
        assert!((g.width - MIN.width).abs() < 0.001);
        assert!((g.right() - start().right()).abs() < 0.001);
    }

    #[test]
    fn test_resize_corner_two_axes() {
        let g = drag(Edge::BottomRight, 60.0, 40.0);
        assert!((g.width - 460.0).abs() < 0.001);
        assert!((g.height - 340.0).abs() < 0.001);
        assert!((g.x - 100.0).abs() < 0.001);
        assert!((g.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_top_left_clamps_both_axes() {
        let g = drag(Edge::TopLeft, 1000.0, 1000.0);
        assert!((g.width - MIN.width).abs() < 0.001);
        assert!((g.height - MIN.height).abs() < 0.001);
        assert!((g.right() - start().right()).abs() < 0.001);
        assert!((g.bottom() - start().bottom()).abs() < 0.001);
    }

    #[test]
    fn test_resize_bottom_right_floor_clamp() {
        let g = drag(Edge::BottomRight, -1000.0, -1000.0);
        assert!((g.width - MIN.width).abs() < 0.001);
        assert!((g.height - MIN.height).abs() < 0.001);
        // Shrinking from the bottom-right leaves the origin anchored.
        assert!((g.x - 100.0).abs() < 0.001);
        assert!((g.y - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_layout_resizers_positions() {
        let mut resizers = Edge::ALL.map(Resizer::new);
        layout_resizers(&mut resizers, Size::new(400.0, 300.0), 14.0);

        let top = resizers.iter().find(|r| r.edge() == Edge::Top).unwrap();
        assert!((top.rect().x - 22.0).abs() < 0.001);
        assert!((top.rect().y - 14.0).abs() < 0.001);
        assert!((top.rect().width - 356.0).abs() < 0.001);
        assert!((top.rect().height - 4.0).abs() < 0.001);

        let bottom = resizers.iter().find(|r| r.edge() == Edge::Bottom).unwrap();
        assert!((bottom.rect().y - 282.0).abs() < 0.001);

        let br = resizers
            .iter()
            .find(|r| r.edge() == Edge::BottomRight)
            .unwrap();
        assert!((br.rect().x - 378.0).abs() < 0.001);
        assert!((br.rect().y - 278.0).abs() < 0.001);
        assert!((br.rect().width - 8.0).abs() < 0.001);
    }

    #[test]
    fn test_layout_resizers_no_inset() {
        let mut resizers = Edge::ALL.map(Resizer::new);
        layout_resizers(&mut resizers, Size::new(400.0, 300.0), 0.0);

        let tl = resizers.iter().find(|r| r.edge() == Edge::TopLeft).unwrap();
        assert!((tl.rect().x - 0.0).abs() < 0.001);
        assert!((tl.rect().y - 0.0).abs() < 0.001);

        let right = resizers.iter().find(|r| r.edge() == Edge::Right).unwrap();
        assert!((right.rect().x - 396.0).abs() < 0.001);
    }

    #[test]
    fn test_hidden_resizer_ignores_hits() {
        let mut resizers = Edge::ALL.map(Resizer::new);
        layout_resizers(&mut resizers, Size::new(400.0, 300.0), 0.0);
        let top = resizers.iter_mut().find(|r| r.edge() == Edge::Top).unwrap();
        let inside = Vec2::new(100.0, 1.0);

        assert!(top.contains(inside));
        top.set_visible(false);
        assert!(!top.contains(inside));
    }

    #[test]
    fn test_edge_cursors() {
        assert_eq!(Edge::Top.cursor(), "ns-resize");
        assert_eq!(Edge::Left.cursor(), "ew-resize");
        assert_eq!(Edge::TopRight.cursor(), "nesw-resize");
        assert_eq!(Edge::BottomRight.cursor(), "nwse-resize");
    }
}
