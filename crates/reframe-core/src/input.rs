//! Pointer drag state for move and resize gestures

use crate::math::Vec2;
use crate::resizer::ResizeDrag;

/// Transient state of an active drag gesture
///
/// Created on pointer-down inside a draggable region, dropped on pointer-up.
#[derive(Clone, Copy, Debug)]
pub enum DragState {
    /// Moving the window by its title bar
    MoveWindow {
        /// Pointer position at press time (global coordinates)
        start_mouse: Vec2,
        /// Window position at press time
        start_window: Vec2,
    },
    /// Resizing the window from an edge or corner handle
    ResizeWindow(ResizeDrag),
}

impl DragState {
    /// Check if this is a window move gesture
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    /// Check if this is a resize gesture
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWindow(_))
    }
}

/// Result of feeding an input event to the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// The event was consumed by the decoration layer
    Handled,
    /// The event is not for the decoration; forward it to the content
    Ignored,
}

impl InputOutcome {
    /// Check if the decoration consumed the event
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputOutcome::Handled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Rect;
    use crate::resizer::Edge;

    #[test]
    fn test_drag_state_kind() {
        let mv = DragState::MoveWindow {
            start_mouse: Vec2::new(10.0, 10.0),
            start_window: Vec2::ZERO,
        };
        assert!(mv.is_move());
        assert!(!mv.is_resize());

        let rs = DragState::ResizeWindow(ResizeDrag::begin(
            Edge::Bottom,
            Vec2::ZERO,
            Rect::new(0.0, 0.0, 400.0, 300.0),
        ));
        assert!(rs.is_resize());
    }
}
