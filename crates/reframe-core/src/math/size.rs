//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Per-axis maximum of two sizes
    #[inline]
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Grow both dimensions by the given amounts
    #[inline]
    pub fn grown(self, dw: f32, dh: f32) -> Self {
        Self::new(self.width + dw, self.height + dh)
    }
}
