//! Core geometry types for the decoration engine
//!
//! These types provide the 2D math used for window geometry,
//! hit-region placement, and title-bar layout.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
