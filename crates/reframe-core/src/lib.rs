//! Frameless window decoration engine
//!
//! This crate replaces the operating system's native window chrome with a
//! themeable one: custom title bar, drop shadow, drag-to-move, resize
//! handles on all eight edges, window buttons, and an optional tab strip
//! embedded in the title bar.
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`platform`]: One-time capability detection for per-OS quirks
//! - [`theme`]: The injected theme-provider contract
//! - [`host`]: Seams to the host toolkit (content window, app handle, ops)
//! - [`resizer`]: Edge/corner hit regions and resize-drag geometry
//! - [`frame`]: Painted window frame surface
//! - [`title`]: Elided, centered title text layout
//! - [`tabstrip`]: Title-bar tab strip filter and masking
//! - [`window`]: The decorated-window orchestrator and state machine
//! - [`shell`]: Process-wide registry, focus broadcast, wrap factory
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reframe_core::{PlatformTraits, Rect, Shell, WrapConfig};
//!
//! let mut shell = Shell::new(theme, PlatformTraits::detect());
//! shell.add_screen(Rect::new(0.0, 0.0, 1920.0, 1080.0));
//!
//! let id = shell.wrap(Box::new(my_window), WrapConfig::default());
//! shell.handle_show(id);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: all decoration state is host-agnostic and testable
//!    without a toolkit
//! 2. **Platform quirks as data**: capability flags are computed once and
//!    consumed as plain fields
//! 3. **Explicit injection**: the theme is passed in, never read from a
//!    global

pub mod frame;
pub mod host;
pub mod input;
pub mod math;
pub mod platform;
pub mod resizer;
pub mod tabstrip;
pub mod theme;
pub mod title;
pub mod window;

mod shell;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use frame::{FramePaint, RoundedRect, WindowFrame};
pub use host::{
    scaled_icon_size, AppHandle, CloseResponse, ContentWindow, HostOp, OsWindowState, TextMetrics,
    WindowAttributes,
};
pub use input::{DragState, InputOutcome};
pub use math::{Rect, Size, Vec2};
pub use platform::{ButtonPosition, Platform, PlatformTraits};
pub use resizer::{Edge, ResizeDrag, Resizer, CORNER_SIZE_PX, EDGE_THICKNESS_PX};
pub use shell::Shell;
pub use tabstrip::{strip_mask, TabFilter, TabStrip, TAB_MASK_ROUND_PX};
pub use theme::{Color, PaletteRole, Theme, WindowMetrics};
pub use title::{TitleLabel, TitleLayout};
pub use window::{
    ButtonControl, ButtonHints, ButtonSet, ClipMask, CloseOutcome, DecoratedWindow, Key,
    ParentBounds, WindowButton, WindowId, WindowState, WrapConfig,
};
