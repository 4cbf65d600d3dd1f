//! Built-in dark theme for the Reframe decoration engine
//!
//! Supplies the three things the engine's theme contract asks for: metric
//! constants, substituted stylesheet text for the window chrome, and an
//! application palette. Inject it at shell construction:
//!
//! ```rust
//! use std::sync::Arc;
//! use reframe_core::{PlatformTraits, Shell};
//! use reframe_theme::ModernDark;
//!
//! let shell = Shell::new(Arc::new(ModernDark), PlatformTraits::detect());
//! ```

pub mod constants;
pub mod palette;
pub mod stylesheets;

use reframe_core::{AppHandle, Theme, WindowMetrics};

/// The built-in dark style
#[derive(Clone, Copy, Debug, Default)]
pub struct ModernDark;

impl Theme for ModernDark {
    fn metrics(&self) -> &WindowMetrics {
        &constants::METRICS
    }

    fn window_stylesheet(&self) -> String {
        stylesheets::window_stylesheet(&constants::METRICS)
    }

    fn title_tabstrip_stylesheet(&self) -> String {
        stylesheets::TITLE_TABSTRIP_TEMPLATE.to_string()
    }

    fn apply(&self, app: &mut dyn AppHandle) {
        palette::apply(app);
        app.set_stylesheet(&self.window_stylesheet());
    }
}
