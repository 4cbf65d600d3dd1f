//! WASM exports for the decoration engine
//!
//! Provides a wasm-bindgen controller around [`Shell`], so a browser host
//! can drive decoration from JS and read layout state back as JSON.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use crate::host::{AppHandle, CloseResponse, ContentWindow};
use crate::math::{Rect, Size, Vec2};
use crate::platform::{Platform, PlatformTraits};
use crate::shell::Shell;
use crate::theme::{Color, Theme, WindowMetrics};
use crate::window::{CloseOutcome, WindowId, WrapConfig};

/// Metrics-only theme for browser hosts
///
/// A browser host styles the chrome with CSS, so only the numeric metrics
/// matter; the stylesheet accessors return empty text.
struct MetricsTheme {
    metrics: WindowMetrics,
}

impl MetricsTheme {
    fn new() -> Self {
        Self {
            metrics: WindowMetrics {
                titlebar_height: 28.0,
                titlebar_color: Color::rgb(0x36, 0x36, 0x36),
                titlebar_nofocus_color: Color::rgb(0x28, 0x28, 0x28),
                titlebar_text_color: Color::rgb(0xea, 0xea, 0xea),
                titlebar_top_margin: 6.0,
                title_text_right_margin: 20.0,
                title_label_min_width: 64.0,
                button_diameter: 12.0,
                button_spacing: 20.0,
                button_min_x_margin: 8.0,
                tab_css_top_border: 8.0,
                tab_css_bottom_border: 8.0,
                shadow_radius: 14.0,
                shadow_color: Color::rgb(0x00, 0x00, 0x00),
                shadow_opacity: 200,
                corner_radius: 5.0,
                background_color: Color::rgb(0x39, 0x39, 0x39),
                btn_close_colors: [
                    Color::rgb(0xeb, 0x6a, 0x5e),
                    Color::rgb(0xff, 0x6d, 0x60),
                    Color::rgb(0xda, 0x42, 0x34),
                ],
                btn_minimize_colors: [
                    Color::rgb(0xf3, 0xbe, 0x4f),
                    Color::rgb(0xff, 0xd8, 0x3c),
                    Color::rgb(0xc2, 0x99, 0x3f),
                ],
                btn_maximize_colors: [
                    Color::rgb(0x64, 0xc4, 0x55),
                    Color::rgb(0x83, 0xd0, 0x77),
                    Color::rgb(0x46, 0x89, 0x3b),
                ],
            },
        }
    }
}

impl Theme for MetricsTheme {
    fn metrics(&self) -> &WindowMetrics {
        &self.metrics
    }
    fn window_stylesheet(&self) -> String {
        String::new()
    }
    fn title_tabstrip_stylesheet(&self) -> String {
        String::new()
    }
    fn apply(&self, _app: &mut dyn AppHandle) {}
}

/// Minimal content-window stand-in for JS hosts
///
/// Browser hosts own the real surface; this records the contract state the
/// engine needs (title, geometry, minimum size, close acceptance).
struct JsContentWindow {
    title: String,
    geometry: Rect,
    min_size: Size,
    hidden: bool,
    wrapper: Option<WindowId>,
}

impl ContentWindow for JsContentWindow {
    fn title(&self) -> &str {
        &self.title
    }
    fn min_size(&self) -> Size {
        self.min_size
    }
    fn geometry(&self) -> Rect {
        self.geometry
    }
    fn request_close(&mut self) -> CloseResponse {
        self.hidden = true;
        CloseResponse::Accepted
    }
    fn is_hidden(&self) -> bool {
        self.hidden
    }
    fn attach_wrapper(&mut self, id: WindowId) {
        self.wrapper = Some(id);
    }
    fn wrapper(&self) -> Option<WindowId> {
        self.wrapper
    }
}

/// Shell controller for WASM - wraps [`Shell`] with a JS-friendly API
#[wasm_bindgen]
pub struct ShellController {
    shell: Shell,
}

#[wasm_bindgen]
impl ShellController {
    /// Create a controller with the default theme for a platform name
    #[wasm_bindgen(constructor)]
    pub fn new(platform: &str) -> Self {
        let platform = match platform {
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            _ => Platform::Linux,
        };
        let theme: Arc<dyn Theme> = Arc::new(MetricsTheme::new());
        Self {
            shell: Shell::new(theme, PlatformTraits::for_platform(platform)),
        }
    }

    /// Register a screen
    #[wasm_bindgen]
    pub fn add_screen(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.shell.add_screen(Rect::new(x, y, width, height));
    }

    /// Wrap a window described by scalar geometry
    #[wasm_bindgen]
    pub fn wrap(&mut self, title: &str, x: f32, y: f32, w: f32, h: f32) -> u64 {
        let content = JsContentWindow {
            title: title.to_string(),
            geometry: Rect::new(x, y, w, h),
            min_size: Size::new(200.0, 150.0),
            hidden: false,
            wrapper: None,
        };
        let id = self.shell.wrap(Box::new(content), WrapConfig::default());
        self.shell.handle_show(id);
        id
    }

    /// Close a window; returns false if the content refused
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.shell.close_window(id) == CloseOutcome::Closed
    }

    /// Pointer press
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, id: u64, local_x: f32, local_y: f32, gx: f32, gy: f32) -> bool {
        self.shell
            .handle_pointer_down(id, Vec2::new(local_x, local_y), Vec2::new(gx, gy))
            .is_handled()
    }

    /// Pointer move
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, id: u64, gx: f32, gy: f32) -> bool {
        self.shell
            .handle_pointer_move(id, Vec2::new(gx, gy))
            .is_handled()
    }

    /// Pointer release; returns the host operations a button click produced
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, id: u64, local_x: f32, local_y: f32) -> String {
        let ops = self
            .shell
            .handle_pointer_up(id, Vec2::new(local_x, local_y));
        serde_json::to_string(&ops).unwrap_or_else(|_| "[]".to_string())
    }

    /// Application focus change (pass 0 for "no window focused")
    #[wasm_bindgen]
    pub fn focus_changed(&mut self, id: u64) {
        self.shell.focus_changed((id != 0).then_some(id));
    }

    /// Layout snapshot of one window as JSON
    #[wasm_bindgen]
    pub fn get_layout_json(&self, id: u64) -> String {
        let Some(window) = self.shell.get(id) else {
            return "{}".to_string();
        };
        serde_json::to_string(&serde_json::json!({
            "geometry": window.geometry(),
            "state": window.state(),
            "shadowInset": window.shadow_inset(),
            "resizers": window.resizers(),
            "paint": window.frame().paint(),
            "mask": window.mask(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
