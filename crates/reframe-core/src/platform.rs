//! Platform capability detection
//!
//! Window-manager behavior differs per operating system. All of those
//! differences are captured once in [`PlatformTraits`] and consumed as plain
//! data, so the state machine itself stays free of target checks.

use serde::{Deserialize, Serialize};

/// Target operating system family
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Detect the platform this process is running on
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }
}

/// Side of the title bar the window buttons live on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    /// Close / minimize / maximize on the left (macOS convention)
    Left,
    /// Minimize / maximize / close on the right (Windows and most Linux)
    Right,
}

/// Window-manager capabilities and required workarounds
///
/// Computed once at startup and injected everywhere the engine needs a
/// platform-dependent decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformTraits {
    /// The compositor draws a drop shadow behind every window; the engine
    /// must not add its own, and translucency is unnecessary.
    pub compositor_shadow: bool,
    /// Frameless windows cannot minimize; the native frame has to be
    /// reinstated around the minimize request.
    pub needs_minimize_frame_toggle: bool,
    /// Opaque paint must be forced during resize to avoid flicker.
    pub needs_opaque_paint_on_resize: bool,
    /// The shadow effect breaks on restore unless the window is nudged by
    /// one pixel and resized back.
    pub needs_shadow_redraw_fix: bool,
    /// The taskbar only picks up the window icon after an explicit
    /// application-identity registration.
    pub needs_taskbar_identity: bool,
    /// Conventional button side for this platform.
    pub button_position: ButtonPosition,
}

impl PlatformTraits {
    /// Capability set for a given platform
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::MacOs => Self {
                compositor_shadow: true,
                needs_minimize_frame_toggle: true,
                needs_opaque_paint_on_resize: false,
                needs_shadow_redraw_fix: false,
                needs_taskbar_identity: false,
                button_position: ButtonPosition::Left,
            },
            Platform::Windows => Self {
                compositor_shadow: false,
                needs_minimize_frame_toggle: false,
                needs_opaque_paint_on_resize: true,
                needs_shadow_redraw_fix: true,
                needs_taskbar_identity: true,
                button_position: ButtonPosition::Right,
            },
            Platform::Linux => Self {
                compositor_shadow: false,
                needs_minimize_frame_toggle: false,
                needs_opaque_paint_on_resize: false,
                needs_shadow_redraw_fix: false,
                needs_taskbar_identity: false,
                button_position: ButtonPosition::Right,
            },
        }
    }

    /// Capability set for the platform this process is running on
    pub fn detect() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macos_traits() {
        let t = PlatformTraits::for_platform(Platform::MacOs);
        assert!(t.compositor_shadow);
        assert!(t.needs_minimize_frame_toggle);
        assert!(!t.needs_shadow_redraw_fix);
        assert_eq!(t.button_position, ButtonPosition::Left);
    }

    #[test]
    fn test_windows_traits() {
        let t = PlatformTraits::for_platform(Platform::Windows);
        assert!(!t.compositor_shadow);
        assert!(t.needs_opaque_paint_on_resize);
        assert!(t.needs_shadow_redraw_fix);
        assert!(t.needs_taskbar_identity);
        assert_eq!(t.button_position, ButtonPosition::Right);
    }

    #[test]
    fn test_linux_traits() {
        let t = PlatformTraits::for_platform(Platform::Linux);
        assert!(!t.compositor_shadow);
        assert!(!t.needs_minimize_frame_toggle);
        assert_eq!(t.button_position, ButtonPosition::Right);
    }
}
