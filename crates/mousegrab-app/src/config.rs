//! Fixed capture configuration and the per-platform profiles.

use mousegrab_capture::DeltaConvention;
use mousegrab_platform::WindowConfig;

/// Capture demo configuration.
///
/// Two profiles exist, one per raw-input path. They differ in window size,
/// console tags, delta sign convention, and how the pointer is kept
/// boundable: the Win32 profile relies on confinement alone, while the X11
/// profile also derives deltas from absolute positions and re-warps the
/// cursor to the window center after every sample.
#[derive(Debug, Clone)]
pub struct CaptureConfig {
    /// Window title.
    pub title: String,
    /// Top-left window position on screen.
    pub position: (i32, i32),
    /// Client-area width.
    pub width: u32,
    /// Client-area height.
    pub height: u32,
    /// Tag prefixing every printed sample.
    pub sample_tag: &'static str,
    /// Notice printed once when the capture is released.
    pub disabled_notice: &'static str,
    /// Sign convention for device reports.
    pub convention: DeltaConvention,
    /// Also derive deltas from absolute pointer positions.
    pub absolute_fallback: bool,
    /// Warp the cursor back to the window center after each sample.
    pub recenter_after_sample: bool,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self::native()
    }
}

impl CaptureConfig {
    /// Profile matching the Win32 raw-input program.
    #[must_use]
    pub fn windows() -> Self {
        Self {
            title: "mousegrab".to_string(),
            position: (400, 400),
            width: 300,
            height: 300,
            sample_tag: "raw input:",
            disabled_notice: "rawinput disabled",
            convention: DeltaConvention::Device,
            absolute_fallback: false,
            recenter_after_sample: false,
        }
    }

    /// Profile matching the X11 XInput2 program.
    #[must_use]
    pub fn x11() -> Self {
        Self {
            title: "mousegrab".to_string(),
            position: (400, 400),
            width: 200,
            height: 200,
            sample_tag: "rawinput",
            disabled_notice: "Raw input disabled",
            convention: DeltaConvention::WarpReferenced,
            absolute_fallback: true,
            recenter_after_sample: true,
        }
    }

    /// Profile of the platform this crate is compiled for.
    #[must_use]
    pub fn native() -> Self {
        if cfg!(target_os = "windows") {
            Self::windows()
        } else {
            Self::x11()
        }
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Window configuration for the platform layer.
    #[must_use]
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            title: self.title.clone(),
            position: self.position,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_keep_their_asymmetries() {
        let win = CaptureConfig::windows();
        assert_eq!((win.width, win.height), (300, 300));
        assert_eq!(win.convention, DeltaConvention::Device);
        assert!(!win.absolute_fallback);
        assert!(!win.recenter_after_sample);

        let x11 = CaptureConfig::x11();
        assert_eq!((x11.width, x11.height), (200, 200));
        assert_eq!(x11.convention, DeltaConvention::WarpReferenced);
        assert!(x11.absolute_fallback);
        assert!(x11.recenter_after_sample);

        // Both programs placed the window at the same spot
        assert_eq!(win.position, (400, 400));
        assert_eq!(x11.position, (400, 400));
    }

    #[test]
    fn title_override() {
        let config = CaptureConfig::windows().with_title("Sample Window");
        assert_eq!(config.window_config().title, "Sample Window");
    }
}
