//! Window and pointer services for the capture demo.
//!
//! Wraps winit window creation, pointer confinement, cursor warping, and
//! raw-device reporting behind explicit error kinds.

use thiserror::Error;
use tracing::warn;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::{ActiveEventLoop, DeviceEvents};
use winit::window::{CursorGrabMode, Window};

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Window creation failed: {0}")]
    WindowCreation(String),
    #[error("Raw-device registration failed: {0}")]
    DeviceRegistration(String),
    #[error("Pointer grab failed: {0}")]
    CursorGrab(String),
    #[error("Cursor warp failed: {0}")]
    CursorWarp(String),
    #[error("Event loop error: {0}")]
    EventLoop(String),
}

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Window configuration.
///
/// Geometry is a fixed literal; there is no external configuration surface.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub position: (i32, i32),
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "mousegrab".to_string(),
            position: (400, 400),
            width: 300,
            height: 300,
        }
    }
}

/// Create the single top-level capture window.
pub fn create_window(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Window> {
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_position(PhysicalPosition::new(config.position.0, config.position.1))
        .with_inner_size(PhysicalSize::new(config.width, config.height))
        .with_resizable(false);

    event_loop
        .create_window(attrs)
        .map_err(|e| PlatformError::WindowCreation(e.to_string()))
}

/// Confine the cursor to the window bounds.
///
/// Backends that cannot confine get a locked grab instead; either way the
/// window holds the exclusive claim on cursor movement.
pub fn confine_cursor(window: &Window) -> Result<()> {
    if let Err(e) = window.set_cursor_grab(CursorGrabMode::Confined) {
        warn!("Confined grab unavailable, falling back to locked: {e}");
        window
            .set_cursor_grab(CursorGrabMode::Locked)
            .map_err(|e2| PlatformError::CursorGrab(e2.to_string()))?;
    }
    Ok(())
}

/// Hand the cursor back to the system.
pub fn release_cursor(window: &Window) -> Result<()> {
    window
        .set_cursor_grab(CursorGrabMode::None)
        .map_err(|e| PlatformError::CursorGrab(e.to_string()))
}

/// Warp the cursor to the center of the client area.
pub fn center_cursor(window: &Window) -> Result<()> {
    let size = window.inner_size();
    let center = PhysicalPosition::new(size.width / 2, size.height / 2);
    window
        .set_cursor_position(center)
        .map_err(|e| PlatformError::CursorWarp(e.to_string()))
}

/// Enable or disable delivery of raw pointer-device reports.
///
/// Reports are scoped to the focused window while enabled. Failures surface
/// as [`PlatformError::DeviceRegistration`].
pub fn set_raw_motion_reporting(event_loop: &ActiveEventLoop, enabled: bool) -> Result<()> {
    let filter = if enabled {
        DeviceEvents::WhenFocused
    } else {
        DeviceEvents::Never
    };
    event_loop.listen_device_events(filter);
    Ok(())
}
