//! Mapping from winit events onto the closed capture event set.

use winit::event::{DeviceEvent, ElementState, WindowEvent};

/// Events the capture session reacts to.
///
/// Everything the window system delivers maps onto exactly one of these;
/// notifications without capture semantics become `Ignored`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureEvent {
    /// Device-relative motion report, already filtered to nonzero mouse
    /// motion.
    RawMotion { dx: f64, dy: f64 },
    /// Absolute pointer position in window coordinates.
    PointerMoved { x: f64, y: f64 },
    /// Deactivating key press (any key).
    KeyPress,
    /// The window is going away.
    CloseRequested,
    /// No capture semantics.
    Ignored,
}

impl CaptureEvent {
    /// Map a window event.
    #[must_use]
    pub fn from_window_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Self::CloseRequested,
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                Self::KeyPress
            }
            WindowEvent::CursorMoved { position, .. } => Self::PointerMoved {
                x: position.x,
                y: position.y,
            },
            _ => Self::Ignored,
        }
    }

    /// Map a device event.
    ///
    /// Only mouse motion carries capture semantics, and all-zero reports
    /// are dropped here so the session never sees them.
    #[must_use]
    pub fn from_device_event(event: &DeviceEvent) -> Self {
        match event {
            DeviceEvent::MouseMotion { delta: (dx, dy) } if *dx != 0.0 || *dy != 0.0 => {
                Self::RawMotion { dx: *dx, dy: *dy }
            }
            _ => Self::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::event::MouseScrollDelta;

    use super::*;

    #[test]
    fn mouse_motion_maps_to_raw_motion() {
        let event = DeviceEvent::MouseMotion { delta: (7.0, -3.0) };
        assert_eq!(
            CaptureEvent::from_device_event(&event),
            CaptureEvent::RawMotion { dx: 7.0, dy: -3.0 }
        );
    }

    #[test]
    fn zero_motion_is_ignored() {
        let event = DeviceEvent::MouseMotion { delta: (0.0, 0.0) };
        assert_eq!(CaptureEvent::from_device_event(&event), CaptureEvent::Ignored);
    }

    #[test]
    fn non_motion_device_events_are_ignored() {
        let event = DeviceEvent::MouseWheel {
            delta: MouseScrollDelta::LineDelta(0.0, 1.0),
        };
        assert_eq!(CaptureEvent::from_device_event(&event), CaptureEvent::Ignored);
    }

    #[test]
    fn close_maps_to_close_requested() {
        assert_eq!(
            CaptureEvent::from_window_event(&WindowEvent::CloseRequested),
            CaptureEvent::CloseRequested
        );
    }

    #[test]
    fn unrelated_window_events_are_ignored() {
        assert_eq!(
            CaptureEvent::from_window_event(&WindowEvent::Focused(true)),
            CaptureEvent::Ignored
        );
    }
}
