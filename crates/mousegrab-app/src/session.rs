//! Capture session: owned state plus event dispatch.

use mousegrab_capture::{MotionCapture, MotionSample};

use crate::config::CaptureConfig;
use crate::event::CaptureEvent;

/// What the runner must do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Print the sample and, per profile, re-warp the cursor to the window
    /// center.
    Report(MotionSample),
    /// Disable raw-device reporting, release the confinement, and print the
    /// one-time disabled notice.
    Release,
    /// Tear down the window and leave the event loop.
    Exit,
}

/// Event dispatch around an owned [`MotionCapture`].
///
/// Maps every incoming event to at most one action for the caller to carry
/// out against the window.
#[derive(Debug)]
pub struct CaptureSession {
    capture: MotionCapture,
    /// Whether absolute pointer positions also produce samples.
    absolute_fallback: bool,
}

impl CaptureSession {
    /// Create a session for the given profile, starting in the capturing
    /// state.
    #[must_use]
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            capture: MotionCapture::new(config.convention),
            absolute_fallback: config.absolute_fallback,
        }
    }

    /// Returns `true` while motion samples are still produced.
    #[must_use]
    pub const fn is_capturing(&self) -> bool {
        self.capture.state().is_capturing()
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: CaptureEvent) -> Option<SessionAction> {
        match event {
            CaptureEvent::RawMotion { dx, dy } => {
                self.capture.on_raw_motion(dx, dy).map(SessionAction::Report)
            }
            CaptureEvent::PointerMoved { x, y } if self.absolute_fallback => {
                self.capture.on_absolute_motion(x, y).map(SessionAction::Report)
            }
            CaptureEvent::PointerMoved { .. } => None,
            CaptureEvent::KeyPress => self.capture.on_key_press().map(|_| SessionAction::Release),
            CaptureEvent::CloseRequested => Some(SessionAction::Exit),
            CaptureEvent::Ignored => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use mousegrab_capture::MotionSample;

    use super::*;

    #[test]
    fn capture_until_key_press_then_silence() {
        let mut session = CaptureSession::new(&CaptureConfig::windows());
        assert!(session.is_capturing());

        // Motion while capturing is reported
        assert_eq!(
            session.handle(CaptureEvent::RawMotion { dx: 3.0, dy: 4.0 }),
            Some(SessionAction::Report(MotionSample::new(3, 4)))
        );

        // First key press releases
        assert_eq!(
            session.handle(CaptureEvent::KeyPress),
            Some(SessionAction::Release)
        );
        assert!(!session.is_capturing());

        // Everything after the release is discarded
        assert_eq!(session.handle(CaptureEvent::RawMotion { dx: 1.0, dy: 1.0 }), None);
        assert_eq!(session.handle(CaptureEvent::KeyPress), None);
    }

    #[test]
    fn pointer_moves_only_count_on_the_fallback_path() {
        let mut session = CaptureSession::new(&CaptureConfig::windows());
        assert_eq!(
            session.handle(CaptureEvent::PointerMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            session.handle(CaptureEvent::PointerMoved { x: 15.0, y: 12.0 }),
            None
        );

        let mut session = CaptureSession::new(&CaptureConfig::x11());
        assert_eq!(
            session.handle(CaptureEvent::PointerMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            session.handle(CaptureEvent::PointerMoved { x: 15.0, y: 12.0 }),
            Some(SessionAction::Report(MotionSample::new(-5, -2)))
        );
    }

    #[test]
    fn x11_profile_inverts_raw_deltas() {
        let mut session = CaptureSession::new(&CaptureConfig::x11());
        assert_eq!(
            session.handle(CaptureEvent::RawMotion { dx: 5.0, dy: 2.0 }),
            Some(SessionAction::Report(MotionSample::new(-5, -2)))
        );
    }

    #[test]
    fn close_exits_on_both_profiles() {
        for config in [CaptureConfig::windows(), CaptureConfig::x11()] {
            let mut session = CaptureSession::new(&config);
            assert_eq!(
                session.handle(CaptureEvent::CloseRequested),
                Some(SessionAction::Exit)
            );
        }
    }

    #[test]
    fn ignored_events_do_nothing() {
        let mut session = CaptureSession::new(&CaptureConfig::x11());
        assert_eq!(session.handle(CaptureEvent::Ignored), None);
        assert!(session.is_capturing());
    }
}
