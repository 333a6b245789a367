//! Raw-motion gate and delta extraction.

use glam::Vec2;
use tracing::trace;

use crate::delta::{DeltaConvention, MotionSample};
use crate::state::CaptureState;

/// Instruction to tear down capture after the deactivating key press.
///
/// Returned at most once per run. The caller must disable raw-device
/// reporting, release the pointer confinement, and emit the one-time
/// disabled notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ReleaseRequest;

/// Converts low-level motion notifications into relative deltas, subject to
/// a one-way enable gate.
///
/// Two motion paths feed it: [`on_raw_motion`](Self::on_raw_motion) for
/// device-relative reports, and
/// [`on_absolute_motion`](Self::on_absolute_motion) for successive absolute
/// pointer positions (the path the X11 grab delivers). Both fall silent
/// permanently once [`on_key_press`](Self::on_key_press) releases the
/// capture.
#[derive(Debug)]
pub struct MotionCapture {
    /// Enable gate, owned here rather than by the event loop.
    state: CaptureState,
    /// Sign rule for device-relative reports.
    convention: DeltaConvention,
    /// Reference position for the absolute-motion path.
    last_position: Option<Vec2>,
}

impl Default for MotionCapture {
    fn default() -> Self {
        Self::new(DeltaConvention::native())
    }
}

impl MotionCapture {
    /// Create a capture in the `Capturing` state.
    #[must_use]
    pub const fn new(convention: DeltaConvention) -> Self {
        Self {
            state: CaptureState::Capturing,
            convention,
            last_position: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Sign convention applied to device reports.
    #[must_use]
    pub const fn convention(&self) -> DeltaConvention {
        self.convention
    }

    /// Process a device-relative motion report.
    ///
    /// Returns the sample to log, or `None` once the capture has been
    /// released. Zero-motion and non-pointer reports are filtered out
    /// before this call.
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) -> Option<MotionSample> {
        if self.state.is_released() {
            return None;
        }
        Some(self.convention.apply(dx, dy))
    }

    /// Process an absolute pointer position.
    ///
    /// The delta is the previous position minus the current one, matching
    /// the warp-referenced sign of the raw path. The first position after
    /// start only seeds the reference and produces nothing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn on_absolute_motion(&mut self, x: f64, y: f64) -> Option<MotionSample> {
        if self.state.is_released() {
            return None;
        }
        let current = Vec2::new(x as f32, y as f32);
        let sample = self.last_position.map(|previous| {
            let delta = previous - current;
            MotionSample::new(delta.x as i32, delta.y as i32)
        });
        self.last_position = Some(current);
        sample
    }

    /// Process the deactivating key press.
    ///
    /// The first press while capturing releases the capture and returns the
    /// teardown request; any later press is ignored.
    pub fn on_key_press(&mut self) -> Option<ReleaseRequest> {
        if !self.state.release() {
            return None;
        }
        trace!("capture released by key press");
        Some(ReleaseRequest)
    }
}
