//! Motion samples and the per-platform delta sign convention.

/// A single relative pointer-motion report.
///
/// Exists for the duration of one event-handling step; the caller logs it
/// and throws it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionSample {
    pub dx: i32,
    pub dy: i32,
}

impl MotionSample {
    /// Create a sample from integer deltas.
    #[inline]
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Create a sample from float deltas, truncating toward zero.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(dx: f64, dy: f64) -> Self {
        Self::new(dx as i32, dy as i32)
    }
}

/// Sign rule applied to device-reported deltas.
///
/// The two windowing paths disagree on sign: Win32 raw input reports the
/// device delta directly, while the X11 path reports motion relative to the
/// warp origin and so comes out negated. The discrepancy is part of the
/// observable contract and is kept per platform rather than unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaConvention {
    /// Deltas pass through unchanged (Win32 raw input).
    Device,
    /// Deltas are negated relative to the device motion (X11 raw motion).
    WarpReferenced,
}

impl DeltaConvention {
    /// Apply the sign rule to a raw device delta.
    #[must_use]
    pub fn apply(self, dx: f64, dy: f64) -> MotionSample {
        match self {
            Self::Device => MotionSample::from_f64(dx, dy),
            Self::WarpReferenced => MotionSample::from_f64(-dx, -dy),
        }
    }

    /// The convention of the platform this crate is compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_os = "windows") {
            Self::Device
        } else {
            Self::WarpReferenced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_convention_passes_through() {
        let sample = DeltaConvention::Device.apply(7.0, -3.0);
        assert_eq!(sample, MotionSample::new(7, -3));
    }

    #[test]
    fn warp_referenced_convention_negates() {
        let sample = DeltaConvention::WarpReferenced.apply(7.0, -3.0);
        assert_eq!(sample, MotionSample::new(-7, 3));
    }

    #[test]
    fn fractional_deltas_truncate_toward_zero() {
        assert_eq!(MotionSample::from_f64(2.9, -2.9), MotionSample::new(2, -2));
        assert_eq!(MotionSample::from_f64(-0.4, 0.4), MotionSample::new(0, 0));
    }
}
