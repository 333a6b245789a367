//! Raw pointer-motion capture core.
//!
//! This crate holds the platform-independent part of the capture demo: a
//! one-way enable gate, the per-platform delta sign convention, and the
//! conversion of motion notifications into loggable samples. It performs no
//! OS calls; the windowing layer feeds it and acts on what it returns.
//!
//! # Core Types
//!
//! - [`MotionCapture`]: gate and delta extraction for both motion paths
//! - [`CaptureState`]: the `Capturing` -> `Released` lifecycle
//! - [`DeltaConvention`]: device pass-through vs. warp-referenced signs
//! - [`MotionSample`]: one relative delta, ready to print
//!
//! # Usage
//!
//! ```
//! use mousegrab_capture::{DeltaConvention, MotionCapture};
//!
//! let mut capture = MotionCapture::new(DeltaConvention::Device);
//!
//! // Device reports flow through while capturing...
//! let sample = capture.on_raw_motion(7.0, -3.0).unwrap();
//! assert_eq!((sample.dx, sample.dy), (7, -3));
//!
//! // ...until the first key press releases the pointer for good.
//! assert!(capture.on_key_press().is_some());
//! assert!(capture.on_raw_motion(1.0, 1.0).is_none());
//! ```

mod capture;
mod delta;
mod state;

pub use capture::{MotionCapture, ReleaseRequest};
pub use delta::{DeltaConvention, MotionSample};
pub use state::CaptureState;
