//! Session wiring and event loop for the capture demo.
//!
//! This crate connects the capture core to the windowing layer:
//! - [`CaptureConfig`]: the fixed per-platform profile (geometry, console
//!   tags, delta convention, fallback behavior)
//! - [`CaptureEvent`]: the closed set of events the session reacts to,
//!   with total mappings from winit events
//! - [`CaptureSession`]: owned capture state plus dispatch
//! - [`run`]: logging setup, window creation, and the event loop

mod config;
mod event;
mod runner;
mod session;

pub use config::CaptureConfig;
pub use event::CaptureEvent;
pub use runner::run;
pub use session::{CaptureSession, SessionAction};
