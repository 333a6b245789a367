//! Event loop runner.

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use mousegrab_platform::{
    center_cursor, confine_cursor, create_window, release_cursor, set_raw_motion_reporting,
    PlatformError,
};

use crate::config::CaptureConfig;
use crate::event::CaptureEvent;
use crate::session::{CaptureSession, SessionAction};

/// Run the capture demo with the given configuration.
///
/// This function initializes logging, creates the window, confines the
/// pointer, and runs the event loop until the window is closed.
pub fn run(config: CaptureConfig) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("{} starting...", config.title);

    let event_loop =
        EventLoop::new().map_err(|e| PlatformError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut runner = CaptureRunner {
        config,
        state: None,
    };
    event_loop.run_app(&mut runner)?;

    Ok(())
}

/// Internal runner implementing winit's ApplicationHandler.
struct CaptureRunner {
    config: CaptureConfig,
    state: Option<RunnerState>,
}

/// Live window plus session state.
struct RunnerState {
    window: Window,
    session: CaptureSession,
}

impl ApplicationHandler for CaptureRunner {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.create_state(event_loop) {
            Ok(state) => {
                self.state = Some(state);
                info!("Pointer confined; press any key to release");
            }
            Err(e) => {
                error!("Failed to start capture: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let mapped = CaptureEvent::from_window_event(&event);
        self.dispatch(event_loop, mapped);
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let mapped = CaptureEvent::from_device_event(&event);
        self.dispatch(event_loop, mapped);
    }
}

impl CaptureRunner {
    fn create_state(&self, event_loop: &ActiveEventLoop) -> mousegrab_platform::Result<RunnerState> {
        let window = create_window(event_loop, &self.config.window_config())?;
        confine_cursor(&window)?;
        center_cursor(&window)?;
        set_raw_motion_reporting(event_loop, true)?;

        Ok(RunnerState {
            window,
            session: CaptureSession::new(&self.config),
        })
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: CaptureEvent) {
        let Some(state) = &mut self.state else {
            return;
        };
        let Some(action) = state.session.handle(event) else {
            return;
        };

        match action {
            SessionAction::Report(sample) => {
                println!("{} {} {}", self.config.sample_tag, sample.dx, sample.dy);
                if self.config.recenter_after_sample {
                    if let Err(e) = center_cursor(&state.window) {
                        warn!("Failed to re-center cursor: {e}");
                    }
                }
            }
            SessionAction::Release => {
                if let Err(e) = set_raw_motion_reporting(event_loop, false) {
                    warn!("Failed to disable raw-device reporting: {e}");
                }
                if let Err(e) = release_cursor(&state.window) {
                    warn!("Failed to release pointer: {e}");
                }
                println!("{}", self.config.disabled_notice);
                info!("Capture released");
            }
            SessionAction::Exit => {
                info!("Close requested");
                self.state = None;
                event_loop.exit();
            }
        }
    }
}
