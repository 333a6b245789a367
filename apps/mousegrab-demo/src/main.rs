//! Raw pointer-motion capture demo.
//!
//! Opens a fixed-size window, confines the pointer to it, and prints one
//! line per raw mouse-motion delta. Pressing any key hands the pointer back
//! and silences the output for the rest of the run; closing the window
//! exits.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p mousegrab-demo
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace)

use mousegrab_app::{run, CaptureConfig};

const WINDOW_TITLE: &str = "Sample Window";

fn main() -> anyhow::Result<()> {
    run(CaptureConfig::native().with_title(WINDOW_TITLE))
}
