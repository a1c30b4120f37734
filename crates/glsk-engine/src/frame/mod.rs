//! Per-frame loop.
//!
//! Polls events, resizes the viewport to the framebuffer, clears and
//! presents until the window asks to close.

mod driver;

pub use driver::{FrameLoop, FrameStats, LoopState};
