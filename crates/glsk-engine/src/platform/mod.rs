//! Windowing layer.
//!
//! `Platform` is the collaborator that owns the windowing subsystem: it
//! creates and destroys window/surface pairs, makes their contexts current,
//! resolves the device function table, pumps events and presents frames.
//! The bootstrapper sequences these calls; implementations only perform
//! them.

mod error;
mod winit;

pub use error::PlatformError;
pub use self::winit::{WinitPlatform, WinitWindow};

use crate::device::Device;
use crate::diag::DiagnosticReporter;

/// Requested OpenGL core profile version.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ApiVersion {
    pub major: u8,
    pub minor: u8,
}

impl ApiVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::new(4, 6)
    }
}

/// Parameters for one window/surface with a core-profile context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceRequest {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub api_version: ApiVersion,
    /// Ask the driver for a debug-capable context.
    pub debug_context: bool,
}

pub trait Platform {
    type Window;
    type Device: Device;

    /// Installs the windowing layer's error callback. Called before `init`.
    fn set_error_reporter(&mut self, reporter: DiagnosticReporter);

    fn init(&mut self) -> Result<(), PlatformError>;

    fn create_window(&mut self, request: &SurfaceRequest) -> Result<Self::Window, PlatformError>;

    /// Binds the window's context as the calling thread's render target.
    fn make_current(&mut self, window: &mut Self::Window) -> Result<(), PlatformError>;

    /// Resolves the device function table for the current context.
    fn load_device(&mut self, window: &Self::Window) -> Result<Self::Device, PlatformError>;

    /// Processes pending events without blocking.
    fn poll_events(&mut self, window: &mut Self::Window);

    fn close_requested(&self, window: &Self::Window) -> bool;

    /// Current drawable size in physical pixels.
    fn framebuffer_size(&self, window: &Self::Window) -> (u32, u32);

    fn present(&mut self, window: &Self::Window) -> Result<(), PlatformError>;

    /// Releases the window and its surface/context. Called at most once per
    /// window, always before `terminate`.
    fn destroy_window(&mut self, window: &mut Self::Window);

    /// Shuts the subsystem down. Called at most once, after `init` succeeded.
    fn terminate(&mut self);
}
