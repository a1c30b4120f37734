use crate::device::{Device, Viewport};
use crate::diag::{DiagnosticMessage, DiagnosticReporter};
use crate::platform::{Platform, PlatformError};

use super::{BootstrapError, ContextConfig};

/// Driver diagnostics state of a live context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DiagnosticMode {
    /// Not requested; no sink registered.
    Disabled,
    /// Debug context granted; sink registered with synchronous delivery.
    Enabled,
    /// Requested but the driver did not grant a debug context.
    Degraded,
}

/// Initialized windowing subsystem. Terminates it on drop.
struct Subsystem<P: Platform> {
    platform: P,
}

impl<P: Platform> Subsystem<P> {
    fn init(mut platform: P) -> Result<Self, PlatformError> {
        platform.init()?;
        Ok(Self { platform })
    }
}

impl<P: Platform> Drop for Subsystem<P> {
    fn drop(&mut self) {
        self.platform.terminate();
    }
}

/// Window/surface pair plus the subsystem that created it.
///
/// Dropping destroys the window first, then terminates the subsystem.
pub struct Surface<P: Platform> {
    window: P::Window,
    subsystem: Subsystem<P>,
}

impl<P: Platform> Surface<P> {
    pub fn poll_events(&mut self) {
        self.subsystem.platform.poll_events(&mut self.window);
    }

    pub fn close_requested(&self) -> bool {
        self.subsystem.platform.close_requested(&self.window)
    }

    pub fn framebuffer_size(&self) -> (u32, u32) {
        self.subsystem.platform.framebuffer_size(&self.window)
    }

    /// Full-surface viewport for the current framebuffer size.
    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.framebuffer_size();
        Viewport::full(width, height)
    }

    pub fn present(&mut self) -> Result<(), PlatformError> {
        self.subsystem.platform.present(&self.window)
    }
}

impl<P: Platform> Drop for Surface<P> {
    fn drop(&mut self) {
        self.subsystem.platform.destroy_window(&mut self.window);
    }
}

/// A live rendering context: surface, loaded device and diagnostics state.
///
/// Field order is drop order: the device goes before the surface it was
/// loaded for. Device resources borrow the device from here, so they are
/// released before the context can be dropped.
pub struct Context<P: Platform> {
    device: P::Device,
    diagnostics: DiagnosticMode,
    surface: Surface<P>,
}

impl<P: Platform> Context<P> {
    pub fn diagnostics(&self) -> DiagnosticMode {
        self.diagnostics
    }

    /// Borrows the device and the surface independently, so resources can
    /// hold the device while the frame loop drives the surface.
    pub fn split(&mut self) -> (&P::Device, &mut Surface<P>) {
        (&self.device, &mut self.surface)
    }
}

/// Runs the bootstrap sequence and returns a live context.
///
/// Steps, each a prerequisite for the next: subsystem init, window/surface
/// creation, make-current, function table load, then optional diagnostics
/// negotiation. On failure everything acquired so far is released before
/// the error is returned, and the failure is reported on the channel.
pub fn acquire_context<P: Platform>(
    mut platform: P,
    config: &ContextConfig,
    reporter: &DiagnosticReporter,
) -> Result<Context<P>, BootstrapError> {
    platform.set_error_reporter(reporter.clone());

    let mut subsystem = Subsystem::init(platform)
        .map_err(|e| failed(reporter, BootstrapError::SubsystemInit(e)))?;

    let window = subsystem
        .platform
        .create_window(&config.surface_request())
        .map_err(|e| failed(reporter, BootstrapError::SurfaceCreation(e)))?;

    let mut surface = Surface { window, subsystem };

    surface
        .subsystem
        .platform
        .make_current(&mut surface.window)
        .map_err(|e| failed(reporter, BootstrapError::MakeCurrent(e)))?;

    let device = surface
        .subsystem
        .platform
        .load_device(&surface.window)
        .map_err(|e| failed(reporter, BootstrapError::FunctionTable(e)))?;

    let mut context = Context {
        device,
        diagnostics: DiagnosticMode::Disabled,
        surface,
    };

    if config.diagnostics {
        context.diagnostics = negotiate_diagnostics(&mut context.device, reporter);
    }

    log::info!(
        "context ready ({}x{}, diagnostics {:?})",
        config.width,
        config.height,
        context.diagnostics
    );
    Ok(context)
}

fn negotiate_diagnostics<D: Device>(device: &mut D, reporter: &DiagnosticReporter) -> DiagnosticMode {
    if device.context_flags().debug {
        device.install_debug_sink(reporter.clone());
        log::debug!("driver debug output routed to the diagnostic channel");
        DiagnosticMode::Enabled
    } else {
        reporter.report(DiagnosticMessage::starter(
            "debug context requested but not granted by the driver; continuing without driver diagnostics",
            log::Level::Warn,
        ));
        DiagnosticMode::Degraded
    }
}

fn failed(reporter: &DiagnosticReporter, err: BootstrapError) -> BootstrapError {
    reporter.report(DiagnosticMessage::starter(
        format!("{err}: {}", err.platform_error()),
        log::Level::Error,
    ));
    err
}
