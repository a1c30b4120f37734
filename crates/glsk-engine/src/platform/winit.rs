use std::ffi::CStr;
use std::num::NonZeroU32;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentContext, NotCurrentGlContext,
    PossiblyCurrentContext, Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::device::GlDevice;
use crate::diag::DiagnosticReporter;

use super::{Platform, PlatformError, SurfaceRequest};

/// Entry points that must resolve before the function table is trusted.
const REQUIRED_ENTRY_POINTS: [&CStr; 4] = [
    c"glGetString",
    c"glGetIntegerv",
    c"glViewport",
    c"glClear",
];

/// Desktop windowing layer: `winit` windows with `glutin` GL contexts.
///
/// Events are pumped without blocking, so the frame loop owns the cadence.
pub struct WinitPlatform {
    event_loop: Option<EventLoop<()>>,
    reporter: DiagnosticReporter,
}

impl WinitPlatform {
    pub fn new() -> Self {
        Self {
            event_loop: None,
            reporter: DiagnosticReporter::default(),
        }
    }

    /// Reports `err` on the windowing channel and hands it back.
    fn fail(&self, err: PlatformError) -> PlatformError {
        self.reporter.windowing_error(err.code(), &err.to_string());
        err
    }
}

impl Default for WinitPlatform {
    fn default() -> Self {
        Self::new()
    }
}

/// One window with its GL surface and context.
pub struct WinitWindow {
    gl: Option<GlState>,
    window: Option<Window>,
    close_requested: bool,
}

// Field order is drop order: surface, then context, then display.
struct GlState {
    surface: Surface<WindowSurface>,
    context: ContextSlot,
    display: Display,
}

enum ContextSlot {
    NotCurrent(NotCurrentContext),
    Current(PossiblyCurrentContext),
    Lost,
}

impl WinitWindow {
    fn id(&self) -> Option<WindowId> {
        self.window.as_ref().map(Window::id)
    }

    fn resize_surface(&self, size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return;
        };
        if let Some(GlState {
            surface,
            context: ContextSlot::Current(ctx),
            ..
        }) = &self.gl
        {
            surface.resize(ctx, w, h);
        }
    }
}

const NO_CONFIGS: &str = "display offered no GL configs";

/// Config with the fewest multisample samples; `None` for an empty list.
fn fewest_samples<C>(configs: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    configs.reduce(|best, c| if samples(&c) < samples(&best) { c } else { best })
}

// The display builder requires the picker to return a config, so an empty
// list can only unwind out of it.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    fewest_samples(configs, |c| c.num_samples()).expect(NO_CONFIGS)
}

/// Runs a display build, turning an unwind out of the config picker into a
/// window creation error.
fn catch_picker<T>(build: impl FnOnce() -> T) -> Result<T, PlatformError> {
    std::panic::catch_unwind(AssertUnwindSafe(build)).map_err(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| NO_CONFIGS.to_string());
        PlatformError::WindowCreation(reason)
    })
}

impl Platform for WinitPlatform {
    type Window = WinitWindow;
    type Device = GlDevice;

    fn set_error_reporter(&mut self, reporter: DiagnosticReporter) {
        self.reporter = reporter;
    }

    fn init(&mut self) -> Result<(), PlatformError> {
        if self.event_loop.is_some() {
            return Ok(());
        }

        let event_loop = EventLoop::new().map_err(|e| self.fail(PlatformError::Init(e.to_string())))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop = Some(event_loop);

        log::debug!("winit event loop created");
        Ok(())
    }

    fn create_window(&mut self, request: &SurfaceRequest) -> Result<WinitWindow, PlatformError> {
        let event_loop = self.event_loop.as_ref().ok_or_else(|| {
            self.fail(PlatformError::WindowCreation(
                "windowing subsystem is not initialized".into(),
            ))
        })?;

        let attributes = Window::default_attributes()
            .with_title(request.title.clone())
            .with_inner_size(LogicalSize::new(request.width, request.height))
            .with_visible(true);

        let (window, config) = catch_picker(|| {
            DisplayBuilder::new()
                .with_window_attributes(Some(attributes))
                .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
                .map_err(|e| e.to_string())
        })
        .map_err(|e| self.fail(e))?
        .map_err(|e| self.fail(PlatformError::WindowCreation(e)))?;

        let window = window.ok_or_else(|| {
            self.fail(PlatformError::WindowCreation(
                "display builder returned no window".into(),
            ))
        })?;

        let raw_handle = window.window_handle().ok().map(|h| h.as_raw());
        let display = config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_debug(request.debug_context)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                request.api_version.major,
                request.api_version.minor,
            ))))
            .build(raw_handle);

        let context = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(|e| self.fail(PlatformError::WindowCreation(e.to_string())))?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::default())
            .map_err(|e| self.fail(PlatformError::WindowCreation(e.to_string())))?;

        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(|e| self.fail(PlatformError::WindowCreation(e.to_string())))?;

        log::info!(
            "window '{}' created ({}x{}, OpenGL {}.{} core{})",
            request.title,
            request.width,
            request.height,
            request.api_version.major,
            request.api_version.minor,
            if request.debug_context { ", debug" } else { "" }
        );

        Ok(WinitWindow {
            gl: Some(GlState {
                surface,
                context: ContextSlot::NotCurrent(context),
                display,
            }),
            window: Some(window),
            close_requested: false,
        })
    }

    fn make_current(&mut self, window: &mut WinitWindow) -> Result<(), PlatformError> {
        let gl = window.gl.as_mut().ok_or_else(|| {
            self.fail(PlatformError::MakeCurrent("window has no GL surface".into()))
        })?;

        match std::mem::replace(&mut gl.context, ContextSlot::Lost) {
            ContextSlot::NotCurrent(ctx) => match ctx.make_current(&gl.surface) {
                Ok(current) => {
                    gl.context = ContextSlot::Current(current);
                    Ok(())
                }
                Err(e) => Err(self.fail(PlatformError::MakeCurrent(e.to_string()))),
            },
            ContextSlot::Current(ctx) => {
                gl.context = ContextSlot::Current(ctx);
                Ok(())
            }
            ContextSlot::Lost => Err(self.fail(PlatformError::MakeCurrent(
                "context was lost by an earlier failure".into(),
            ))),
        }
    }

    fn load_device(&mut self, window: &WinitWindow) -> Result<GlDevice, PlatformError> {
        let Some(GlState {
            context: ContextSlot::Current(_),
            display,
            ..
        }) = window.gl.as_ref()
        else {
            return Err(self.fail(PlatformError::FunctionTable(
                "no current context".into(),
            )));
        };

        if let Some(missing) = REQUIRED_ENTRY_POINTS
            .iter()
            .find(|name| display.get_proc_address(name).is_null())
        {
            return Err(self.fail(PlatformError::FunctionTable(format!(
                "{} did not resolve",
                missing.to_string_lossy()
            ))));
        }

        // SAFETY: the context is current on this thread and the loader
        // resolves against the display that created it.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        Ok(GlDevice::new(gl))
    }

    fn poll_events(&mut self, window: &mut WinitWindow) {
        let Some(event_loop) = self.event_loop.as_mut() else {
            window.close_requested = true;
            return;
        };

        let mut pump = EventPump { target: window };
        if let PumpStatus::Exit(code) = event_loop.pump_app_events(Some(Duration::ZERO), &mut pump) {
            log::debug!("event loop exited with status {code}");
            window.close_requested = true;
        }
    }

    fn close_requested(&self, window: &WinitWindow) -> bool {
        window.close_requested
    }

    fn framebuffer_size(&self, window: &WinitWindow) -> (u32, u32) {
        window
            .window
            .as_ref()
            .map(|w| {
                let size = w.inner_size();
                (size.width, size.height)
            })
            .unwrap_or((0, 0))
    }

    fn present(&mut self, window: &WinitWindow) -> Result<(), PlatformError> {
        let Some(GlState {
            surface,
            context: ContextSlot::Current(ctx),
            ..
        }) = window.gl.as_ref()
        else {
            return Err(self.fail(PlatformError::Present("no current context".into())));
        };

        if let Some(w) = &window.window {
            w.pre_present_notify();
        }

        surface
            .swap_buffers(ctx)
            .map_err(|e| self.fail(PlatformError::Present(e.to_string())))
    }

    fn destroy_window(&mut self, window: &mut WinitWindow) {
        // GL objects go before the native window they render into.
        drop(window.gl.take());
        if let Some(w) = window.window.take() {
            log::debug!("window {:?} destroyed", w.id());
        }
    }

    fn terminate(&mut self) {
        if self.event_loop.take().is_some() {
            log::debug!("winit event loop released");
        }
    }
}

/// Records the events the frame loop cares about for one window.
struct EventPump<'a> {
    target: &'a mut WinitWindow,
}

impl ApplicationHandler for EventPump<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.target.id() != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => self.target.close_requested = true,
            WindowEvent::Resized(size) => self.target.resize_surface(size),
            _ => {}
        }
    }
}
