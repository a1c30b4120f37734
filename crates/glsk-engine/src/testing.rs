//! Instrumented fakes for the platform and device seams.
//!
//! Every call lands in a shared `Ledger` so tests can assert exactly what
//! was acquired, released and drawn, and in which order.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use crate::device::{ClearColor, ContextFlags, Device, DeviceError, VertexAttribute, Viewport};
use crate::diag::{DiagnosticMessage, DiagnosticReporter, DiagnosticSink};
use crate::platform::{Platform, PlatformError, SurfaceRequest};
use crate::shader::ShaderStage;

// ── ledger ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct Ledger {
    pub inits: usize,
    pub terminates: usize,
    pub windows_created: usize,
    pub windows_destroyed: usize,
    pub make_current: usize,
    pub loads: usize,
    pub last_request: Option<SurfaceRequest>,

    pub polls: usize,
    pub presents: usize,
    pub viewports: Vec<Viewport>,
    pub clears: Vec<ClearColor>,

    pub flag_queries: usize,
    pub sink_registrations: usize,

    pub shaders_created: usize,
    pub shaders_deleted: usize,
    pub last_source: Option<String>,
    pub info_log_queries: usize,

    pub buffers_created: usize,
    pub buffers_deleted: usize,
    pub vertex_arrays_created: usize,
    pub vertex_arrays_deleted: usize,
    pub uploaded_bytes: usize,

    /// Release calls in the order they happened.
    pub teardown: Vec<&'static str>,
}

impl Ledger {
    pub fn shared() -> Rc<RefCell<Ledger>> {
        Rc::new(RefCell::new(Ledger::default()))
    }
}

// ── diagnostics ─────────────────────────────────────────────────────────────

/// Sink that keeps every message for later inspection.
#[derive(Clone, Default)]
pub struct CaptureSink {
    messages: Arc<Mutex<Vec<DiagnosticMessage>>>,
}

impl CaptureSink {
    pub fn messages(&self) -> Vec<DiagnosticMessage> {
        self.messages.lock().unwrap().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.messages().iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DiagnosticSink for CaptureSink {
    fn emit(&self, message: &DiagnosticMessage) {
        self.messages.lock().unwrap().push(message.clone());
    }
}

// ── device ──────────────────────────────────────────────────────────────────

/// Raw driver message `(source, type, id, severity, body)`.
pub type DriverMessage = (u32, u32, u32, u32, String);

pub struct FakeDevice {
    ledger: Rc<RefCell<Ledger>>,
    debug_granted: bool,
    fail_buffers: bool,
    fail_shaders: bool,
    info_log: Option<String>,
    on_clear: Option<DriverMessage>,
    reporter: Option<DiagnosticReporter>,
    next_handle: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
}

impl FakeDevice {
    pub fn new(ledger: Rc<RefCell<Ledger>>) -> Self {
        Self {
            ledger,
            debug_granted: false,
            fail_buffers: false,
            fail_shaders: false,
            info_log: None,
            on_clear: None,
            reporter: None,
            next_handle: Cell::new(1),
            sources: RefCell::new(HashMap::new()),
        }
    }

    pub fn failing_buffers(mut self) -> Self {
        self.fail_buffers = true;
        self
    }

    pub fn failing_shaders(mut self) -> Self {
        self.fail_shaders = true;
        self
    }

    /// Compiler log returned for failed compiles.
    pub fn with_info_log(mut self, log: String) -> Self {
        self.info_log = Some(log);
        self
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get();
        self.next_handle.set(h + 1);
        h
    }
}

impl Device for FakeDevice {
    type Shader = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn context_flags(&self) -> ContextFlags {
        self.ledger.borrow_mut().flag_queries += 1;
        ContextFlags {
            debug: self.debug_granted,
        }
    }

    fn install_debug_sink(&mut self, reporter: DiagnosticReporter) {
        self.ledger.borrow_mut().sink_registrations += 1;
        self.reporter = Some(reporter);
    }

    fn create_shader(&self, _stage: ShaderStage) -> Result<u32, DeviceError> {
        if self.fail_shaders {
            return Err(DeviceError::allocation("shader", "out of handles"));
        }
        self.ledger.borrow_mut().shaders_created += 1;
        Ok(self.handle())
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
        self.ledger.borrow_mut().last_source = Some(source.to_string());
    }

    fn compile_shader(&self, _shader: u32) {}

    fn compile_status(&self, shader: u32) -> bool {
        self.sources
            .borrow()
            .get(&shader)
            .is_some_and(|s| s.starts_with("#version"))
    }

    fn shader_info_log(&self, _shader: u32) -> String {
        self.ledger.borrow_mut().info_log_queries += 1;
        self.info_log
            .clone()
            .unwrap_or_else(|| "0:1(1): error: syntax error, unexpected IDENTIFIER\n".to_string())
    }

    fn delete_shader(&self, _shader: u32) {
        let mut l = self.ledger.borrow_mut();
        l.shaders_deleted += 1;
        l.teardown.push("delete_shader");
    }

    fn create_vertex_array(&self) -> Result<u32, DeviceError> {
        self.ledger.borrow_mut().vertex_arrays_created += 1;
        Ok(self.handle())
    }

    fn create_buffer(&self) -> Result<u32, DeviceError> {
        if self.fail_buffers {
            return Err(DeviceError::allocation("buffer", "out of memory"));
        }
        self.ledger.borrow_mut().buffers_created += 1;
        Ok(self.handle())
    }

    fn upload_vertices(&self, _vao: u32, _buffer: u32, bytes: &[u8], _attribute: VertexAttribute) {
        self.ledger.borrow_mut().uploaded_bytes += bytes.len();
    }

    fn delete_buffer(&self, _buffer: u32) {
        let mut l = self.ledger.borrow_mut();
        l.buffers_deleted += 1;
        l.teardown.push("delete_buffer");
    }

    fn delete_vertex_array(&self, _vao: u32) {
        let mut l = self.ledger.borrow_mut();
        l.vertex_arrays_deleted += 1;
        l.teardown.push("delete_vertex_array");
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.ledger.borrow_mut().viewports.push(viewport);
    }

    fn clear(&self, color: ClearColor) {
        self.ledger.borrow_mut().clears.push(color);

        // Synchronous delivery: the message arrives inside the call.
        if let (Some(reporter), Some((source, kind, id, severity, body))) = (&self.reporter, &self.on_clear) {
            reporter.driver_message(*source, *kind, *id, *severity, body);
        }
    }
}

// ── platform ────────────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FailAt {
    Init,
    CreateWindow,
    MakeCurrent,
    LoadDevice,
    Present,
}

/// One scripted `poll_events` outcome.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FakeEvent {
    Resize(u32, u32),
    Idle,
    Close,
}

pub struct FakeWindow {
    size: (u32, u32),
    close_requested: bool,
}

pub struct FakePlatform {
    ledger: Rc<RefCell<Ledger>>,
    fail_at: Option<FailAt>,
    grant_debug: bool,
    on_clear: Option<DriverMessage>,
    events: VecDeque<FakeEvent>,
    reporter: DiagnosticReporter,
}

impl FakePlatform {
    pub fn new(ledger: Rc<RefCell<Ledger>>) -> Self {
        Self {
            ledger,
            fail_at: None,
            grant_debug: true,
            on_clear: None,
            events: VecDeque::new(),
            reporter: DiagnosticReporter::new(CaptureSink::default()),
        }
    }

    pub fn fail_at(mut self, step: FailAt) -> Self {
        self.fail_at = Some(step);
        self
    }

    pub fn grant_debug(mut self, granted: bool) -> Self {
        self.grant_debug = granted;
        self
    }

    /// Poll outcomes in order. An exhausted script requests close.
    pub fn with_events(mut self, events: impl IntoIterator<Item = FakeEvent>) -> Self {
        self.events.extend(events);
        self
    }

    /// Driver message the device emits from inside every `clear` once a
    /// debug sink is installed.
    pub fn driver_message_on_clear(mut self, source: u32, kind: u32, id: u32, severity: u32, body: &str) -> Self {
        self.on_clear = Some((source, kind, id, severity, body.to_string()));
        self
    }

    fn check(&self, step: FailAt, err: impl FnOnce(String) -> PlatformError) -> Result<(), PlatformError> {
        if self.fail_at != Some(step) {
            return Ok(());
        }
        let err = err(format!("scripted {step:?} failure"));
        self.reporter.windowing_error(err.code(), &err.to_string());
        Err(err)
    }
}

impl Platform for FakePlatform {
    type Window = FakeWindow;
    type Device = FakeDevice;

    fn set_error_reporter(&mut self, reporter: DiagnosticReporter) {
        self.reporter = reporter;
    }

    fn init(&mut self) -> Result<(), PlatformError> {
        self.ledger.borrow_mut().inits += 1;
        self.check(FailAt::Init, PlatformError::Init)
    }

    fn create_window(&mut self, request: &SurfaceRequest) -> Result<FakeWindow, PlatformError> {
        self.check(FailAt::CreateWindow, PlatformError::WindowCreation)?;

        let mut l = self.ledger.borrow_mut();
        l.windows_created += 1;
        l.last_request = Some(request.clone());
        Ok(FakeWindow {
            size: (request.width, request.height),
            close_requested: false,
        })
    }

    fn make_current(&mut self, _window: &mut FakeWindow) -> Result<(), PlatformError> {
        self.ledger.borrow_mut().make_current += 1;
        self.check(FailAt::MakeCurrent, PlatformError::MakeCurrent)
    }

    fn load_device(&mut self, _window: &FakeWindow) -> Result<FakeDevice, PlatformError> {
        self.ledger.borrow_mut().loads += 1;
        self.check(FailAt::LoadDevice, PlatformError::FunctionTable)?;

        let mut device = FakeDevice::new(self.ledger.clone());
        device.debug_granted = self.grant_debug;
        device.on_clear = self.on_clear.clone();
        Ok(device)
    }

    fn poll_events(&mut self, window: &mut FakeWindow) {
        self.ledger.borrow_mut().polls += 1;
        match self.events.pop_front() {
            Some(FakeEvent::Resize(w, h)) => window.size = (w, h),
            Some(FakeEvent::Idle) => {}
            Some(FakeEvent::Close) | None => window.close_requested = true,
        }
    }

    fn close_requested(&self, window: &FakeWindow) -> bool {
        window.close_requested
    }

    fn framebuffer_size(&self, window: &FakeWindow) -> (u32, u32) {
        window.size
    }

    fn present(&mut self, _window: &FakeWindow) -> Result<(), PlatformError> {
        self.check(FailAt::Present, PlatformError::Present)?;
        self.ledger.borrow_mut().presents += 1;
        Ok(())
    }

    fn destroy_window(&mut self, _window: &mut FakeWindow) {
        let mut l = self.ledger.borrow_mut();
        l.windows_destroyed += 1;
        l.teardown.push("destroy_window");
    }

    fn terminate(&mut self) {
        let mut l = self.ledger.borrow_mut();
        l.terminates += 1;
        l.teardown.push("terminate");
    }
}
