use anyhow::{Context as _, Result};

use crate::context::{acquire_context, DiagnosticMode};
use crate::device::{VertexBuffer, TRIANGLE};
use crate::diag::DiagnosticReporter;
use crate::frame::{FrameLoop, FrameStats};
use crate::platform::Platform;
use crate::shader::{ShaderRegistry, ShaderSet};

use super::StarterConfig;

/// Outcome of a completed session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    pub diagnostics: DiagnosticMode,
    pub shaders_compiled: usize,
    pub shaders_failed: usize,
    pub stages_skipped: usize,
    pub frames: FrameStats,
}

/// One bootstrap-to-shutdown run of the starter kit.
pub struct Session;

impl Session {
    /// Acquires a context on `platform`, uploads the starter triangle,
    /// compiles the registered shaders and runs frames until close.
    ///
    /// Releases shaders, then vertex data, then the context. A bootstrap
    /// failure comes back as a `BootstrapError` inside the `anyhow` chain.
    pub fn run<P: Platform>(
        platform: P,
        config: &StarterConfig,
        reporter: &DiagnosticReporter,
    ) -> Result<SessionReport> {
        let registry = ShaderRegistry::builtin(&config.shader_root);
        registry.validate().context("shader registry is incomplete")?;

        let mut context = acquire_context(platform, &config.context, reporter)?;
        let diagnostics = context.diagnostics();
        let (device, surface) = context.split();

        let vertices = VertexBuffer::new(device, &TRIANGLE).context("failed to upload starter vertices")?;
        let shaders = ShaderSet::compile(device, &registry, reporter);

        let frames = FrameLoop::new(config.clear_color).run(surface, device);
        log::info!(
            "session closed after {} frames ({:.2?})",
            frames.frames,
            frames.elapsed
        );

        let report = SessionReport {
            diagnostics,
            shaders_compiled: shaders.compiled(),
            shaders_failed: shaders.failed(),
            stages_skipped: shaders.skipped(),
            frames,
        };

        drop(shaders);
        drop(vertices);
        Ok(report)
    }
}
